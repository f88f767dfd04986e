//! GraphSON 输出模块
//!
//! 把节点集合逐行写出为 NDJSON：每行一个自包含的紧凑 JSON 对象，
//! 行尾单个换行符，记录之间没有其他分隔符。

use crate::error::Result;
use crate::graphson::GraphsonNode;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// 由输入路径导出输出路径：同目录同名，扩展名替换为 json
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

/// 写出 NDJSON 文件
///
/// 截断创建目标文件；句柄在函数作用域内持有，任何提前返回都会关闭它。
pub fn write_jsonl<P: AsRef<Path>>(path: P, nodes: &[GraphsonNode]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for node in nodes {
        serde_json::to_writer(&mut writer, node)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}
