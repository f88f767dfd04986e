//! 错误类型定义

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("输入文件不存在: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("DOT 解析错误: {0}")]
    Parse(String),

    #[error("边引用了未声明的节点: {0}")]
    UnknownEndpoint(String),

    #[error("无效的映射参数 (应为 key=value 形式): {0}")]
    InvalidOverride(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(#[from] serde_json::Error),
}
