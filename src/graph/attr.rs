//! 属性视图
//!
//! 解码层产出的字符串属性映射的只读视图。核心只消费固定几个键，
//! 通过具名访问器读取，取值时去除一层外围引号。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 节点名称属性键
pub const ATTR_XLABEL: &str = "xlabel";
/// 节点形状属性键
pub const ATTR_SHAPE: &str = "shape";
/// 边颜色属性键
pub const ATTR_COLOR: &str = "color";
/// 边粗细属性键
pub const ATTR_PENWIDTH: &str = "penwidth";
/// 边线型属性键
pub const ATTR_STYLE: &str = "style";

/// 去除一层外围双引号
pub fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// 字符串属性映射
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttrMap {
    attrs: HashMap<String, String>,
}

impl AttrMap {
    pub fn new() -> Self {
        Self {
            attrs: HashMap::new(),
        }
    }

    /// 设置属性（解码层使用）
    pub fn insert(&mut self, key: String, value: String) {
        self.attrs.insert(key, value);
    }

    /// 获取原始属性值
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// 获取去引号后的属性值，去引号后为空串视为缺失
    pub fn get_stripped(&self, key: &str) -> Option<&str> {
        self.get(key).map(strip_quotes).filter(|v| !v.is_empty())
    }

    /// xlabel 属性（节点名称来源）
    pub fn xlabel(&self) -> Option<&str> {
        self.get_stripped(ATTR_XLABEL)
    }

    /// shape 属性（节点标签来源）
    pub fn shape(&self) -> Option<&str> {
        self.get_stripped(ATTR_SHAPE)
    }

    /// color 属性（边标签第一候选）
    pub fn color(&self) -> Option<&str> {
        self.get_stripped(ATTR_COLOR)
    }

    /// penwidth 属性（边标签第二候选）
    pub fn penwidth(&self) -> Option<&str> {
        self.get_stripped(ATTR_PENWIDTH)
    }

    /// style 属性（边标签第三候选）
    pub fn style(&self) -> Option<&str> {
        self.get_stripped(ATTR_STYLE)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl FromIterator<(String, String)> for AttrMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            attrs: iter.into_iter().collect(),
        }
    }
}
