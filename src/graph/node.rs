//! 节点记录

use super::attr::AttrMap;
use serde::{Deserialize, Serialize};

/// 默认属性伪记录使用的保留标识。DOT 中 `node [...]` 和 `edge [...]`
/// 语句占用节点地址空间，但不是图中的实体。
pub const RESERVED_TOKENS: [&str; 2] = ["node", "edge"];

/// 解码后的节点记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GvNode {
    /// 源格式中的原始标识（可能带外围引号）
    token: String,
    /// 视觉属性
    attrs: AttrMap,
}

impl GvNode {
    /// 创建节点记录
    pub fn new(token: String, attrs: AttrMap) -> Self {
        Self { token, attrs }
    }

    /// 获取原始标识
    pub fn token(&self) -> &str {
        &self.token
    }

    /// 获取属性
    pub fn attrs(&self) -> &AttrMap {
        &self.attrs
    }

    /// 是否为默认属性伪记录
    pub fn is_default_record(&self) -> bool {
        RESERVED_TOKENS.contains(&self.token.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_records_are_reserved() {
        assert!(GvNode::new("node".to_string(), AttrMap::new()).is_default_record());
        assert!(GvNode::new("edge".to_string(), AttrMap::new()).is_default_record());
        assert!(!GvNode::new("a".to_string(), AttrMap::new()).is_default_record());
        // 带引号的标识不是保留字
        assert!(!GvNode::new("\"node\"".to_string(), AttrMap::new()).is_default_record());
    }
}
