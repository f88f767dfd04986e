//! GraphSON 边

use crate::types::EntityId;
use serde::{Deserialize, Serialize};

/// GraphSON 边引用
///
/// 同一条边以相同 ID 分别出现在起点的 `outE` 桶和终点的 `inE` 桶。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphsonEdge {
    /// 边 ID（与节点共用同一序列）
    id: EntityId,
    /// 终点节点 ID
    #[serde(rename = "inV")]
    in_v: EntityId,
    /// 起点节点 ID
    #[serde(rename = "outV")]
    out_v: EntityId,
}

impl GraphsonEdge {
    /// 创建边引用，`from` 为起点 (outV)，`to` 为终点 (inV)
    pub fn new(id: EntityId, from: EntityId, to: EntityId) -> Self {
        Self {
            id,
            in_v: to,
            out_v: from,
        }
    }

    /// 获取边 ID
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// 终点节点 ID
    pub fn in_v(&self) -> EntityId {
        self.in_v
    }

    /// 起点节点 ID
    pub fn out_v(&self) -> EntityId {
        self.out_v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_field_names() {
        let e = GraphsonEdge::new(EntityId::new(5), EntityId::new(0), EntityId::new(1));
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"{"id":5,"inV":1,"outV":0}"#);
    }
}
