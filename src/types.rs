//! 通用类型定义

use serde::{Deserialize, Serialize};

/// 实体 ID（节点与边共用同一序列，64 位整数便于序列化和索引）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl EntityId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// 属性值 ID（独立于实体序列）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PropertyValueId(pub u64);

impl PropertyValueId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PropertyValueId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_serializes_as_integer() {
        let id = EntityId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }

    #[test]
    fn test_property_value_id_roundtrip() {
        let id = PropertyValueId::from(3);
        let json = serde_json::to_string(&id).unwrap();
        let restored: PropertyValueId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, restored);
    }
}
