//! GraphSON 节点

use super::edge::GraphsonEdge;
use crate::types::{EntityId, PropertyValueId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// 顶点属性值（带独立分配的属性值 ID）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexProperty {
    pub id: PropertyValueId,
    pub value: String,
}

/// 节点属性集合。目前输出格式只认 `name` 一个键，单值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeProperties {
    pub name: SmallVec<[VertexProperty; 1]>,
}

/// GraphSON 节点（含内联邻接表）
///
/// 邻接桶使用插入有序的映射，保证同一输入重复转换的输出逐字节一致。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphsonNode {
    /// 节点 ID
    id: EntityId,
    /// 语义标签
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    /// 属性
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<NodeProperties>,
    /// 入边，按边标签分桶
    #[serde(rename = "inE", default, skip_serializing_if = "IndexMap::is_empty")]
    in_edges: IndexMap<String, Vec<GraphsonEdge>>,
    /// 出边，按边标签分桶
    #[serde(rename = "outE", default, skip_serializing_if = "IndexMap::is_empty")]
    out_edges: IndexMap<String, Vec<GraphsonEdge>>,
}

impl GraphsonNode {
    /// 创建空节点
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            label: None,
            properties: None,
            in_edges: IndexMap::new(),
            out_edges: IndexMap::new(),
        }
    }

    /// 获取节点 ID
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// 获取语义标签
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// 设置语义标签
    pub fn set_label(&mut self, label: String) {
        self.label = Some(label);
    }

    /// 设置 name 属性（单值）
    pub fn set_name(&mut self, id: PropertyValueId, value: String) {
        self.properties = Some(NodeProperties {
            name: smallvec![VertexProperty { id, value }],
        });
    }

    /// 获取 name 属性值
    pub fn name(&self) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|p| p.name.first())
            .map(|v| v.value.as_str())
    }

    /// 获取 name 属性的属性值 ID
    pub fn name_id(&self) -> Option<PropertyValueId> {
        self.properties
            .as_ref()
            .and_then(|p| p.name.first())
            .map(|v| v.id)
    }

    /// 追加入边，首次使用该标签时建桶
    pub fn add_in_edge(&mut self, label: &str, edge: GraphsonEdge) {
        self.in_edges.entry(label.to_string()).or_default().push(edge);
    }

    /// 追加出边，首次使用该标签时建桶
    pub fn add_out_edge(&mut self, label: &str, edge: GraphsonEdge) {
        self.out_edges.entry(label.to_string()).or_default().push(edge);
    }

    /// 入边邻接桶
    pub fn in_edges(&self) -> &IndexMap<String, Vec<GraphsonEdge>> {
        &self.in_edges
    }

    /// 出边邻接桶
    pub fn out_edges(&self) -> &IndexMap<String, Vec<GraphsonEdge>> {
        &self.out_edges
    }
}
