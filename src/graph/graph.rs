//! 解码后的图
//!
//! 节点和边分别按源文件中的出现顺序保存为线性记录列表，
//! 解码完成后不再修改。

use super::edge::GvEdge;
use super::node::GvNode;
use serde::{Deserialize, Serialize};

/// 解码后的图
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GvGraph {
    /// 节点记录（含默认属性伪记录）
    nodes: Vec<GvNode>,
    /// 边记录
    edges: Vec<GvEdge>,
}

impl GvGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加节点记录
    pub fn add_node(&mut self, node: GvNode) {
        self.nodes.push(node);
    }

    /// 追加边记录
    pub fn add_edge(&mut self, edge: GvEdge) {
        self.edges.push(edge);
    }

    /// 节点记录（按出现顺序）
    pub fn nodes(&self) -> &[GvNode] {
        &self.nodes
    }

    /// 边记录（按出现顺序）
    pub fn edges(&self) -> &[GvEdge] {
        &self.edges
    }

    /// 节点记录数（含伪记录）
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// 边记录数
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AttrMap;

    #[test]
    fn test_records_keep_insertion_order() {
        let mut g = GvGraph::new();
        g.add_node(GvNode::new("b".to_string(), AttrMap::new()));
        g.add_node(GvNode::new("a".to_string(), AttrMap::new()));
        g.add_edge(GvEdge::new("b".to_string(), "a".to_string(), AttrMap::new()));

        let tokens: Vec<&str> = g.nodes().iter().map(|n| n.token()).collect();
        assert_eq!(tokens, vec!["b", "a"]);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }
}
