//! 图转换模块
//!
//! 两遍扫描：第一遍转换节点并建立「源标识 -> 新整数 ID」映射，
//! 第二遍转换边并就地构建对称的出入邻接表。
//! 节点 ID 从 0 起连续分配，边 ID 在全部节点之后继续同一序列。

mod ids;
mod label;

pub use ids::IdAllocator;
pub use label::LabelResolver;

use crate::config::ConvertConfig;
use crate::error::{Error, Result};
use crate::graph::{strip_quotes, GvGraph};
use crate::graphson::{GraphsonEdge, GraphsonNode};
use crate::types::EntityId;
use std::collections::HashMap;
use std::time::Instant;
use tracing::warn;

/// 转换统计
#[derive(Debug, Default, Clone)]
pub struct ConvertStats {
    pub nodes_converted: usize,
    pub edges_converted: usize,
    /// name 回退为源标识的节点数
    pub defaulted_names: usize,
    pub duration_ms: u64,
}

/// 图转换器
pub struct Converter<'a> {
    config: &'a ConvertConfig,
}

impl<'a> Converter<'a> {
    /// 创建转换器
    pub fn new(config: &'a ConvertConfig) -> Self {
        Self { config }
    }

    /// 执行完整转换，返回按 ID 顺序排列的节点集合与统计
    pub fn convert(&self, graph: &GvGraph) -> Result<(Vec<GraphsonNode>, ConvertStats)> {
        let start = Instant::now();
        let resolver = LabelResolver::new(self.config);
        let mut ids = IdAllocator::new();
        let mut stats = ConvertStats::default();

        // ==================== 第一遍：节点 ====================

        let mut nodes = Vec::new();
        let mut id_mapping: HashMap<String, EntityId> = HashMap::new();

        for record in graph.nodes() {
            // 默认属性伪记录不是图中的实体
            if record.is_default_record() {
                continue;
            }

            let id = ids.allocate_entity();
            id_mapping.insert(record.token().to_string(), id);

            let mut node = GraphsonNode::new(id);
            node.set_label(resolver.node_label(record.attrs()));

            let name = match record.attrs().xlabel() {
                Some(xlabel) => xlabel.to_string(),
                None => {
                    warn!("节点 '{}' 没有 xlabel，使用标识作为名称", record.token());
                    stats.defaulted_names += 1;
                    strip_quotes(record.token()).to_string()
                }
            };
            node.set_name(ids.allocate_property_value(), name);

            nodes.push(node);
            stats.nodes_converted += 1;
        }

        // ==================== 第二遍：边 ====================

        for record in graph.edges() {
            let id = ids.allocate_entity();
            let label = resolver.edge_label(record.attrs());

            let (from_token, to_token) = self
                .config
                .edge_direction
                .orient(record.first(), record.second());
            let from = lookup_endpoint(&id_mapping, from_token)?;
            let to = lookup_endpoint(&id_mapping, to_token)?;

            // 同一条边以相同 ID 写进两个桶
            let edge = GraphsonEdge::new(id, from, to);
            nodes[from.as_u64() as usize].add_out_edge(&label, edge);
            nodes[to.as_u64() as usize].add_in_edge(&label, edge);

            stats.edges_converted += 1;
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        Ok((nodes, stats))
    }
}

/// 端点标识必须已在第一遍建立映射，否则输入畸形，整次转换失败
fn lookup_endpoint(mapping: &HashMap<String, EntityId>, token: &str) -> Result<EntityId> {
    mapping
        .get(token)
        .copied()
        .ok_or_else(|| Error::UnknownEndpoint(token.to_string()))
}
