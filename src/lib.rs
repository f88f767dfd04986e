//! gvson - GraphViz DOT 到 GraphSON 的图格式转换器
//!
//! 把 DOT 有向属性图转换为逐行 JSON 的 GraphSON 节点集合，支持：
//! - 节点/边按处理顺序重编为连续整数 ID
//! - 视觉属性（颜色、粗细、线型、形状）到语义标签的可配置映射
//! - 从边列表重构以节点为中心的出入邻接表
//! - NDJSON 输出

pub mod config;
pub mod convert;
pub mod dot;
pub mod error;
pub mod export;
pub mod graph;
pub mod graphson;
pub mod types;

// 重导出常用类型
pub use config::{apply_override_entries, ConvertConfig, EdgeDirection};
pub use convert::{ConvertStats, Converter, IdAllocator, LabelResolver};
pub use error::{Error, Result};
pub use graph::{AttrMap, GvEdge, GvGraph, GvNode};
pub use graphson::{GraphsonEdge, GraphsonNode, VertexProperty};
pub use types::{EntityId, PropertyValueId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
