//! 图核心模块
//!
//! 解码层产出的节点、边与属性数据结构

mod attr;
mod edge;
mod graph;
mod node;

pub use attr::{
    strip_quotes, AttrMap, ATTR_COLOR, ATTR_PENWIDTH, ATTR_SHAPE, ATTR_STYLE, ATTR_XLABEL,
};
pub use edge::GvEdge;
pub use graph::GvGraph;
pub use node::{GvNode, RESERVED_TOKENS};
