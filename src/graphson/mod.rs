//! GraphSON 目标模型
//!
//! 输出格式的节点与边结构。边不独立成表，只内联在节点的
//! 出入邻接桶里；标签是桶的键，不落在边对象上。

mod edge;
mod node;

pub use edge::GraphsonEdge;
pub use node::{GraphsonNode, NodeProperties, VertexProperty};
