//! DOT 解析封装
//!
//! 调用 graphviz-rust 解析 DOT 文本，并把它的 AST 摊平为线性的
//! 节点/边记录列表。解析器的内部结构不外泄，核心只消费 `GvGraph`。
//!
//! 摊平规则：
//! - 语句按出现顺序收集，子图体内的语句与外层共用同一记录空间
//! - 同一标识的重复声明只保留第一次
//! - `node [...]` / `edge [...]` 默认属性语句以保留伪记录进入节点空间
//! - `a -> b -> c` 链式边展开为相邻端点对，属性逐段复制
//! - 边端点只出现在边里而没有节点声明时，不会隐式创建节点记录

use crate::error::{Error, Result};
use crate::graph::{strip_quotes, AttrMap, GvEdge, GvGraph, GvNode};
use graphviz_rust::dot_structures::{
    Attribute, Edge, EdgeTy, Graph, GraphAttributes, Id, Stmt, Vertex,
};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// 读取并解析 DOT 文件
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<GvGraph> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    parse_str(&text)
}

/// 解析 DOT 文本
pub fn parse_str(text: &str) -> Result<GvGraph> {
    let ast = graphviz_rust::parse(text).map_err(Error::Parse)?;
    let stmts = match ast {
        Graph::Graph { stmts, .. } | Graph::DiGraph { stmts, .. } => stmts,
    };

    let mut graph = GvGraph::new();
    let mut seen = HashSet::new();
    collect_stmts(&stmts, &mut graph, &mut seen)?;
    Ok(graph)
}

fn collect_stmts(stmts: &[Stmt], graph: &mut GvGraph, seen: &mut HashSet<String>) -> Result<()> {
    for stmt in stmts {
        match stmt {
            Stmt::Node(node) => {
                let token = id_text(&node.id.0);
                if seen.insert(token.clone()) {
                    graph.add_node(GvNode::new(token, attr_map(&node.attributes)));
                }
            }
            Stmt::GAttribute(attrs) => {
                let (token, list) = match attrs {
                    GraphAttributes::Node(list) => ("node", list),
                    GraphAttributes::Edge(list) => ("edge", list),
                    GraphAttributes::Graph(_) => continue,
                };
                if seen.insert(token.to_string()) {
                    graph.add_node(GvNode::new(token.to_string(), attr_map(list)));
                }
            }
            Stmt::Edge(edge) => collect_edge(edge, graph)?,
            Stmt::Subgraph(sub) => collect_stmts(&sub.stmts, graph, seen)?,
            // 图级单属性赋值与输出无关
            Stmt::Attribute(_) => {}
        }
    }
    Ok(())
}

fn collect_edge(edge: &Edge, graph: &mut GvGraph) -> Result<()> {
    let attrs = attr_map(&edge.attributes);
    match &edge.ty {
        EdgeTy::Pair(a, b) => {
            graph.add_edge(GvEdge::new(vertex_token(a)?, vertex_token(b)?, attrs));
        }
        EdgeTy::Chain(vertices) => {
            for pair in vertices.windows(2) {
                graph.add_edge(GvEdge::new(
                    vertex_token(&pair[0])?,
                    vertex_token(&pair[1])?,
                    attrs.clone(),
                ));
            }
        }
    }
    Ok(())
}

/// 边端点必须是普通节点
fn vertex_token(vertex: &Vertex) -> Result<String> {
    match vertex {
        Vertex::N(node_id) => Ok(id_text(&node_id.0)),
        Vertex::S(_) => Err(Error::Parse("不支持子图作为边端点".to_string())),
    }
}

/// 标识符的原始文本，引号形式保持原样
fn id_text(id: &Id) -> String {
    match id {
        Id::Html(s) | Id::Escaped(s) | Id::Plain(s) | Id::Anonymous(s) => s.clone(),
    }
}

/// 属性列表转映射。键归一化（去一层引号），值保持原样
fn attr_map(attributes: &[Attribute]) -> AttrMap {
    let mut attrs = AttrMap::new();
    for Attribute(key, value) in attributes {
        let key = id_text(key);
        attrs.insert(strip_quotes(&key).to_string(), id_text(value));
    }
    attrs
}
