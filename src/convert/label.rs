//! 标签解析
//!
//! 按固定优先级在覆盖表中查找视觉属性对应的语义标签。
//! 映射为空串视为未覆盖（落到下一候选属性），全部落空时回退默认标签。

use crate::config::ConvertConfig;
use crate::graph::AttrMap;
use std::collections::HashMap;

/// 标签解析器，无状态，只读配置
pub struct LabelResolver<'a> {
    config: &'a ConvertConfig,
}

impl<'a> LabelResolver<'a> {
    pub fn new(config: &'a ConvertConfig) -> Self {
        Self { config }
    }

    /// 解析节点标签：shape 是唯一候选键
    pub fn node_label(&self, attrs: &AttrMap) -> String {
        self.lookup(attrs.shape(), &self.config.node_shape_overrides)
            .unwrap_or_else(|| self.config.default_node_label.clone())
    }

    /// 解析边标签：color -> penwidth -> style，先命中者胜
    pub fn edge_label(&self, attrs: &AttrMap) -> String {
        self.lookup(attrs.color(), &self.config.edge_color_overrides)
            .or_else(|| self.lookup(attrs.penwidth(), &self.config.edge_thickness_overrides))
            .or_else(|| self.lookup(attrs.style(), &self.config.edge_style_overrides))
            .unwrap_or_else(|| self.config.default_edge_label.clone())
    }

    /// 单张覆盖表查找。属性缺失、表中无此键、映射为空串都算未命中
    fn lookup(&self, value: Option<&str>, table: &HashMap<String, String>) -> Option<String> {
        value
            .and_then(|v| table.get(v))
            .filter(|label| !label.is_empty())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::apply_override_entries;

    fn attrs(pairs: &[(&str, &str)]) -> AttrMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_node_shape_override() {
        let mut config = ConvertConfig::default();
        apply_override_entries(
            &mut config.node_shape_overrides,
            &["rect=sequence".to_string()],
        )
        .unwrap();
        let resolver = LabelResolver::new(&config);

        assert_eq!(resolver.node_label(&attrs(&[("shape", "rect")])), "sequence");
        // 带引号的取值同样命中
        assert_eq!(
            resolver.node_label(&attrs(&[("shape", "\"rect\"")])),
            "sequence"
        );
    }

    #[test]
    fn test_node_label_falls_back_to_default() {
        let config = ConvertConfig::default();
        let resolver = LabelResolver::new(&config);

        // 没有 shape 属性
        assert_eq!(resolver.node_label(&attrs(&[])), "node");
        // shape 在表里但映射为空串
        assert_eq!(resolver.node_label(&attrs(&[("shape", "rect")])), "node");
        // shape 不在表里
        assert_eq!(resolver.node_label(&attrs(&[("shape", "star")])), "node");
    }

    #[test]
    fn test_edge_priority_order() {
        let mut config = ConvertConfig::default();
        apply_override_entries(&mut config.edge_color_overrides, &["#cc9900=parent".to_string()])
            .unwrap();
        apply_override_entries(
            &mut config.edge_thickness_overrides,
            &["2=medium".to_string()],
        )
        .unwrap();
        let resolver = LabelResolver::new(&config);

        // color 命中时优先于 penwidth
        assert_eq!(
            resolver.edge_label(&attrs(&[("color", "#cc9900"), ("penwidth", "2")])),
            "parent"
        );
    }

    #[test]
    fn test_empty_mapping_falls_through() {
        let mut config = ConvertConfig::default();
        // #ff0000 默认映射为空串，保持不动；penwidth=2 给出标签
        apply_override_entries(
            &mut config.edge_thickness_overrides,
            &["2=medium".to_string()],
        )
        .unwrap();
        let resolver = LabelResolver::new(&config);

        assert_eq!(
            resolver.edge_label(&attrs(&[("color", "#ff0000"), ("penwidth", "2")])),
            "medium"
        );
    }

    #[test]
    fn test_edge_style_is_last_candidate() {
        let mut config = ConvertConfig::default();
        apply_override_entries(&mut config.edge_style_overrides, &["dotted=hint".to_string()])
            .unwrap();
        let resolver = LabelResolver::new(&config);

        assert_eq!(
            resolver.edge_label(&attrs(&[("color", "#000000"), ("style", "dotted")])),
            "hint"
        );
        assert_eq!(resolver.edge_label(&attrs(&[("style", "solid")])), "edge");
    }
}
