//! 转换配置
//!
//! 默认标签与四张「视觉属性到标签」映射表。进程启动时构造一次，
//! 转换期间只读传引用，不使用全局可变状态。

use crate::error::{Error, Result};
use std::collections::HashMap;

/// 边端点方向约定
///
/// 历史上存在两种相反的约定：端点对中第一个或第二个元素作为起点。
/// 这里显式固定为配置项，而不是从输入推断。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    /// 第一个端点为起点：`a -> b` 中 `a` 为 outV
    FirstToSecond,
    /// 第二个端点为起点（兼容另一历史变体）
    SecondToFirst,
}

impl Default for EdgeDirection {
    fn default() -> Self {
        EdgeDirection::FirstToSecond
    }
}

impl EdgeDirection {
    /// 按约定把端点对整理为 (起点, 终点)
    pub fn orient<'a>(&self, first: &'a str, second: &'a str) -> (&'a str, &'a str) {
        match self {
            EdgeDirection::FirstToSecond => (first, second),
            EdgeDirection::SecondToFirst => (second, first),
        }
    }
}

/// 转换配置
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// 默认节点标签
    pub default_node_label: String,
    /// 默认边标签
    pub default_edge_label: String,
    /// 边颜色 -> 标签
    pub edge_color_overrides: HashMap<String, String>,
    /// 边粗细 (penwidth) -> 标签
    pub edge_thickness_overrides: HashMap<String, String>,
    /// 边线型 (style) -> 标签
    pub edge_style_overrides: HashMap<String, String>,
    /// 节点形状 (shape) -> 标签
    pub node_shape_overrides: HashMap<String, String>,
    /// 边端点方向约定
    pub edge_direction: EdgeDirection,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            default_node_label: "node".to_string(),
            default_edge_label: "edge".to_string(),
            // 图形编辑器常用的预设取值。映射为空串表示保留该取值
            // 但暂不指定标签，解析时落到下一候选属性。
            edge_color_overrides: reserved_table(&[
                "#cc9900", "#000000", "#666666", "#808080", "#999999", "#b2b2b2", "#00cc00",
                "#00cc33", "#0000ff", "#ff0000", "#ff3300",
            ]),
            edge_thickness_overrides: reserved_table(&["1", "2", "4"]),
            edge_style_overrides: reserved_table(&["solid", "dotted", "dashed"]),
            node_shape_overrides: reserved_table(&["rect", "hexagon", "ellipse"]),
            edge_direction: EdgeDirection::default(),
        }
    }
}

/// 构造只含占位键的映射表（值为空串）
fn reserved_table(keys: &[&str]) -> HashMap<String, String> {
    keys.iter().map(|k| (k.to_string(), String::new())).collect()
}

/// 解析并应用一组 `key=value` 覆盖项：未知键新增，已有键替换
pub fn apply_override_entries(
    table: &mut HashMap<String, String>,
    entries: &[String],
) -> Result<()> {
    for entry in entries {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| Error::InvalidOverride(entry.clone()))?;
        table.insert(key.to_string(), value.to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_reserve_without_label() {
        let config = ConvertConfig::default();
        assert_eq!(config.edge_color_overrides.get("#ff0000").unwrap(), "");
        assert_eq!(config.edge_style_overrides.get("dotted").unwrap(), "");
        assert_eq!(config.node_shape_overrides.get("rect").unwrap(), "");
    }

    #[test]
    fn test_apply_override_entries_adds_and_replaces() {
        let mut config = ConvertConfig::default();
        let entries = vec!["#ff0000=causes".to_string(), "#123456=related".to_string()];
        apply_override_entries(&mut config.edge_color_overrides, &entries).unwrap();

        // 已有键被替换
        assert_eq!(config.edge_color_overrides.get("#ff0000").unwrap(), "causes");
        // 未知键新增
        assert_eq!(
            config.edge_color_overrides.get("#123456").unwrap(),
            "related"
        );
    }

    #[test]
    fn test_apply_override_entries_rejects_malformed() {
        let mut table = HashMap::new();
        let result = apply_override_entries(&mut table, &["no-equals-sign".to_string()]);
        assert!(matches!(result, Err(Error::InvalidOverride(_))));
    }

    #[test]
    fn test_orient_follows_convention() {
        assert_eq!(EdgeDirection::FirstToSecond.orient("a", "b"), ("a", "b"));
        assert_eq!(EdgeDirection::SecondToFirst.orient("a", "b"), ("b", "a"));
    }
}
