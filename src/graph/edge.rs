//! 边记录

use super::attr::AttrMap;
use serde::{Deserialize, Serialize};

/// 解码后的边记录
///
/// 端点按书写顺序保存为有序对，起点/终点的语义由转换配置的
/// 方向约定决定，这里不做解释。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GvEdge {
    /// 第一个端点的标识
    first: String,
    /// 第二个端点的标识
    second: String,
    /// 视觉属性
    attrs: AttrMap,
}

impl GvEdge {
    /// 创建边记录
    pub fn new(first: String, second: String, attrs: AttrMap) -> Self {
        Self {
            first,
            second,
            attrs,
        }
    }

    /// 第一个端点
    pub fn first(&self) -> &str {
        &self.first
    }

    /// 第二个端点
    pub fn second(&self) -> &str {
        &self.second
    }

    /// 获取属性
    pub fn attrs(&self) -> &AttrMap {
        &self.attrs
    }
}
