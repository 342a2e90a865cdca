//! 低倍率节点检测
//! 对全部节点生效，不应用落地节点排除

use crate::compiler::{CompiledPattern, COMPILED_LOW_COST};
use crate::node::ProxyNode;

/// 低倍率检测器
pub struct LowCostDetector;

impl LowCostDetector {
    /// 是否存在任一低倍率节点
    pub fn has_low_cost(nodes: &[ProxyNode]) -> bool {
        Self::has_low_cost_with(nodes, &COMPILED_LOW_COST)
    }

    pub fn has_low_cost_with(nodes: &[ProxyNode], pattern: &CompiledPattern) -> bool {
        nodes.iter().any(|node| pattern.is_match(&node.name))
    }
}
