//! 检测模块：节点地区分类与低倍率节点检测
pub mod classifier;
pub mod low_cost;

use tracing::debug;

use crate::node::ProxyNode;

pub use self::classifier::{CategoryCount, CountryClassifier};
pub use self::low_cost::LowCostDetector;

/// 节点扫描结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// 命中至少一个节点的地区（地区表顺序）
    pub counts: Vec<CategoryCount>,
    /// 是否存在低倍率节点
    pub low_cost: bool,
}

impl Classification {
    /// 节点数不低于阈值的地区（地区表顺序）
    pub fn qualifying(&self, threshold: i64) -> Vec<CategoryCount> {
        self.counts
            .iter()
            .filter(|c| c.count as i64 >= threshold)
            .copied()
            .collect()
    }
}

/// 扫描节点列表：地区计数 + 低倍率检测
pub fn classify_nodes(nodes: &[ProxyNode]) -> Classification {
    let counts = CountryClassifier::classify(nodes);
    let low_cost = LowCostDetector::has_low_cost(nodes);

    debug!(
        "📊 节点扫描完成：节点{}个，命中地区{}个，低倍率={}",
        nodes.len(),
        counts.len(),
        low_cost
    );

    Classification { counts, low_cost }
}
