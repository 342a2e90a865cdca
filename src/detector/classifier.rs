//! 地区分类器
//! 逐个节点按地区表顺序匹配，首个命中即归类并停止；落地节点不参与计数

use tracing::debug;

use crate::compiler::{CompiledCountry, CompiledPattern, COMPILED_COUNTRIES, COMPILED_LANDING};
use crate::meta::{find_country, CategoryMeta};
use crate::node::ProxyNode;

/// 地区计数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCount {
    pub key: &'static str,
    pub count: usize,
}

impl CategoryCount {
    /// 地区元数据，地区表中不存在时返回 None
    pub fn meta(&self) -> Option<&'static CategoryMeta> {
        find_country(self.key)
    }

    /// 对应的策略组名称
    pub fn group_name(&self) -> String {
        crate::meta::country_group_name(self.key)
    }
}

/// 地区分类器
pub struct CountryClassifier;

impl CountryClassifier {
    /// 使用内置地区表和落地关键字分类
    pub fn classify(nodes: &[ProxyNode]) -> Vec<CategoryCount> {
        Self::classify_with(nodes, &COMPILED_COUNTRIES, &COMPILED_LANDING)
    }

    /// 使用指定的地区表和排除模式分类，返回计数 ≥ 1 的地区（表顺序）
    pub fn classify_with(
        nodes: &[ProxyNode],
        table: &[CompiledCountry],
        exclusion: &CompiledPattern,
    ) -> Vec<CategoryCount> {
        let mut counts = vec![0usize; table.len()];
        let mut excluded = 0usize;

        for node in nodes {
            // 1. 落地节点直接跳过
            if exclusion.is_match(&node.name) {
                excluded += 1;
                continue;
            }

            // 2. 按表顺序匹配，首个命中即停止
            if let Some(idx) = table.iter().position(|c| c.matcher.is_match(&node.name)) {
                counts[idx] += 1;
            }
        }

        debug!("地区分类完成：排除落地节点{}个", excluded);

        table
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(country, count)| CategoryCount {
                key: country.meta.key,
                count,
            })
            .collect()
    }
}
