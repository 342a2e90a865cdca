//! 地区策略组
//! 每个达到阈值的地区一组，类型随策略模式变化

use crate::compiler::TextPattern;
use crate::config::GroupStrategy;
use crate::detector::CategoryCount;
use crate::meta::{
    COUNTRY_PROBE_INTERVAL_SEC, COUNTRY_PROBE_TOLERANCE_MS, LANDING_PATTERN, LOW_COST_PATTERN, PROBE_URL,
};

use super::model::PolicyGroup;

/// 地区策略组的排除模式：低倍率，落地模式下再叠加落地关键字
pub fn country_exclude_filter(landing: bool) -> String {
    if landing {
        TextPattern::union_text(&[LANDING_PATTERN, LOW_COST_PATTERN])
    } else {
        LOW_COST_PATTERN.filter_text()
    }
}

/// 构建地区策略组；地区表中找不到的地区直接跳过
pub fn build_country_groups(
    countries: &[CategoryCount],
    landing: bool,
    strategy: GroupStrategy,
) -> Vec<PolicyGroup> {
    let exclude = country_exclude_filter(landing);

    countries
        .iter()
        .filter_map(|country| country.meta())
        .map(|meta| {
            let group = PolicyGroup::new(meta.group_name(), strategy.into(), meta.icon())
                .include_all()
                .filter(meta.pattern.filter_text())
                .exclude_filter(exclude.clone());

            if strategy.needs_probe() {
                group.probe(PROBE_URL, COUNTRY_PROBE_INTERVAL_SEC, COUNTRY_PROBE_TOLERANCE_MS)
            } else {
                group
            }
        })
        .collect()
}
