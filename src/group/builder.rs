//! 策略组合成
//! 固定顺序：选择代理、手动选择、（前置代理、落地节点）、故障转移、服务组、（低倍率）、地区组，最后追加 GLOBAL

use std::collections::HashSet;
use tracing::{debug, warn};

use crate::config::FeatureFlags;
use crate::composer::BaseLists;
use crate::detector::CategoryCount;
use crate::meta::*;

use super::country::build_country_groups;
use super::model::{GroupKind, PolicyGroup};
use super::service::SERVICE_GROUPS;

/// 策略组合成器
pub struct GroupSynthesizer;

impl GroupSynthesizer {
    /// 合成全部策略组（含 GLOBAL）
    ///
    /// `countries` 必须是已按阈值过滤的地区（地区表顺序），`lists` 由同一组地区组装
    pub fn synthesize(
        flags: &FeatureFlags,
        countries: &[CategoryCount],
        low_cost: bool,
        lists: &BaseLists,
    ) -> Vec<PolicyGroup> {
        let mut groups = Self::core_groups(flags.landing, lists);
        groups.extend(Self::service_groups(countries, lists));

        if low_cost {
            groups.push(Self::low_cost_group());
        }

        groups.extend(build_country_groups(countries, flags.landing, flags.group_strategy));

        let global = Self::global_group(&groups);
        groups.push(global);

        Self::check_unique_names(&groups);
        debug!("✅ 策略组合成完成，共{}组（策略模式：{}）", groups.len(), flags.group_strategy);

        groups
    }

    /// 选择代理、手动选择、前置代理、落地节点、故障转移
    fn core_groups(landing: bool, lists: &BaseLists) -> Vec<PolicyGroup> {
        let mut groups = Vec::with_capacity(5);

        groups.push(PolicyGroup::select(SELECT, qure_icon("Proxy.png")).members(lists.selector.clone()));
        groups.push(PolicyGroup::select(MANUAL, MANUAL_ICON).include_all());

        if landing {
            groups.push(
                PolicyGroup::select(FRONT_PROXY, qure_icon("Area.png"))
                    .include_all()
                    .exclude_filter(LANDING_PATTERN.filter_text())
                    .members(Self::front_proxy_members(&lists.selector)),
            );
            groups.push(
                PolicyGroup::select(LANDING, qure_icon("Airport.png"))
                    .include_all()
                    .filter(LANDING_PATTERN.filter_text()),
            );
        }

        groups.push(
            PolicyGroup::new(FALLBACK, GroupKind::Fallback, qure_icon("Bypass.png"))
                .members(lists.fallback.clone())
                .probe(PROBE_URL, FALLBACK_PROBE_INTERVAL_SEC, FALLBACK_PROBE_TOLERANCE_MS)
                .lazy(false),
        );

        groups
    }

    /// 前置代理的候选：去掉落地节点与故障转移，避免经由二者绕回自身
    pub fn front_proxy_members(selector: &[String]) -> Vec<String> {
        selector
            .iter()
            .filter(|name| name.as_str() != LANDING && name.as_str() != FALLBACK)
            .cloned()
            .collect()
    }

    fn service_groups(countries: &[CategoryCount], lists: &BaseLists) -> Vec<PolicyGroup> {
        let present: HashSet<&str> = countries.iter().map(|c| c.key).collect();

        SERVICE_GROUPS
            .iter()
            .map(|service| {
                let members = service.members.resolve(lists, |region| present.contains(region));
                PolicyGroup::select(service.name, service.icon.resolve()).members(members)
            })
            .collect()
    }

    fn low_cost_group() -> PolicyGroup {
        PolicyGroup::new(LOW_COST, GroupKind::UrlTest, qure_icon("Lab.png"))
            .probe_url(PROBE_URL)
            .include_all()
            .filter(LOW_COST_PATTERN.filter_text())
    }

    /// GLOBAL：按产出顺序引用此前全部策略组
    fn global_group(groups: &[PolicyGroup]) -> PolicyGroup {
        PolicyGroup::select(GLOBAL, qure_icon("Global.png"))
            .include_all()
            .members(groups.iter().map(|g| g.name.clone()).collect())
    }

    fn check_unique_names(groups: &[PolicyGroup]) {
        let mut seen = HashSet::with_capacity(groups.len());
        for group in groups {
            if !seen.insert(group.name.as_str()) {
                warn!("策略组名称重复：{}", group.name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::ListComposer;
    use crate::config::GroupStrategy;

    fn counts(keys: &[&'static str]) -> Vec<CategoryCount> {
        keys.iter().map(|k| CategoryCount { key: *k, count: 1 }).collect()
    }

    fn synthesize(flags: &FeatureFlags, keys: &[&'static str], low_cost: bool) -> Vec<PolicyGroup> {
        let countries = counts(keys);
        let names: Vec<String> = countries.iter().map(|c| c.group_name()).collect();
        let lists = ListComposer::compose(flags.landing, low_cost, &names);
        GroupSynthesizer::synthesize(flags, &countries, low_cost, &lists)
    }

    fn find<'a>(groups: &'a [PolicyGroup], name: &str) -> &'a PolicyGroup {
        groups.iter().find(|g| g.name == name).unwrap()
    }

    #[test]
    fn test_fixed_order_without_landing() {
        let groups = synthesize(&FeatureFlags::default(), &[], false);
        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();

        assert_eq!(&names[..3], &[SELECT, MANUAL, FALLBACK]);
        assert_eq!(names.len(), 3 + SERVICE_GROUPS.len() + 1);
        assert_eq!(names.last(), Some(&GLOBAL));
        assert!(!names.contains(&LANDING));
        assert!(!names.contains(&FRONT_PROXY));
        assert!(!names.contains(&LOW_COST));
    }

    #[test]
    fn test_landing_groups_and_cycle_avoidance() {
        let flags = FeatureFlags::builder().landing(true).build();
        let groups = synthesize(&flags, &["香港"], true);
        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(&names[..5], &[SELECT, MANUAL, FRONT_PROXY, LANDING, FALLBACK]);

        let front = find(&groups, FRONT_PROXY);
        assert!(!front.member_list().iter().any(|m| m == LANDING || m == FALLBACK));
        assert_eq!(front.member_list(), &["香港节点", "低倍率节点", "手动选择", "DIRECT"]);
        assert_eq!(front.exclude_filter.as_deref(), Some("(?i)家宽|家庭|家庭宽带|商宽|商业宽带|星链|Starlink|落地"));

        let landing = find(&groups, LANDING);
        assert!(landing.member_refs.is_none());
        assert_eq!(landing.filter, front.exclude_filter);
    }

    #[test]
    fn test_fallback_group_probe() {
        let groups = synthesize(&FeatureFlags::default(), &["日本"], false);
        let fallback = find(&groups, FALLBACK);
        assert_eq!(fallback.kind, GroupKind::Fallback);
        assert_eq!(fallback.member_list(), &["日本节点", "手动选择", "DIRECT"]);
        assert_eq!(fallback.probe_interval_sec, Some(180));
        assert_eq!(fallback.tolerance_ms, Some(20));
        assert_eq!(fallback.lazy, Some(false));
    }

    #[test]
    fn test_region_overrides() {
        let flags = FeatureFlags::default();

        let groups = synthesize(&flags, &["香港", "台湾", "美国"], false);
        assert_eq!(find(&groups, BILIBILI).member_list(), &["直连", "台湾节点", "香港节点"]);
        assert_eq!(find(&groups, BAHAMUT).member_list(), &["台湾节点", "选择代理", "手动选择", "直连"]);
        assert_eq!(find(&groups, TRUTH_SOCIAL).member_list(), &["美国节点", "选择代理", "手动选择"]);

        let groups = synthesize(&flags, &["台湾"], false);
        let direct_first = find(&groups, APPLE).member_list().to_vec();
        let default = find(&groups, STEAM).member_list().to_vec();
        assert_eq!(find(&groups, BILIBILI).member_list(), direct_first.as_slice());
        assert_eq!(find(&groups, BAHAMUT).member_list()[0], "台湾节点");
        assert_eq!(find(&groups, TRUTH_SOCIAL).member_list(), default.as_slice());
    }

    #[test]
    fn test_low_cost_group() {
        let groups = synthesize(&FeatureFlags::default(), &[], true);
        let low = find(&groups, LOW_COST);
        assert_eq!(low.kind, GroupKind::UrlTest);
        assert!(low.include_all);
        assert_eq!(low.filter.as_deref(), Some(r"(?i)0\.[0-5]|低倍率|省流|大流量|实验性"));
    }

    #[test]
    fn test_global_references_everything_once() {
        let flags = FeatureFlags::builder()
            .landing(true)
            .group_strategy(GroupStrategy::UrlTest)
            .build();
        let groups = synthesize(&flags, &["香港", "日本", "美国"], true);

        let (global, rest) = groups.split_last().unwrap();
        let expected: Vec<String> = rest.iter().map(|g| g.name.clone()).collect();
        assert_eq!(global.name, GLOBAL);
        assert_eq!(global.member_list(), expected.as_slice());

        let unique: HashSet<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(unique.len(), groups.len());
    }

    #[test]
    fn test_country_groups_follow_low_cost_group() {
        let groups = synthesize(&FeatureFlags::default(), &["香港"], true);
        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        let n = names.len();
        assert_eq!(&names[n - 3..], &[LOW_COST, "香港节点", GLOBAL]);
    }
}
