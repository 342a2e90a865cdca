//! 候选列表组装
//! 地区策略组引用只在这里展开到四个基础列表中，下游策略组只消费这些列表

use tracing::debug;

use crate::meta::{ACTION_DIRECT, DIRECT_GROUP, FALLBACK, LANDING, LOW_COST, MANUAL, SELECT};

/// 列表元素：单个名称或一组名称
#[derive(Debug, Clone, Copy)]
pub enum ListItem<'a> {
    One(&'a str),
    Many(&'a [String]),
}

/// 条件元素，仅在 `enabled` 为真时保留
pub type ListPart<'a> = (bool, ListItem<'a>);

/// 总是保留的单个名称
pub fn always(name: &str) -> ListPart<'_> {
    (true, ListItem::One(name))
}

/// 条件成立时保留的单个名称
pub fn when(enabled: bool, name: &str) -> ListPart<'_> {
    (enabled, ListItem::One(name))
}

/// 总是保留的一组名称
pub fn all(names: &[String]) -> ListPart<'_> {
    (true, ListItem::Many(names))
}

/// 按顺序展开条件元素，丢弃条件不成立的元素和空名称，其余元素相对顺序不变
pub fn build_list(parts: &[ListPart<'_>]) -> Vec<String> {
    let mut list = Vec::new();
    for (enabled, item) in parts {
        if !enabled {
            continue;
        }
        match item {
            ListItem::One(name) => {
                if !name.is_empty() {
                    list.push(name.to_string());
                }
            }
            ListItem::Many(names) => {
                list.extend(names.iter().filter(|n| !n.is_empty()).cloned());
            }
        }
    }
    list
}

/// 四个基础候选列表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseLists {
    /// “选择代理”组的候选
    pub selector: Vec<String>,
    /// 大多数服务组使用的默认列表
    pub default_proxies: Vec<String>,
    /// 直连优先的列表
    pub direct_proxies: Vec<String>,
    /// “故障转移”组的候选
    pub fallback: Vec<String>,
}

/// 列表组装器
pub struct ListComposer;

impl ListComposer {
    /// 组装基础列表；`country_groups` 为已按阈值过滤的地区策略组名称（地区表顺序）
    pub fn compose(landing: bool, low_cost: bool, country_groups: &[String]) -> BaseLists {
        let selector = build_list(&[
            always(FALLBACK),
            when(landing, LANDING),
            all(country_groups),
            when(low_cost, LOW_COST),
            always(MANUAL),
            always(ACTION_DIRECT),
        ]);

        let default_proxies = build_list(&[
            always(SELECT),
            all(country_groups),
            when(low_cost, LOW_COST),
            always(MANUAL),
            always(DIRECT_GROUP),
        ]);

        let direct_proxies = build_list(&[
            always(DIRECT_GROUP),
            all(country_groups),
            when(low_cost, LOW_COST),
            always(SELECT),
            always(MANUAL),
        ]);

        let fallback = build_list(&[
            when(landing, LANDING),
            all(country_groups),
            when(low_cost, LOW_COST),
            always(MANUAL),
            always(ACTION_DIRECT),
        ]);

        debug!(
            "基础列表组装完成：选择{}项、默认{}项、直连优先{}项、故障转移{}项",
            selector.len(),
            default_proxies.len(),
            direct_proxies.len(),
            fallback.len()
        );

        BaseLists {
            selector,
            default_proxies,
            direct_proxies,
            fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_list_filters_and_keeps_order() {
        let many = names(&["b", "", "c"]);
        let list = build_list(&[always("a"), when(false, "x"), all(&many), when(true, ""), always("d")]);
        assert_eq!(list, names(&["a", "b", "c", "d"]));
        assert!(build_list(&[]).is_empty());
    }

    #[test]
    fn test_compose_minimal() {
        let lists = ListComposer::compose(false, false, &[]);
        assert_eq!(lists.selector, names(&["故障转移", "手动选择", "DIRECT"]));
        assert_eq!(lists.default_proxies, names(&["选择代理", "手动选择", "直连"]));
        assert_eq!(lists.direct_proxies, names(&["直连", "选择代理", "手动选择"]));
        assert_eq!(lists.fallback, names(&["手动选择", "DIRECT"]));
    }

    #[test]
    fn test_compose_full() {
        let countries = names(&["香港节点", "美国节点"]);
        let lists = ListComposer::compose(true, true, &countries);

        assert_eq!(
            lists.selector,
            names(&["故障转移", "落地节点", "香港节点", "美国节点", "低倍率节点", "手动选择", "DIRECT"])
        );
        assert_eq!(
            lists.default_proxies,
            names(&["选择代理", "香港节点", "美国节点", "低倍率节点", "手动选择", "直连"])
        );
        assert_eq!(
            lists.direct_proxies,
            names(&["直连", "香港节点", "美国节点", "低倍率节点", "选择代理", "手动选择"])
        );
        assert_eq!(
            lists.fallback,
            names(&["落地节点", "香港节点", "美国节点", "低倍率节点", "手动选择", "DIRECT"])
        );
    }

    #[test]
    fn test_landing_disabled_never_referenced() {
        let lists = ListComposer::compose(false, true, &names(&["日本节点"]));
        for list in [&lists.selector, &lists.default_proxies, &lists.direct_proxies, &lists.fallback] {
            assert!(!list.iter().any(|n| n == LANDING));
        }
    }
}
