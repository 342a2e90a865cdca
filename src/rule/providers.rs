//! 规则集来源表

use super::model::{RuleBehavior::*, RuleFormat::*, RuleProvider, RuleProviders};

/// 规则集（按输出顺序）
pub static PROVIDER_TABLE: &[RuleProvider] = &[
    RuleProvider::http("ADBlock", Domain, Mrs, "https://adrules.top/adrules-mihomo.mrs", "./ruleset/ADBlock.mrs"),
    RuleProvider::http(
        "Apple",
        Classical,
        Text,
        "https://testingcf.jsdelivr.net/gh/ACL4SSR/ACL4SSR@master/Clash/Ruleset/Apple.list",
        "./ruleset/Apple.list",
    ),
    RuleProvider::http(
        "SteamCN",
        Classical,
        Text,
        "https://testingcf.jsdelivr.net/gh/ACL4SSR/ACL4SSR@master/Clash/Ruleset/SteamCN.list",
        "./ruleset/SteamCN.list",
    ),
    RuleProvider::http(
        "Steam",
        Classical,
        Text,
        "https://testingcf.jsdelivr.net/gh/ACL4SSR/ACL4SSR@master/Clash/Ruleset/Steam.list",
        "./ruleset/Steam.list",
    ),
    RuleProvider::http(
        "SogouInput",
        Classical,
        Text,
        "https://ruleset.skk.moe/Clash/non_ip/sogouinput.txt",
        "./ruleset/SogouInput.txt",
    ),
    RuleProvider::http(
        "StaticResources",
        Domain,
        Text,
        "https://ruleset.skk.moe/Clash/domainset/cdn.txt",
        "./ruleset/StaticResources.txt",
    ),
    RuleProvider::http(
        "CDNResources",
        Classical,
        Text,
        "https://ruleset.skk.moe/Clash/non_ip/cdn.txt",
        "./ruleset/CDNResources.txt",
    ),
    RuleProvider::http(
        "TikTok",
        Classical,
        Text,
        "https://gcore.jsdelivr.net/gh/powerfullz/override-rules@master/ruleset/TikTok.list",
        "./ruleset/TikTok.list",
    ),
    RuleProvider::http(
        "EHentai",
        Classical,
        Text,
        "https://gcore.jsdelivr.net/gh/powerfullz/override-rules@master/ruleset/EHentai.list",
        "./ruleset/EHentai.list",
    ),
    RuleProvider::http(
        "SteamFix",
        Classical,
        Text,
        "https://gcore.jsdelivr.net/gh/powerfullz/override-rules@master/ruleset/SteamFix.list",
        "./ruleset/SteamFix.list",
    ),
    RuleProvider::http(
        "GoogleFCM",
        Classical,
        Text,
        "https://gcore.jsdelivr.net/gh/powerfullz/override-rules@master/ruleset/FirebaseCloudMessaging.list",
        "./ruleset/FirebaseCloudMessaging.list",
    ),
    RuleProvider::http(
        "AdditionalFilter",
        Classical,
        Text,
        "https://gcore.jsdelivr.net/gh/powerfullz/override-rules@master/ruleset/AdditionalFilter.list",
        "./ruleset/AdditionalFilter.list",
    ),
    RuleProvider::http(
        "AdditionalCDNResources",
        Classical,
        Text,
        "https://gcore.jsdelivr.net/gh/powerfullz/override-rules@master/ruleset/AdditionalCDNResources.list",
        "./ruleset/AdditionalCDNResources.list",
    ),
    RuleProvider::http(
        "Crypto",
        Classical,
        Text,
        "https://gcore.jsdelivr.net/gh/powerfullz/override-rules@master/ruleset/Crypto.list",
        "./ruleset/Crypto.list",
    ),
];

/// 规则集副本（用于输出）
pub fn rule_providers() -> RuleProviders {
    RuleProviders(PROVIDER_TABLE.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleFormat;

    #[test]
    fn test_lookup_by_name() {
        let providers = rule_providers();
        assert_eq!(providers.len(), PROVIDER_TABLE.len());

        let ad_block = providers.get("ADBlock").unwrap();
        assert_eq!(ad_block.format, RuleFormat::Mrs);
        assert_eq!(ad_block.path, "./ruleset/ADBlock.mrs");
        assert!(providers.get("Unknown").is_none());
    }

    #[test]
    fn test_serialized_in_table_order() {
        let json = serde_json::to_string(&rule_providers()).unwrap();
        let positions: Vec<usize> = PROVIDER_TABLE
            .iter()
            .map(|p| json.find(&format!("\"{}\":", p.name)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!json.contains("\"name\""));
    }
}
