//! 合成入口：按依赖顺序串联开关解析、节点扫描、列表组装、策略组合成与规则构建，
//! 再与 DNS / 嗅探 / 运行参数等静态块合并为最终配置

use std::time::Instant;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::composer::ListComposer;
use crate::config::{FeatureFlags, FlagResolver, RawArgs};
use crate::detector::classify_nodes;
use crate::group::{GroupSynthesizer, PolicyGroup};
use crate::node::ProxyNode;
use crate::profile::{DnsConfig, GeoxUrl, RuntimeSettings, SnifferConfig};
use crate::rule::{rule_providers, RuleListBuilder, RuleProviders};

/// 单次合成的输入
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynthesisInput {
    #[serde(default, alias = "arguments")]
    pub flags: RawArgs,
    #[serde(default)]
    pub proxies: Vec<ProxyNode>,
}

impl SynthesisInput {
    pub fn new(flags: RawArgs, proxies: Vec<ProxyNode>) -> Self {
        Self { flags, proxies }
    }
}

/// 合成结果（字段顺序即输出顺序）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OverrideConfig {
    pub proxies: Vec<ProxyNode>,
    /// 仅在 full 模式下输出
    #[serde(flatten)]
    pub runtime: Option<RuntimeSettings>,
    pub proxy_groups: Vec<PolicyGroup>,
    pub rule_providers: RuleProviders,
    pub rules: Vec<String>,
    pub sniffer: SnifferConfig,
    pub dns: DnsConfig,
    pub geodata_mode: bool,
    pub geox_url: GeoxUrl,
}

impl OverrideConfig {
    /// 按名称查找策略组
    pub fn group(&self, name: &str) -> Option<&PolicyGroup> {
        self.proxy_groups.iter().find(|g| g.name == name)
    }

    pub fn group_names(&self) -> Vec<&str> {
        self.proxy_groups.iter().map(|g| g.name.as_str()).collect()
    }
}

/// 覆写配置合成器
pub struct OverrideSynthesizer;

impl OverrideSynthesizer {
    /// 从原始参数与节点列表合成
    pub fn synthesize(input: &SynthesisInput) -> OverrideConfig {
        let flags = FlagResolver::resolve(&input.flags);
        Self::synthesize_with_flags(&flags, &input.proxies)
    }

    /// 使用已解析的开关合成
    pub fn synthesize_with_flags(flags: &FeatureFlags, proxies: &[ProxyNode]) -> OverrideConfig {
        let start = Instant::now();

        // 1. 节点扫描（完整计数）
        let classification = classify_nodes(proxies);

        // 2. 阈值过滤，之后的列表与策略组只看到达标地区
        let countries = classification.qualifying(flags.country_threshold);
        let country_groups: Vec<String> = countries.iter().map(|c| c.group_name()).collect();
        debug!(
            "阈值{}过滤后保留地区：{:?}",
            flags.country_threshold,
            country_groups
        );

        // 3. 基础列表
        let lists = ListComposer::compose(flags.landing, classification.low_cost, &country_groups);

        // 4. 策略组（含 GLOBAL）
        let proxy_groups = GroupSynthesizer::synthesize(flags, &countries, classification.low_cost, &lists);

        // 5. 规则
        let rules = RuleListBuilder::build(flags.quic);

        // 6. 合并静态块
        let config = OverrideConfig {
            proxies: proxies.to_vec(),
            runtime: flags.full_config.then(|| RuntimeSettings::new(flags.ipv6, flags.keep_alive)),
            proxy_groups,
            rule_providers: rule_providers(),
            rules,
            sniffer: SnifferConfig::default(),
            dns: DnsConfig::select(flags.fake_ip, flags.ipv6),
            geodata_mode: true,
            geox_url: GeoxUrl::default(),
        };

        debug!(
            "✅ 覆写配置合成完成，耗时{:?}：策略组{}个、规则{}条",
            start.elapsed(),
            config.proxy_groups.len(),
            config.rules.len()
        );

        config
    }
}

/// 便捷入口
pub fn synthesize(input: &SynthesisInput) -> OverrideConfig {
    OverrideSynthesizer::synthesize(input)
}
