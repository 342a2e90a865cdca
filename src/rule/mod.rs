//! 规则模块：规则集来源表、固定规则表与规则列表构建
pub mod model;
pub mod providers;
pub mod builder;

pub use self::model::{RuleBehavior, RuleFormat, RuleProvider, RuleProviders};
pub use self::providers::{rule_providers, PROVIDER_TABLE};
pub use self::builder::{RuleListBuilder, BASE_RULES, QUIC_BLOCK_RULE};
