//! rsoverride - mihomo（Clash.Meta）覆写配置生成工具
//! 根据节点列表与参数开关生成策略组、规则顺序与 DNS 配置

// 导出全局错误类型
pub use self::error::{OverrideError, OvrResult};

// 导出参数开关
pub use self::config::{
    ArgValue, FeatureFlags, FeatureFlagsBuilder, FlagResolver, GroupStrategy, RawArgs,
};

// 导出节点模型
pub use self::node::ProxyNode;

// 导出编译模块核心接口
pub use self::compiler::{CompiledPattern, PatternCompiler, TextPattern};

// 导出检测模块核心接口
pub use self::detector::{
    classify_nodes, CategoryCount, Classification, CountryClassifier, LowCostDetector,
};

// 导出列表与策略组
pub use self::composer::{BaseLists, ListComposer};
pub use self::group::{GroupKind, GroupSynthesizer, PolicyGroup};

// 导出规则模块核心接口
pub use self::rule::{RuleListBuilder, RuleProvider, RuleProviders};

// 导出静态配置块
pub use self::profile::{DnsConfig, EnhancedMode, GeoxUrl, RuntimeSettings, SnifferConfig};

// 导出合成入口
pub use self::synthesizer::{synthesize, OverrideConfig, OverrideSynthesizer, SynthesisInput};
pub use self::loader::{ConfigRenderer, InputLoader, OutputFormat};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod node;
pub mod meta;
pub mod compiler;
pub mod detector;
pub mod composer;
pub mod group;
pub mod rule;
pub mod profile;
pub mod synthesizer;
pub mod loader;
