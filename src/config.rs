//! 功能开关解析
//! 将调用方传入的原始参数（字符串 / 布尔 / 数字）解析为带默认值的 FeatureFlags，任何输入都不会报错

use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// 识别的参数键
pub const ARG_LOAD_BALANCE: &str = "loadbalance";
pub const ARG_LANDING: &str = "landing";
pub const ARG_IPV6: &str = "ipv6";
pub const ARG_FULL: &str = "full";
pub const ARG_KEEP_ALIVE: &str = "keepalive";
pub const ARG_FAKE_IP: &str = "fakeip";
pub const ARG_QUIC: &str = "quic";
pub const ARG_THRESHOLD: &str = "threshold";

/// 单个原始参数值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl ArgValue {
    /// 按脚本参数的习惯转为文本（整数值不带小数部分）
    fn to_text(&self) -> String {
        match self {
            ArgValue::Bool(b) => b.to_string(),
            ArgValue::Number(n) => match n.as_f64() {
                Some(f) if n.as_i64().is_none() && n.as_u64().is_none() && f.fract() == 0.0 => {
                    format!("{}", f as i64)
                }
                _ => n.to_string(),
            },
            ArgValue::Text(s) => s.clone(),
        }
    }

    /// 是否为“假值”（未传 / false / 0 / 空字符串）
    fn is_falsy(&self) -> bool {
        match self {
            ArgValue::Bool(b) => !b,
            ArgValue::Number(n) => n.as_f64().map_or(true, |f| f == 0.0 || f.is_nan()),
            ArgValue::Text(s) => s.is_empty(),
        }
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        ArgValue::Bool(b)
    }
}

impl From<i64> for ArgValue {
    fn from(n: i64) -> Self {
        ArgValue::Number(n.into())
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        ArgValue::Text(s.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        ArgValue::Text(s)
    }
}

/// 原始参数记录（键 -> 值）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawArgs(BTreeMap<String, ArgValue>);

impl RawArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从键值对构建
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<ArgValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut args = Self::new();
        for (key, value) in pairs {
            args.insert(key, value);
        }
        args
    }

    /// 写入参数，同名键后写覆盖先写
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ArgValue>) {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return;
        }
        self.0.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 解析单个 `key=value`，裸键视为 `key=true`
    pub fn push_pair(&mut self, pair: &str) {
        match pair.split_once('=') {
            Some((key, value)) => self.insert(key, value.trim()),
            None => self.insert(pair, true),
        }
    }

    /// 解析查询串形式的参数：`landing=true&threshold=3`，允许前导 `#` 或 `?`
    pub fn parse_query(query: &str) -> Self {
        let mut args = Self::new();
        args.extend_query(query);
        args
    }

    /// 将查询串中的参数合并进当前记录
    pub fn extend_query(&mut self, query: &str) {
        let query = query.trim().trim_start_matches(['#', '?']);
        for pair in query.split('&').filter(|p| !p.trim().is_empty()) {
            self.push_pair(pair);
        }
    }
}

/// 策略组模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupStrategy {
    #[default]
    Select,
    UrlTest,
    LoadBalance,
}

impl GroupStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupStrategy::Select => "select",
            GroupStrategy::UrlTest => "url-test",
            GroupStrategy::LoadBalance => "load-balance",
        }
    }

    /// 是否需要测速参数（url / interval / tolerance）
    pub fn needs_probe(&self) -> bool {
        !matches!(self, GroupStrategy::Select)
    }
}

impl fmt::Display for GroupStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单次合成使用的功能开关（不可变）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    pub group_strategy: GroupStrategy,
    pub landing: bool,
    pub ipv6: bool,
    pub full_config: bool,
    pub keep_alive: bool,
    pub fake_ip: bool,
    pub quic: bool,
    pub country_threshold: i64,
}

impl FeatureFlags {
    /// 从原始参数解析
    pub fn from_args(args: &RawArgs) -> Self {
        FlagResolver::resolve(args)
    }

    /// 自定义开关
    pub fn builder() -> FeatureFlagsBuilder {
        FeatureFlagsBuilder::new()
    }
}

/// 开关构建器（便于在代码中直接构造）
#[derive(Debug, Clone, Default)]
pub struct FeatureFlagsBuilder {
    flags: FeatureFlags,
}

impl FeatureFlagsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group_strategy(mut self, strategy: GroupStrategy) -> Self {
        self.flags.group_strategy = strategy;
        self
    }

    pub fn landing(mut self, enabled: bool) -> Self {
        self.flags.landing = enabled;
        self
    }

    pub fn ipv6(mut self, enabled: bool) -> Self {
        self.flags.ipv6 = enabled;
        self
    }

    pub fn full_config(mut self, enabled: bool) -> Self {
        self.flags.full_config = enabled;
        self
    }

    pub fn keep_alive(mut self, enabled: bool) -> Self {
        self.flags.keep_alive = enabled;
        self
    }

    pub fn fake_ip(mut self, enabled: bool) -> Self {
        self.flags.fake_ip = enabled;
        self
    }

    pub fn quic(mut self, enabled: bool) -> Self {
        self.flags.quic = enabled;
        self
    }

    pub fn country_threshold(mut self, threshold: i64) -> Self {
        self.flags.country_threshold = threshold;
        self
    }

    pub fn build(self) -> FeatureFlags {
        self.flags
    }
}

/// 参数解析器
pub struct FlagResolver;

impl FlagResolver {
    /// 解析全部开关，未识别或缺失的值一律退回默认值
    pub fn resolve(args: &RawArgs) -> FeatureFlags {
        let flags = FeatureFlags {
            group_strategy: Self::parse_strategy(args.get(ARG_LOAD_BALANCE)),
            landing: Self::parse_bool(args.get(ARG_LANDING)),
            ipv6: Self::parse_bool(args.get(ARG_IPV6)),
            full_config: Self::parse_bool(args.get(ARG_FULL)),
            keep_alive: Self::parse_bool(args.get(ARG_KEEP_ALIVE)),
            fake_ip: Self::parse_bool(args.get(ARG_FAKE_IP)),
            quic: Self::parse_bool(args.get(ARG_QUIC)),
            country_threshold: Self::parse_number(args.get(ARG_THRESHOLD), 0),
        };
        debug!("功能开关解析完成：{:?}", flags);
        flags
    }

    /// 布尔值：true，或字符串 "true"（忽略大小写）/ "1"；其余一律为 false
    pub fn parse_bool(value: Option<&ArgValue>) -> bool {
        match value {
            Some(ArgValue::Bool(b)) => *b,
            Some(ArgValue::Text(s)) => s.eq_ignore_ascii_case("true") || s == "1",
            _ => false,
        }
    }

    /// 整数：取前导整数部分（"3个" -> 3），无法解析时返回默认值
    pub fn parse_number(value: Option<&ArgValue>, default: i64) -> i64 {
        let Some(value) = value else {
            return default;
        };

        let parsed = match value {
            ArgValue::Number(n) => n.as_i64().or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
            ArgValue::Text(s) => Self::leading_integer(s),
            ArgValue::Bool(_) => None,
        };

        parsed.unwrap_or_else(|| {
            warn!("无法解析的数值参数：{:?}，使用默认值 {}", value, default);
            default
        })
    }

    /// 策略组模式：忽略大小写；兼容旧参数 true / 1 -> load-balance；未识别时退回 select
    pub fn parse_strategy(value: Option<&ArgValue>) -> GroupStrategy {
        let Some(value) = value.filter(|v| !v.is_falsy()) else {
            return GroupStrategy::Select;
        };

        let lower = value.to_text().to_lowercase();
        match lower.as_str() {
            "url-test" | "urltest" => GroupStrategy::UrlTest,
            "load-balance" | "loadbalance" => GroupStrategy::LoadBalance,
            "select" => GroupStrategy::Select,
            "true" | "1" => GroupStrategy::LoadBalance,
            _ => {
                warn!("未识别的策略组模式：{}，退回 select", lower);
                GroupStrategy::Select
            }
        }
    }

    /// 前导整数解析：跳过前导空白，可选正负号，随后连续数字；超出 i64 范围时饱和
    fn leading_integer(s: &str) -> Option<i64> {
        let s = s.trim_start();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
        if end == 0 {
            return None;
        }

        let signed = if negative { format!("-{}", &digits[..end]) } else { digits[..end].to_string() };
        match signed.parse::<i64>() {
            Ok(n) => Some(n),
            Err(_) if negative => Some(i64::MIN),
            Err(_) => Some(i64::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_variants() {
        assert!(FlagResolver::parse_bool(Some(&ArgValue::Bool(true))));
        assert!(FlagResolver::parse_bool(Some(&"TRUE".into())));
        assert!(FlagResolver::parse_bool(Some(&"1".into())));
        assert!(!FlagResolver::parse_bool(Some(&"yes".into())));
        assert!(!FlagResolver::parse_bool(Some(&ArgValue::from(1_i64))));
        assert!(!FlagResolver::parse_bool(None));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(FlagResolver::parse_number(Some(&"3".into()), 0), 3);
        assert_eq!(FlagResolver::parse_number(Some(&" 12nodes".into()), 0), 12);
        assert_eq!(FlagResolver::parse_number(Some(&"-2".into()), 0), -2);
        assert_eq!(FlagResolver::parse_number(Some(&"abc".into()), 0), 0);
        assert_eq!(FlagResolver::parse_number(Some(&ArgValue::from(5_i64)), 0), 5);
        assert_eq!(FlagResolver::parse_number(Some(&ArgValue::Bool(true)), 7), 7);
        assert_eq!(FlagResolver::parse_number(None, 0), 0);
    }

    #[test]
    fn test_parse_number_saturates() {
        assert_eq!(FlagResolver::parse_number(Some(&"99999999999999999999".into()), 0), i64::MAX);
        assert_eq!(FlagResolver::parse_number(Some(&"-99999999999999999999x".into()), 0), i64::MIN);
        assert_eq!(FlagResolver::parse_number(Some(&"-9223372036854775808".into()), 0), i64::MIN);
    }

    #[test]
    fn test_padded_text_is_not_recognized() {
        assert!(!FlagResolver::parse_bool(Some(&" true".into())));
        assert!(!FlagResolver::parse_bool(Some(&"1 ".into())));
        assert_eq!(FlagResolver::parse_strategy(Some(&" url-test".into())), GroupStrategy::Select);
    }

    #[test]
    fn test_parse_strategy() {
        let cases = [
            ("url-test", GroupStrategy::UrlTest),
            ("URLTEST", GroupStrategy::UrlTest),
            ("load-balance", GroupStrategy::LoadBalance),
            ("LoadBalance", GroupStrategy::LoadBalance),
            ("select", GroupStrategy::Select),
            ("true", GroupStrategy::LoadBalance),
            ("1", GroupStrategy::LoadBalance),
            ("fastest", GroupStrategy::Select),
            ("", GroupStrategy::Select),
        ];
        for (raw, expected) in cases {
            assert_eq!(FlagResolver::parse_strategy(Some(&raw.into())), expected, "输入：{}", raw);
        }

        assert_eq!(FlagResolver::parse_strategy(Some(&ArgValue::Bool(true))), GroupStrategy::LoadBalance);
        assert_eq!(FlagResolver::parse_strategy(Some(&ArgValue::Bool(false))), GroupStrategy::Select);
        assert_eq!(FlagResolver::parse_strategy(Some(&ArgValue::from(1_i64))), GroupStrategy::LoadBalance);
        assert_eq!(FlagResolver::parse_strategy(None), GroupStrategy::Select);
    }

    #[test]
    fn test_resolve_defaults() {
        assert_eq!(FlagResolver::resolve(&RawArgs::new()), FeatureFlags::default());
    }

    #[test]
    fn test_resolve_from_query() {
        let args = RawArgs::parse_query("#loadbalance=url-test&landing=true&ipv6=1&fakeip&threshold=2&quic=false");
        let flags = FeatureFlags::from_args(&args);

        assert_eq!(flags.group_strategy, GroupStrategy::UrlTest);
        assert!(flags.landing);
        assert!(flags.ipv6);
        assert!(flags.fake_ip);
        assert!(!flags.quic);
        assert!(!flags.full_config);
        assert_eq!(flags.country_threshold, 2);
    }

    #[test]
    fn test_raw_args_deserialize() {
        let args: RawArgs = serde_json::from_str(r#"{"landing": true, "threshold": 3, "loadbalance": "select"}"#).unwrap();
        assert_eq!(args.get("landing"), Some(&ArgValue::Bool(true)));
        assert_eq!(FlagResolver::parse_number(args.get("threshold"), 0), 3);
    }

    #[test]
    fn test_builder() {
        let flags = FeatureFlags::builder()
            .group_strategy(GroupStrategy::LoadBalance)
            .landing(true)
            .country_threshold(4)
            .build();
        assert_eq!(flags.group_strategy, GroupStrategy::LoadBalance);
        assert!(flags.landing);
        assert_eq!(flags.country_threshold, 4);
        assert!(!flags.quic);
    }
}
