//! 规则集数据模型
//! 规则集按声明顺序输出为映射（名称 -> 规则集）

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// 规则集更新间隔
pub const PROVIDER_UPDATE_INTERVAL_SEC: u32 = 86400;

/// 规则集行为
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleBehavior {
    Domain,
    Classical,
}

/// 规则集文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleFormat {
    Mrs,
    Text,
}

/// 远程规则集
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleProvider {
    #[serde(skip)]
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub behavior: RuleBehavior,
    pub format: RuleFormat,
    pub interval: u32,
    pub url: &'static str,
    pub path: &'static str,
}

impl RuleProvider {
    /// 每天更新一次的 http 规则集
    pub const fn http(
        name: &'static str,
        behavior: RuleBehavior,
        format: RuleFormat,
        url: &'static str,
        path: &'static str,
    ) -> Self {
        Self {
            name,
            kind: "http",
            behavior,
            format,
            interval: PROVIDER_UPDATE_INTERVAL_SEC,
            url,
            path,
        }
    }
}

/// 有序规则集表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleProviders(pub Vec<RuleProvider>);

impl RuleProviders {
    pub fn get(&self, name: &str) -> Option<&RuleProvider> {
        self.0.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for RuleProviders {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for provider in &self.0 {
            map.serialize_entry(provider.name, provider)?;
        }
        map.end()
    }
}
