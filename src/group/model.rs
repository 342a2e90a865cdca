//! 策略组数据模型
//! 策略组之间只通过名称互相引用，序列化时才由内核解析，因此不会构造出环状对象图

use serde::{Deserialize, Serialize};

use crate::config::GroupStrategy;

/// 策略组类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupKind {
    #[default]
    Select,
    UrlTest,
    Fallback,
    LoadBalance,
}

impl From<GroupStrategy> for GroupKind {
    fn from(strategy: GroupStrategy) -> Self {
        match strategy {
            GroupStrategy::Select => GroupKind::Select,
            GroupStrategy::UrlTest => GroupKind::UrlTest,
            GroupStrategy::LoadBalance => GroupKind::LoadBalance,
        }
    }
}

/// 策略组
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PolicyGroup {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GroupKind,
    pub icon: String,
    #[serde(skip_serializing_if = "is_false")]
    pub include_all: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_filter: Option<String>,
    /// 成员引用（策略组名或 DIRECT / REJECT 等动作），None 表示不写 proxies 字段
    #[serde(rename = "proxies", skip_serializing_if = "Option::is_none")]
    pub member_refs: Option<Vec<String>>,
    #[serde(rename = "url", skip_serializing_if = "Option::is_none")]
    pub probe_url: Option<String>,
    #[serde(rename = "interval", skip_serializing_if = "Option::is_none")]
    pub probe_interval_sec: Option<u32>,
    #[serde(rename = "tolerance", skip_serializing_if = "Option::is_none")]
    pub tolerance_ms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lazy: Option<bool>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl PolicyGroup {
    pub fn new(name: impl Into<String>, kind: GroupKind, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            icon: icon.into(),
            ..Self::default()
        }
    }

    /// select 类型的策略组
    pub fn select(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self::new(name, GroupKind::Select, icon)
    }

    pub fn members(mut self, members: Vec<String>) -> Self {
        self.member_refs = Some(members);
        self
    }

    /// 由静态名称构造成员列表
    pub fn static_members(self, members: &[&str]) -> Self {
        self.members(members.iter().map(|m| m.to_string()).collect())
    }

    /// 纳入全部节点
    pub fn include_all(mut self) -> Self {
        self.include_all = true;
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn exclude_filter(mut self, filter: impl Into<String>) -> Self {
        self.exclude_filter = Some(filter.into());
        self
    }

    pub fn probe_url(mut self, url: impl Into<String>) -> Self {
        self.probe_url = Some(url.into());
        self
    }

    /// 测速地址 + 间隔 + 容差
    pub fn probe(self, url: impl Into<String>, interval_sec: u32, tolerance_ms: u32) -> Self {
        let mut group = self.probe_url(url);
        group.probe_interval_sec = Some(interval_sec);
        group.tolerance_ms = Some(tolerance_ms);
        group
    }

    pub fn lazy(mut self, lazy: bool) -> Self {
        self.lazy = Some(lazy);
        self
    }

    /// 成员列表（未设置时为空）
    pub fn member_list(&self) -> &[String] {
        self.member_refs.as_deref().unwrap_or(&[])
    }

    pub fn has_probe(&self) -> bool {
        self.probe_url.is_some() || self.probe_interval_sec.is_some() || self.tolerance_ms.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_skips_unset_fields() {
        let group = PolicyGroup::select("手动选择", "icon.png").include_all();
        let value = serde_json::to_value(&group).unwrap();

        assert_eq!(value["type"], "select");
        assert_eq!(value["include-all"], true);
        assert!(value.get("proxies").is_none());
        assert!(value.get("url").is_none());
        assert!(value.get("filter").is_none());
    }

    #[test]
    fn test_serialize_probe_fields() {
        let group = PolicyGroup::new("香港节点", GroupKind::UrlTest, "hk.png")
            .probe("https://cp.cloudflare.com/generate_204", 300, 50)
            .lazy(false)
            .static_members(&["DIRECT"]);
        let value = serde_json::to_value(&group).unwrap();

        assert_eq!(value["type"], "url-test");
        assert_eq!(value["interval"], 300);
        assert_eq!(value["tolerance"], 50);
        assert_eq!(value["lazy"], false);
        assert_eq!(value["proxies"][0], "DIRECT");
        assert!(group.has_probe());
    }

    #[test]
    fn test_kind_from_strategy() {
        assert_eq!(GroupKind::from(GroupStrategy::LoadBalance), GroupKind::LoadBalance);
        assert_eq!(GroupKind::from(GroupStrategy::Select), GroupKind::Select);
    }
}
