//! DNS 配置
//! redir-host 与 fake-ip 两套预置配置，按 fakeip 开关二选一

use std::collections::BTreeMap;
use serde::Serialize;

use crate::meta::MANUAL;

/// DNS 增强模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnhancedMode {
    RedirHost,
    FakeIp,
}

/// DNS 配置块
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DnsConfig {
    pub enable: bool,
    pub ipv6: bool,
    pub prefer_h3: bool,
    pub enhanced_mode: EnhancedMode,
    pub default_nameserver: Vec<String>,
    pub nameserver_policy: BTreeMap<String, Vec<String>>,
    pub nameserver: Vec<String>,
    pub proxy_server_nameserver: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fake_ip_filter: Option<Vec<String>>,
}

const DEFAULT_NAMESERVERS: &[&str] = &["119.29.29.29", "223.5.5.5"];
const CN_NAMESERVERS: &[&str] = &["119.29.29.29", "223.5.5.5", "https://doh.pub/dns-query"];
const PROXY_SERVER_NAMESERVERS: &[&str] = &["119.29.29.29", "223.5.5.5", "114.114.114.114"];
const DOH_SERVERS: &[&str] = &["https://dns.cloudflare.com/dns-query", "https://dns.google/dns-query"];

/// fake-ip 模式下不分配假地址的域名
pub const FAKE_IP_FILTER: &[&str] = &[
    "geosite:private",
    "geosite:connectivity-check",
    "geosite:cn",
    "Mijia Cloud",
    "dig.io.mi.com",
    "localhost.ptlogin2.qq.com",
    "*.icloud.com",
    "*.stun.*.*",
    "*.stun.*.*.*",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl DnsConfig {
    fn base(mode: EnhancedMode, ipv6: bool) -> Self {
        let mut policy = BTreeMap::new();
        policy.insert("geosite:cn".to_string(), strings(CN_NAMESERVERS));

        Self {
            enable: true,
            ipv6,
            prefer_h3: true,
            enhanced_mode: mode,
            default_nameserver: strings(DEFAULT_NAMESERVERS),
            nameserver_policy: policy,
            // 境外 DoH 经由手动选择组发出
            nameserver: DOH_SERVERS.iter().map(|s| format!("{}#{}", s, MANUAL)).collect(),
            proxy_server_nameserver: strings(PROXY_SERVER_NAMESERVERS),
            fake_ip_filter: None,
        }
    }

    /// redir-host 模式
    pub fn redir_host(ipv6: bool) -> Self {
        Self::base(EnhancedMode::RedirHost, ipv6)
    }

    /// fake-ip 模式（附带 fake-ip-filter）
    pub fn fake_ip(ipv6: bool) -> Self {
        let mut config = Self::base(EnhancedMode::FakeIp, ipv6);
        config.fake_ip_filter = Some(strings(FAKE_IP_FILTER));
        config
    }

    /// 按开关选择
    pub fn select(fake_ip: bool, ipv6: bool) -> Self {
        if fake_ip {
            Self::fake_ip(ipv6)
        } else {
            Self::redir_host(ipv6)
        }
    }
}
