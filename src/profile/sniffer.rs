//! 嗅探配置与 geo 数据源地址

use serde::Serialize;

/// 单个协议的嗅探端口
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SniffPorts {
    pub ports: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SniffProtocols {
    #[serde(rename = "TLS")]
    pub tls: SniffPorts,
    #[serde(rename = "HTTP")]
    pub http: SniffPorts,
    #[serde(rename = "QUIC")]
    pub quic: SniffPorts,
}

/// 嗅探配置块
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SnifferConfig {
    pub sniff: SniffProtocols,
    pub override_destination: bool,
    pub enable: bool,
    pub force_dns_mapping: bool,
    pub skip_domain: Vec<String>,
}

impl Default for SnifferConfig {
    fn default() -> Self {
        Self {
            sniff: SniffProtocols {
                tls: SniffPorts { ports: vec![443, 8443] },
                http: SniffPorts { ports: vec![80, 8080, 8880] },
                quic: SniffPorts { ports: vec![443, 8443] },
            },
            override_destination: false,
            enable: true,
            force_dns_mapping: true,
            skip_domain: ["Mijia Cloud", "dlg.io.mi.com", "+.push.apple.com"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// geo 数据源
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeoxUrl {
    pub geoip: &'static str,
    pub geosite: &'static str,
    pub mmdb: &'static str,
    pub asn: &'static str,
}

impl Default for GeoxUrl {
    fn default() -> Self {
        Self {
            geoip: "https://gcore.jsdelivr.net/gh/Loyalsoldier/v2ray-rules-dat@release/geoip.dat",
            geosite: "https://gcore.jsdelivr.net/gh/Loyalsoldier/v2ray-rules-dat@release/geosite.dat",
            mmdb: "https://gcore.jsdelivr.net/gh/Loyalsoldier/geoip@release/Country.mmdb",
            asn: "https://gcore.jsdelivr.net/gh/Loyalsoldier/geoip@release/GeoLite2-ASN.mmdb",
        }
    }
}
