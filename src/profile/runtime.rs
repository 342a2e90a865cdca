//! 完整配置模式下附加的内核运行参数（端口、日志级别等）

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProfileStore {
    pub store_selected: bool,
}

/// 内核运行参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuntimeSettings {
    pub mixed_port: u16,
    pub redir_port: u16,
    pub tproxy_port: u16,
    pub routing_mark: u32,
    pub allow_lan: bool,
    pub ipv6: bool,
    pub mode: &'static str,
    pub unified_delay: bool,
    pub tcp_concurrent: bool,
    pub find_process_mode: &'static str,
    pub log_level: &'static str,
    pub geodata_loader: &'static str,
    pub external_controller: &'static str,
    pub disable_keep_alive: bool,
    pub profile: ProfileStore,
}

impl RuntimeSettings {
    pub fn new(ipv6: bool, keep_alive: bool) -> Self {
        Self {
            mixed_port: 7890,
            redir_port: 7892,
            tproxy_port: 7893,
            routing_mark: 7894,
            allow_lan: true,
            ipv6,
            mode: "rule",
            unified_delay: true,
            tcp_concurrent: true,
            find_process_mode: "off",
            log_level: "info",
            geodata_loader: "standard",
            external_controller: ":9999",
            disable_keep_alive: !keep_alive,
            profile: ProfileStore { store_selected: true },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_alive_inverted() {
        assert!(RuntimeSettings::new(false, false).disable_keep_alive);
        assert!(!RuntimeSettings::new(false, true).disable_keep_alive);
    }

    #[test]
    fn test_serialized_keys() {
        let value = serde_json::to_value(RuntimeSettings::new(true, false)).unwrap();
        assert_eq!(value["mixed-port"], 7890);
        assert_eq!(value["ipv6"], true);
        assert_eq!(value["profile"]["store-selected"], true);
    }
}
