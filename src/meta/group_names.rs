//! 固定策略组名称、动作字面量与图标地址

// 核心策略组
pub const SELECT: &str = "选择代理";
pub const MANUAL: &str = "手动选择";
pub const FALLBACK: &str = "故障转移";
pub const DIRECT_GROUP: &str = "直连";
pub const LANDING: &str = "落地节点";
pub const LOW_COST: &str = "低倍率节点";
pub const FRONT_PROXY: &str = "前置代理";
pub const GLOBAL: &str = "GLOBAL";

// 服务策略组（按输出顺序）
pub const APPLE: &str = "苹果服务";
pub const STEAM_CN: &str = "SteamCN";
pub const STEAM: &str = "Steam";
pub const STATIC_RESOURCES: &str = "静态资源";
pub const AI: &str = "AI";
pub const CRYPTO: &str = "Crypto";
pub const GOOGLE: &str = "Google";
pub const MICROSOFT: &str = "Microsoft";
pub const YOUTUBE: &str = "YouTube";
pub const BILIBILI: &str = "Bilibili";
pub const BAHAMUT: &str = "Bahamut";
pub const NETFLIX: &str = "Netflix";
pub const TIKTOK: &str = "TikTok";
pub const TWITTER: &str = "Twitter";
pub const SPOTIFY: &str = "Spotify";
pub const EHENTAI: &str = "E-Hentai";
pub const TELEGRAM: &str = "Telegram";
pub const TRUTH_SOCIAL: &str = "Truth Social";
pub const ONEDRIVE: &str = "OneDrive";
pub const PIKPAK: &str = "PikPak";
pub const SSH: &str = "SSH(22端口)";
pub const SOGOU_INPUT: &str = "搜狗输入法";
pub const AD_BLOCK: &str = "广告拦截";

// 内核动作字面量
pub const ACTION_DIRECT: &str = "DIRECT";
pub const ACTION_REJECT: &str = "REJECT";
pub const ACTION_REJECT_DROP: &str = "REJECT-DROP";

// 区域特判依赖的地区
pub const REGION_TW: &str = "台湾";
pub const REGION_HK: &str = "香港";
pub const REGION_US: &str = "美国";

const QURE: &str = "https://gcore.jsdelivr.net/gh/Koolson/Qure@master/IconSet/Color/";
const OVERRIDE_ICONS: &str = "https://gcore.jsdelivr.net/gh/powerfullz/override-rules@master/icons/";

/// Qure 图标集
pub fn qure_icon(file: &str) -> String {
    format!("{}{}", QURE, file)
}

/// override-rules 图标集
pub fn override_icon(file: &str) -> String {
    format!("{}{}", OVERRIDE_ICONS, file)
}

pub const MANUAL_ICON: &str = "https://gcore.jsdelivr.net/gh/shindgewongxj/WHATSINStash@master/icon/select.png";
pub const APPLE_ICON: &str = "https://testingcf.jsdelivr.net/gh/Koolson/Qure@master/IconSet/Color/Apple.png";
