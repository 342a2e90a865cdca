//! 静态元数据：地区表、策略组名称与图标、落地/低倍率关键字、测速参数
//! 全部为进程级常量，合成期间只读
pub mod country;
pub mod group_names;
pub mod keywords;

pub use self::country::{CategoryMeta, COUNTRY_TABLE, NODE_SUFFIX, country_group_name, find_country};
pub use self::group_names::*;
pub use self::keywords::{LANDING_PATTERN, LOW_COST_PATTERN};

/// 测速地址
pub const PROBE_URL: &str = "https://cp.cloudflare.com/generate_204";

/// 地区策略组测速参数（url-test / load-balance）
pub const COUNTRY_PROBE_INTERVAL_SEC: u32 = 300;
pub const COUNTRY_PROBE_TOLERANCE_MS: u32 = 50;

/// 故障转移组测速参数
pub const FALLBACK_PROBE_INTERVAL_SEC: u32 = 180;
pub const FALLBACK_PROBE_TOLERANCE_MS: u32 = 20;
