//! 静态配置块：DNS、嗅探、geo 数据源、内核运行参数
pub mod dns;
pub mod sniffer;
pub mod runtime;

pub use self::dns::{DnsConfig, EnhancedMode, FAKE_IP_FILTER};
pub use self::sniffer::{GeoxUrl, SnifferConfig};
pub use self::runtime::RuntimeSettings;
