//! 策略组模块：数据模型、服务组表、地区组与整体合成
pub mod model;
pub mod service;
pub mod country;
pub mod builder;

pub use self::model::{GroupKind, PolicyGroup};
pub use self::service::{BaseList, Icon, Members, ServiceGroup, SERVICE_GROUPS};
pub use self::country::{build_country_groups, country_exclude_filter};
pub use self::builder::GroupSynthesizer;
