//! 服务策略组表
//! 顺序即输出顺序；区域特判只依据地区是否存在（已按阈值过滤）

use crate::composer::BaseLists;
use crate::meta::*;

/// 图标来源
#[derive(Debug, Clone, Copy)]
pub enum Icon {
    Qure(&'static str),
    Override(&'static str),
    Url(&'static str),
}

impl Icon {
    pub fn resolve(&self) -> String {
        match self {
            Icon::Qure(file) => qure_icon(file),
            Icon::Override(file) => override_icon(file),
            Icon::Url(url) => url.to_string(),
        }
    }
}

/// 基础列表选择
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseList {
    Default,
    DirectFirst,
}

impl BaseList {
    fn pick(self, lists: &BaseLists) -> &[String] {
        match self {
            BaseList::Default => &lists.default_proxies,
            BaseList::DirectFirst => &lists.direct_proxies,
        }
    }
}

/// 成员来源
#[derive(Debug, Clone, Copy)]
pub enum Members {
    /// 使用基础列表
    Base(BaseList),
    /// 固定成员
    Fixed(&'static [&'static str]),
    /// 所需地区全部存在时收窄为指定成员，否则退回基础列表
    Regional {
        requires: &'static [&'static str],
        narrowed: &'static [&'static str],
        otherwise: BaseList,
    },
}

impl Members {
    /// 解析成员列表；`has_region` 判断地区是否存在
    pub fn resolve(&self, lists: &BaseLists, has_region: impl Fn(&str) -> bool) -> Vec<String> {
        match self {
            Members::Base(base) => base.pick(lists).to_vec(),
            Members::Fixed(names) => names.iter().map(|n| n.to_string()).collect(),
            Members::Regional { requires, narrowed, otherwise } => {
                if requires.iter().all(|region| has_region(*region)) {
                    narrowed.iter().map(|n| n.to_string()).collect()
                } else {
                    otherwise.pick(lists).to_vec()
                }
            }
        }
    }
}

/// 服务策略组定义
#[derive(Debug, Clone, Copy)]
pub struct ServiceGroup {
    pub name: &'static str,
    pub icon: Icon,
    pub members: Members,
}

const fn service(name: &'static str, icon: Icon, members: Members) -> ServiceGroup {
    ServiceGroup { name, icon, members }
}

const DEFAULT: Members = Members::Base(BaseList::Default);
const DIRECT_FIRST: Members = Members::Base(BaseList::DirectFirst);

/// 服务策略组（按输出顺序）
pub static SERVICE_GROUPS: &[ServiceGroup] = &[
    service(APPLE, Icon::Url(APPLE_ICON), DIRECT_FIRST),
    service(STEAM_CN, Icon::Qure("Steam.png"), DIRECT_FIRST),
    service(STEAM, Icon::Qure("Steam.png"), DEFAULT),
    service(STATIC_RESOURCES, Icon::Qure("Cloudflare.png"), DEFAULT),
    service(AI, Icon::Override("chatgpt.png"), DEFAULT),
    service(CRYPTO, Icon::Qure("Cryptocurrency_3.png"), DEFAULT),
    service(GOOGLE, Icon::Override("Google.png"), DEFAULT),
    service(MICROSOFT, Icon::Override("Microsoft_Copilot.png"), DEFAULT),
    service(YOUTUBE, Icon::Qure("YouTube.png"), DEFAULT),
    service(
        BILIBILI,
        Icon::Qure("bilibili.png"),
        Members::Regional {
            requires: &[REGION_TW, REGION_HK],
            narrowed: &[DIRECT_GROUP, "台湾节点", "香港节点"],
            otherwise: BaseList::DirectFirst,
        },
    ),
    service(
        BAHAMUT,
        Icon::Qure("Bahamut.png"),
        Members::Regional {
            requires: &[REGION_TW],
            narrowed: &["台湾节点", SELECT, MANUAL, DIRECT_GROUP],
            otherwise: BaseList::Default,
        },
    ),
    service(NETFLIX, Icon::Qure("Netflix.png"), DEFAULT),
    service(TIKTOK, Icon::Qure("TikTok.png"), DEFAULT),
    service(TWITTER, Icon::Qure("Twitter.png"), DEFAULT),
    service(SPOTIFY, Icon::Qure("Spotify.png"), DEFAULT),
    service(EHENTAI, Icon::Override("Ehentai.png"), DEFAULT),
    service(TELEGRAM, Icon::Qure("Telegram.png"), DEFAULT),
    service(
        TRUTH_SOCIAL,
        Icon::Override("TruthSocial.png"),
        Members::Regional {
            requires: &[REGION_US],
            narrowed: &["美国节点", SELECT, MANUAL],
            otherwise: BaseList::Default,
        },
    ),
    service(ONEDRIVE, Icon::Override("Onedrive.png"), DEFAULT),
    service(PIKPAK, Icon::Override("PikPak.png"), DEFAULT),
    service(SSH, Icon::Qure("Server.png"), DEFAULT),
    service(SOGOU_INPUT, Icon::Override("Sougou.png"), Members::Fixed(&[DIRECT_GROUP, ACTION_REJECT])),
    service(DIRECT_GROUP, Icon::Qure("Direct.png"), Members::Fixed(&[ACTION_DIRECT, SELECT])),
    service(
        AD_BLOCK,
        Icon::Qure("AdBlack.png"),
        Members::Fixed(&[ACTION_REJECT, ACTION_REJECT_DROP, DIRECT_GROUP]),
    ),
];
