//! 规则列表构建
//! 内核自上而下匹配、首条命中即生效，因此列表顺序有语义

use once_cell::sync::Lazy;
use tracing::debug;

use crate::meta::*;

/// 屏蔽 QUIC（UDP 443）的规则
pub const QUIC_BLOCK_RULE: &str = "AND,((DST-PORT,443),(NETWORK,UDP)),REJECT";

/// 硬编码的 Twitter 规则（不含目标策略组）
const TWITTER_RULES: &[&str] = &[
    "DOMAIN-SUFFIX,ads-twitter.com",
    "DOMAIN-SUFFIX,cms-twdigitalassets.com",
    "DOMAIN-SUFFIX,periscope.tv",
    "DOMAIN-SUFFIX,pscp.tv",
    "DOMAIN-SUFFIX,t.co",
    "DOMAIN-SUFFIX,tellapart.com",
    "DOMAIN-SUFFIX,tweetdeck.com",
    "DOMAIN-SUFFIX,twimg.co",
    "DOMAIN-SUFFIX,twimg.com",
    "DOMAIN-SUFFIX,twimg.org",
    "DOMAIN-SUFFIX,twitpic.com",
    "DOMAIN-SUFFIX,twitter.biz",
    "DOMAIN-SUFFIX,twitter.com",
    "DOMAIN-SUFFIX,twitter.jp",
    "DOMAIN-SUFFIX,twittercommunity.com",
    "DOMAIN-SUFFIX,twitterflightschool.com",
    "DOMAIN-SUFFIX,twitterinc.com",
    "DOMAIN-SUFFIX,twitteroauth.com",
    "DOMAIN-SUFFIX,twitterstat.us",
    "DOMAIN-SUFFIX,twtrdns.net",
    "DOMAIN-SUFFIX,twttr.com",
    "DOMAIN-SUFFIX,twttr.net",
    "DOMAIN-SUFFIX,twvid.com",
    "DOMAIN-SUFFIX,vine.co",
    "DOMAIN-SUFFIX,x.com",
    "DOMAIN-KEYWORD,twitter",
    "IP-CIDR,192.133.76.0/22",
    "IP-CIDR,199.16.156.0/22",
    "IP-CIDR,199.59.148.0/22",
    "IP-CIDR,199.96.56.0/21",
    "IP-CIDR,202.160.128.0/22",
    "IP-CIDR,209.237.192.0/19",
    "IP-CIDR,69.195.160.0/19",
];

/// 固定规则表
pub static BASE_RULES: Lazy<Vec<String>> = Lazy::new(|| {
    let head = [
        format!("RULE-SET,ADBlock,{}", AD_BLOCK),
        format!("RULE-SET,AdditionalFilter,{}", AD_BLOCK),
        format!("RULE-SET,SogouInput,{}", SOGOU_INPUT),
        format!("DOMAIN-SUFFIX,truthsocial.com,{}", TRUTH_SOCIAL),
        format!("RULE-SET,Apple,{}", APPLE),
        // 直连优先
        format!("RULE-SET,SteamCN,{}", STEAM_CN),
        // 代理优先
        format!("RULE-SET,Steam,{}", STEAM),
    ];

    let twitter = TWITTER_RULES.iter().map(|rule| format!("{},{}", rule, TWITTER));

    let tail = [
        format!("RULE-SET,StaticResources,{}", STATIC_RESOURCES),
        format!("RULE-SET,CDNResources,{}", STATIC_RESOURCES),
        format!("RULE-SET,AdditionalCDNResources,{}", STATIC_RESOURCES),
        format!("RULE-SET,Crypto,{}", CRYPTO),
        format!("RULE-SET,EHentai,{}", EHENTAI),
        format!("RULE-SET,TikTok,{}", TIKTOK),
        format!("RULE-SET,SteamFix,{}", DIRECT_GROUP),
        format!("RULE-SET,GoogleFCM,{}", DIRECT_GROUP),
        format!("DOMAIN,services.googleapis.cn,{}", SELECT),
        format!("GEOSITE,CATEGORY-AI-!CN,{}", AI),
        format!("GEOSITE,GOOGLE-PLAY@CN,{}", DIRECT_GROUP),
        format!("GEOSITE,MICROSOFT@CN,{}", DIRECT_GROUP),
        format!("GEOSITE,ONEDRIVE,{}", ONEDRIVE),
        format!("GEOSITE,MICROSOFT,{}", MICROSOFT),
        format!("GEOSITE,TELEGRAM,{}", TELEGRAM),
        format!("GEOSITE,YOUTUBE,{}", YOUTUBE),
        format!("GEOSITE,GOOGLE,{}", GOOGLE),
        format!("GEOSITE,NETFLIX,{}", NETFLIX),
        format!("GEOSITE,SPOTIFY,{}", SPOTIFY),
        format!("GEOSITE,BAHAMUT,{}", BAHAMUT),
        format!("GEOSITE,BILIBILI,{}", BILIBILI),
        format!("GEOSITE,PIKPAK,{}", PIKPAK),
        format!("GEOSITE,GFW,{}", SELECT),
        format!("GEOSITE,CN,{}", DIRECT_GROUP),
        format!("GEOSITE,PRIVATE,{}", DIRECT_GROUP),
        format!("GEOIP,NETFLIX,{},no-resolve", NETFLIX),
        format!("GEOIP,TELEGRAM,{},no-resolve", TELEGRAM),
        format!("GEOIP,CN,{}", DIRECT_GROUP),
        format!("GEOIP,PRIVATE,{}", DIRECT_GROUP),
        format!("DST-PORT,22,{}", SSH),
        format!("MATCH,{}", SELECT),
    ];

    head.into_iter().chain(twitter).chain(tail).collect()
});

/// 规则列表构建器
pub struct RuleListBuilder;

impl RuleListBuilder {
    /// 构建规则列表；未启用 QUIC 时在最前面插入屏蔽规则，其余顺序不变
    pub fn build(quic_enabled: bool) -> Vec<String> {
        let mut rules = Vec::with_capacity(BASE_RULES.len() + 1);
        if !quic_enabled {
            rules.push(QUIC_BLOCK_RULE.to_string());
        }
        rules.extend(BASE_RULES.iter().cloned());

        debug!("规则列表构建完成，共{}条（QUIC {}）", rules.len(), if quic_enabled { "放行" } else { "屏蔽" });
        rules
    }
}
