//! 地区元数据表
//! 表的顺序即分类优先级：节点名同时命中多个地区时，取表中靠前的地区

use crate::compiler::TextPattern;

/// 地区策略组名称后缀
pub const NODE_SUFFIX: &str = "节点";

const ICON_BASE: &str = "https://gcore.jsdelivr.net/gh/Koolson/Qure@master/IconSet/Color/";

/// 地区元数据
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMeta {
    pub key: &'static str,
    pub pattern: TextPattern,
    pub icon_file: &'static str,
}

impl CategoryMeta {
    const fn new(key: &'static str, pattern: &'static str, icon_file: &'static str) -> Self {
        Self {
            key,
            pattern: TextPattern::sensitive(pattern),
            icon_file,
        }
    }

    /// 图标完整地址
    pub fn icon(&self) -> String {
        format!("{}{}", ICON_BASE, self.icon_file)
    }

    /// 对应的策略组名称，如 “香港节点”
    pub fn group_name(&self) -> String {
        country_group_name(self.key)
    }
}

/// 地区策略组名称
pub fn country_group_name(key: &str) -> String {
    format!("{}{}", key, NODE_SUFFIX)
}

/// 有序地区表
pub static COUNTRY_TABLE: &[CategoryMeta] = &[
    CategoryMeta::new("香港", "香港|港|HK|hk|Hong Kong|HongKong|hongkong|🇭🇰", "Hong_Kong.png"),
    CategoryMeta::new("澳门", "澳门|MO|Macau|🇲🇴", "Macao.png"),
    CategoryMeta::new("台湾", "台|新北|彰化|TW|Taiwan|🇹🇼", "Taiwan.png"),
    CategoryMeta::new("新加坡", "新加坡|坡|狮城|SG|Singapore|🇸🇬", "Singapore.png"),
    CategoryMeta::new("日本", "日本|川日|东京|大阪|泉日|埼玉|沪日|深日|JP|Japan|🇯🇵", "Japan.png"),
    CategoryMeta::new("韩国", "KR|Korea|KOR|首尔|韩|韓|🇰🇷", "Korea.png"),
    CategoryMeta::new("美国", "美国|美|US|United States|🇺🇸", "United_States.png"),
    CategoryMeta::new("加拿大", "加拿大|Canada|CA|🇨🇦", "Canada.png"),
    CategoryMeta::new("英国", "英国|United Kingdom|UK|伦敦|London|🇬🇧", "United_Kingdom.png"),
    CategoryMeta::new("澳大利亚", "澳洲|澳大利亚|AU|Australia|🇦🇺", "Australia.png"),
    CategoryMeta::new("德国", "德国|德|DE|Germany|🇩🇪", "Germany.png"),
    CategoryMeta::new("法国", "法国|法|FR|France|🇫🇷", "France.png"),
    CategoryMeta::new("俄罗斯", "俄罗斯|俄|RU|Russia|🇷🇺", "Russia.png"),
    CategoryMeta::new("泰国", "泰国|泰|TH|Thailand|🇹🇭", "Thailand.png"),
    CategoryMeta::new("印度", "印度|IN|India|🇮🇳", "India.png"),
    CategoryMeta::new("马来西亚", "马来西亚|马来|MY|Malaysia|🇲🇾", "Malaysia.png"),
];

/// 按地区名查找元数据
pub fn find_country(key: &str) -> Option<&'static CategoryMeta> {
    COUNTRY_TABLE.iter().find(|meta| meta.key == key)
}
