//! 文本模式模型
//! TextPattern 是静态表中的原始写法，CompiledPattern 是编译后的可执行正则

use std::fmt;
use regex::Regex;

/// 内核识别的忽略大小写前缀
pub const CASE_INSENSITIVE_MARKER: &str = "(?i)";

/// 原始文本模式：正则主体 + 是否忽略大小写
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextPattern {
    body: &'static str,
    case_insensitive: bool,
}

impl TextPattern {
    /// 区分大小写的模式
    pub const fn sensitive(body: &'static str) -> Self {
        Self { body, case_insensitive: false }
    }

    /// 忽略大小写的模式
    pub const fn insensitive(body: &'static str) -> Self {
        Self { body, case_insensitive: true }
    }

    pub fn body(&self) -> &'static str {
        self.body
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// 输出到 filter / exclude-filter 的文本
    pub fn filter_text(&self) -> String {
        if self.case_insensitive {
            format!("{}{}", CASE_INSENSITIVE_MARKER, self.body)
        } else {
            self.body.to_string()
        }
    }

    /// 多个模式合并为一条过滤文本；任一模式忽略大小写则整体忽略大小写
    pub fn union_text(patterns: &[TextPattern]) -> String {
        let body = patterns.iter().map(|p| p.body).collect::<Vec<_>>().join("|");
        if patterns.iter().any(|p| p.case_insensitive) {
            format!("{}{}", CASE_INSENSITIVE_MARKER, body)
        } else {
            body
        }
    }
}

impl fmt::Display for TextPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.filter_text())
    }
}

/// 编译后的模式
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub source: TextPattern,
    pub regex: Regex,
}

impl CompiledPattern {
    /// 简单匹配判断
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// 规则描述
    pub fn describe(&self) -> &str {
        self.regex.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_filter_text() {
        let sensitive = TextPattern::sensitive("HK|港");
        let insensitive = TextPattern::insensitive("starlink");
        assert_eq!(sensitive.to_string(), "HK|港");
        assert_eq!(insensitive.to_string(), "(?i)starlink");
        assert_eq!(insensitive.to_string(), insensitive.filter_text());
    }

    #[test]
    fn test_union_text() {
        let a = TextPattern::sensitive("a");
        let b = TextPattern::insensitive("b");
        assert_eq!(TextPattern::union_text(&[a, a]), "a|a");
        assert_eq!(TextPattern::union_text(&[a, b]), "(?i)a|b");
    }
}
