//! 模式编译器核心
//! 仅负责把静态表中的文本模式编译为正则，并缓存为进程级只读表

use std::time::Instant;
use once_cell::sync::Lazy;
use regex::{Error as RegexError, RegexBuilder};
use tracing::{debug, warn};

use super::pattern::{CompiledPattern, TextPattern, CASE_INSENSITIVE_MARKER};
use crate::meta::{CategoryMeta, COUNTRY_TABLE, LANDING_PATTERN, LOW_COST_PATTERN};

/// 编译后的地区条目（保持地区表顺序）
#[derive(Debug, Clone)]
pub struct CompiledCountry {
    pub meta: &'static CategoryMeta,
    pub matcher: CompiledPattern,
}

/// 编译后的地区表
pub static COMPILED_COUNTRIES: Lazy<Vec<CompiledCountry>> =
    Lazy::new(|| PatternCompiler::compile_countries(COUNTRY_TABLE));

/// 编译后的落地节点模式
pub static COMPILED_LANDING: Lazy<CompiledPattern> = Lazy::new(|| {
    PatternCompiler::compile(LANDING_PATTERN).expect("落地节点关键字编译失败")
});

/// 编译后的低倍率节点模式
pub static COMPILED_LOW_COST: Lazy<CompiledPattern> = Lazy::new(|| {
    PatternCompiler::compile(LOW_COST_PATTERN).expect("低倍率关键字编译失败")
});

/// 模式编译器
pub struct PatternCompiler;

impl PatternCompiler {
    /// 编译单个文本模式
    pub fn compile(pattern: TextPattern) -> Result<CompiledPattern, RegexError> {
        // 主体自带 (?i) 前缀时去掉前缀，改由编译选项控制大小写
        let (body, inline_insensitive) = match pattern.body().strip_prefix(CASE_INSENSITIVE_MARKER) {
            Some(rest) => (rest, true),
            None => (pattern.body(), false),
        };

        let regex = RegexBuilder::new(body)
            .case_insensitive(pattern.is_case_insensitive() || inline_insensitive)
            .build()?;

        Ok(CompiledPattern {
            source: pattern,
            regex,
        })
    }

    /// 按表顺序编译地区表，编译失败的条目跳过
    pub fn compile_countries(table: &'static [CategoryMeta]) -> Vec<CompiledCountry> {
        let start = Instant::now();
        let mut compiled = Vec::with_capacity(table.len());

        for meta in table {
            match Self::compile(meta.pattern) {
                Ok(matcher) => compiled.push(CompiledCountry { meta, matcher }),
                Err(e) => warn!("地区 {} 的模式 {} 编译失败，已跳过：{}", meta.key, meta.pattern, e),
            }
        }

        debug!("✅ 地区表编译完成，共{}条，耗时{:?}", compiled.len(), start.elapsed());
        compiled
    }
}
