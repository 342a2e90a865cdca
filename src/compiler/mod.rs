//! 编译模块：将静态表中的文本模式编译为可执行的正则
pub mod pattern;
pub mod compiler;

pub use self::pattern::{TextPattern, CompiledPattern, CASE_INSENSITIVE_MARKER};
pub use self::compiler::{
    PatternCompiler, CompiledCountry, COMPILED_COUNTRIES, COMPILED_LANDING, COMPILED_LOW_COST,
};
