//! 落地节点与低倍率节点的关键字
//! 两者各只定义一次：进程内匹配与输出的 filter / exclude-filter 文本都由这里派生

use crate::compiler::TextPattern;

/// 落地节点：家宽 / 商宽 / 星链 / 落地
pub const LANDING_PATTERN: TextPattern =
    TextPattern::insensitive("家宽|家庭|家庭宽带|商宽|商业宽带|星链|Starlink|落地");

/// 低倍率节点：倍率 0.0 ~ 0.5，或低倍率 / 省流 / 大流量 / 实验性
pub const LOW_COST_PATTERN: TextPattern =
    TextPattern::insensitive(r"0\.[0-5]|低倍率|省流|大流量|实验性");
