//! 节点数据模型
//! 只读取节点名称，其余字段原样保留并在输出中透传

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 代理节点
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyNode {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProxyNode {
    /// 仅含名称的节点
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// 名称宽松解析：null 视为空名称，数字 / 布尔值取其文本
fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

impl From<&str> for ProxyNode {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}
