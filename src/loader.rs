//! 输入读取与输出渲染
//! 节点文档支持 YAML / JSON（YAML 解析器同时接受 JSON）：
//! 顶层为 `proxies` 列表（可附带 `flags` 参数）的映射，或直接为节点列表

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use serde_yaml::Value;
use tracing::debug;

use crate::error::{OverrideError, OvrResult};
use crate::node::ProxyNode;
use crate::synthesizer::{OverrideConfig, SynthesisInput};

/// 节点文档读取器
pub struct InputLoader;

impl InputLoader {
    /// 从文本解析
    pub fn from_str(text: &str) -> OvrResult<SynthesisInput> {
        let document: Value = serde_yaml::from_str(text)?;

        let input = match document {
            Value::Sequence(_) => {
                let proxies: Vec<ProxyNode> = serde_yaml::from_value(document)?;
                SynthesisInput { proxies, ..Default::default() }
            }
            Value::Mapping(ref map) => {
                if !map.contains_key("proxies") {
                    return Err(OverrideError::InvalidInput("文档缺少 proxies 字段".to_string()));
                }
                serde_yaml::from_value(document)?
            }
            Value::Null => {
                return Err(OverrideError::InvalidInput("节点文档为空".to_string()));
            }
            _ => {
                return Err(OverrideError::InvalidInput(
                    "节点文档必须是节点列表或包含 proxies 的映射".to_string(),
                ));
            }
        };

        debug!("节点文档读取完成：节点{}个，参数{}个", input.proxies.len(), input.flags.len());
        Ok(input)
    }

    /// 从文件读取
    pub fn from_path(path: impl AsRef<Path>) -> OvrResult<SynthesisInput> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_str(&text)
    }

    /// 从任意读取源读取（如标准输入）
    pub fn from_reader<R: Read>(mut reader: R) -> OvrResult<SynthesisInput> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_str(&text)
    }
}

/// 输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = OverrideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(OverrideError::InvalidInput(format!("不支持的输出格式：{}", other))),
        }
    }
}

/// 配置渲染器
pub struct ConfigRenderer;

impl ConfigRenderer {
    pub fn render(config: &OverrideConfig, format: OutputFormat) -> OvrResult<String> {
        let text = match format {
            OutputFormat::Yaml => serde_yaml::to_string(config)?,
            OutputFormat::Json => {
                let mut text = serde_json::to_string_pretty(config)?;
                text.push('\n');
                text
            }
        };
        Ok(text)
    }
}
