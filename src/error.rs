//! 全局错误类型定义
//! 合成核心本身不会失败，错误只出现在输入读取与输出渲染的边界上

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use serde_yaml::Error as SerdeYamlError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum OverrideError {
    // 输入相关错误
    #[error("节点文件读取失败：{0}")]
    IoError(#[from] IoError),
    #[error("无效输入：{0}")]
    InvalidInput(String),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),
    #[error("YAML解析失败：{0}")]
    YamlError(#[from] SerdeYamlError),
}

// 全局Result类型
pub type OvrResult<T> = Result<T, OverrideError>;
