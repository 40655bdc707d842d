//! 错误类型
//!
//! 所有错误的 `Display` 即为展示给用户的文案，控制器直接用它填充 `Failure`。

use thiserror::Error;

/// 空题集提交时的提示文案
pub const EMPTY_SET_MESSAGE: &str = "Please add at least one question for analysis.";

/// 分析请求错误
///
/// 三类错误最终都落到同一个 `Failure` 状态，区别只在文案
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// 题集为空，未发起请求
    #[error("{}", EMPTY_SET_MESSAGE)]
    Validation,

    /// 服务返回非 2xx 状态
    ///
    /// `message` 取自响应体的 `error` 字段，缺失时为通用状态码文案
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// 网络错误或响应体无法解析
    #[error("Failed to fetch report: {source}. Make sure the analysis service is running.")]
    Transport {
        #[from]
        source: reqwest::Error,
    },
}

impl AnalysisError {
    /// 构造服务端错误，`body_message` 为空时回退到状态码文案
    pub fn remote(status: u16, body_message: Option<String>) -> Self {
        let message = body_message.unwrap_or_else(|| format!("HTTP error! status: {}", status));
        AnalysisError::Remote { status, message }
    }

    /// 错误类别（仅用于日志）
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Validation => "validation",
            AnalysisError::Remote { .. } => "remote",
            AnalysisError::Transport { .. } => "transport",
        }
    }
}

/// 题目文件错误
#[derive(Debug, Error)]
pub enum QuestionFileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// 题目 ID 重复
    #[error("题目ID重复 ({path}): {id}")]
    DuplicateId { path: String, id: String },
}
