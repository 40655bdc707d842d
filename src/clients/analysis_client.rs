/// 分析服务客户端
///
/// 封装对远程分析服务的唯一一次 POST 调用
use crate::config::Config;
use crate::error::AnalysisError;
use crate::models::QuestionRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 请求体
#[derive(Debug, Serialize)]
pub struct AnalysisRequest<'a> {
    pub task: &'a str,
    pub all_questions: &'a [QuestionRecord],
}

/// 成功响应，两个字段都可能缺失
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub report: Option<String>,
    #[serde(default)]
    pub final_state: Option<String>,
}

/// 错误响应体
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// 分析服务客户端
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: String,
    task: String,
}

impl AnalysisClient {
    /// 创建新的分析服务客户端
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(&config.analysis_endpoint, &config.analysis_task)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            task: task.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 提交题目并获取分析结果
    ///
    /// # 参数
    /// - `questions`: 已清洗的题目列表
    ///
    /// # 返回
    /// 成功时返回服务端的报告；非 2xx 返回 `Remote`，网络或解析失败返回 `Transport`
    pub async fn analyze(
        &self,
        questions: &[QuestionRecord],
    ) -> Result<AnalysisResponse, AnalysisError> {
        let request = AnalysisRequest {
            task: &self.task,
            all_questions: questions,
        };

        debug!(
            "POST {} ({} 道题目)",
            self.endpoint,
            request.all_questions.len()
        );

        let response = self.http.post(&self.endpoint).json(&request).send().await?;
        let response = check_response(response).await?;
        let body = response.json::<AnalysisResponse>().await?;

        debug!(
            "分析结果: report={} 字符, final_state={} 字符",
            body.report.as_deref().map_or(0, str::len),
            body.final_state.as_deref().map_or(0, str::len)
        );

        Ok(body)
    }
}

/// 非 2xx 响应转为 `Remote` 错误，尽量读取响应体中的 `error` 字段
async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, AnalysisError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body_message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.is_empty());

    Err(AnalysisError::remote(status.as_u16(), body_message))
}
