//! 分析请求控制器 - 流程层
//!
//! 核心职责：驱动一次分析请求的生命周期
//!
//! 状态流转：
//! 1. `Idle` → 首次提交前
//! 2. 题集为空 → 直接 `Failure`，不发请求
//! 3. 否则 → `Loading` → 清洗题目 → 调用分析服务
//! 4. 请求结束 → `Success` 或 `Failure`
//!
//! 每次提交都会重新进入 `Loading`，不做自动重试。
//! 请求在后台任务中执行，结果通过 `watch` 通道发布，读者总是看到最近一次完成的状态。

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::clients::AnalysisClient;
use crate::error::AnalysisError;
use crate::models::{AnalysisOutcome, QuestionSet};

/// 分析请求控制器
#[derive(Debug, Clone)]
pub struct AnalysisRequestController {
    client: AnalysisClient,
    state: Arc<watch::Sender<AnalysisOutcome>>,
}

impl AnalysisRequestController {
    pub fn new(client: AnalysisClient) -> Self {
        let (state, _) = watch::channel(AnalysisOutcome::Idle);
        Self {
            client,
            state: Arc::new(state),
        }
    }

    /// 当前状态
    pub fn state(&self) -> AnalysisOutcome {
        self.state.borrow().clone()
    }

    /// 订阅状态变化
    pub fn subscribe(&self) -> watch::Receiver<AnalysisOutcome> {
        self.state.subscribe()
    }

    /// 提交题集
    ///
    /// 立即返回：题集为空时直接进入 `Failure` 并返回 `None`，
    /// 否则进入 `Loading` 并返回后台请求任务的句柄。
    ///
    /// 进行中的请求不会被取消；重复提交时多个请求并行，以最后完成者为准。
    ///
    /// 必须在 tokio 运行时内调用。
    pub fn submit(&self, questions: &QuestionSet) -> Option<JoinHandle<AnalysisOutcome>> {
        if questions.is_empty() {
            let err = AnalysisError::Validation;
            warn!("⚠️ 题集为空，不发起分析请求");
            self.state.send_replace(AnalysisOutcome::failure(err.to_string()));
            return None;
        }

        let previous = self.state.send_replace(AnalysisOutcome::Loading);
        if previous.is_loading() {
            warn!("⚠️ 上一次分析尚未完成，两次请求将并行进行，以最后返回者为准");
        }

        let payload = questions.to_submission_payload();
        let attempted = payload.iter().filter(|q| q.is_attempted()).count();
        info!(
            "📤 正在提交 {} 道题目 (已作答 {}, 未作答 {}) 到 {}",
            payload.len(),
            attempted,
            payload.len() - attempted,
            self.client.endpoint()
        );

        let client = self.client.clone();
        let state = Arc::clone(&self.state);

        Some(tokio::spawn(async move {
            let outcome = match client.analyze(&payload).await {
                Ok(response) => {
                    info!("✓ 分析完成");
                    AnalysisOutcome::Success {
                        report: response.report,
                        final_state: response.final_state,
                    }
                }
                Err(e) => {
                    error!("❌ 分析请求失败 ({}): {}", e.kind(), e);
                    AnalysisOutcome::failure(e.to_string())
                }
            };

            state.send_replace(outcome.clone());
            outcome
        }))
    }

    /// 提交题集并等待本次请求结束
    pub async fn submit_and_wait(&self, questions: &QuestionSet) -> AnalysisOutcome {
        let Some(handle) = self.submit(questions) else {
            return self.state();
        };

        match handle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("❌ 分析任务异常终止: {}", e);
                let outcome = AnalysisOutcome::failure(format!("Analysis task aborted: {}", e));
                self.state.send_replace(outcome.clone());
                outcome
            }
        }
    }
}
