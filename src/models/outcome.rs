//! 分析请求的生命周期状态

/// 当前分析结果
///
/// 加载中、报告、错误三者互斥，用一个枚举表达
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// 尚未发起请求
    #[default]
    Idle,
    /// 请求进行中
    Loading,
    /// 请求成功，两个字段都可能缺失
    Success {
        report: Option<String>,
        final_state: Option<String>,
    },
    /// 请求失败
    Failure { message: String },
}

impl AnalysisOutcome {
    pub fn is_loading(&self) -> bool {
        matches!(self, AnalysisOutcome::Loading)
    }

    /// 是否为一次请求的终态
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            AnalysisOutcome::Success { .. } | AnalysisOutcome::Failure { .. }
        )
    }

    pub fn failure(message: impl Into<String>) -> Self {
        AnalysisOutcome::Failure {
            message: message.into(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisOutcome::Idle => "idle",
            AnalysisOutcome::Loading => "loading",
            AnalysisOutcome::Success { .. } => "success",
            AnalysisOutcome::Failure { .. } => "failure",
        }
    }
}
