//! 报告渲染 - 业务能力层
//!
//! 把当前 `AnalysisOutcome` 渲染为纯文本面板，报告正文原样输出（Markdown）

use crate::models::AnalysisOutcome;

pub const IDLE_HINT: &str =
    "Run `submit` (or start without INTERACTIVE) to analyze the loaded exam questions.";

/// 渲染分析结果
pub fn render_outcome(outcome: &AnalysisOutcome) -> String {
    match outcome {
        AnalysisOutcome::Idle => IDLE_HINT.to_string(),
        AnalysisOutcome::Loading => "Analyzing...".to_string(),
        AnalysisOutcome::Failure { message } => format!("Error: {}", message),
        AnalysisOutcome::Success {
            report,
            final_state,
        } => {
            let mut sections = Vec::new();
            if let Some(final_state) = final_state.as_deref().filter(|s| !s.is_empty()) {
                sections.push(final_state.to_string());
            }
            if let Some(report) = report.as_deref().filter(|s| !s.is_empty()) {
                sections.push(format!("Summary Report:\n\n{}", report));
            }
            if sections.is_empty() {
                sections.push("(analysis service returned no report)".to_string());
            }
            let divider = format!("\n\n{}\n\n", "─".repeat(60));
            sections.join(divider.as_str())
        }
    }
}
