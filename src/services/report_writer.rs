//! 报告写入服务 - 业务能力层
//!
//! 只负责"把成功的分析结果写成 Markdown 文件"

use anyhow::{Context, Result};
use tokio::fs;
use tracing::{debug, info};

use crate::models::AnalysisOutcome;

/// 报告写入服务
pub struct ReportWriter {
    report_file_path: String,
}

impl ReportWriter {
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            report_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.report_file_path
    }

    /// 写入报告
    ///
    /// 只有 `Success` 会写文件，返回是否写入
    pub async fn write(&self, outcome: &AnalysisOutcome) -> Result<bool> {
        let AnalysisOutcome::Success {
            report,
            final_state,
        } = outcome
        else {
            debug!("分析未成功 ({})，跳过写入报告", outcome.label());
            return Ok(false);
        };

        let content = format!(
            "# 考试分析报告 - {}\n\n## Final State\n\n{}\n\n## Summary Report\n\n{}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            final_state.as_deref().unwrap_or("_(none)_"),
            report.as_deref().unwrap_or("_(none)_"),
        );

        fs::write(&self.report_file_path, content)
            .await
            .with_context(|| format!("无法写入报告文件: {}", self.report_file_path))?;

        info!("📝 报告已保存至: {}", self.report_file_path);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> String {
        std::env::temp_dir()
            .join(format!("exam_report_{}_{}.md", tag, std::process::id()))
            .to_string_lossy()
            .to_string()
    }

    #[tokio::test]
    async fn test_write_success() {
        let writer = ReportWriter::with_path(temp_path("success"));
        let outcome = AnalysisOutcome::Success {
            report: Some("Strong in geography.".to_string()),
            final_state: None,
        };

        assert!(writer.write(&outcome).await.unwrap());

        let content = fs::read_to_string(writer.path()).await.unwrap();
        assert!(content.contains("Strong in geography."));
        assert!(content.contains("_(none)_"));

        fs::remove_file(writer.path()).await.unwrap();
    }

    #[tokio::test]
    async fn test_skip_non_success() {
        let writer = ReportWriter::with_path(temp_path("failure"));
        let outcome = AnalysisOutcome::failure("bad payload");

        assert!(!writer.write(&outcome).await.unwrap());
        assert!(fs::metadata(writer.path()).await.is_err());
    }
}
