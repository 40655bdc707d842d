//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：加载题集（TOML 文件或内置示例）、创建分析客户端和控制器
//! 2. **运行模式**：交互式编辑，或单次提交并输出报告
//! 3. **结果输出**：渲染分析结果，按需写入报告文件

use anyhow::Result;
use tracing::{info, warn};

use crate::clients::AnalysisClient;
use crate::config::Config;
use crate::models::{load_question_set, AnalysisOutcome, QuestionSet};
use crate::services::{render_outcome, ReportWriter};
use crate::shell::Shell;
use crate::utils::logging::{log_question_summary, log_startup};
use crate::workflow::AnalysisRequestController;

/// 应用主结构
pub struct App {
    config: Config,
    questions: QuestionSet,
    controller: AnalysisRequestController,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let questions = load_question_set(config.questions_file.as_deref()).await?;
        log_question_summary(&questions);

        let controller = AnalysisRequestController::new(AnalysisClient::new(&config));

        Ok(Self {
            config,
            questions,
            controller,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(self) -> Result<AnalysisOutcome> {
        let report_writer = self.config.report_output_file.as_deref().map(ReportWriter::with_path);

        if self.config.interactive {
            let mut shell = Shell::new(self.questions, self.controller, report_writer)?;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();
            shell.run(stdin, &mut stdout).await?;
            return Ok(shell.controller().state());
        }

        info!("\n🔍 正在请求分析...");
        let outcome = self.controller.submit_and_wait(&self.questions).await;

        println!("{}", render_outcome(&outcome));

        if let Some(writer) = report_writer {
            writer.write(&outcome).await?;
        }

        if let AnalysisOutcome::Failure { message } = &outcome {
            warn!("⚠️ 分析未完成: {}", message);
        }

        Ok(outcome)
    }
}
