/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::QuestionSet;

/// 初始化日志
///
/// `RUST_LOG` 优先；否则按 `verbose` 选择 `debug` 或 `info`
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 考试分析客户端");
    info!("🌐 分析服务: {}", config.analysis_endpoint);
    info!(
        "🖥️ 运行模式: {}",
        if config.interactive { "交互式" } else { "单次提交" }
    );
    info!("{}", "=".repeat(60));
}

/// 记录题集概况
pub fn log_question_summary(questions: &QuestionSet) {
    let attempted = questions.iter().filter(|q| q.is_attempted()).count();
    info!(
        "✓ 共 {} 道题目，已作答 {}，未作答 {}",
        questions.len(),
        attempted,
        questions.len() - attempted
    );
    for (index, question) in questions.iter().enumerate() {
        info!(
            "  {}. [{}] {}",
            index + 1,
            question.id,
            truncate_text(&question.text, 60)
        );
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        assert_eq!(truncate_text("题目内容很长", 2), "题目...");
    }
}
