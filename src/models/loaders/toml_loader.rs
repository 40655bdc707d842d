use crate::error::QuestionFileError;
use crate::models::question::QuestionRecord;
use crate::models::question_set::QuestionSet;
use crate::models::sample::sample_questions;
use anyhow::Result;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 题目文件结构：`[[questions]]` 数组
#[derive(Debug, Deserialize)]
struct QuestionFile {
    #[serde(default)]
    questions: Vec<QuestionRecord>,
}

/// 解析 TOML 文本为题集
pub fn parse_question_file(content: &str, path: &str) -> Result<QuestionSet, QuestionFileError> {
    let file: QuestionFile =
        toml::from_str(content).map_err(|source| QuestionFileError::TomlParseFailed {
            path: path.to_string(),
            source,
        })?;

    QuestionSet::from_records(file.questions).map_err(|e| QuestionFileError::DuplicateId {
        path: path.to_string(),
        id: e.0,
    })
}

/// 从 TOML 文件加载题集
pub async fn load_toml_to_question_set(
    toml_file_path: &Path,
) -> Result<QuestionSet, QuestionFileError> {
    let path = toml_file_path.display().to_string();
    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|source| QuestionFileError::ReadFailed {
            path: path.clone(),
            source,
        })?;

    parse_question_file(&content, &path)
}

/// 加载初始题集：指定了文件则读文件，否则使用内置示例
pub async fn load_question_set(questions_file: Option<&str>) -> Result<QuestionSet> {
    let Some(file) = questions_file else {
        tracing::info!("未指定题目文件，使用内置示例题集");
        return Ok(sample_questions());
    };

    tracing::info!("正在加载题目文件: {}", file);
    let set = load_toml_to_question_set(Path::new(file)).await?;
    tracing::info!("成功加载 {} 个题目", set.len());

    Ok(set)
}
