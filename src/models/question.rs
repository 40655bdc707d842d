use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 提交时视为有效作答的选项
pub static VALID_CHOICES: phf::Set<&'static str> = phf::phf_set! { "A", "B", "C", "D" };

/// 新建题目时默认的选项字母
pub const DEFAULT_OPTION_KEYS: [&str; 4] = ["A", "B", "C", "D"];

/// 单道选择题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    #[serde(default)]
    pub correct_option: String,
    /// `None` 表示未作答
    #[serde(default)]
    pub chosen_option: Option<String>,
}

impl QuestionRecord {
    /// 创建空白题目：题干为空，A-D 四个空选项，未作答
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
            options: DEFAULT_OPTION_KEYS
                .iter()
                .map(|key| (key.to_string(), String::new()))
                .collect(),
            correct_option: String::new(),
            chosen_option: None,
        }
    }

    /// 返回用于提交的副本，非 A-D 的作答一律视为未作答
    pub fn sanitized(&self) -> Self {
        let chosen_option = self
            .chosen_option
            .as_deref()
            .filter(|choice| is_valid_choice(choice))
            .map(str::to_string);

        Self {
            chosen_option,
            ..self.clone()
        }
    }

    pub fn is_attempted(&self) -> bool {
        self.chosen_option.as_deref().is_some_and(is_valid_choice)
    }
}

pub fn is_valid_choice(choice: &str) -> bool {
    VALID_CHOICES.contains(choice)
}

/// 可编辑字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionField {
    Text,
    Options,
    CorrectOption,
    ChosenOption,
}

impl QuestionField {
    pub fn name(self) -> &'static str {
        match self {
            QuestionField::Text => "text",
            QuestionField::Options => "options",
            QuestionField::CorrectOption => "correct_option",
            QuestionField::ChosenOption => "chosen_option",
        }
    }
}

impl fmt::Display for QuestionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("未知字段: {0} (可选: text, options, correct_option, chosen_option)")]
pub struct UnknownFieldError(pub String);

impl FromStr for QuestionField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "text" => Ok(QuestionField::Text),
            "options" => Ok(QuestionField::Options),
            "correct_option" => Ok(QuestionField::CorrectOption),
            "chosen_option" => Ok(QuestionField::ChosenOption),
            other => Err(UnknownFieldError(other.to_string())),
        }
    }
}

/// 解析 `A:Text, B:Text` 形式的选项串
///
/// 解析规则（宽松，永不报错）：
/// - 按 `,` 拆分，每段按 `:` 拆分，只取前两段作为键和值
/// - 键和值都去掉首尾空白
/// - 没有 `:` 的段落得到一个值为空串的键
/// - 重复的键以后出现者为准
pub fn parse_options(value: &str) -> BTreeMap<String, String> {
    let mut options = BTreeMap::new();

    for pair in value.split(',') {
        let mut parts = pair.split(':');
        let key = parts.next().unwrap_or_default().trim();
        let text = parts.next().unwrap_or_default().trim();
        options.insert(key.to_string(), text.to_string());
    }

    options
}

/// `parse_options` 的展示形式，用于编辑界面回显
pub fn format_options(options: &BTreeMap<String, String>) -> String {
    options
        .iter()
        .map(|(key, text)| format!("{}:{}", key, text))
        .collect::<Vec<_>>()
        .join(", ")
}
