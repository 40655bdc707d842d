//! 题集 - 可编辑的有序题目列表
//!
//! 题集是题目的唯一持有者，外部只能拿到只读引用。
//! 所有修改都通过 `add` / `remove` / `edit_field` 完成，
//! 编辑时整条替换对应位置的题目。

use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, warn};

use super::question::{parse_options, QuestionField, QuestionRecord};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("题目ID重复: {0}")]
pub struct DuplicateIdError(pub String);

/// 有序题集，保证题目 ID 唯一
#[derive(Debug, Clone, Default)]
pub struct QuestionSet {
    questions: Vec<QuestionRecord>,
    id_seq: u64,
}

impl QuestionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从已有题目构造，ID 重复时报错
    pub fn from_records(records: Vec<QuestionRecord>) -> Result<Self, DuplicateIdError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(DuplicateIdError(record.id.clone()));
            }
        }

        Ok(Self {
            questions: records,
            id_seq: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&QuestionRecord> {
        self.questions.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionRecord> {
        self.questions.iter()
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.questions
    }

    /// 追加一道空白题目，返回新题目的 ID
    pub fn add(&mut self) -> String {
        let id = self.generate_id();
        self.questions.push(QuestionRecord::blank(id.clone()));
        debug!("新增题目 {} (共 {} 题)", id, self.questions.len());
        id
    }

    /// 删除指定位置的题目，越界时不做任何事
    pub fn remove(&mut self, position: usize) -> Option<QuestionRecord> {
        if position >= self.questions.len() {
            warn!(
                "删除位置 {} 超出范围 (共 {} 题)，忽略",
                position,
                self.questions.len()
            );
            return None;
        }

        let removed = self.questions.remove(position);
        debug!("删除题目 {} (剩余 {} 题)", removed.id, self.questions.len());
        Some(removed)
    }

    /// 修改指定位置题目的某个字段
    ///
    /// - `options`：按 [`parse_options`] 规则解析
    /// - `chosen_option`：空串视为未作答
    /// - 其他字段原样保存
    ///
    /// 越界时不做任何事并返回 `false`
    pub fn edit_field(&mut self, position: usize, field: QuestionField, value: &str) -> bool {
        let Some(current) = self.questions.get(position) else {
            warn!(
                "编辑位置 {} 超出范围 (共 {} 题)，忽略",
                position,
                self.questions.len()
            );
            return false;
        };

        let mut updated = current.clone();
        match field {
            QuestionField::Text => updated.text = value.to_string(),
            QuestionField::Options => updated.options = parse_options(value),
            QuestionField::CorrectOption => updated.correct_option = value.to_string(),
            QuestionField::ChosenOption => {
                updated.chosen_option = (!value.is_empty()).then(|| value.to_string())
            }
        }

        debug!("编辑题目 {} 字段 {}", updated.id, field);
        self.questions[position] = updated;
        true
    }

    /// 生成提交用的题目列表
    ///
    /// 只返回副本，不修改题集本身
    pub fn to_submission_payload(&self) -> Vec<QuestionRecord> {
        self.questions.iter().map(QuestionRecord::sanitized).collect()
    }

    /// 生成形如 `Q123456` + 序号 的 ID，与现有 ID 冲突时重新生成
    fn generate_id(&mut self) -> String {
        loop {
            self.id_seq += 1;
            let millis = chrono::Utc::now().timestamp_millis().rem_euclid(1_000_000);
            let id = format!("Q{:06}{}", millis, self.id_seq);
            if !self.questions.iter().any(|q| q.id == id) {
                return id;
            }
        }
    }
}
