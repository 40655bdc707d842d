//! 交互式编辑器
//!
//! 行命令界面，持有一个题集和一个控制器：
//!
//! ```text
//! list                      列出题目
//! add                       新增空白题目
//! remove <n>                删除第 n 题
//! edit <n> <field> [value]  修改第 n 题的字段
//! submit                    提交分析
//! show                      显示当前分析结果
//! quit                      退出
//! ```
//!
//! 题号从 1 开始，与列表显示一致。

use anyhow::Result;
use regex::Regex;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::models::{format_options, QuestionField, QuestionSet};
use crate::services::{render_outcome, ReportWriter};
use crate::workflow::AnalysisRequestController;

const HELP: &str = "\
Commands:
  list                      show all questions
  add                       append a blank question
  remove <n>                remove question n
  edit <n> <field> [value]  set a field (text, options, correct_option, chosen_option)
                            options format: A:Text, B:Text, ...
                            an empty chosen_option means unattempted
  submit                    send the questions for analysis
  show                      show the current analysis result
  quit                      exit";

/// 命令执行后是否继续
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// 交互式编辑器
pub struct Shell {
    questions: QuestionSet,
    controller: AnalysisRequestController,
    report_writer: Option<ReportWriter>,
    command_re: Regex,
}

impl Shell {
    pub fn new(
        questions: QuestionSet,
        controller: AnalysisRequestController,
        report_writer: Option<ReportWriter>,
    ) -> Result<Self> {
        let command_re = Regex::new(
            r"^(?P<cmd>[a-z]+)(?:\s+(?P<pos>\d+))?(?:\s+(?P<field>[a-z_]+))?(?:\s(?P<value>.*))?$",
        )?;

        Ok(Self {
            questions,
            controller,
            report_writer,
            command_re,
        })
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn controller(&self) -> &AnalysisRequestController {
        &self.controller
    }

    /// 逐行读取命令直到 `quit` 或输入结束
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        output.write_all(format!("{}\n> ", HELP).as_bytes()).await?;
        output.flush().await?;

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                output.write_all(b"> ").await?;
                output.flush().await?;
                continue;
            }

            debug!("命令: {}", line);
            let (reply, flow) = self.execute(line).await;
            output.write_all(reply.as_bytes()).await?;
            output.write_all(b"\n").await?;

            if flow == Flow::Quit {
                break;
            }
            output.write_all(b"> ").await?;
            output.flush().await?;
        }

        output.flush().await?;
        Ok(())
    }

    async fn execute(&mut self, line: &str) -> (String, Flow) {
        let Some(caps) = self.command_re.captures(line) else {
            return (format!("Unrecognized input: {}\n{}", line, HELP), Flow::Continue);
        };

        let position = caps
            .name("pos")
            .and_then(|m| m.as_str().parse::<usize>().ok());
        let field = caps.name("field").map(|m| m.as_str());
        let value = caps.name("value").map_or("", |m| m.as_str().trim());

        let reply = match &caps["cmd"] {
            "help" => HELP.to_string(),
            "list" | "ls" => self.list(),
            "add" => {
                let id = self.questions.add();
                format!("Added question {} (ID: {})", self.questions.len(), id)
            }
            "remove" | "rm" => match position.and_then(to_index) {
                Some(index) => match self.questions.remove(index) {
                    Some(removed) => format!("Removed question {} (ID: {})", index + 1, removed.id),
                    None => no_question(index),
                },
                None => "Usage: remove <n>".to_string(),
            },
            "edit" => match (position.and_then(to_index), field) {
                (Some(index), Some(field)) => self.edit(index, field, value),
                _ => "Usage: edit <n> <field> [value]".to_string(),
            },
            "submit" => self.submit().await,
            "show" => render_outcome(&self.controller.state()),
            "quit" | "exit" => return ("Bye.".to_string(), Flow::Quit),
            other => format!("Unknown command: {}\n{}", other, HELP),
        };

        (reply, Flow::Continue)
    }

    fn list(&self) -> String {
        if self.questions.is_empty() {
            return "No questions. Use `add` to create one.".to_string();
        }

        self.questions
            .iter()
            .enumerate()
            .map(|(index, q)| {
                format!(
                    "Question {} (ID: {})\n  text:    {}\n  options: {}\n  correct: {}\n  chosen:  {}",
                    index + 1,
                    q.id,
                    q.text,
                    format_options(&q.options),
                    q.correct_option,
                    q.chosen_option.as_deref().unwrap_or("Unattempted")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn edit(&mut self, index: usize, field: &str, value: &str) -> String {
        let field: QuestionField = match field.parse() {
            Ok(field) => field,
            Err(e) => return e.to_string(),
        };

        if !self.questions.edit_field(index, field, value) {
            return no_question(index);
        }

        format!("Updated {} of question {}", field, index + 1)
    }

    async fn submit(&mut self) -> String {
        let outcome = self.controller.submit_and_wait(&self.questions).await;

        if let Some(writer) = &self.report_writer {
            if let Err(e) = writer.write(&outcome).await {
                tracing::warn!("⚠️ 报告写入失败: {}", e);
            }
        }

        render_outcome(&outcome)
    }
}

/// 1 起始题号转为下标
fn to_index(position: usize) -> Option<usize> {
    position.checked_sub(1)
}

fn no_question(index: usize) -> String {
    format!("No question at position {}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::AnalysisClient;
    use crate::models::sample_questions;

    fn shell(questions: QuestionSet) -> Shell {
        let controller = AnalysisRequestController::new(AnalysisClient::with_endpoint(
            "http://127.0.0.1:9/api/analyze_exam",
            "test",
        ));
        Shell::new(questions, controller, None).unwrap()
    }

    async fn run_script(shell: &mut Shell, script: &str) -> String {
        let mut output = Vec::new();
        shell.run(script.as_bytes(), &mut output).await.unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_add_edit_list() {
        let mut shell = shell(QuestionSet::new());
        let output = run_script(
            &mut shell,
            "add\nedit 1 text Capital of Italy?\nedit 1 options A:Paris, B:Rome, A:Lyon\nedit 1 correct_option B\nedit 1 chosen_option B\nlist\n",
        )
        .await;

        let record = shell.questions().get(0).unwrap();
        assert_eq!(record.text, "Capital of Italy?");
        assert_eq!(record.options.len(), 2);
        assert_eq!(record.options["A"], "Lyon");
        assert_eq!(record.correct_option, "B");
        assert_eq!(record.chosen_option.as_deref(), Some("B"));
        assert!(output.contains("options: A:Lyon, B:Rome"));
    }

    #[tokio::test]
    async fn test_clear_chosen_option() {
        let mut shell = shell(sample_questions());
        run_script(&mut shell, "edit 1 chosen_option\n").await;
        assert_eq!(shell.questions().get(0).unwrap().chosen_option, None);
    }

    #[tokio::test]
    async fn test_remove_and_bad_positions() {
        let mut shell = shell(sample_questions());
        let output = run_script(&mut shell, "remove 2\nremove 0\nremove 9\nedit 7 text x\n").await;

        assert_eq!(shell.questions().len(), 4);
        assert_eq!(shell.questions().get(1).unwrap().id, "3");
        assert!(output.contains("Removed question 2 (ID: 2)"));
        assert!(output.contains("Usage: remove <n>"));
        assert!(output.contains("No question at position 9"));
        assert!(output.contains("No question at position 7"));
    }

    #[tokio::test]
    async fn test_unknown_field() {
        let mut shell = shell(sample_questions());
        let output = run_script(&mut shell, "edit 1 answer C\n").await;
        assert!(output.contains("未知字段: answer"));
    }

    #[tokio::test]
    async fn test_submit_empty_set() {
        let mut shell = shell(QuestionSet::new());
        let output = run_script(&mut shell, "submit\nshow\n").await;

        assert_eq!(
            output
                .matches("Error: Please add at least one question for analysis.")
                .count(),
            2
        );
    }

    #[tokio::test]
    async fn test_quit_stops_reading() {
        let mut shell = shell(QuestionSet::new());
        let input = tokio::io::BufReader::new(
            tokio_test::io::Builder::new()
                .read(b"add\nquit\nadd\n")
                .build(),
        );
        let mut output = Vec::new();
        shell.run(input, &mut output).await.unwrap();

        assert_eq!(shell.questions().len(), 1);
        assert!(String::from_utf8(output).unwrap().contains("Bye."));
    }
}
