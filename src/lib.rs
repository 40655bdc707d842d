//! # Exam Report Client
//!
//! 手工录入选择题、整批提交给远程分析服务、展示返回的分析报告
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目、题集、分析状态
//! - `QuestionSet` - 唯一持有题目的可编辑列表，负责提交前的清洗
//! - `AnalysisOutcome` - Idle / Loading / Success / Failure 四选一
//!
//! ### ② 外部调用（Clients）
//! - `AnalysisClient` - 对分析服务的唯一一次 POST 调用
//!
//! ### ③ 流程层（Workflow）
//! - `AnalysisRequestController` - 请求生命周期状态机
//!
//! ### ④ 展示与编排（Services / Shell / App）
//! - `render_outcome` / `ReportWriter` - 渲染与保存报告
//! - `Shell` - 行命令编辑器
//! - `App` - 初始化与运行模式选择
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod shell;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::AnalysisClient;
pub use config::Config;
pub use error::{AnalysisError, QuestionFileError};
pub use models::{AnalysisOutcome, QuestionField, QuestionRecord, QuestionSet};
pub use shell::Shell;
pub use workflow::AnalysisRequestController;
