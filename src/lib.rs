//! # Canvas Quiz Submit
//!
//! 一个把 Quiz 及其题目批量创建到 Canvas LMS 的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 抽象远程 Quiz API 的两个操作
//! - `QuizApi` - 能力抽象（创建 Quiz / 添加题目）
//! - `CanvasClient` - 基于 reqwest 的生产实现
//!
//! ### ② 模型层（Models）
//! - `models/` - 请求、题目、结果类型
//! - `models/loaders/` - 三个入口适配器（表单 / JSON / TOML 文件），
//!   各自把原始输入解码为同一个 `QuizRequest`
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次 Quiz 创建"的完整两阶段流程
//! - `QuizFlow` - 先创建 Quiz，再按顺序逐个添加题目，首败即停
//!
//! ### ④ 应用层（App）
//! - `app` - 命令行外壳：扫描提交目录，逐个执行流程，输出统计
//!
//! ## 层次关系
//!
//! ```text
//! app (处理 Vec<Submission>)
//!     ↓
//! workflow::QuizFlow (处理单个 QuizRequest)
//!     ↓
//! clients::QuizApi (两个远程操作)
//! ```

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::{ApiResponse, CanvasClient, QuizApi};
pub use config::Config;
pub use error::{CreateQuizError, Stage};
pub use models::{QuestionSpec, QuizCreated, QuizCreationResult, QuizRequest};
pub use workflow::QuizFlow;
