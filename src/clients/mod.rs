//! 客户端层
//!
//! `QuizApi` 抽象远程 Quiz API 的两个操作；`CanvasClient` 是基于 reqwest
//! 的生产实现。流程层只依赖抽象，测试中可以替换为脚本化的实现

pub mod canvas_client;

pub use canvas_client::CanvasClient;

use async_trait::async_trait;

use crate::models::quiz_request::QuestionSpec;

/// 远程 API 的一次响应：状态码加原文 body
///
/// body 始终按文本读取，失败时原样放进错误信息
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// 是否为 2xx 成功状态
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Quiz API 能力抽象
#[async_trait]
pub trait QuizApi: Send + Sync {
    /// 创建 Quiz（父资源）
    ///
    /// # 参数
    /// - `credential`: Bearer 凭证
    /// - `course_id`: 课程 ID
    /// - `title`: Quiz 标题
    async fn create_quiz(
        &self,
        credential: &str,
        course_id: &str,
        title: &str,
    ) -> anyhow::Result<ApiResponse>;

    /// 向已创建的 Quiz 添加一道题目（子资源）
    ///
    /// # 参数
    /// - `quiz_id`: 创建 Quiz 时远端返回的 ID
    /// - `question`: 题目定义，原样转发
    async fn add_question(
        &self,
        credential: &str,
        course_id: &str,
        quiz_id: u64,
        question: &QuestionSpec,
    ) -> anyhow::Result<ApiResponse>;
}
