/// Canvas API 客户端
///
/// 封装所有与 Canvas REST API 的交互
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::clients::{ApiResponse, QuizApi};
use crate::config::Config;
use crate::models::quiz_request::QuestionSpec;

/// Quiz 固定配置：创建后不发布
const PUBLISHED: bool = false;
/// Quiz 固定配置：允许的作答次数
const ALLOWED_ATTEMPTS: u32 = 10;

/// Canvas API 客户端
pub struct CanvasClient {
    client: reqwest::Client,
    base_url: String,
}

impl CanvasClient {
    /// 创建新的 Canvas 客户端
    ///
    /// # 参数
    /// - `config`: 程序配置（基础地址、超时）
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("无法创建HTTP客户端")?;

        Ok(Self {
            client,
            base_url: config.canvas_base_url.clone(),
        })
    }

    /// 发送 POST 请求并把响应读成（状态码, 原文 body）
    ///
    /// 不在这里判断成败，状态码的解释留给流程层
    async fn post_json(
        &self,
        url: &str,
        credential: &str,
        payload: &serde_json::Value,
    ) -> Result<ApiResponse> {
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .bearer_auth(credential)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("请求失败: {}", url))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .with_context(|| format!("无法读取响应内容: {}", url))?;

        debug!("响应状态: {}", status);

        Ok(ApiResponse { status, body })
    }
}

#[async_trait]
impl QuizApi for CanvasClient {
    async fn create_quiz(
        &self,
        credential: &str,
        course_id: &str,
        title: &str,
    ) -> Result<ApiResponse> {
        // description 刻意与标题相同，不单独配置
        let quiz_data = json!({
            "quiz": {
                "title": title,
                "description": title,
                "published": PUBLISHED,
                "allowed_attempts": ALLOWED_ATTEMPTS,
            }
        });

        let url = format!("{}/courses/{}/quizzes", self.base_url, course_id);
        self.post_json(&url, credential, &quiz_data).await
    }

    async fn add_question(
        &self,
        credential: &str,
        course_id: &str,
        quiz_id: u64,
        question: &QuestionSpec,
    ) -> Result<ApiResponse> {
        // 题目字段原样转发，包裹在 question 字段下
        let question_data = json!({ "question": question });

        let url = format!(
            "{}/courses/{}/quizzes/{}/questions",
            self.base_url, course_id, quiz_id
        );
        self.post_json(&url, credential, &question_data).await
    }
}
