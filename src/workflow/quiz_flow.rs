//! Quiz 创建流程
//!
//! 核心职责：先创建 Quiz（父资源），再按输入顺序逐个添加题目（子资源），
//! 把成功与各类失败汇总成一个带阶段标签的结果

use serde_json::Value;
use std::collections::HashMap;
use tracing::{error, info, warn};

use crate::clients::QuizApi;
use crate::error::{CreateQuizError, Stage};
use crate::models::loaders::{from_form, from_json};
use crate::models::quiz_request::{QuizCreated, QuizRequest};
use crate::models::QuizCreationResult;

/// Quiz 创建流程
///
/// - 只依赖 QuizApi 能力，不持有任何跨调用的状态
/// - 每次 run 都是独立的：不缓存、不去重，相同请求提交两次会创建两个 Quiz
pub struct QuizFlow<C> {
    api: C,
}

impl<C: QuizApi> QuizFlow<C> {
    /// 创建新的流程对象
    pub fn new(api: C) -> Self {
        Self { api }
    }

    /// 执行完整的两阶段创建流程
    ///
    /// # 参数
    /// - `request`: 已通过校验的请求
    ///
    /// # 返回
    /// 成功时返回 Quiz ID 和已添加的题目数；失败时返回带阶段标签的错误，
    /// 任何传输层错误都在这里被捕获，不会泄漏给调用方
    pub async fn run(&self, request: &QuizRequest) -> QuizCreationResult {
        // ========== 阶段 1: 创建 Quiz ==========
        info!("📋 正在创建 Quiz: {}", request.title);

        let response = match self
            .api
            .create_quiz(&request.credential, &request.course_id, &request.title)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("❌ 创建 Quiz 时发生传输错误: {}", e);
                return Err(CreateQuizError::Unexpected {
                    stage: Stage::QuizCreation,
                    message: e.to_string(),
                });
            }
        };

        if !response.is_success() {
            warn!("⚠️ Quiz 创建失败, 状态: {}", response.status);
            return Err(CreateQuizError::QuizCreation {
                http_status: Some(response.status),
                message: response.body,
            });
        }

        // HTTP 调用成功但响应里没有数字 ID，与请求失败是两种不同的失败
        let quiz_id = match extract_quiz_id(&response.body) {
            Some(id) => id,
            None => {
                warn!("⚠️ Quiz 创建响应中缺少 ID: {}", response.body);
                return Err(CreateQuizError::QuizCreation {
                    http_status: None,
                    message: "remote response missing identifier".to_string(),
                });
            }
        };

        info!("✓ Quiz 创建成功, ID: {}", quiz_id);

        // ========== 阶段 2: 按输入顺序逐个添加题目 ==========
        // 严格串行：失败报告依赖稳定的索引对应关系
        let total = request.questions.len();

        for (index, question) in request.questions.iter().enumerate() {
            info!(
                "📤 正在添加第 {}/{} 道题目: {}",
                index + 1,
                total,
                question.question_name().unwrap_or("(未命名)")
            );

            let response = match self
                .api
                .add_question(&request.credential, &request.course_id, quiz_id, question)
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    error!("❌ 添加题目 {} 时发生传输错误: {}", index + 1, e);
                    return Err(CreateQuizError::Unexpected {
                        stage: Stage::QuestionAddition,
                        message: e.to_string(),
                    });
                }
            };

            // 首败即停：剩余题目不再尝试，把 Quiz ID 和失败索引交给调用方
            if !response.is_success() {
                error!(
                    "❌ 题目 {} 添加失败, 状态: {}, Quiz {} 已创建但未完成",
                    index + 1,
                    response.status,
                    quiz_id
                );
                return Err(CreateQuizError::QuestionAddition {
                    quiz_id,
                    failed_question_index: index,
                    http_status: response.status,
                    message: response.body,
                });
            }

            info!("✓ 题目 {}/{} 添加成功", index + 1, total);
        }

        info!("✅ Quiz {} 创建完成, 共添加 {} 道题目", quiz_id, total);

        Ok(QuizCreated {
            quiz_id,
            questions_added: total,
        })
    }

    /// 从表单提交执行流程（解码 + run）
    ///
    /// 校验失败时不会发起任何远程调用
    pub async fn run_form(&self, fields: &HashMap<String, String>) -> QuizCreationResult {
        let request = from_form(fields)?;
        self.run(&request).await
    }

    /// 从 JSON 请求体执行流程（解码 + run）
    pub async fn run_json(&self, body: &Value) -> QuizCreationResult {
        let request = from_json(body)?;
        self.run(&request).await
    }
}

/// 从创建响应中提取 Quiz 的数字 ID
fn extract_quiz_id(body: &str) -> Option<u64> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("id")?.as_u64()
}
