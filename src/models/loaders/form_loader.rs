/// 表单提交适配器
///
/// 把一次表单提交（字段名 → 原始字符串）解码为 QuizRequest，
/// 其中 questions 字段是 JSON 编码的字符串
use std::collections::HashMap;

use crate::error::CreateQuizError;
use crate::models::loaders::parse_questions_str;
use crate::models::quiz_request::QuizRequest;

/// 从表单字段解码 QuizRequest
///
/// # 参数
/// - `fields`: 表单字段映射（api_token / course_id / quiz_title / questions）
///
/// # 返回
/// 解码后的请求，或校验失败
pub fn from_form(fields: &HashMap<String, String>) -> Result<QuizRequest, CreateQuizError> {
    let credential = field(fields, "api_token");
    let course_id = field(fields, "course_id");
    let title = field(fields, "quiz_title");
    let questions = field(fields, "questions");

    // 四个字段必须全部存在且非空，缺任何一个都不发起远程调用
    if credential.is_empty() || course_id.is_empty() || title.is_empty() || questions.is_empty() {
        return Err(CreateQuizError::validation("missing required fields"));
    }

    let questions = parse_questions_str(questions)?;

    Ok(QuizRequest {
        credential: credential.to_string(),
        course_id: course_id.to_string(),
        title: title.to_string(),
        questions,
    })
}

fn field<'a>(fields: &'a HashMap<String, String>, name: &str) -> &'a str {
    fields.get(name).map(String::as_str).unwrap_or("")
}
