//! 入口适配器
//!
//! 三种输入形态（表单提交、JSON 请求体、TOML 文件）各有一个薄解码层，
//! 共用同一套题目列表解析规则，最终都产出同一个 QuizRequest

pub mod form_loader;
pub mod json_loader;
pub mod toml_loader;

pub use form_loader::from_form;
pub use json_loader::from_json;
pub use toml_loader::{load_all_submissions, load_toml_submission, Submission};

use serde_json::Value;

use crate::error::CreateQuizError;
use crate::models::quiz_request::QuestionSpec;

/// 解析 JSON 字符串形式的题目列表
///
/// # 参数
/// - `raw`: JSON 编码的题目数组
///
/// # 返回
/// 非空的题目列表，或校验失败
pub(crate) fn parse_questions_str(raw: &str) -> Result<Vec<QuestionSpec>, CreateQuizError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|_| CreateQuizError::validation("malformed question list"))?;

    parse_questions_value(&value)
}

/// 解析已结构化的题目列表
///
/// 非数组或空数组都视为"列表为空"；数组元素必须是对象
pub(crate) fn parse_questions_value(value: &Value) -> Result<Vec<QuestionSpec>, CreateQuizError> {
    let array = match value.as_array() {
        Some(array) if !array.is_empty() => array,
        _ => return Err(CreateQuizError::validation("question list must be non-empty")),
    };

    array
        .iter()
        .map(|item| match item.as_object() {
            Some(map) => Ok(QuestionSpec(map.clone())),
            None => Err(CreateQuizError::validation("malformed question list")),
        })
        .collect()
}
