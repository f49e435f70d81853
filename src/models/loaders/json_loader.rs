/// JSON 请求体适配器
///
/// 把一个 JSON 对象解码为 QuizRequest。与表单不同，questions 字段
/// 既可以是 JSON 编码的字符串，也可以直接是结构化数组，两种形态等价
use serde_json::Value;

use crate::error::CreateQuizError;
use crate::models::loaders::{parse_questions_str, parse_questions_value};
use crate::models::quiz_request::QuizRequest;

/// 从 JSON 请求体解码 QuizRequest
///
/// # 参数
/// - `body`: 请求体（api_token / course_id / quiz_title / questions）
///
/// # 返回
/// 解码后的请求，或校验失败
pub fn from_json(body: &Value) -> Result<QuizRequest, CreateQuizError> {
    let credential = str_field(body, "api_token");
    let course_id = str_field(body, "course_id");
    let title = str_field(body, "quiz_title");

    let questions_value = match body.get("questions") {
        None | Some(Value::Null) => None,
        // 空字符串等同于缺失
        Some(Value::String(raw)) if raw.is_empty() => None,
        Some(value) => Some(value),
    };

    let questions_value = match questions_value {
        Some(value) if !credential.is_empty() && !course_id.is_empty() && !title.is_empty() => value,
        _ => return Err(CreateQuizError::validation("missing required fields")),
    };

    let questions = match questions_value {
        Value::String(raw) => parse_questions_str(raw)?,
        other => parse_questions_value(other)?,
    };

    Ok(QuizRequest {
        credential: credential.to_string(),
        course_id: course_id.to_string(),
        title: title.to_string(),
        questions,
    })
}

fn str_field<'a>(body: &'a Value, name: &str) -> &'a str {
    body.get(name).and_then(|v| v.as_str()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Stage;
    use serde_json::json;

    #[test]
    fn test_structured_questions_accepted() {
        let body = json!({
            "api_token": "tok",
            "course_id": "101",
            "quiz_title": "Midterm",
            "questions": [{"question_name": "Q1"}, {"question_name": "Q2"}]
        });

        let request = from_json(&body).unwrap();
        assert_eq!(request.questions.len(), 2);
        assert_eq!(request.questions[0].question_name(), Some("Q1"));
    }

    #[test]
    fn test_string_encoded_questions_accepted() {
        // 字符串形态与结构化形态必须解码出相同的请求
        let body = json!({
            "api_token": "tok",
            "course_id": "101",
            "quiz_title": "Midterm",
            "questions": r#"[{"question_name":"Q1"},{"question_name":"Q2"}]"#
        });

        let request = from_json(&body).unwrap();
        assert_eq!(request.questions.len(), 2);
        assert_eq!(request.questions[1].question_name(), Some("Q2"));
    }

    #[test]
    fn test_missing_questions_rejected() {
        let body = json!({
            "api_token": "tok",
            "course_id": "101",
            "quiz_title": "Midterm"
        });

        let err = from_json(&body).unwrap_err();
        assert_eq!(err.stage(), Stage::Validation);
        assert!(err.to_string().contains("missing required fields"));
    }

    #[test]
    fn test_null_questions_rejected() {
        let body = json!({
            "api_token": "tok",
            "course_id": "101",
            "quiz_title": "Midterm",
            "questions": null
        });

        let err = from_json(&body).unwrap_err();
        assert_eq!(err.stage(), Stage::Validation);
    }

    #[test]
    fn test_non_sequence_questions_rejected() {
        // 存在但不是数组 → 列表为空错误，而不是缺字段
        let body = json!({
            "api_token": "tok",
            "course_id": "101",
            "quiz_title": "Midterm",
            "questions": {"question_name": "Q1"}
        });

        let err = from_json(&body).unwrap_err();
        assert_eq!(err.stage(), Stage::Validation);
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn test_empty_array_rejected() {
        let body = json!({
            "api_token": "tok",
            "course_id": "101",
            "quiz_title": "Midterm",
            "questions": []
        });

        let err = from_json(&body).unwrap_err();
        assert_eq!(err.stage(), Stage::Validation);
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn test_malformed_questions_string_rejected() {
        let body = json!({
            "api_token": "tok",
            "course_id": "101",
            "quiz_title": "Midterm",
            "questions": "{broken"
        });

        let err = from_json(&body).unwrap_err();
        assert_eq!(err.stage(), Stage::Validation);
        assert!(err.to_string().contains("malformed"));
    }
}
