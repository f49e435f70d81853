/// TOML 提交文件适配器
///
/// 命令行模式下，每个待创建的 Quiz 写成一个 TOML 文件放在提交目录中
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::models::loaders::parse_questions_value;
use crate::models::quiz_request::QuizRequest;

/// 一个待处理的提交文件
#[derive(Debug)]
pub struct Submission {
    pub request: QuizRequest,
    pub file_path: String,
}

/// TOML 文件的原始结构
#[derive(Debug, Deserialize)]
struct RawSubmission {
    api_token: String,
    course_id: String,
    title: String,
    #[serde(default)]
    questions: Vec<toml::Value>,
}

/// 解析 TOML 内容为 QuizRequest
///
/// # 参数
/// - `content`: TOML 文件内容
///
/// # 返回
/// 解码后的请求（题目列表走与表单/JSON 相同的校验）
pub(crate) fn parse_submission(content: &str) -> Result<QuizRequest> {
    let raw: RawSubmission = toml::from_str(content).context("无法解析TOML内容")?;

    if raw.api_token.is_empty() || raw.course_id.is_empty() || raw.title.is_empty() {
        anyhow::bail!("缺少必填字段");
    }

    // 经由 JSON 值走统一的题目列表校验
    let questions_json =
        serde_json::to_value(&raw.questions).context("无法转换题目列表")?;
    let questions = parse_questions_value(&questions_json)?;

    Ok(QuizRequest {
        credential: raw.api_token,
        course_id: raw.course_id,
        title: raw.title,
        questions,
    })
}

/// 从 TOML 文件加载一个提交
///
/// # 参数
/// - `toml_file_path`: 文件路径
pub async fn load_toml_submission(toml_file_path: &Path) -> Result<Submission> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    let request = parse_submission(&content)
        .with_context(|| format!("无法解析TOML文件: {}", toml_file_path.display()))?;

    Ok(Submission {
        request,
        file_path: toml_file_path.to_string_lossy().to_string(),
    })
}

/// 从文件夹中加载所有 TOML 提交文件
///
/// 单个文件加载失败只记录警告，不影响其他文件
pub async fn load_all_submissions(folder_path: &str) -> Result<Vec<Submission>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut submissions = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            tracing::info!(
                "正在加载: {}",
                path.file_name().unwrap_or_default().to_string_lossy()
            );

            match load_toml_submission(&path).await {
                Ok(submission) => {
                    tracing::info!("成功加载 {} 个题目", submission.request.questions.len());
                    submissions.push(submission);
                }
                Err(e) => {
                    tracing::warn!("加载文件失败 {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(submissions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submission() {
        let content = r#"
api_token = "tok"
course_id = "101"
title = "Midterm"

[[questions]]
question_name = "Q1"
question_type = "essay_question"

[[questions]]
question_name = "Q2"
"#;

        let request = parse_submission(content).unwrap();
        assert_eq!(request.credential, "tok");
        assert_eq!(request.course_id, "101");
        assert_eq!(request.title, "Midterm");
        assert_eq!(request.questions.len(), 2);
        assert_eq!(request.questions[0].question_name(), Some("Q1"));
    }

    #[test]
    fn test_parse_submission_without_questions() {
        let content = r#"
api_token = "tok"
course_id = "101"
title = "Midterm"
"#;

        assert!(parse_submission(content).is_err());
    }

    #[test]
    fn test_parse_submission_invalid_toml() {
        assert!(parse_submission("not = [valid").is_err());
    }
}
