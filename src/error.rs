use std::fmt;

/// Quiz 创建流程所处的阶段
///
/// 四类失败互斥，每个失败都带有发生时所处的阶段标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// 输入校验阶段（尚未发起任何远程调用）
    Validation,
    /// 创建 Quiz 阶段
    QuizCreation,
    /// 添加题目阶段
    QuestionAddition,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Validation => write!(f, "输入校验"),
            Stage::QuizCreation => write!(f, "创建Quiz"),
            Stage::QuestionAddition => write!(f, "添加题目"),
        }
    }
}

/// Quiz 创建失败
#[derive(Debug)]
pub enum CreateQuizError {
    /// 输入校验失败（未发起任何远程调用）
    Validation {
        message: String,
    },
    /// Quiz 创建失败（未发起任何添加题目的调用）
    ///
    /// `http_status` 为 None 表示 HTTP 调用成功但响应中缺少数字 ID
    QuizCreation {
        http_status: Option<u16>,
        message: String,
    },
    /// 题目添加失败（Quiz 已经创建，遇到第一个失败立即停止）
    ///
    /// `quiz_id` 是已创建的 Quiz，调用方需要它来手动检查或补救；
    /// `failed_question_index` 从 0 开始计数
    QuestionAddition {
        quiz_id: u64,
        failed_question_index: usize,
        http_status: u16,
        message: String,
    },
    /// 传输层或其他未分类的错误（网络失败、超时等）
    Unexpected {
        stage: Stage,
        message: String,
    },
}

impl fmt::Display for CreateQuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateQuizError::Validation { message } => {
                write!(f, "输入校验失败: {}", message)
            }
            CreateQuizError::QuizCreation {
                http_status: Some(status),
                message,
            } => {
                write!(f, "Quiz创建失败 (状态: {}): {}", status, message)
            }
            CreateQuizError::QuizCreation {
                http_status: None,
                message,
            } => {
                write!(f, "Quiz创建失败: {}", message)
            }
            CreateQuizError::QuestionAddition {
                quiz_id,
                failed_question_index,
                http_status,
                message,
            } => {
                write!(
                    f,
                    "题目 {} 添加失败 (Quiz: {}, 状态: {}): {}",
                    failed_question_index + 1,
                    quiz_id,
                    http_status,
                    message
                )
            }
            CreateQuizError::Unexpected { stage, message } => {
                write!(f, "{}阶段发生意外错误: {}", stage, message)
            }
        }
    }
}

impl std::error::Error for CreateQuizError {}

impl CreateQuizError {
    /// 失败发生的阶段
    pub fn stage(&self) -> Stage {
        match self {
            CreateQuizError::Validation { .. } => Stage::Validation,
            CreateQuizError::QuizCreation { .. } => Stage::QuizCreation,
            CreateQuizError::QuestionAddition { .. } => Stage::QuestionAddition,
            CreateQuizError::Unexpected { stage, .. } => *stage,
        }
    }

    /// 失败前已经创建的 Quiz ID（如果有）
    pub fn quiz_id(&self) -> Option<u64> {
        match self {
            CreateQuizError::QuestionAddition { quiz_id, .. } => Some(*quiz_id),
            _ => None,
        }
    }

    /// 远程返回的 HTTP 状态码（如果有）
    pub fn http_status(&self) -> Option<u16> {
        match self {
            CreateQuizError::QuizCreation { http_status, .. } => *http_status,
            CreateQuizError::QuestionAddition { http_status, .. } => Some(*http_status),
            _ => None,
        }
    }

    /// 创建校验失败错误
    pub fn validation(message: impl Into<String>) -> Self {
        CreateQuizError::Validation {
            message: message.into(),
        }
    }
}
