pub mod loaders;
pub mod quiz_request;

pub use loaders::{from_form, from_json, load_all_submissions, load_toml_submission, Submission};
pub use quiz_request::{QuestionSpec, QuizCreated, QuizRequest};

/// 单次调用的最终结果：要么整体成功，要么带阶段标签的失败
pub type QuizCreationResult = Result<QuizCreated, crate::error::CreateQuizError>;
