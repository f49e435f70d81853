/// 请求与结果模型
///
/// 每次调用都从不可信输入构造一个全新的 QuizRequest，调用结束即丢弃，
/// 不在调用之间保留任何状态
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 一次 Quiz 创建请求
#[derive(Debug, Clone)]
pub struct QuizRequest {
    /// Canvas API 的 Bearer 凭证（不透明字符串，不做格式校验）
    pub credential: String,
    /// 目标课程 ID
    pub course_id: String,
    /// Quiz 标题（同时用作描述）
    pub title: String,
    /// 题目列表，按此顺序提交
    pub questions: Vec<QuestionSpec>,
}

/// 单个题目定义
///
/// 开放的键值结构：除了展示用的 question_name 字段外不做任何本地校验，
/// 所有字段原样转发给 Canvas API。题型的多样性由远端自己校验
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSpec(pub Map<String, Value>);

impl QuestionSpec {
    /// 题目展示名（仅用于日志）
    pub fn question_name(&self) -> Option<&str> {
        self.0.get("question_name").and_then(|v| v.as_str())
    }
}

/// 创建成功的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizCreated {
    /// 远端分配的 Quiz ID
    pub quiz_id: u64,
    /// 成功添加的题目数量
    pub questions_added: usize,
}
