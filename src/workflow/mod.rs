//! 流程层
//!
//! ## 职责
//!
//! 本层定义"一次 Quiz 创建"的完整两阶段流程，是整个系统的核心。
//!
//! ## 流程顺序
//!
//! ```text
//! 校验输入（适配器）
//!     ↓
//! 阶段 1: 创建 Quiz（一次远程调用）
//!     ↓
//! 阶段 2: 按输入顺序逐个添加题目（每题一次远程调用，严格串行）
//!     ↓
//! 汇总结果（成功 / 带阶段标签的失败）
//! ```
//!
//! ## 设计原则
//!
//! 1. **严格串行**：失败报告依赖稳定的题目索引，绝不并发、绝不乱序
//! 2. **首败即停**：远端没有事务保证，无法回滚，继续只会扩大不确定性
//! 3. **不吞上下文**：题目阶段失败时必须带上已创建的 Quiz ID 和失败索引
//! 4. **不重试**：任何远程调用失败都直接上报，由调用方决定下一步

pub mod quiz_flow;

pub use quiz_flow::QuizFlow;
