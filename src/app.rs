use anyhow::Result;
use tracing::{error, info, warn};

use crate::clients::CanvasClient;
use crate::config::Config;
use crate::logger;
use crate::models::loaders::{load_all_submissions, Submission};
use crate::workflow::QuizFlow;

/// 应用主结构
pub struct App {
    config: Config,
    flow: QuizFlow<CanvasClient>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        logger::log_startup(&config);

        let client = CanvasClient::new(&config)?;

        Ok(Self {
            flow: QuizFlow::new(client),
            config,
        })
    }

    /// 运行应用主逻辑
    ///
    /// 扫描提交目录，按顺序逐个创建 Quiz，最后输出统计。
    /// 提交之间互不影响，一个失败不会中断后续提交
    pub async fn run(&self) -> Result<()> {
        info!("\n📁 正在扫描待处理的提交...");
        let submissions = load_all_submissions(&self.config.submissions_folder).await?;

        if submissions.is_empty() {
            warn!("⚠️ 没有找到待处理的TOML文件，程序结束");
            return Ok(());
        }

        let total = submissions.len();
        logger::log_submissions_loaded(total);

        let mut stats = ProcessingStats {
            total,
            ..Default::default()
        };

        for (index, submission) in submissions.iter().enumerate() {
            let submission_index = index + 1;
            log_submission_start(submission_index, total, submission);

            // 详细日志（如果启用）
            if self.config.verbose_logging {
                log_question_names(submission_index, submission);
            }

            match self.flow.run(&submission.request).await {
                Ok(created) => {
                    info!(
                        "[提交 {}] ✅ Quiz {} 创建完成, 共 {} 道题目",
                        submission_index, created.quiz_id, created.questions_added
                    );
                    stats.success += 1;
                }
                Err(e) => {
                    error!("[提交 {}] ❌ 创建失败: {}", submission_index, e);
                    // 部分失败：Quiz 已经存在于远端，提示调用方手动检查
                    if let Some(quiz_id) = e.quiz_id() {
                        warn!(
                            "[提交 {}] ⚠️ Quiz {} 已创建但未填满题目，请手动检查",
                            submission_index, quiz_id
                        );
                    }
                    stats.failed += 1;
                }
            }
        }

        logger::print_final_stats(stats.success, stats.failed, stats.total);

        Ok(())
    }
}

/// 处理统计
#[derive(Debug, Default)]
struct ProcessingStats {
    success: usize,
    failed: usize,
    total: usize,
}

fn log_question_names(submission_index: usize, submission: &Submission) {
    for (i, question) in submission.request.questions.iter().enumerate() {
        info!(
            "[提交 {}]   {}. {}",
            submission_index,
            i + 1,
            question.question_name().unwrap_or("(未命名)")
        );
    }
}

fn log_submission_start(submission_index: usize, total: usize, submission: &Submission) {
    info!("\n{}", "─".repeat(60));
    info!(
        "[提交 {}] 开始处理 ({}/{})",
        submission_index, submission_index, total
    );
    info!("[提交 {}] 标题: {}", submission_index, submission.request.title);
    info!("[提交 {}] 文件: {}", submission_index, submission.file_path);
    info!(
        "[提交 {}] 题目总数: {}",
        submission_index,
        submission.request.questions.len()
    );
}
