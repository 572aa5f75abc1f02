//! 批量段落处理器 - 编排层
//!
//! ## 职责
//!
//! 读取文本文件，按空行切分段落，为每个段落生成题目并汇总成报告。
//!
//! ## 核心功能
//!
//! 1. **段落切分**：按空行切分，去除首尾空白，丢弃空段落
//! 2. **长度过滤**：过短的段落记录日志后跳过（保留编号）
//! 3. **分批处理**：每批 `max_concurrent_paragraphs` 个，本批完成后再开始下一批
//! 4. **并发控制**：Semaphore 限制并发，生成过程放在 `spawn_blocking` 中
//! 5. **全局统计**：成功 / 失败 / 跳过数量
//!
//! 每个段落使用独立的生成器。配置了随机种子时，段落种子由基础种子和段落编号派生，
//! 报告因此与并发调度顺序无关。

use std::path::Path;
use std::sync::Arc;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::{AppResult, GeneratorError};
use crate::models::GenerationResult;
use crate::utils::logging;
use crate::utils::truncate_text;
use crate::workflow::QuestionGenerator;

/// 单个段落的处理结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParagraphReport {
    pub text: String,
    pub questions: GenerationResult,
}

/// 批处理报告
///
/// 序列化为 `{"Paragraph_1": {"text", "questions"}, ...}`，只包含成功的段落。
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// (段落编号, 结果)，按编号升序
    pub paragraphs: Vec<(String, ParagraphReport)>,
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl BatchReport {
    pub fn get(&self, id: &str) -> Option<&ParagraphReport> {
        self.paragraphs
            .iter()
            .find(|(paragraph_id, _)| paragraph_id == id)
            .map(|(_, report)| report)
    }
}

impl Serialize for BatchReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.paragraphs.len()))?;
        for (id, report) in &self.paragraphs {
            map.serialize_entry(id, report)?;
        }
        map.end()
    }
}

/// 段落编号（从 1 开始）
pub fn paragraph_id(index: usize) -> String {
    format!("Paragraph_{}", index)
}

/// 按空行切分段落
pub fn split_paragraphs(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// 段落种子：基础种子与段落编号派生
fn paragraph_seed(base: Option<u64>, index: usize) -> Option<u64> {
    base.map(|seed| seed.wrapping_add(index as u64))
}

/// 批量段落处理器
pub struct BatchProcessor {
    config: Config,
}

impl BatchProcessor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 处理文本文件
    pub async fn process_text_file(&self, path: &Path) -> AppResult<BatchReport> {
        info!("\n📁 正在读取文件: {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GeneratorError::file_read_failed(path.display().to_string(), e))?;

        self.process_paragraphs(split_paragraphs(&content)).await
    }

    /// 处理已切分好的段落
    pub async fn process_paragraphs(&self, paragraphs: Vec<String>) -> AppResult<BatchReport> {
        let max_concurrent = self.config.max_concurrent_paragraphs.max(1);
        let mut report = BatchReport {
            total: paragraphs.len(),
            ..Default::default()
        };

        // (编号, 文本)，过短的段落不进入处理队列
        let mut queue = Vec::new();
        for (idx, paragraph) in paragraphs.into_iter().enumerate() {
            let index = idx + 1;
            if paragraph.chars().count() < self.config.min_paragraph_chars {
                warn!(
                    "[段落 {}] ⚠️ 段落过短，跳过: {}",
                    index,
                    truncate_text(&paragraph, 30)
                );
                report.skipped += 1;
                continue;
            }
            queue.push((index, paragraph));
        }

        if queue.is_empty() {
            warn!("⚠️ 没有可处理的段落");
            return Ok(report);
        }

        logging::log_paragraphs_loaded(queue.len(), report.skipped, max_concurrent);

        let semaphore = Arc::new(Semaphore::new(max_concurrent));
        let total_batches = queue.len().div_ceil(max_concurrent);

        for (batch_idx, batch) in queue.chunks(max_concurrent).enumerate() {
            let batch_num = batch_idx + 1;
            let (first, last) = (batch[0].0, batch[batch.len() - 1].0);
            logging::log_batch_start(batch_num, total_batches, first, last, report.total);

            let batch_result = self
                .process_batch(batch, semaphore.clone(), &mut report)
                .await?;
            logging::log_batch_complete(batch_num, batch_result, batch.len());
        }

        Ok(report)
    }

    /// 处理单个批次，返回本批成功数量
    async fn process_batch(
        &self,
        batch: &[(usize, String)],
        semaphore: Arc<Semaphore>,
        report: &mut BatchReport,
    ) -> AppResult<usize> {
        let mut handles = Vec::new();

        for (index, paragraph) in batch {
            let index = *index;
            let permit = match semaphore.clone().acquire_owned().await {
                Ok(permit) => permit,
                Err(e) => {
                    error!("[段落 {}] 获取并发许可失败: {}", index, e);
                    report.failed += 1;
                    continue;
                }
            };

            let mut config = self.config.clone();
            config.random_seed = paragraph_seed(self.config.random_seed, index);
            let text = paragraph.clone();

            let handle = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                let mut generator = QuestionGenerator::new(config)?;
                let questions = generator.generate_questions(&text)?;
                Ok::<_, GeneratorError>(ParagraphReport { text, questions })
            });
            handles.push((index, handle));
        }

        let mut success = 0;
        for (index, handle) in handles {
            match handle.await {
                Ok(Ok(paragraph_report)) => {
                    report.paragraphs.push((paragraph_id(index), paragraph_report));
                    success += 1;
                }
                Ok(Err(e)) => {
                    error!("[段落 {}] ❌ 生成失败: {}", index, e);
                    report.failed += 1;
                }
                Err(e) => {
                    error!("[段落 {}] 任务执行失败: {}", index, e);
                    report.failed += 1;
                }
            }
        }

        report.success += success;
        Ok(success)
    }
}
