//! 题目生成流程 - 流程层
//!
//! 核心职责：定义"一段文本"的完整生成流程
//!
//! 流程顺序：
//! 1. 长度校验（去除首尾空白后）
//! 2. 分句、抽取关键短语（各一次）
//! 3. 六个构建器依次生成，组装结果
//!
//! 只有预处理失败会向上传播，构建器内部跳过无法处理的短语。

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppResult, GeneratorError};
use crate::models::{GenerationResponse, GenerationResult};
use crate::nlp::{Preprocessor, RuleBasedPreprocessor};
use crate::services::{default_builders, PhraseExtractor, QuestionBuilder};
use crate::utils::truncate_text;
use crate::workflow::generation_ctx::GenerationCtx;

/// 题目生成器
///
/// - 持有预处理服务、六个构建器和自己的随机数源
/// - 每次调用互不影响，结果只依赖输入和随机数源的状态
/// - 并发场景下每个任务各建一个生成器
pub struct QuestionGenerator<P: Preprocessor = RuleBasedPreprocessor, R: Rng = StdRng> {
    config: Config,
    preprocessor: P,
    extractor: PhraseExtractor,
    builders: Vec<Box<dyn QuestionBuilder>>,
    rng: R,
}

impl QuestionGenerator<RuleBasedPreprocessor, StdRng> {
    /// 使用内置预处理器创建生成器
    ///
    /// 配置了 `random_seed` 时输出可复现，否则从系统熵源取种子。
    pub fn new(config: Config) -> AppResult<Self> {
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self::with_parts(config, RuleBasedPreprocessor::new()?, rng))
    }

    /// 使用固定种子创建生成器（忽略配置中的种子）
    pub fn with_seed(config: Config, seed: u64) -> AppResult<Self> {
        Ok(Self::with_parts(
            config,
            RuleBasedPreprocessor::new()?,
            StdRng::seed_from_u64(seed),
        ))
    }
}

impl<P: Preprocessor, R: Rng> QuestionGenerator<P, R> {
    /// 组装生成器：自定义预处理服务与随机数源
    pub fn with_parts(config: Config, preprocessor: P, rng: R) -> Self {
        Self {
            extractor: PhraseExtractor::new(config.limits.key_phrases),
            builders: default_builders(&config),
            config,
            preprocessor,
            rng,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 为一段文本生成全部题型
    pub fn generate_questions(&mut self, paragraph: &str) -> AppResult<GenerationResult> {
        let min_chars = self.config.min_paragraph_chars;
        if paragraph.trim().chars().count() < min_chars {
            debug!("段落过短: {}", truncate_text(paragraph.trim(), 30));
            return Err(GeneratorError::input_too_short(min_chars));
        }

        let sentences = self.preprocessor.segment_sentences(paragraph)?;
        let key_phrases =
            self.extractor
                .extract_from_sentences(&self.preprocessor, paragraph, &sentences)?;

        let ctx = GenerationCtx::new(paragraph, sentences, key_phrases);
        debug!("生成上下文 {}", ctx);

        let mut result = GenerationResult::new(ctx.key_phrases.clone());
        for builder in &self.builders {
            let records = builder.build(&ctx, &mut self.rng);
            debug!("{}: {} 道", builder.category(), records.len());
            result.insert(builder.category(), records);
        }

        info!(
            "✓ 生成完成: {} 道题, 共 {} 分, {} 个关键短语",
            result.total_questions(),
            result.total_marks(),
            result.key_phrases().len()
        );

        Ok(result)
    }

    /// 对外响应：长度不足转换为 `{"error": [message]}`，其他错误照常返回
    pub fn generate_response(&mut self, paragraph: &str) -> AppResult<GenerationResponse> {
        match self.generate_questions(paragraph) {
            Ok(result) => Ok(GenerationResponse::Questions(result)),
            Err(e @ GeneratorError::InputTooShort { .. }) => {
                Ok(GenerationResponse::error(e.to_string()))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionCategory;

    const CURIE: &str =
        "Marie Curie discovered radium in 1898. Her discovery changed science forever.";

    fn generator(seed: u64) -> QuestionGenerator {
        QuestionGenerator::with_seed(Config::default(), seed).unwrap()
    }

    #[test]
    fn test_short_paragraph_rejected() {
        let err = generator(1).generate_questions("  Too short.  ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Paragraph is too short. Please provide at least 50 characters."
        );
    }

    #[test]
    fn test_length_check_uses_trimmed_text() {
        let padded = format!("   {}   ", "a".repeat(49));
        assert!(generator(1).generate_questions(&padded).is_err());
    }

    #[test]
    fn test_all_categories_present() {
        let result = generator(7).generate_questions(CURIE).unwrap();
        assert_eq!(result.iter().count(), 6);
        assert_eq!(result.questions(QuestionCategory::Analytical).len(), 4);
        assert_eq!(result.questions(QuestionCategory::Comprehension).len(), 3);
        assert_eq!(result.questions(QuestionCategory::Factual).len(), 4);
        assert_eq!(result.questions(QuestionCategory::DeepFacility).len(), 2);
    }

    #[test]
    fn test_same_seed_same_output() {
        let first = generator(42).generate_questions(CURIE).unwrap();
        let second = generator(42).generate_questions(CURIE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_response_wraps_validation_error() {
        let response = generator(1).generate_response("short").unwrap();
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "error": ["Paragraph is too short. Please provide at least 50 characters."]
            })
        );
    }
}
