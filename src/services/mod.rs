//! 业务能力层（Services）
//!
//! - `PhraseExtractor` - 关键短语抽取能力
//! - 六个题型构建器 - 各自只负责"生成一种题型"，互不依赖、无状态
//!
//! 构建器不会返回错误：某个短语找不到匹配句子或模板填充失败时，
//! 只跳过该短语，不影响其他题目。

pub mod analytical;
pub mod comprehension;
pub mod deep_facility;
pub mod factual;
pub mod fill_blank;
pub mod multiple_choice;
pub mod phrase_extractor;
pub mod templates;

use rand::RngCore;

use crate::config::Config;
use crate::models::{QuestionCategory, QuestionRecord};
use crate::workflow::GenerationCtx;

pub use analytical::AnalyticalBuilder;
pub use comprehension::ComprehensionBuilder;
pub use deep_facility::DeepFacilityBuilder;
pub use factual::FactualBuilder;
pub use fill_blank::{FillBlankBuilder, BLANK_MARKER};
pub use multiple_choice::MultipleChoiceBuilder;
pub use phrase_extractor::PhraseExtractor;

/// 题型构建器
pub trait QuestionBuilder: Send + Sync {
    /// 构建器负责的题型
    fn category(&self) -> QuestionCategory;

    /// 基于上下文生成本题型的题目
    fn build(&self, ctx: &GenerationCtx<'_>, rng: &mut dyn RngCore) -> Vec<QuestionRecord>;
}

/// 按配置创建全部六个构建器（顺序与输出顺序一致）
pub fn default_builders(config: &Config) -> Vec<Box<dyn QuestionBuilder>> {
    vec![
        Box::new(FactualBuilder::from_config(config)),
        Box::new(AnalyticalBuilder::from_config(config)),
        Box::new(ComprehensionBuilder::from_config(config)),
        Box::new(MultipleChoiceBuilder::from_config(config)),
        Box::new(FillBlankBuilder::from_config(config)),
        Box::new(DeepFacilityBuilder::from_config(config)),
    ]
}
