//! 理解题构建器：只按句子数量决定输出

use rand::RngCore;

use super::templates::{COMPREHENSION_BASIC, COMPREHENSION_CONNECTIONS};
use super::QuestionBuilder;
use crate::config::Config;
use crate::models::{QuestionCategory, QuestionKind, QuestionRecord};
use crate::workflow::GenerationCtx;

pub struct ComprehensionBuilder {
    marks: u32,
}

impl ComprehensionBuilder {
    pub fn new(marks: u32) -> Self {
        Self { marks }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.marks.for_category(QuestionCategory::Comprehension))
    }
}

impl QuestionBuilder for ComprehensionBuilder {
    fn category(&self) -> QuestionCategory {
        QuestionCategory::Comprehension
    }

    fn build(&self, ctx: &GenerationCtx<'_>, _rng: &mut dyn RngCore) -> Vec<QuestionRecord> {
        let sentence_count = ctx.sentence_count();
        let mut prompts: Vec<&str> = Vec::new();

        if sentence_count >= 2 {
            prompts.extend(COMPREHENSION_BASIC);
        }
        if sentence_count >= 3 {
            prompts.push(COMPREHENSION_CONNECTIONS);
        }

        prompts
            .into_iter()
            .map(|prompt| QuestionRecord::new(QuestionKind::Comprehension, prompt, self.marks))
            .collect()
    }
}
