//! 分析题构建器：从固定题库中无放回抽取，与文本内容无关

use rand::seq::SliceRandom;
use rand::RngCore;

use super::templates::ANALYTICAL_PROMPTS;
use super::QuestionBuilder;
use crate::config::Config;
use crate::models::{QuestionCategory, QuestionKind, QuestionRecord};
use crate::workflow::GenerationCtx;

pub struct AnalyticalBuilder {
    marks: u32,
    count: usize,
}

impl AnalyticalBuilder {
    pub fn new(marks: u32, count: usize) -> Self {
        Self { marks, count }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.marks.for_category(QuestionCategory::Analytical),
            config.limits.analytical,
        )
    }
}

impl QuestionBuilder for AnalyticalBuilder {
    fn category(&self) -> QuestionCategory {
        QuestionCategory::Analytical
    }

    fn build(&self, _ctx: &GenerationCtx<'_>, rng: &mut dyn RngCore) -> Vec<QuestionRecord> {
        let amount = self.count.min(ANALYTICAL_PROMPTS.len());
        ANALYTICAL_PROMPTS
            .choose_multiple(rng, amount)
            .map(|prompt| QuestionRecord::new(QuestionKind::Analytical, *prompt, self.marks))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{ctx, rng};
    use std::collections::HashSet;

    #[test]
    fn test_samples_four_distinct_prompts() {
        let ctx = ctx("", &[], &[]);
        for seed in 0..10 {
            let questions = AnalyticalBuilder::new(2, 4).build(&ctx, &mut rng(seed));
            assert_eq!(questions.len(), 4);

            let unique: HashSet<&str> = questions.iter().map(|q| q.question.as_str()).collect();
            assert_eq!(unique.len(), 4);
            assert!(questions
                .iter()
                .all(|q| q.marks == 2 && ANALYTICAL_PROMPTS.contains(&q.question.as_str())));
        }
    }

    #[test]
    fn test_count_capped_by_pool_size() {
        let questions = AnalyticalBuilder::new(2, 20).build(&ctx("", &[], &[]), &mut rng(3));
        assert_eq!(questions.len(), ANALYTICAL_PROMPTS.len());
    }
}
