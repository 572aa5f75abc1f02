//! 深度论述题构建器（单题分值最高）

use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::debug;

use super::templates::{fill_template, DEEP_FACILITY_TEMPLATES};
use super::QuestionBuilder;
use crate::config::Config;
use crate::models::{QuestionCategory, QuestionKind, QuestionRecord};
use crate::workflow::GenerationCtx;

pub struct DeepFacilityBuilder {
    marks: u32,
    limit: usize,
}

impl DeepFacilityBuilder {
    pub fn new(marks: u32, limit: usize) -> Self {
        Self { marks, limit }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.marks.for_category(QuestionCategory::DeepFacility),
            config.limits.deep_facility,
        )
    }
}

impl QuestionBuilder for DeepFacilityBuilder {
    fn category(&self) -> QuestionCategory {
        QuestionCategory::DeepFacility
    }

    fn build(&self, ctx: &GenerationCtx<'_>, rng: &mut dyn RngCore) -> Vec<QuestionRecord> {
        let mut questions = Vec::new();

        for phrase in ctx.key_phrases.iter().take(self.limit) {
            let Some(question) = DEEP_FACILITY_TEMPLATES
                .choose(rng)
                .and_then(|template| fill_template(template, phrase))
            else {
                debug!("深度题模板填充失败，跳过短语: {}", phrase);
                continue;
            };
            questions.push(QuestionRecord::new(
                QuestionKind::DeepFacility,
                question,
                self.marks,
            ));
        }

        questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{ctx, rng};

    #[test]
    fn test_uses_top_two_phrases() {
        let ctx = ctx("", &[], &["radium", "polonium", "uranium"]);
        let questions = DeepFacilityBuilder::new(10, 2).build(&ctx, &mut rng(9));

        assert_eq!(questions.len(), 2);
        assert!(questions[0].question.contains("radium"));
        assert!(questions[1].question.contains("polonium"));
        assert!(questions.iter().all(|q| q.marks == 10));
    }

    #[test]
    fn test_no_phrases_no_questions() {
        let questions = DeepFacilityBuilder::new(10, 2).build(&ctx("", &[], &[]), &mut rng(9));
        assert!(questions.is_empty());
    }
}
