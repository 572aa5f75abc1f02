//! 事实题构建器
//!
//! 每个短语随机选一个疑问类别（what / who / when / where），再随机选该类别下的模板。

use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::debug;

use super::templates::{fill_template, FactualKind};
use super::QuestionBuilder;
use crate::config::Config;
use crate::models::{QuestionCategory, QuestionKind, QuestionRecord};
use crate::workflow::GenerationCtx;

pub struct FactualBuilder {
    marks: u32,
    limit: usize,
}

impl FactualBuilder {
    pub fn new(marks: u32, limit: usize) -> Self {
        Self { marks, limit }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.marks.for_category(QuestionCategory::Factual),
            config.limits.factual,
        )
    }
}

impl QuestionBuilder for FactualBuilder {
    fn category(&self) -> QuestionCategory {
        QuestionCategory::Factual
    }

    fn build(&self, ctx: &GenerationCtx<'_>, rng: &mut dyn RngCore) -> Vec<QuestionRecord> {
        let mut questions = Vec::new();

        for phrase in ctx.key_phrases.iter().take(self.limit) {
            let Some(kind) = FactualKind::ALL.choose(rng) else {
                continue;
            };
            let Some(template) = kind.templates().choose(rng) else {
                continue;
            };

            match fill_template(template, phrase) {
                Some(question) => {
                    questions.push(QuestionRecord::new(QuestionKind::Factual, question, self.marks))
                }
                None => debug!("事实题模板填充失败，跳过短语: {}", phrase),
            }
        }

        questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{ctx, rng};

    #[test]
    fn test_one_question_per_phrase_up_to_limit() {
        let phrases = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"];
        let ctx = ctx("", &[], &phrases);
        let questions = FactualBuilder::new(1, 5).build(&ctx, &mut rng(1));

        assert_eq!(questions.len(), 5);
        for (question, phrase) in questions.iter().zip(phrases) {
            assert!(question.question.contains(phrase));
            assert_eq!(question.marks, 1);
            assert_eq!(question.category(), QuestionCategory::Factual);
        }
    }

    #[test]
    fn test_questions_come_from_templates() {
        let ctx = ctx("", &[], &["radium"]);
        let all: Vec<String> = FactualKind::ALL
            .iter()
            .flat_map(|k| k.templates().iter())
            .map(|t| t.replace("{}", "radium"))
            .collect();

        for seed in 0..20 {
            let questions = FactualBuilder::new(1, 5).build(&ctx, &mut rng(seed));
            assert!(all.contains(&questions[0].question));
        }
    }
}
