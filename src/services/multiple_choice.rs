//! 选择题构建器
//!
//! 正确项为第一句包含短语的句子，干扰项取自段落中的其他句子，
//! 不足时补一个通用干扰项。选项打乱后记录正确项的新位置。

use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::debug;

use super::templates::{fill_template, GENERIC_DISTRACTOR_TEMPLATE, MULTIPLE_CHOICE_TEMPLATE};
use super::QuestionBuilder;
use crate::config::Config;
use crate::models::{KeyPhrase, QuestionCategory, QuestionKind, QuestionRecord};
use crate::utils::truncate_text;
use crate::workflow::GenerationCtx;

/// 干扰项上限
pub const MAX_DISTRACTORS: usize = 3;

/// 作为干扰项的句子最少字符数（不含）
pub const MIN_DISTRACTOR_CHARS: usize = 20;

/// 选项最大字符数，超出部分截断并追加 "..."
pub const OPTION_MAX_CHARS: usize = 100;

pub struct MultipleChoiceBuilder {
    marks: u32,
    limit: usize,
}

impl MultipleChoiceBuilder {
    pub fn new(marks: u32, limit: usize) -> Self {
        Self { marks, limit }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.marks.for_category(QuestionCategory::MultipleChoice),
            config.limits.multiple_choice,
        )
    }

    fn build_one(
        &self,
        ctx: &GenerationCtx<'_>,
        phrase: &KeyPhrase,
        rng: &mut dyn RngCore,
    ) -> Option<QuestionRecord> {
        let needle = phrase.to_lowercase();
        let correct = ctx
            .sentences
            .iter()
            .find(|s| s.to_lowercase().contains(&needle))?;

        let distractors = collect_distractors(&ctx.sentences, correct, phrase);

        // (是否正确, 选项文本)，打乱后再定位正确项
        let mut options: Vec<(bool, String)> = std::iter::once((true, correct.as_str()))
            .chain(distractors.iter().map(|d| (false, d.as_str())))
            .map(|(is_correct, text)| (is_correct, truncate_text(text, OPTION_MAX_CHARS)))
            .collect();
        options.shuffle(rng);

        let correct_answer_index = options.iter().position(|(is_correct, _)| *is_correct)?;
        let question = fill_template(MULTIPLE_CHOICE_TEMPLATE, phrase)?;

        Some(QuestionRecord::new(
            QuestionKind::MultipleChoice {
                options: options.into_iter().map(|(_, text)| text).collect(),
                correct_answer_index,
            },
            question,
            self.marks,
        ))
    }
}

/// 从其余句子中挑选干扰项，必要时补充通用干扰项
fn collect_distractors(sentences: &[String], correct: &str, phrase: &str) -> Vec<String> {
    let mut distractors: Vec<String> = Vec::new();
    for sentence in sentences {
        if distractors.len() >= MAX_DISTRACTORS {
            break;
        }
        if sentence != correct
            && sentence.chars().count() > MIN_DISTRACTOR_CHARS
            && !distractors.contains(sentence)
        {
            distractors.push(sentence.clone());
        }
    }

    let has_more_sentences = sentences.len() > distractors.len() + 1;
    if distractors.len() < MAX_DISTRACTORS && (has_more_sentences || distractors.is_empty()) {
        if let Some(generic) = fill_template(GENERIC_DISTRACTOR_TEMPLATE, phrase) {
            if !distractors.contains(&generic) {
                distractors.push(generic);
            }
        }
    }

    distractors
}

impl QuestionBuilder for MultipleChoiceBuilder {
    fn category(&self) -> QuestionCategory {
        QuestionCategory::MultipleChoice
    }

    fn build(&self, ctx: &GenerationCtx<'_>, rng: &mut dyn RngCore) -> Vec<QuestionRecord> {
        let mut questions = Vec::new();

        for phrase in ctx.key_phrases.iter().take(self.limit) {
            match self.build_one(ctx, phrase, rng) {
                Some(question) => questions.push(question),
                None => debug!("选择题: 没有句子包含短语 {}，跳过", phrase),
            }
        }

        questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{ctx, rng};

    const CURIE_SENTENCES: [&str; 2] = [
        "Marie Curie discovered radium in 1898.",
        "Her discovery changed science forever.",
    ];

    #[test]
    fn test_correct_option_tracks_shuffle() {
        let ctx = ctx("", &CURIE_SENTENCES, &["radium"]);

        for seed in 0..20 {
            let questions = MultipleChoiceBuilder::new(3, 3).build(&ctx, &mut rng(seed));
            assert_eq!(questions.len(), 1);

            let question = &questions[0];
            assert_eq!(question.question, "Which of the following best describes radium?");
            assert_eq!(question.answer(), Some(CURIE_SENTENCES[0]));

            let options = question.options().unwrap();
            assert!(options.len() >= 2 && options.len() <= 4);
            assert!(options.contains(&CURIE_SENTENCES[1].to_string()));
        }
    }

    #[test]
    fn test_single_sentence_gets_generic_distractor() {
        let ctx = ctx("", &["Radium glows faintly in the dark."], &["radium"]);
        let questions = MultipleChoiceBuilder::new(3, 3).build(&ctx, &mut rng(4));

        let options = questions[0].options().unwrap();
        assert_eq!(options.len(), 2);
        assert!(options.contains(&"This is not related to radium.".to_string()));
    }

    #[test]
    fn test_short_sentences_are_not_distractors() {
        let ctx = ctx("", &["Radium glows faintly in the dark.", "Too short."], &["radium"]);
        let questions = MultipleChoiceBuilder::new(3, 3).build(&ctx, &mut rng(4));

        let options = questions[0].options().unwrap();
        assert!(!options.contains(&"Too short.".to_string()));
    }

    #[test]
    fn test_distractors_capped_and_unique() {
        let sentences = [
            "Radium was isolated from pitchblende ore.",
            "The laboratory was cold and poorly equipped.",
            "The laboratory was cold and poorly equipped.",
            "Pierre Curie worked alongside her for years.",
            "Their daughter later won a Nobel Prize too.",
            "Polonium was named after her homeland.",
        ];
        let ctx = ctx("", &sentences, &["radium"]);
        let questions = MultipleChoiceBuilder::new(3, 3).build(&ctx, &mut rng(11));

        let options = questions[0].options().unwrap();
        assert_eq!(options.len(), 4);
        let unique: std::collections::HashSet<&String> = options.iter().collect();
        assert_eq!(unique.len(), 4);
        assert!(!options.iter().any(|o| o.starts_with("This is not related")));
    }

    #[test]
    fn test_long_options_are_truncated() {
        let long = format!("Radium {}", "glows ".repeat(30));
        let ctx = ctx("", &[long.as_str()], &["radium"]);
        let questions = MultipleChoiceBuilder::new(3, 3).build(&ctx, &mut rng(2));

        let answer = questions[0].answer().unwrap();
        assert_eq!(answer.chars().count(), OPTION_MAX_CHARS + 3);
        assert!(answer.ends_with("..."));
    }

    #[test]
    fn test_phrase_without_sentence_is_skipped() {
        let ctx = ctx("", &CURIE_SENTENCES, &["polonium", "radium"]);
        let questions = MultipleChoiceBuilder::new(3, 3).build(&ctx, &mut rng(0));
        assert_eq!(questions.len(), 1);
        assert!(questions[0].question.contains("radium"));
    }
}
