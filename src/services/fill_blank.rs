//! 填空题构建器

use rand::RngCore;
use regex::{NoExpand, RegexBuilder};
use tracing::{debug, warn};

use super::QuestionBuilder;
use crate::config::Config;
use crate::models::{QuestionCategory, QuestionKind, QuestionRecord};
use crate::workflow::GenerationCtx;

/// 挖空标记
pub const BLANK_MARKER: &str = "___________";

pub struct FillBlankBuilder {
    marks: u32,
    limit: usize,
}

impl FillBlankBuilder {
    pub fn new(marks: u32, limit: usize) -> Self {
        Self { marks, limit }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.marks.for_category(QuestionCategory::FillBlank),
            config.limits.fill_blank,
        )
    }
}

/// 将句子中第一处短语替换为挖空标记
///
/// 优先精确大小写匹配；找不到时退回大小写不敏感的正则匹配。
/// 正则构建失败或没有任何替换发生时返回 None。
pub fn blank_out(sentence: &str, phrase: &str) -> Option<String> {
    if sentence.contains(phrase) {
        return Some(sentence.replacen(phrase, BLANK_MARKER, 1));
    }

    let pattern = match RegexBuilder::new(&regex::escape(phrase))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(e) => {
            warn!("⚠️ 填空题正则构建失败，跳过短语 {}: {}", phrase, e);
            return None;
        }
    };

    let blanked = pattern.replacen(sentence, 1, NoExpand(BLANK_MARKER));
    if blanked == sentence {
        None
    } else {
        Some(blanked.into_owned())
    }
}

impl QuestionBuilder for FillBlankBuilder {
    fn category(&self) -> QuestionCategory {
        QuestionCategory::FillBlank
    }

    fn build(&self, ctx: &GenerationCtx<'_>, _rng: &mut dyn RngCore) -> Vec<QuestionRecord> {
        let mut questions = Vec::new();

        for phrase in ctx.key_phrases.iter().take(self.limit) {
            let Some(sentence) = ctx.first_sentence_containing(phrase) else {
                debug!("填空题: 没有句子包含短语 {}，跳过", phrase);
                continue;
            };
            let Some(question) = blank_out(sentence, phrase) else {
                continue;
            };

            questions.push(QuestionRecord::new(
                QuestionKind::FillBlank {
                    answer: phrase.to_string(),
                },
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
    fn test_blank_out_exact_case() {
        assert_eq!(
            blank_out("Marie Curie discovered radium in 1898.", "radium").as_deref(),
            Some("Marie Curie discovered ___________ in 1898.")
        );
    }

    #[test]
    fn test_blank_out_only_first_occurrence() {
        assert_eq!(
            blank_out("radium and radium", "radium").as_deref(),
            Some("___________ and radium")
        );
    }

    #[test]
    fn test_blank_out_falls_back_to_case_insensitive() {
        assert_eq!(
            blank_out("Radium glows. radium fades.", "RADIUM").as_deref(),
            Some("___________ glows. radium fades.")
        );
    }

    #[test]
    fn test_blank_out_escapes_regex_metacharacters() {
        assert_eq!(
            blank_out("The C++ (language) is fast.", "c++ (Language)").as_deref(),
            Some("The ___________ is fast.")
        );
        assert!(blank_out("Nothing to see.", "radium").is_none());
    }

    #[test]
    fn test_build_records_answer() {
        let ctx = ctx(
            "",
            &["Marie Curie discovered radium in 1898.", "Her discovery changed science forever."],
            &["Marie Curie", "radium", "discovery", "science"],
        );
        let questions = FillBlankBuilder::new(2, 3).build(&ctx, &mut rng(0));

        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].question, "___________ discovered radium in 1898.");
        assert_eq!(questions[0].answer(), Some("Marie Curie"));
        assert_eq!(questions[2].question, "Her ___________ changed science forever.");
        assert!(questions.iter().all(|q| q.question.contains(BLANK_MARKER) && q.marks == 2));
    }
}
