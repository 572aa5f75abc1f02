//! 终端展示：把生成结果渲染成带编号的文本

use std::fmt;

use crate::models::{GenerationResult, QuestionKind, KEY_PHRASES_KEY};

/// 选项字母：0 → a, 1 → b ...
pub fn option_letter(index: usize) -> char {
    (b'a' + (index % 26) as u8) as char
}

/// 生成结果的终端视图
pub struct ResultView<'a>(pub &'a GenerationResult);

impl fmt::Display for ResultView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (category, records) in self.0.iter() {
            let name = category.name();
            writeln!(f, "\n📋 {}:", name)?;
            writeln!(f, "{}", "-".repeat(name.chars().count() + 5))?;

            for (i, record) in records.iter().enumerate() {
                writeln!(f, "  {}. {} [{} marks]", i + 1, record.question, record.marks)?;
                match &record.kind {
                    QuestionKind::MultipleChoice {
                        options,
                        correct_answer_index,
                    } => {
                        for (j, option) in options.iter().enumerate() {
                            writeln!(f, "     {}) {}", option_letter(j), option)?;
                        }
                        writeln!(
                            f,
                            "     Correct Answer: {})",
                            option_letter(*correct_answer_index)
                        )?;
                    }
                    QuestionKind::FillBlank { answer } => {
                        writeln!(f, "     Answer: {}", answer)?;
                    }
                    _ => {}
                }
            }
        }

        writeln!(f, "\n📋 {}:", KEY_PHRASES_KEY)?;
        writeln!(f, "{}", "-".repeat(KEY_PHRASES_KEY.len() + 5))?;
        for (i, phrase) in self.0.key_phrases().iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, phrase)?;
        }
        Ok(())
    }
}
