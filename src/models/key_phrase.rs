use serde::Serialize;

use crate::nlp::stopwords::is_stop_word;

/// 关键短语最大词数
pub const MAX_PHRASE_WORDS: usize = 4;

/// 关键短语最小字符数（不含）
pub const MIN_PHRASE_CHARS: usize = 2;

/// 关键短语
///
/// 1–4 个词，字符数大于 2，且整体不是停用词。只能通过 [`KeyPhrase::new`] 构造。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct KeyPhrase(String);

impl KeyPhrase {
    /// 校验并构造关键短语，不满足约束时返回 None
    pub fn new(phrase: impl Into<String>) -> Option<Self> {
        let phrase = phrase.into();
        if Self::is_valid(&phrase) {
            Some(Self(phrase))
        } else {
            None
        }
    }

    pub fn is_valid(phrase: &str) -> bool {
        let words = phrase.split_whitespace().count();
        words >= 1
            && words <= MAX_PHRASE_WORDS
            && phrase.chars().count() > MIN_PHRASE_CHARS
            && !is_stop_word(phrase)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }
}

impl std::ops::Deref for KeyPhrase {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for KeyPhrase {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for KeyPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
