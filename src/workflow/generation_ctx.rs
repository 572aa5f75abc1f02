//! 生成上下文
//!
//! 封装"这一段文本切出了哪些句子、抽出了哪些关键短语"，由编排流程构造一次，
//! 再交给各题型构建器共享只读使用。

use std::fmt::Display;

use crate::models::KeyPhrase;

/// 题目生成上下文
#[derive(Debug, Clone)]
pub struct GenerationCtx<'a> {
    /// 原始段落
    pub paragraph: &'a str,

    /// 分句结果（保持原文顺序）
    pub sentences: Vec<String>,

    /// 关键短语（按排名）
    pub key_phrases: Vec<KeyPhrase>,
}

impl<'a> GenerationCtx<'a> {
    /// 创建新的生成上下文
    pub fn new(paragraph: &'a str, sentences: Vec<String>, key_phrases: Vec<KeyPhrase>) -> Self {
        Self {
            paragraph,
            sentences,
            key_phrases,
        }
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// 第一个包含该短语的句子（大小写不敏感）
    pub fn first_sentence_containing(&self, phrase: &str) -> Option<&str> {
        let needle = phrase.to_lowercase();
        self.sentences
            .iter()
            .find(|s| s.to_lowercase().contains(&needle))
            .map(String::as_str)
    }
}

impl Display for GenerationCtx<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[段落 {} 字符 | {} 句 | {} 个关键短语]",
            self.paragraph.chars().count(),
            self.sentences.len(),
            self.key_phrases.len()
        )
    }
}
