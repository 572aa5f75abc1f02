//! 基于规则的英文预处理实现
//!
//! - 分句：句末标点后接空白即切分，缩写、姓名缩写与小数不切分
//! - 分词：正则切出单词、所有格 `'s`、数字和单个标点
//! - 词性：静态词表 + 后缀规则，输出 Penn Treebank 标签
//! - 实体：连续的 NNP 组成实体，按上下文粗分 PERSON / ORGANIZATION / GPE

use regex::Regex;
use tracing::debug;

use super::lexicon::{
    ABBREVIATIONS, ADJECTIVES, ADJECTIVE_SUFFIXES, LOCATION_CUES, NOUN_EXCEPTIONS,
    ORGANIZATION_WORDS, WORD_TAGS,
};
use super::{ChunkNode, Preprocessor, TaggedToken};
use crate::error::PreprocessingError;

const TOKEN_PATTERN: &str =
    r"\p{L}[\p{L}\p{M}]*(?:-\p{L}[\p{L}\p{M}]*)*|['’]\p{L}+|\d+(?:[.,:]\d+)*%?|\S";

/// 规则预处理器
#[derive(Debug, Clone)]
pub struct RuleBasedPreprocessor {
    token_re: Regex,
}

impl RuleBasedPreprocessor {
    /// 创建预处理器（编译分词正则）
    pub fn new() -> Result<Self, PreprocessingError> {
        let token_re = Regex::new(TOKEN_PATTERN)?;
        Ok(Self { token_re })
    }
}

impl Preprocessor for RuleBasedPreprocessor {
    fn segment_sentences(&self, text: &str) -> Result<Vec<String>, PreprocessingError> {
        let sentences = split_sentences(text);
        debug!("分句完成: {} 句", sentences.len());
        Ok(sentences)
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>, PreprocessingError> {
        Ok(self
            .token_re
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect())
    }

    fn tag_parts_of_speech(
        &self,
        tokens: &[String],
    ) -> Result<Vec<TaggedToken>, PreprocessingError> {
        let mut tagged: Vec<TaggedToken> = Vec::with_capacity(tokens.len());
        for (index, token) in tokens.iter().enumerate() {
            let prev_tag = tagged.last().map(|t| t.tag.as_str());
            let next = tokens.get(index + 1).map(String::as_str);
            let tag = tag_word(token, prev_tag, next);
            tagged.push(TaggedToken::new(token.as_str(), tag));
        }
        Ok(tagged)
    }

    fn chunk_entities(&self, tagged: &[TaggedToken]) -> Result<Vec<ChunkNode>, PreprocessingError> {
        let mut nodes = Vec::new();
        let mut i = 0;
        while i < tagged.len() {
            if !is_proper_noun(&tagged[i]) {
                nodes.push(ChunkNode::Token(tagged[i].clone()));
                i += 1;
                continue;
            }

            let start = i;
            while i < tagged.len() && is_proper_noun(&tagged[i]) {
                i += 1;
            }
            let leaves = tagged[start..i].to_vec();
            let prev = start
                .checked_sub(1)
                .map(|p| tagged[p].token.to_lowercase());
            let label = entity_label(&leaves, prev.as_deref());
            nodes.push(ChunkNode::Entity {
                label: label.to_string(),
                leaves,
            });
        }
        Ok(nodes)
    }
}

// ========== 分句 ==========

fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];
        if !matches!(c, '.' | '!' | '?') {
            i += 1;
            continue;
        }

        // 连续终止符及其后的右引号 / 右括号归入本句
        let mut j = i + 1;
        while j < chars.len() && is_closing_mark(chars[j].1) {
            j += 1;
        }
        let end = chars.get(j).map_or(text.len(), |(p, _)| *p);

        let is_boundary = if j >= chars.len() {
            true
        } else {
            chars[j].1.is_whitespace()
                && starts_new_sentence(&chars[j..])
                && !(c == '.' && ends_with_abbreviation(&text[start..pos]))
        };

        if is_boundary {
            push_sentence(&mut sentences, &text[start..end]);
            start = end;
        }
        i = j;
    }

    push_sentence(&mut sentences, &text[start..]);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

fn is_closing_mark(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '"' | '\'' | ')' | '”' | '’')
}

/// 下一句的开头：任意字母 / 数字（不论大小写）或开引号 / 左括号
fn starts_new_sentence(rest: &[(usize, char)]) -> bool {
    match rest.iter().map(|(_, c)| *c).find(|c| !c.is_whitespace()) {
        None => true,
        Some(c) => c.is_alphanumeric() || matches!(c, '"' | '“' | '\'' | '‘' | '('),
    }
}

fn ends_with_abbreviation(before_period: &str) -> bool {
    let mut words = before_period
        .split_whitespace()
        .rev()
        .map(|w| w.trim_start_matches(|c: char| !c.is_alphanumeric()));
    let Some(word) = words.next() else {
        return false;
    };
    // 单个大写字母：位于句首或紧跟大写开头的词时视为姓名缩写（"J. K. Rowling"），
    // 跟在小写词后则是普通词（"vitamin C."）
    if word.chars().count() == 1 && word.chars().all(char::is_uppercase) {
        return words
            .next()
            .and_then(|prev| prev.chars().next())
            .map_or(true, char::is_uppercase);
    }
    ABBREVIATIONS.contains(word.to_lowercase().as_str())
}

// ========== 词性标注 ==========

fn tag_word(token: &str, prev_tag: Option<&str>, next: Option<&str>) -> &'static str {
    let Some(first) = token.chars().next() else {
        return "SYM";
    };

    if first == '\'' || first == '’' {
        let clitic = token[first.len_utf8()..].to_lowercase();
        return if clitic == "s" { "POS" } else { "VBP" };
    }
    if first.is_ascii_digit() {
        return "CD";
    }
    if !first.is_alphabetic() {
        return punctuation_tag(first);
    }

    let lower = token.to_lowercase();
    let sentence_start = matches!(prev_tag, None | Some(".") | Some("``"));

    if first.is_uppercase() {
        if !sentence_start {
            return if lower == "i" { "PRP" } else { "NNP" };
        }
        if let Some(tag) = WORD_TAGS.get(lower.as_str()).copied() {
            return tag;
        }
        let next_capitalized = next
            .and_then(|n| n.chars().next())
            .is_some_and(char::is_uppercase);
        let acronym = token.chars().count() > 1 && token.chars().all(|c| !c.is_lowercase());
        if next_capitalized || acronym {
            return "NNP";
        }
    }

    tag_common_word(&lower, prev_tag, next)
}

fn tag_common_word(lower: &str, prev_tag: Option<&str>, next: Option<&str>) -> &'static str {
    if let Some(tag) = WORD_TAGS.get(lower).copied() {
        return tag;
    }
    if ADJECTIVES.contains(lower) {
        return "JJ";
    }
    if NOUN_EXCEPTIONS.contains(lower) {
        return "NN";
    }

    let len = lower.chars().count();
    if lower.ends_with("ly") && len > 4 {
        return "RB";
    }
    if lower.ends_with("ing") && len > 5 {
        return if prev_tag.is_some_and(modifies_noun) {
            "NN"
        } else {
            "VBG"
        };
    }
    if lower.ends_with("ed") && len > 4 && !lower.ends_with("eed") {
        return if matches!(prev_tag, Some("VBZ" | "VBP" | "VBD")) {
            "VBN"
        } else {
            "VBD"
        };
    }
    if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return "JJ";
    }
    if lower.ends_with('s')
        && len > 3
        && !(lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is"))
    {
        // 单数名词后接宾语引导词时，多半是第三人称单数动词
        let verb_position = matches!(prev_tag, Some("NN" | "NNP" | "PRP"))
            && next.is_some_and(introduces_object);
        return if verb_position { "VBZ" } else { "NNS" };
    }
    "NN"
}

fn modifies_noun(tag: &str) -> bool {
    matches!(
        tag,
        "DT" | "JJ" | "JJR" | "JJS" | "NN" | "NNS" | "NNP" | "NNPS" | "PRP$" | "POS" | "CD"
    )
}

fn introduces_object(next: &str) -> bool {
    let lower = next.to_lowercase();
    lower != "that"
        && WORD_TAGS
            .get(lower.as_str())
            .is_some_and(|tag| matches!(*tag, "DT" | "TO" | "PRP$" | "IN"))
}

fn punctuation_tag(c: char) -> &'static str {
    match c {
        '.' | '!' | '?' => ".",
        ',' => ",",
        ';' | ':' | '-' | '–' | '—' => ":",
        '(' | '[' | '{' => "(",
        ')' | ']' | '}' => ")",
        '"' | '“' => "``",
        '”' => "''",
        '$' | '€' | '£' => "$",
        '#' => "#",
        _ => "SYM",
    }
}

// ========== 实体切分 ==========

fn is_proper_noun(token: &TaggedToken) -> bool {
    token.tag.starts_with("NNP")
}

fn entity_label(leaves: &[TaggedToken], prev_word: Option<&str>) -> &'static str {
    let has_org_word = leaves
        .iter()
        .any(|leaf| ORGANIZATION_WORDS.contains(leaf.token.to_lowercase().as_str()));
    if has_org_word {
        return "ORGANIZATION";
    }
    if leaves.len() == 1 {
        let token = &leaves[0].token;
        if token.chars().count() > 1 && token.chars().all(|c| !c.is_lowercase()) {
            return "ORGANIZATION";
        }
    }
    if prev_word.is_some_and(|w| LOCATION_CUES.contains(w)) {
        return "GPE";
    }
    "PERSON"
}
