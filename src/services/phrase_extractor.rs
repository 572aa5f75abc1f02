//! 关键短语抽取服务 - 业务能力层
//!
//! 两路候选合并计数：
//! 1. 逐句扫描，连续的名词 / 形容词组成候选短语
//! 2. 全文命名实体切分，每个实体作为候选短语
//!
//! 排序规则：出现次数降序，次数相同保持首次出现顺序。

use indexmap::IndexMap;
use tracing::debug;

use crate::error::AppResult;
use crate::models::KeyPhrase;
use crate::nlp::{is_stop_word, Preprocessor};

/// 关键短语抽取器
#[derive(Debug, Clone, Copy)]
pub struct PhraseExtractor {
    max_phrases: usize,
}

impl PhraseExtractor {
    pub fn new(max_phrases: usize) -> Self {
        Self { max_phrases }
    }

    /// 从原始文本抽取关键短语
    ///
    /// 预处理服务的任何错误都会原样返回，不做部分抽取。
    pub fn extract_key_phrases(
        &self,
        preprocessor: &dyn Preprocessor,
        text: &str,
    ) -> AppResult<Vec<KeyPhrase>> {
        let sentences = preprocessor.segment_sentences(text)?;
        self.extract_from_sentences(preprocessor, text, &sentences)
    }

    /// 使用已切好的句子抽取关键短语
    pub fn extract_from_sentences(
        &self,
        preprocessor: &dyn Preprocessor,
        text: &str,
        sentences: &[String],
    ) -> AppResult<Vec<KeyPhrase>> {
        let mut candidates = Vec::new();

        for sentence in sentences {
            candidates.extend(self.noun_phrases(preprocessor, sentence)?);
        }
        let noun_phrase_count = candidates.len();

        candidates.extend(self.named_entities(preprocessor, text)?);
        debug!(
            "候选短语: 名词短语 {} 个, 命名实体 {} 个",
            noun_phrase_count,
            candidates.len() - noun_phrase_count
        );

        Ok(self.rank(candidates))
    }

    /// 单句内的名词 / 形容词连续片段
    fn noun_phrases(
        &self,
        preprocessor: &dyn Preprocessor,
        sentence: &str,
    ) -> AppResult<Vec<String>> {
        let tokens = preprocessor.tokenize(sentence)?;
        let tagged = preprocessor.tag_parts_of_speech(&tokens)?;

        let mut phrases = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for token in &tagged {
            if preprocessor.classify_tag(&token.tag).is_phrase_part() {
                current.push(&token.token);
            } else {
                flush_phrase(&mut current, &mut phrases);
            }
        }
        flush_phrase(&mut current, &mut phrases);

        Ok(phrases)
    }

    /// 全文命名实体
    fn named_entities(
        &self,
        preprocessor: &dyn Preprocessor,
        text: &str,
    ) -> AppResult<Vec<String>> {
        let tokens = preprocessor.tokenize(text)?;
        let tagged = preprocessor.tag_parts_of_speech(&tokens)?;
        let chunks = preprocessor.chunk_entities(&tagged)?;

        Ok(chunks.iter().filter_map(|node| node.entity_text()).collect())
    }

    /// 计数、过滤、排序、截断
    fn rank(&self, candidates: Vec<String>) -> Vec<KeyPhrase> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for phrase in candidates {
            *counts.entry(phrase).or_insert(0) += 1;
        }

        let mut ranked: Vec<(String, usize)> = counts
            .into_iter()
            .filter(|(phrase, _)| KeyPhrase::is_valid(phrase))
            .collect();
        // 稳定排序，次数相同时保持插入顺序
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .take(self.max_phrases)
            .filter_map(|(phrase, _)| KeyPhrase::new(phrase))
            .collect()
    }
}

fn flush_phrase(current: &mut Vec<&str>, phrases: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let phrase = current.join(" ");
    current.clear();
    if !phrase.trim().is_empty() && !is_stop_word(&phrase) {
        phrases.push(phrase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::RuleBasedPreprocessor;

    fn extract(text: &str) -> Vec<String> {
        let preprocessor = RuleBasedPreprocessor::new().unwrap();
        PhraseExtractor::new(10)
            .extract_key_phrases(&preprocessor, text)
            .unwrap()
            .into_iter()
            .map(|p| p.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_marie_curie_phrases() {
        let phrases = extract(
            "Marie Curie discovered radium in 1898. Her discovery changed science forever.",
        );
        // "Marie Curie" 同时来自名词短语和命名实体，排在第一
        assert_eq!(phrases, vec!["Marie Curie", "radium", "discovery", "science"]);
    }

    #[test]
    fn test_rank_orders_by_frequency_then_first_seen() {
        let extractor = PhraseExtractor::new(3);
        let ranked: Vec<String> = extractor
            .rank(
                ["alpha", "beta", "gamma", "beta", "delta", "gamma", "beta"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            )
            .into_iter()
            .map(|p| p.as_str().to_string())
            .collect();
        assert_eq!(ranked, vec!["beta", "gamma", "alpha"]);
    }

    #[test]
    fn test_rank_filters_invalid_phrases() {
        let ranked = PhraseExtractor::new(10).rank(vec![
            "AI".to_string(),
            "the".to_string(),
            "one two three four five".to_string(),
            "neural networks".to_string(),
        ]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].as_str(), "neural networks");
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "Solar panels convert sunlight into electricity. \
                    Wind turbines have grown larger. \
                    The transition to renewable energy is crucial for reducing carbon emissions.";
        assert_eq!(extract(text), extract(text));
        assert!(extract(text).len() <= 10);
    }
}
