use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::key_phrase::KeyPhrase;
use super::question::{QuestionCategory, QuestionRecord};

/// 结果中关键短语条目的键名（元数据，不是题型）
pub const KEY_PHRASES_KEY: &str = "Key Phrases Identified";

/// 一次生成的完整结果
///
/// 六个题型按固定顺序排列，最后附带识别出的关键短语。
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    questions: IndexMap<QuestionCategory, Vec<QuestionRecord>>,
    key_phrases: Vec<KeyPhrase>,
}

impl GenerationResult {
    pub fn new(key_phrases: Vec<KeyPhrase>) -> Self {
        let questions = QuestionCategory::ALL
            .into_iter()
            .map(|category| (category, Vec::new()))
            .collect();
        Self {
            questions,
            key_phrases,
        }
    }

    /// 写入某个题型的题目（覆盖旧值）
    pub fn insert(&mut self, category: QuestionCategory, records: Vec<QuestionRecord>) {
        self.questions.insert(category, records);
    }

    pub fn questions(&self, category: QuestionCategory) -> &[QuestionRecord] {
        self.questions
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn key_phrases(&self) -> &[KeyPhrase] {
        &self.key_phrases
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionCategory, &[QuestionRecord])> {
        self.questions
            .iter()
            .map(|(category, records)| (*category, records.as_slice()))
    }

    pub fn total_questions(&self) -> usize {
        self.questions.values().map(Vec::len).sum()
    }

    pub fn total_marks(&self) -> u32 {
        self.questions
            .values()
            .flat_map(|records| records.iter().map(|r| r.marks))
            .sum()
    }
}

impl Serialize for GenerationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.questions.len() + 1))?;
        for (category, records) in &self.questions {
            map.serialize_entry(category.name(), records)?;
        }
        map.serialize_entry(KEY_PHRASES_KEY, &self.key_phrases)?;
        map.end()
    }
}

/// 引擎对外的响应格式：题目结果，或 `{"error": [message]}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GenerationResponse {
    Questions(GenerationResult),
    Error { error: Vec<String> },
}

impl GenerationResponse {
    pub fn error(message: impl Into<String>) -> Self {
        GenerationResponse::Error {
            error: vec![message.into()],
        }
    }

    pub fn as_result(&self) -> Option<&GenerationResult> {
        match self {
            GenerationResponse::Questions(result) => Some(result),
            GenerationResponse::Error { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionKind;

    #[test]
    fn test_serialized_key_order() {
        let mut result = GenerationResult::new(vec![KeyPhrase::new("radium").unwrap()]);
        result.insert(
            QuestionCategory::Factual,
            vec![QuestionRecord::new(QuestionKind::Factual, "What is radium?", 1)],
        );

        let json = serde_json::to_string(&result).unwrap();
        let positions: Vec<usize> = QuestionCategory::ALL
            .iter()
            .map(|c| json.find(c.name()).unwrap())
            .chain(std::iter::once(json.find(KEY_PHRASES_KEY).unwrap()))
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(result.total_questions(), 1);
        assert_eq!(result.total_marks(), 1);
    }

    #[test]
    fn test_error_response_shape() {
        let response = GenerationResponse::error("boom");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({ "error": ["boom"] })
        );
        assert!(response.as_result().is_none());
    }
}
