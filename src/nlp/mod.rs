//! 预处理服务（基础设施层）
//!
//! 引擎只通过 [`Preprocessor`] trait 使用分句、分词、词性标注和命名实体切分能力，
//! 不关心背后是哪一个标注器。词性标签经由 [`Preprocessor::classify_tag`]
//! 映射为 [`PosClass`]，抽取逻辑因此与具体标签集解耦。
//!
//! 内置实现 [`RuleBasedPreprocessor`] 基于规则和静态词表，输出 Penn Treebank 标签。

pub mod lexicon;
pub mod rule_based;
pub mod stopwords;

use serde::{Deserialize, Serialize};

use crate::error::PreprocessingError;

pub use rule_based::RuleBasedPreprocessor;
pub use stopwords::is_stop_word;

/// 带词性标签的词
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(token: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            tag: tag.into(),
        }
    }
}

/// 实体切分结果树的节点（单层）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkNode {
    /// 未被切入实体的普通词
    Token(TaggedToken),
    /// 带标签的实体片段
    Entity {
        label: String,
        leaves: Vec<TaggedToken>,
    },
}

impl ChunkNode {
    /// 实体文本（叶子词以空格连接），普通词返回 None
    pub fn entity_text(&self) -> Option<String> {
        match self {
            ChunkNode::Entity { leaves, .. } => Some(
                leaves
                    .iter()
                    .map(|leaf| leaf.token.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            ChunkNode::Token(_) => None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            ChunkNode::Entity { label, .. } => Some(label),
            ChunkNode::Token(_) => None,
        }
    }
}

/// 粗粒度词类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosClass {
    Noun,
    Adjective,
    Other,
}

impl PosClass {
    /// Penn Treebank 标签映射：N* 为名词，J* 为形容词
    pub fn from_penn_tag(tag: &str) -> Self {
        if tag.starts_with('N') {
            PosClass::Noun
        } else if tag.starts_with('J') {
            PosClass::Adjective
        } else {
            PosClass::Other
        }
    }

    /// 是否可以进入名词短语缓冲区
    pub fn is_phrase_part(self) -> bool {
        matches!(self, PosClass::Noun | PosClass::Adjective)
    }
}

/// 预处理服务
pub trait Preprocessor: Send + Sync {
    /// 分句
    fn segment_sentences(&self, text: &str) -> Result<Vec<String>, PreprocessingError>;

    /// 分词
    fn tokenize(&self, text: &str) -> Result<Vec<String>, PreprocessingError>;

    /// 词性标注
    fn tag_parts_of_speech(
        &self,
        tokens: &[String],
    ) -> Result<Vec<TaggedToken>, PreprocessingError>;

    /// 命名实体切分
    fn chunk_entities(&self, tagged: &[TaggedToken]) -> Result<Vec<ChunkNode>, PreprocessingError>;

    /// 原始标签到粗粒度词类的映射
    fn classify_tag(&self, tag: &str) -> PosClass {
        PosClass::from_penn_tag(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_penn_tag_mapping() {
        assert_eq!(PosClass::from_penn_tag("NNP"), PosClass::Noun);
        assert_eq!(PosClass::from_penn_tag("NNS"), PosClass::Noun);
        assert_eq!(PosClass::from_penn_tag("JJR"), PosClass::Adjective);
        assert_eq!(PosClass::from_penn_tag("VBD"), PosClass::Other);
        assert_eq!(PosClass::from_penn_tag("."), PosClass::Other);
    }

    #[test]
    fn test_entity_text_joins_leaves() {
        let node = ChunkNode::Entity {
            label: "PERSON".to_string(),
            leaves: vec![
                TaggedToken::new("Marie", "NNP"),
                TaggedToken::new("Curie", "NNP"),
            ],
        };
        assert_eq!(node.entity_text().as_deref(), Some("Marie Curie"));
        assert_eq!(node.label(), Some("PERSON"));
        assert!(ChunkNode::Token(TaggedToken::new("in", "IN"))
            .entity_text()
            .is_none());
    }
}
