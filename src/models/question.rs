use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// 题型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QuestionCategory {
    /// 事实题
    #[serde(rename = "Factual Questions")]
    Factual,
    /// 分析题
    #[serde(rename = "Analytical Questions")]
    Analytical,
    /// 理解题
    #[serde(rename = "Comprehension Questions")]
    Comprehension,
    /// 选择题
    #[serde(rename = "Multiple Choice Questions")]
    MultipleChoice,
    /// 填空题
    #[serde(rename = "Fill in the Blank Questions")]
    FillBlank,
    /// 深度论述题
    #[serde(rename = "Deep Facility Questions")]
    DeepFacility,
}

impl QuestionCategory {
    /// 全部题型（按输出顺序）
    pub const ALL: [QuestionCategory; 6] = [
        QuestionCategory::Factual,
        QuestionCategory::Analytical,
        QuestionCategory::Comprehension,
        QuestionCategory::MultipleChoice,
        QuestionCategory::FillBlank,
        QuestionCategory::DeepFacility,
    ];

    /// 获取标准名称（也是报告中的键名）
    pub fn name(self) -> &'static str {
        match self {
            QuestionCategory::Factual => "Factual Questions",
            QuestionCategory::Analytical => "Analytical Questions",
            QuestionCategory::Comprehension => "Comprehension Questions",
            QuestionCategory::MultipleChoice => "Multiple Choice Questions",
            QuestionCategory::FillBlank => "Fill in the Blank Questions",
            QuestionCategory::DeepFacility => "Deep Facility Questions",
        }
    }
}

impl std::fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 题型专属数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    Factual,
    Analytical,
    Comprehension,
    MultipleChoice {
        options: Vec<String>,
        correct_answer_index: usize,
    },
    FillBlank {
        answer: String,
    },
    DeepFacility,
}

impl QuestionKind {
    pub fn category(&self) -> QuestionCategory {
        match self {
            QuestionKind::Factual => QuestionCategory::Factual,
            QuestionKind::Analytical => QuestionCategory::Analytical,
            QuestionKind::Comprehension => QuestionCategory::Comprehension,
            QuestionKind::MultipleChoice { .. } => QuestionCategory::MultipleChoice,
            QuestionKind::FillBlank { .. } => QuestionCategory::FillBlank,
            QuestionKind::DeepFacility => QuestionCategory::DeepFacility,
        }
    }
}

/// 单道题目
///
/// 序列化为扁平对象：`question`、`marks`，选择题附加 `options` 与
/// `correct_answer_index`，填空题附加 `answer`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub question: String,
    pub marks: u32,
    pub kind: QuestionKind,
}

impl QuestionRecord {
    pub fn new(kind: QuestionKind, question: impl Into<String>, marks: u32) -> Self {
        Self {
            question: question.into(),
            marks,
            kind,
        }
    }

    pub fn category(&self) -> QuestionCategory {
        self.kind.category()
    }

    /// 选择题选项（其他题型为 None）
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            QuestionKind::MultipleChoice { options, .. } => Some(options),
            _ => None,
        }
    }

    /// 标准答案：选择题为正确选项，填空题为被挖空的短语
    pub fn answer(&self) -> Option<&str> {
        match &self.kind {
            QuestionKind::MultipleChoice {
                options,
                correct_answer_index,
            } => options.get(*correct_answer_index).map(String::as_str),
            QuestionKind::FillBlank { answer } => Some(answer),
            _ => None,
        }
    }
}

impl Serialize for QuestionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = match &self.kind {
            QuestionKind::MultipleChoice { .. } => 2,
            QuestionKind::FillBlank { .. } => 1,
            _ => 0,
        };
        let mut map = serializer.serialize_map(Some(2 + extra))?;
        map.serialize_entry("question", &self.question)?;
        match &self.kind {
            QuestionKind::MultipleChoice {
                options,
                correct_answer_index,
            } => {
                map.serialize_entry("options", options)?;
                map.serialize_entry("correct_answer_index", correct_answer_index)?;
            }
            QuestionKind::FillBlank { answer } => {
                map.serialize_entry("answer", answer)?;
            }
            _ => {}
        }
        map.serialize_entry("marks", &self.marks)?;
        map.end()
    }
}
