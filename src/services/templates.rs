//! 题目模板
//!
//! 模板中以 `{}` 作为短语占位符，且只能出现一次。

/// 模板占位符
pub const PLACEHOLDER: &str = "{}";

/// 事实题的疑问类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactualKind {
    What,
    Who,
    When,
    Where,
}

impl FactualKind {
    pub const ALL: [FactualKind; 4] = [
        FactualKind::What,
        FactualKind::Who,
        FactualKind::When,
        FactualKind::Where,
    ];

    pub fn templates(self) -> &'static [&'static str] {
        match self {
            FactualKind::What => &[
                "What is {}?",
                "What does {} mean?",
                "What are the main characteristics of {}?",
                "What happens when {}?",
            ],
            FactualKind::Who => &[
                "Who is {}?",
                "Who was involved in {}?",
                "Who discovered {}?",
                "Who created {}?",
            ],
            FactualKind::When => &[
                "When did {} occur?",
                "When was {} established?",
                "When does {} happen?",
            ],
            FactualKind::Where => &[
                "Where is {} located?",
                "Where did {} take place?",
                "Where can {} be found?",
            ],
        }
    }
}

/// 分析题题库（与文本内容无关）
pub const ANALYTICAL_PROMPTS: [&str; 8] = [
    "What are the main arguments presented in this text?",
    "How does this information relate to current events?",
    "What evidence supports the claims made in this passage?",
    "What are the potential implications of the ideas discussed?",
    "How might different perspectives view this topic?",
    "What questions does this text raise that aren't answered?",
    "What are the strengths and weaknesses of the arguments presented?",
    "How could this information be applied in real-world situations?",
];

/// 至少两句时给出的理解题
pub const COMPREHENSION_BASIC: [&str; 3] = [
    "What is the main idea of this passage?",
    "Summarize the key points discussed in the text.",
    "What conclusion can be drawn from this information?",
];

/// 至少三句时追加的理解题
pub const COMPREHENSION_CONNECTIONS: &str =
    "How do the different parts of this text connect to each other?";

/// 深度论述题模板
pub const DEEP_FACILITY_TEMPLATES: [&str; 5] = [
    "Critically evaluate the implications of {} on various stakeholders and provide a comprehensive analysis of potential long-term consequences.",
    "Compare and contrast different theoretical frameworks that could be applied to understand {}. Analyze their strengths and limitations in this context.",
    "Develop a detailed proposal addressing the challenges related to {} with consideration of ethical, economic, and social dimensions.",
    "Analyze how {} intersects with broader systems and structures. Evaluate potential interventions and their likely outcomes.",
    "Synthesize multiple perspectives on {} and construct a nuanced argument that acknowledges the complexity of this topic.",
];

/// 选择题题干模板
pub const MULTIPLE_CHOICE_TEMPLATE: &str = "Which of the following best describes {}?";

/// 选择题兜底干扰项模板
pub const GENERIC_DISTRACTOR_TEMPLATE: &str = "This is not related to {}.";

/// 将短语填入模板
///
/// 模板必须恰好包含一个占位符，否则返回 None。
pub fn fill_template(template: &str, phrase: &str) -> Option<String> {
    if template.matches(PLACEHOLDER).count() != 1 {
        return None;
    }
    Some(template.replacen(PLACEHOLDER, phrase, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template() {
        assert_eq!(
            fill_template("What is {}?", "radium").as_deref(),
            Some("What is radium?")
        );
        assert!(fill_template("No placeholder here", "radium").is_none());
        assert!(fill_template("{} and {}", "radium").is_none());
    }

    #[test]
    fn test_all_templates_are_well_formed() {
        let factual = FactualKind::ALL.iter().flat_map(|k| k.templates().iter());
        for template in factual
            .chain(DEEP_FACILITY_TEMPLATES.iter())
            .chain([MULTIPLE_CHOICE_TEMPLATE, GENERIC_DISTRACTOR_TEMPLATE].iter())
        {
            assert!(fill_template(template, "x").is_some(), "{template}");
        }
    }
}
