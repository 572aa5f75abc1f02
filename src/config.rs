use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppResult, ConfigError, FileError, GeneratorError};
use crate::models::QuestionCategory;

/// 程序配置
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 段落最少字符数（去除首尾空白后）
    pub min_paragraph_chars: usize,
    /// 各题型分值
    pub marks: MarkScheme,
    /// 各题型数量上限
    pub limits: GenerationLimits,
    /// 批处理时同时处理的段落数量
    pub max_concurrent_paragraphs: usize,
    /// 随机种子，设置后输出可复现
    pub random_seed: Option<u64>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// JSON 报告输出路径
    pub output_json: String,
    /// CSV 报告输出路径
    pub output_csv: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_paragraph_chars: 50,
            marks: MarkScheme::default(),
            limits: GenerationLimits::default(),
            max_concurrent_paragraphs: 8,
            random_seed: None,
            verbose_logging: false,
            output_json: "questions_output.json".to_string(),
            output_csv: "questions_output.csv".to_string(),
        }
    }
}

/// 分值表
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkScheme {
    pub factual: u32,
    pub analytical: u32,
    pub comprehension: u32,
    pub multiple_choice: u32,
    pub fill_blank: u32,
    pub deep_facility: u32,
}

impl Default for MarkScheme {
    fn default() -> Self {
        Self {
            factual: 1,
            analytical: 2,
            comprehension: 2,
            multiple_choice: 3,
            fill_blank: 2,
            deep_facility: 10,
        }
    }
}

impl MarkScheme {
    /// 获取题型对应分值
    pub fn for_category(&self, category: QuestionCategory) -> u32 {
        match category {
            QuestionCategory::Factual => self.factual,
            QuestionCategory::Analytical => self.analytical,
            QuestionCategory::Comprehension => self.comprehension,
            QuestionCategory::MultipleChoice => self.multiple_choice,
            QuestionCategory::FillBlank => self.fill_blank,
            QuestionCategory::DeepFacility => self.deep_facility,
        }
    }
}

/// 各题型数量上限
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationLimits {
    pub key_phrases: usize,
    pub factual: usize,
    pub analytical: usize,
    pub multiple_choice: usize,
    pub fill_blank: usize,
    pub deep_facility: usize,
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            key_phrases: 10,
            factual: 5,
            analytical: 4,
            multiple_choice: 3,
            fill_blank: 3,
            deep_facility: 2,
        }
    }
}

impl Config {
    /// 从环境变量加载（未设置的项使用默认值）
    pub fn from_env() -> AppResult<Self> {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path)
            .map_err(|e| GeneratorError::file_read_failed(display.clone(), e))?;
        let config: Config = toml::from_str(&content).map_err(|source| {
            GeneratorError::File(FileError::TomlParseFailed {
                path: display,
                source,
            })
        })?;
        config.validate()?;
        Ok(config)
    }

    /// 加载配置：先读 TOML（可选），再应用环境变量覆盖
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let base = match path {
            Some(p) => Self::from_toml_file(p)?,
            None => Self::default(),
        };
        base.with_env_overrides()
    }

    fn with_env_overrides(mut self) -> AppResult<Self> {
        if let Some(v) = env_parse::<usize>("QG_MIN_PARAGRAPH_CHARS")? {
            self.min_paragraph_chars = v;
        }
        if let Some(v) = env_parse::<usize>("QG_MAX_CONCURRENT_PARAGRAPHS")? {
            self.max_concurrent_paragraphs = v;
        }
        if let Some(v) = env_parse::<u64>("QG_RANDOM_SEED")? {
            self.random_seed = Some(v);
        }
        if let Some(v) = env_parse::<bool>("QG_VERBOSE_LOGGING")? {
            self.verbose_logging = v;
        }
        if let Ok(v) = std::env::var("QG_OUTPUT_JSON") {
            self.output_json = v;
        }
        if let Ok(v) = std::env::var("QG_OUTPUT_CSV") {
            self.output_csv = v;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> AppResult<()> {
        if self.max_concurrent_paragraphs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_concurrent_paragraphs".to_string(),
                reason: "必须大于 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(var_name: &str) -> AppResult<Option<T>> {
    let Ok(value) = std::env::var(var_name) else {
        return Ok(None);
    };
    value.trim().parse::<T>().map(Some).map_err(|_| {
        ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value,
            expected_type: std::any::type_name::<T>().to_string(),
        }
        .into()
    })
}
