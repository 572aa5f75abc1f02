//! # Question Generator
//!
//! 从一段英文文本自动生成考试题目：事实题、分析题、理解题、选择题、填空题和深度论述题。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（NLP）
//! - `nlp/` - 预处理服务：分句、分词、词性标注、命名实体切分
//! - `Preprocessor` - 引擎唯一依赖的预处理接口
//! - `RuleBasedPreprocessor` - 内置的规则实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能生成什么"
//! - `PhraseExtractor` - 关键短语抽取
//! - 六个 `QuestionBuilder` - 每个负责一种题型
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一段文本"的完整生成流程
//! - `GenerationCtx` - 上下文封装（句子 + 关键短语）
//! - `QuestionGenerator` - 流程编排（校验 → 抽取 → 构建 → 组装）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量段落处理，管理并发
//! - `orchestrator/report_writer` - JSON / CSV 报告
//! - `orchestrator/interactive` - 交互式控制台
//!
//! ## 示例
//!
//! ```no_run
//! use question_generator::{Config, QuestionGenerator};
//!
//! let mut generator = QuestionGenerator::with_seed(Config::default(), 42)?;
//! let result = generator.generate_questions(
//!     "Marie Curie discovered radium in 1898. Her discovery changed science forever.",
//! )?;
//! println!("{}", serde_json::to_string_pretty(&result)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod nlp;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppResult, GeneratorError};
pub use models::{GenerationResponse, GenerationResult, KeyPhrase, QuestionCategory, QuestionRecord};
pub use nlp::{Preprocessor, RuleBasedPreprocessor};
pub use orchestrator::{BatchProcessor, BatchReport};
pub use workflow::{GenerationCtx, QuestionGenerator};
