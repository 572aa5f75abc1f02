//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层是引擎的调用方，负责输入输出和调度，不包含出题逻辑。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量段落处理器
//! - 读取文本文件并按空行切分段落
//! - 控制并发数量（Semaphore + spawn_blocking）
//! - 汇总成功 / 失败 / 跳过统计
//!
//! ### `report_writer` - 报告输出
//! - JSON：按段落编号组织
//! - CSV：每道题一行
//!
//! ### `interactive` - 交互式控制台
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor / interactive
//!     ↓
//! workflow::QuestionGenerator (处理单个段落)
//!     ↓
//! services (能力层：短语抽取 / 六个构建器)
//!     ↓
//! nlp (基础设施：预处理服务)
//! ```

pub mod batch_processor;
pub mod interactive;
pub mod report_writer;

// 重新导出主要类型
pub use batch_processor::{BatchProcessor, BatchReport, ParagraphReport};
pub use report_writer::{save_to_csv, save_to_json};
