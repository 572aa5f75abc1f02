//! 错误类型定义
//!
//! 引擎内部统一使用 [`GeneratorError`]，应用层（CLI / 批处理）再用 `anyhow` 包装。

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// 段落过短（面向用户的校验错误，不是系统故障）
    #[error("Paragraph is too short. Please provide at least {min_chars} characters.")]
    InputTooShort { min_chars: usize },

    /// 预处理服务错误
    #[error(transparent)]
    Preprocessing(#[from] PreprocessingError),

    /// 配置错误
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// 文件操作错误
    #[error(transparent)]
    File(#[from] FileError),
}

/// 预处理服务错误
#[derive(Debug, Error)]
pub enum PreprocessingError {
    /// 预处理服务不可用（无法初始化或无法连接）
    #[error("预处理服务不可用 ({stage}): {reason}")]
    Unavailable { stage: &'static str, reason: String },

    /// 正则表达式构建失败
    #[error("预处理规则构建失败: {0}")]
    Pattern(#[from] regex::Error),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },

    /// 配置值不合法
    #[error("配置项 {field} 不合法: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },

    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl GeneratorError {
    /// 创建段落过短错误
    pub fn input_too_short(min_chars: usize) -> Self {
        GeneratorError::InputTooShort { min_chars }
    }

    /// 创建预处理服务不可用错误
    pub fn preprocessing_unavailable(stage: &'static str, reason: impl Into<String>) -> Self {
        GeneratorError::Preprocessing(PreprocessingError::Unavailable {
            stage,
            reason: reason.into(),
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return GeneratorError::File(FileError::NotFound { path });
        }
        GeneratorError::File(FileError::ReadFailed { path, source })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        GeneratorError::File(FileError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 是否为面向用户的校验错误
    pub fn is_validation(&self) -> bool {
        matches!(self, GeneratorError::InputTooShort { .. })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, GeneratorError>;
