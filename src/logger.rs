//! 日志初始化

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化全局日志（默认 info 级别，可用 RUST_LOG 覆盖）
///
/// 重复调用不会报错，测试中可以放心使用。
pub fn init() {
    init_with_verbosity(false);
}

/// 按是否详细输出初始化日志
pub fn init_with_verbosity(verbose: bool) {
    let default_filter = if verbose {
        "question_generator=debug"
    } else {
        "question_generator=info"
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
