use tracing_subscriber::{EnvFilter, fmt};

/// 初始化日志系统
///
/// 支持通过 RUST_LOG 环境变量控制日志级别
/// 默认级别: info
///
/// 作为库被嵌入时允许重复调用，只有第一次生效。
///
/// 示例:
/// - RUST_LOG=debug cargo run
/// - RUST_LOG=trace cargo run
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let initialized = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .is_ok();

    if initialized {
        tracing::info!("Logger initialized");
    }
}
