//! # 日志初始化
//!
//! 诊断日志通过 `tracing` 输出到 stderr。日志级别由命令行构造的
//! `LogConfig` 显式传入，`RUST_LOG` 可以覆盖。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 使用 `tracing`, `tracing-subscriber`

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// 日志配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// 未设置 RUST_LOG 时的默认级别
    pub level: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig { level: Level::WARN }
    }
}

impl LogConfig {
    /// 由 `-v` 的次数确定级别
    pub fn from_verbosity(verbose: u8) -> Self {
        let level = match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        LogConfig { level }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("editdir={}", self.level)))
    }
}

/// 安装全局日志订阅者；重复调用时保留第一次的设置
pub fn init_logging(config: LogConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}
