//! 日志基础设施

use anyhow::{Context, Result};
use std::io;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::LoggingConfig;

/// 初始化日志系统
///
/// 1. 创建日志目录
/// 2. 设置按日期分割的文件日志
/// 3. 按配置决定是否同时输出到控制台
///
/// 返回的 `WorkerGuard` 必须在 `main` 里一直持有，否则文件日志会丢失。
/// `RUST_LOG` 存在时优先于配置中的级别。
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("无法创建日志目录: {}", config.log_dir))?;

    let file_appender = rolling::daily(&config.log_dir, &config.file_prefix);
    let (non_blocking, guard) = non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=debug", config.level)));

    let console_layer = config
        .console_output
        .then(|| fmt::layer().with_writer(io::stdout).with_ansi(true));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(false)
                .with_thread_names(true),
        )
        .with(console_layer)
        .try_init()
        .context("日志系统已经初始化")?;

    Ok(guard)
}

/// 只输出到标准错误的精简日志，给命令行客户端用
pub fn init_console_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .try_init();
}
