//! 将 `log` crate 的日志门面接入 Logger
//!
//! 依赖 `log::info!` 等宏的第三方库输出也会经过同一个处理器。

use crate::log::level::LogLevel;
use crate::log::log_record::LogRecord;
use crate::log::logger::Logger;
use log::{LevelFilter, Metadata, Record, SetLoggerError};

/// `log::Log` 的实现，转发到内部的 Logger
#[derive(Debug, Clone)]
pub struct LogBridge {
    logger: Logger,
}

impl LogBridge {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Logger 启用的最低级别对应的 `log` 过滤级别
    pub fn max_level(&self) -> LevelFilter {
        match LogLevel::ALL
            .into_iter()
            .find(|level| self.logger.enabled(*level))
        {
            Some(LogLevel::Debug) => LevelFilter::Trace,
            Some(LogLevel::Info) => LevelFilter::Info,
            Some(LogLevel::Warn) => LevelFilter::Warn,
            Some(LogLevel::Error) => LevelFilter::Error,
            None => LevelFilter::Off,
        }
    }
}

/// `log` 的级别映射，TRACE 归入 DEBUG
pub fn level_from_log(level: log::Level) -> LogLevel {
    match level {
        log::Level::Trace | log::Level::Debug => LogLevel::Debug,
        log::Level::Info => LogLevel::Info,
        log::Level::Warn => LogLevel::Warn,
        log::Level::Error => LogLevel::Error,
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.logger.enabled(level_from_log(metadata.level()))
    }

    fn log(&self, record: &Record) {
        let level = level_from_log(record.level());
        if !self.logger.enabled(level) {
            return;
        }

        let record = LogRecord::new(level, record.args().to_string())
            .with_attr("target", record.target());
        // log::Log 无法返回错误，写出失败只能丢弃
        let _ = self.logger.log(record);
    }

    fn flush(&self) {}
}

/// 把 Logger 安装为 `log` crate 的全局实现，只能成功一次
pub fn init_log_bridge(logger: Logger) -> Result<(), SetLoggerError> {
    let bridge = LogBridge::new(logger);
    let max_level = bridge.max_level();
    log::set_boxed_logger(Box::new(bridge))?;
    log::set_max_level(max_level);
    Ok(())
}
