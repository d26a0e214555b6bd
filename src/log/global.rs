//! 进程级默认 Logger
//!
//! 启动阶段调用一次 [`init`] 安装默认 Logger，之后只读。
//! 如果在 [`init`] 之前就读取了默认 Logger，会按默认选项创建一个并固定下来，
//! 此后再调用 [`init`] 返回错误。

use crate::log::error::HandlerError;
use crate::log::log_record::Attr;
use crate::log::logger::Logger;
use crate::log::options::new_logger;
use anyhow::{anyhow, Result};
use once_cell::sync::OnceCell;

static DEFAULT_LOGGER: OnceCell<Logger> = OnceCell::new();

/// 安装默认 Logger，只能成功一次
pub fn init(logger: Logger) -> Result<()> {
    DEFAULT_LOGGER
        .set(logger)
        .map_err(|_| anyhow!("default logger is already initialized"))
}

/// 获取默认 Logger
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| new_logger(Vec::new()))
}

// ========== 默认 logger 的便捷 log 方法 ==========

/// 使用默认 logger 记录 DEBUG 级别日志
pub fn debug(message: impl Into<String>) -> Result<(), HandlerError> {
    default_logger().debug(message)
}

/// 使用默认 logger 记录 INFO 级别日志
pub fn info(message: impl Into<String>) -> Result<(), HandlerError> {
    default_logger().info(message)
}

/// 使用默认 logger 记录 WARN 级别日志
pub fn warn(message: impl Into<String>) -> Result<(), HandlerError> {
    default_logger().warn(message)
}

/// 使用默认 logger 记录 ERROR 级别日志
pub fn error(message: impl Into<String>) -> Result<(), HandlerError> {
    default_logger().error(message)
}

/// 使用默认 logger 记录成功消息
pub fn success(
    message: impl Into<String>,
    attrs: impl IntoIterator<Item = Attr>,
) -> Result<(), HandlerError> {
    default_logger().success(message, attrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_default_logger_is_stable() {
        let first = default_logger();
        let second = default_logger();
        assert!(Arc::ptr_eq(first.handler(), second.handler()));
    }

    #[test]
    fn test_init_after_default_read_fails() {
        let _ = default_logger();
        assert!(init(new_logger(Vec::new())).is_err());
    }
}
