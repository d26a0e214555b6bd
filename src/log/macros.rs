//! 日志宏
//!
//! # 示例
//!
//! ```ignore
//! use slogger::info;
//!
//! // 简单日志
//! info!(logger, "application started")?;
//!
//! // 带属性的日志
//! info!(logger, "user logged in", "user_id" => 12345, "username" => "alice")?;
//! ```

/// 按指定级别记录日志
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $msg:expr) => {
        $logger.logm(
            $level,
            $msg,
            ::std::vec::Vec::<$crate::log::Attr>::new(),
        )
    };
    ($logger:expr, $level:expr, $msg:expr, $($key:expr => $value:expr),+ $(,)?) => {
        $logger.logm(
            $level,
            $msg,
            ::std::vec![$($crate::log::Attr::new($key, $value)),+],
        )
    };
}

/// 记录 DEBUG 级别日志
///
/// ```ignore
/// debug!(logger, "processing", "endpoint" => "/api/users", "method" => "GET");
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::log::LogLevel::Debug, $($rest)+)
    };
}

/// 记录 INFO 级别日志
///
/// ```ignore
/// info!(logger, "user action", "user_id" => 12345, "action" => "login");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::log::LogLevel::Info, $($rest)+)
    };
}

/// 记录 WARN 级别日志
///
/// ```ignore
/// warn!(logger, "slow query", "duration_ms" => 1500, "threshold_ms" => 1000);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::log::LogLevel::Warn, $($rest)+)
    };
}

/// 记录 ERROR 级别日志
///
/// ```ignore
/// error!(logger, "query failed", "error_code" => "CONN001", "retry_count" => 3);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::log::LogLevel::Error, $($rest)+)
    };
}
