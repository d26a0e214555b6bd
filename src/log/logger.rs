use crate::log::color::Color;
use crate::log::error::HandlerError;
use crate::log::handler::LogHandler;
use crate::log::level::LogLevel;
use crate::log::log_record::{Attr, LogRecord};
use std::fmt;
use std::sync::Arc;

/// 日志器
///
/// 负责级别判断和构造日志记录，渲染与输出交给处理器。
/// 克隆开销很小，克隆得到的 Logger 共享同一个处理器。
#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn LogHandler>,
}

impl Logger {
    pub fn new(handler: Arc<dyn LogHandler>) -> Self {
        Self { handler }
    }

    /// 底层处理器
    pub fn handler(&self) -> &Arc<dyn LogHandler> {
        &self.handler
    }

    /// 级别是否启用
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.handler.enabled(level)
    }

    /// 记录日志，未启用的级别直接忽略
    pub fn log(&self, record: LogRecord) -> Result<(), HandlerError> {
        if !self.handler.enabled(record.level) {
            return Ok(());
        }
        self.handler.handle(&record)
    }

    /// 记录带属性的日志（通用方法）
    ///
    /// # 示例
    ///
    /// ```ignore
    /// logger.logm(
    ///     LogLevel::Info,
    ///     "user logged in",
    ///     vec![Attr::new("user_id", 12345), Attr::new("username", "alice")],
    /// )?;
    /// ```
    pub fn logm(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<(), HandlerError> {
        if !self.handler.enabled(level) {
            return Ok(());
        }
        let record = LogRecord::new(level, message).with_attrs(attrs);
        self.handler.handle(&record)
    }

    /// 记录 DEBUG 级别日志
    pub fn debug(&self, message: impl Into<String>) -> Result<(), HandlerError> {
        self.logm(LogLevel::Debug, message, Vec::new())
    }

    /// 记录 INFO 级别日志
    pub fn info(&self, message: impl Into<String>) -> Result<(), HandlerError> {
        self.logm(LogLevel::Info, message, Vec::new())
    }

    /// 记录 WARN 级别日志
    pub fn warn(&self, message: impl Into<String>) -> Result<(), HandlerError> {
        self.logm(LogLevel::Warn, message, Vec::new())
    }

    /// 记录 ERROR 级别日志
    pub fn error(&self, message: impl Into<String>) -> Result<(), HandlerError> {
        self.logm(LogLevel::Error, message, Vec::new())
    }

    /// 记录 DEBUG 级别日志（带属性）
    pub fn debugm(
        &self,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<(), HandlerError> {
        self.logm(LogLevel::Debug, message, attrs)
    }

    /// 记录 INFO 级别日志（带属性）
    pub fn infom(
        &self,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<(), HandlerError> {
        self.logm(LogLevel::Info, message, attrs)
    }

    /// 记录 WARN 级别日志（带属性）
    pub fn warnm(
        &self,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<(), HandlerError> {
        self.logm(LogLevel::Warn, message, attrs)
    }

    /// 记录 ERROR 级别日志（带属性）
    ///
    /// ```ignore
    /// logger.errorm("database connection failed", vec![
    ///     Attr::new("host", "localhost"),
    ///     Attr::new("port", 5432),
    /// ])?;
    /// ```
    pub fn errorm(
        &self,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<(), HandlerError> {
        self.logm(LogLevel::Error, message, attrs)
    }

    /// 记录成功消息：INFO 级别，文本输出中固定显示为绿色
    pub fn success(
        &self,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<(), HandlerError> {
        let record = LogRecord::new(LogLevel::Info, message)
            .with_attrs(attrs)
            .with_color(Color::Green);
        self.log(record)
    }

    /// 返回附带预绑定属性的新 Logger
    pub fn with(&self, attrs: Vec<Attr>) -> Logger {
        if attrs.is_empty() {
            return self.clone();
        }
        Logger::new(self.handler.with_attrs(attrs))
    }

    /// 返回在指定分组下记录属性的新 Logger
    pub fn with_group(&self, name: &str) -> Logger {
        if name.is_empty() {
            return self.clone();
        }
        Logger::new(self.handler.with_group(name))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}
