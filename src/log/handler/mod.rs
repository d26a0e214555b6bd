mod json_handler;
mod scope;
mod text_handler;

pub use json_handler::JsonHandler;
pub use text_handler::{TextHandler, TextHandlerConfig};

pub(crate) use scope::Scope;

use crate::log::error::HandlerError;
use crate::log::level::LogLevel;
use crate::log::log_record::{Attr, LogRecord};
use crate::log::severity::ReplaceAttr;
use chrono::{DateTime, SecondsFormat, Utc};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

/// 时间字段名
pub const TIME_KEY: &str = "time";

/// 消息字段名
pub const MESSAGE_KEY: &str = "msg";

/// 日志处理器 trait
///
/// 负责判断级别是否启用，并把日志记录渲染后写到输出目标。
/// 处理器本身不可变，`with_attrs` / `with_group` 返回新的处理器，与原处理器共享输出目标。
pub trait LogHandler: Send + Sync {
    /// 级别是否启用，不加锁、不修改状态
    fn enabled(&self, level: LogLevel) -> bool;

    /// 渲染并写出一条记录，仅在写出失败时返回错误
    fn handle(&self, record: &LogRecord) -> Result<(), HandlerError>;

    /// 预绑定属性，排在每条记录自身属性之前
    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn LogHandler>;

    /// 之后的属性（包括预绑定属性）都放到该分组下
    fn with_group(&self, name: &str) -> Arc<dyn LogHandler>;

    /// 用于识别具体的处理器类型
    fn as_any(&self) -> &dyn Any;
}

/// 处理器通用选项
#[derive(Clone, Default)]
pub struct HandlerOptions {
    /// 最低启用级别
    pub level: LogLevel,
    /// 属性改写钩子
    pub replace_attr: Option<ReplaceAttr>,
}

impl fmt::Debug for HandlerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerOptions")
            .field("level", &self.level)
            .field("replace_attr", &self.replace_attr.is_some())
            .finish()
    }
}

/// 时间戳格式: 2025-01-19T12:34:56.789Z (RFC 3339, UTC)
pub(crate) fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Millis, true)
}
