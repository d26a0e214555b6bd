//! slogger - 结构化日志的终端彩色输出与 JSON severity 输出
//!
//! ## 模块
//!
//! - **log**: 日志记录、处理器、构造选项与进程级默认 Logger
//!
//! ## 设计理念
//!
//! - 🎨 **两种编码**: 终端彩色文本与面向采集的 JSON，由同一份记录生成
//! - 🔒 **逐行原子写出**: 渲染与写出在同一把锁内完成，并发调用不会交错
//! - 🧩 **处理器不可变**: 预绑定属性和分组都派生出新的处理器

pub mod log;

// 重新导出主要的公共 API
pub use crate::log::{
    new_logger, Attr, Format, HandlerError, LogHandler, LogLevel, LogRecord, Logger, LoggerConfig,
    Value,
};
