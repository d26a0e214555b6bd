//! 日志模块
//!
//! 在结构化分级日志之上提供两种输出编码：
//!
//! - 彩色文本：面向终端，每条记录一行，级别标签带 ANSI 颜色
//! - JSON：面向日志采集，`level` 字段改写为 `severity`，取值 `DEBUG` / `INFO` / `WARNING` / `ERROR`
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use slogger::log::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     // 默认：INFO 级别、彩色文本、标准输出
//!     let logger = new_logger(Vec::new());
//!     logger.info("application started")?;
//!
//!     // JSON 输出，启用 DEBUG
//!     let logger = new_logger(vec![with_debug(), with_format(Format::Json)]);
//!     logger.infom("user logged in", vec![Attr::new("user_id", 12345)])?;
//!
//!     // 从配置创建
//!     let config = LoggerConfig::from_json5(r#"{ level: "warn", colored: false }"#)?;
//!     let logger = config.build()?;
//!     logger.warn("disk almost full")?;
//!
//!     Ok(())
//! }
//! ```

pub mod bridge;
pub mod color;
pub mod config;
pub mod error;
pub mod global;
pub mod handler;
pub mod level;
pub mod log_record;
pub mod logger;
pub mod macros;
pub mod options;
pub mod severity;
pub mod sink;

// 重新导出核心类型
pub use bridge::{init_log_bridge, LogBridge};
pub use color::{colorize, Color, ColorScheme};
pub use config::{LoggerConfig, OutputConfig};
pub use error::HandlerError;
pub use handler::{
    HandlerOptions, JsonHandler, LogHandler, TextHandler, TextHandlerConfig, MESSAGE_KEY, TIME_KEY,
};
pub use level::LogLevel;
pub use log_record::{Attr, LogRecord, Value};
pub use logger::Logger;
pub use options::{
    new_handler, new_logger, with_colored, with_colors, with_debug, with_format, with_level,
    with_sink, Format, LoggerOption,
};
pub use severity::{
    marshal_level, severity, translate_level, ReplaceAttr, LEVEL_KEY, SEVERITY_KEY,
};
pub use sink::{SharedBuffer, Sink};

pub use global::default_logger;
