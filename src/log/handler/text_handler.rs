use crate::log::color::{push_colorized, ColorScheme};
use crate::log::error::HandlerError;
use crate::log::handler::{format_timestamp, LogHandler, Scope};
use crate::log::level::LogLevel;
use crate::log::log_record::{Attr, LogRecord, Value};
use crate::log::severity::severity;
use crate::log::sink::Sink;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::any::Any;
use std::fmt::Write;
use std::sync::Arc;

/// 级别标签的显示宽度，按最长的 `WARNING` 对齐
const LEVEL_WIDTH: usize = 7;

/// TextHandler 配置
#[derive(Debug, Clone, Deserialize, SmartDefault)]
#[serde(default)]
pub struct TextHandlerConfig {
    /// 最低启用级别
    #[default(LogLevel::Info)]
    pub level: LogLevel,

    /// 是否启用颜色输出
    #[default = true]
    pub colored: bool,

    /// 级别到颜色的映射
    pub colors: ColorScheme,
}

/// 彩色文本处理器
///
/// 每条记录输出一行:
///
/// ```text
/// [2025-01-19T12:34:56.789Z] INFO    user logged in user_id=12345 http.method=GET
/// ```
///
/// 级别标签与 JSON 输出的 `severity` 一致。只有级别标签带颜色，分组下的属性键用 `.` 连接。
/// 消息、属性键和分组名中的控制字符会被转义，一条记录始终只占一行。
#[derive(Debug, Clone)]
pub struct TextHandler {
    config: Arc<TextHandlerConfig>,
    sink: Sink,
    scope: Scope,
}

impl TextHandler {
    pub fn new(sink: Sink, config: TextHandlerConfig) -> Self {
        Self {
            config: Arc::new(config),
            sink,
            scope: Scope::default(),
        }
    }

    pub fn config(&self) -> &TextHandlerConfig {
        &self.config
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    fn render(&self, buf: &mut String, record: &LogRecord) {
        buf.push('[');
        buf.push_str(&format_timestamp(record.timestamp));
        buf.push_str("] ");

        let label = severity(record.level);
        if self.config.colored {
            let color = record
                .color
                .unwrap_or_else(|| self.config.colors.for_level(record.level));
            push_colorized(buf, color, label);
        } else {
            buf.push_str(label);
        }
        for _ in label.len()..LEVEL_WIDTH {
            buf.push(' ');
        }
        buf.push(' ');

        push_escaped(buf, &record.message);

        self.scope.walk(&record.attrs, |groups, attr| {
            buf.push(' ');
            for group in groups {
                push_escaped(buf, group);
                buf.push('.');
            }
            push_escaped(buf, &attr.key);
            buf.push('=');
            push_value(buf, &attr.value);
        });

        buf.push('\n');
    }
}

impl LogHandler for TextHandler {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.config.level
    }

    fn handle(&self, record: &LogRecord) -> Result<(), HandlerError> {
        self.sink.write_with(|buf| self.render(buf, record))
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn LogHandler> {
        Arc::new(Self {
            config: Arc::clone(&self.config),
            sink: self.sink.clone(),
            scope: self.scope.with_attrs(attrs),
        })
    }

    fn with_group(&self, name: &str) -> Arc<dyn LogHandler> {
        Arc::new(Self {
            config: Arc::clone(&self.config),
            sink: self.sink.clone(),
            scope: self.scope.with_group(name),
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// 转义控制字符，换行不会拆开记录，终端转义序列也不会原样输出
fn push_escaped(buf: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(buf, "\\u{{{:x}}}", c as u32);
            }
            _ => buf.push(ch),
        }
    }
}

fn push_value(buf: &mut String, value: &Value) {
    match value {
        Value::String(s) if needs_quoting(s) => {
            let _ = write!(buf, "{:?}", s);
        }
        Value::String(s) => buf.push_str(s),
        Value::Level(level) => buf.push_str(severity(*level)),
        other => {
            let _ = write!(buf, "{}", other);
        }
    }
}

fn needs_quoting(s: &str) -> bool {
    s.is_empty()
        || s.chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '=' || c == '"')
}
