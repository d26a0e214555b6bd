use crate::log::level::LogLevel;
use serde::Deserialize;
use smart_default::SmartDefault;

/// ANSI 重置序列
pub const RESET: &str = "\x1b[0m";

/// 终端前景色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

impl Color {
    /// ANSI 前景色编号
    pub fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::Gray => 90,
        }
    }

    /// 设置前景色的转义序列
    pub fn escape(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::White => "\x1b[37m",
            Color::Gray => "\x1b[90m",
        }
    }
}

/// 用颜色包裹文本：`<设置前景色><文本><重置>`，不插入任何空白
pub fn colorize(color: Color, s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 10);
    push_colorized(&mut out, color, s);
    out
}

/// 与 [`colorize`] 相同，直接写入缓冲区
pub(crate) fn push_colorized(buf: &mut String, color: Color, s: &str) {
    buf.push_str(color.escape());
    buf.push_str(s);
    buf.push_str(RESET);
}

/// 日志级别到颜色的映射表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, SmartDefault)]
#[serde(default)]
pub struct ColorScheme {
    #[default(Color::Gray)]
    pub debug: Color,
    #[default(Color::Blue)]
    pub info: Color,
    #[default(Color::Yellow)]
    pub warn: Color,
    #[default(Color::Red)]
    pub error: Color,
}

impl ColorScheme {
    pub fn for_level(&self, level: LogLevel) -> Color {
        match level {
            LogLevel::Debug => self.debug,
            LogLevel::Info => self.info,
            LogLevel::Warn => self.warn,
            LogLevel::Error => self.error,
        }
    }
}
