use crate::log::color::ColorScheme;
use crate::log::handler::{HandlerOptions, JsonHandler, LogHandler, TextHandler, TextHandlerConfig};
use crate::log::level::LogLevel;
use crate::log::logger::Logger;
use crate::log::severity::marshal_level;
use crate::log::sink::Sink;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::sync::Arc;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// 彩色文本，面向终端
    #[default]
    Text,
    /// JSON，`level` 字段改写为 `severity`
    Json,
}

/// Logger 构造选项，每个选项独立生效，后出现的覆盖先出现的
#[derive(Debug, Clone)]
pub enum LoggerOption {
    Level(LogLevel),
    Format(Format),
    Sink(Sink),
    Colored(bool),
    Colors(ColorScheme),
}

/// 最低级别降到 DEBUG
pub fn with_debug() -> LoggerOption {
    LoggerOption::Level(LogLevel::Debug)
}

pub fn with_level(level: LogLevel) -> LoggerOption {
    LoggerOption::Level(level)
}

pub fn with_format(format: Format) -> LoggerOption {
    LoggerOption::Format(format)
}

pub fn with_sink(sink: Sink) -> LoggerOption {
    LoggerOption::Sink(sink)
}

/// 文本格式是否输出颜色，JSON 格式忽略
pub fn with_colored(colored: bool) -> LoggerOption {
    LoggerOption::Colored(colored)
}

/// 文本格式的级别配色，JSON 格式忽略
pub fn with_colors(colors: ColorScheme) -> LoggerOption {
    LoggerOption::Colors(colors)
}

#[derive(Debug, SmartDefault)]
struct Settings {
    #[default(LogLevel::Info)]
    level: LogLevel,
    format: Format,
    #[default(Sink::stdout())]
    sink: Sink,
    #[default = true]
    colored: bool,
    colors: ColorScheme,
}

impl Settings {
    fn apply(options: impl IntoIterator<Item = LoggerOption>) -> Self {
        let mut settings = Settings::default();
        for option in options {
            match option {
                LoggerOption::Level(level) => settings.level = level,
                LoggerOption::Format(format) => settings.format = format,
                LoggerOption::Sink(sink) => settings.sink = sink,
                LoggerOption::Colored(colored) => settings.colored = colored,
                LoggerOption::Colors(colors) => settings.colors = colors,
            }
        }
        settings
    }
}

/// 按选项创建处理器
///
/// 默认：INFO 级别、彩色文本、输出到标准输出。
pub fn new_handler(options: impl IntoIterator<Item = LoggerOption>) -> Arc<dyn LogHandler> {
    let settings = Settings::apply(options);
    match settings.format {
        Format::Text => Arc::new(TextHandler::new(
            settings.sink,
            TextHandlerConfig {
                level: settings.level,
                colored: settings.colored,
                colors: settings.colors,
            },
        )),
        Format::Json => Arc::new(JsonHandler::new(
            settings.sink,
            HandlerOptions {
                level: settings.level,
                replace_attr: Some(marshal_level(None)),
            },
        )),
    }
}

/// 按选项创建 Logger
///
/// ```ignore
/// let logger = new_logger(vec![with_debug(), with_format(Format::Json)]);
/// logger.info("application started")?;
/// ```
pub fn new_logger(options: impl IntoIterator<Item = LoggerOption>) -> Logger {
    Logger::new(new_handler(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::sink::SharedBuffer;

    #[test]
    fn test_new_logger() {
        struct Case {
            name: &'static str,
            options: Vec<LoggerOption>,
            want_level: LogLevel,
            want_format: Format,
        }

        let cases = vec![
            Case {
                name: "default",
                options: Vec::new(),
                want_level: LogLevel::Info,
                want_format: Format::Text,
            },
            Case {
                name: "debug",
                options: vec![with_debug()],
                want_level: LogLevel::Debug,
                want_format: Format::Text,
            },
            Case {
                name: "json",
                options: vec![with_format(Format::Json)],
                want_level: LogLevel::Info,
                want_format: Format::Json,
            },
        ];

        for case in cases {
            let logger = new_logger(case.options);
            let handler = logger.handler();

            assert!(handler.enabled(case.want_level), "{}", case.name);
            for level in LogLevel::ALL {
                assert_eq!(
                    handler.enabled(level),
                    level >= case.want_level,
                    "{} {:?}",
                    case.name,
                    level
                );
            }

            match case.want_format {
                Format::Json => assert!(handler.as_any().is::<JsonHandler>(), "{}", case.name),
                Format::Text => assert!(handler.as_any().is::<TextHandler>(), "{}", case.name),
            }
        }
    }

    #[test]
    fn test_later_options_override_earlier() {
        let handler = new_handler(vec![
            with_format(Format::Json),
            with_debug(),
            with_level(LogLevel::Error),
            with_format(Format::Text),
        ]);
        assert!(handler.as_any().is::<TextHandler>());
        assert!(!handler.enabled(LogLevel::Warn));
        assert!(handler.enabled(LogLevel::Error));
    }

    #[test]
    fn test_text_options_flow_into_handler() {
        let sink = Sink::new(SharedBuffer::new());
        let colors = ColorScheme {
            info: crate::log::color::Color::Cyan,
            ..Default::default()
        };
        let handler = new_handler(vec![
            with_sink(sink.clone()),
            with_colored(false),
            with_colors(colors),
        ]);

        let text = handler
            .as_any()
            .downcast_ref::<TextHandler>()
            .expect("default format should be text");
        assert!(text.sink().ptr_eq(&sink));
        assert!(!text.config().colored);
        assert_eq!(text.config().colors, colors);
    }

    #[test]
    fn test_json_logger_emits_severity() {
        let buffer = SharedBuffer::new();
        let logger = new_logger(vec![
            with_format(Format::Json),
            with_debug(),
            with_sink(Sink::new(buffer.clone())),
        ]);

        logger.debug("d").unwrap();
        logger.warn("w").unwrap();

        let values: Vec<serde_json::Value> = buffer
            .lines()
            .iter()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(values[0]["severity"], "DEBUG");
        assert_eq!(values[1]["severity"], "WARNING");
        assert!(values[1].get("level").is_none());
    }

    #[test]
    fn test_format_deserialize() {
        assert_eq!(serde_json::from_str::<Format>("\"json\"").unwrap(), Format::Json);
        assert_eq!(serde_json::from_str::<Format>("\"text\"").unwrap(), Format::Text);
        assert!(serde_json::from_str::<Format>("\"xml\"").is_err());
    }
}
