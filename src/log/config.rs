use crate::log::color::ColorScheme;
use crate::log::level::LogLevel;
use crate::log::logger::Logger;
use crate::log::options::{
    new_logger, with_colored, with_colors, with_format, with_level, with_sink, Format,
};
use crate::log::sink::Sink;
use anyhow::{Context, Result};
use serde::Deserialize;
use smart_default::SmartDefault;

/// 输出目标配置
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutputConfig {
    #[default]
    Stdout,
    Stderr,
    File {
        /// 日志文件路径，父目录不存在时自动创建
        path: String,
    },
}

/// Logger 配置
///
/// ```ignore
/// let config = LoggerConfig::from_json5(r#"
///     {
///         level: "debug",
///         format: "json",
///         output: { type: "file", path: "/var/log/app.log" }
///     }
/// "#)?;
/// let logger = config.build()?;
/// ```
#[derive(Debug, Clone, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct LoggerConfig {
    /// 日志级别
    #[default(LogLevel::Info)]
    pub level: LogLevel,

    /// 输出格式
    pub format: Format,

    /// 文本格式是否输出颜色
    #[default = true]
    pub colored: bool,

    /// 文本格式的级别配色
    pub colors: ColorScheme,

    /// 输出目标
    pub output: OutputConfig,
}

impl LoggerConfig {
    /// 从 JSON5 文本解析配置
    pub fn from_json5(text: &str) -> Result<Self> {
        json5::from_str(text).context("invalid logger config")
    }

    /// 按配置创建 Logger
    pub fn build(&self) -> Result<Logger> {
        let sink = match &self.output {
            OutputConfig::Stdout => Sink::stdout(),
            OutputConfig::Stderr => Sink::stderr(),
            OutputConfig::File { path } => {
                Sink::file(path).with_context(|| format!("open log file {}", path))?
            }
        };

        Ok(new_logger(vec![
            with_level(self.level),
            with_format(self.format),
            with_colored(self.colored),
            with_colors(self.colors),
            with_sink(sink),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::color::Color;
    use crate::log::handler::{JsonHandler, TextHandler};

    #[test]
    fn test_logger_config_default() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.format, Format::Text);
        assert!(config.colored);
        assert_eq!(config.colors, ColorScheme::default());
        assert_eq!(config.output, OutputConfig::Stdout);

        assert_eq!(LoggerConfig::from_json5("{}").unwrap(), config);
    }

    #[test]
    fn test_logger_config_from_json5() -> Result<()> {
        let config = LoggerConfig::from_json5(
            r#"
            {
                level: "warn",
                format: "json",
                colored: false,
                colors: { error: "magenta" },
                output: { type: "stderr" }
            }
            "#,
        )?;

        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.format, Format::Json);
        assert!(!config.colored);
        assert_eq!(config.colors.error, Color::Magenta);
        assert_eq!(config.output, OutputConfig::Stderr);
        Ok(())
    }

    #[test]
    fn test_logger_config_invalid_level() {
        let err = LoggerConfig::from_json5(r#"{ level: "verbose" }"#).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid log level"));
    }

    #[test]
    fn test_logger_config_build() -> Result<()> {
        let logger = LoggerConfig::from_json5(r#"{ format: "json", level: "debug" }"#)?.build()?;
        assert!(logger.handler().as_any().is::<JsonHandler>());
        assert!(logger.enabled(LogLevel::Debug));

        let logger = LoggerConfig::default().build()?;
        assert!(logger.handler().as_any().is::<TextHandler>());
        assert!(!logger.enabled(LogLevel::Debug));
        Ok(())
    }

    #[test]
    fn test_logger_config_file_output() -> Result<()> {
        let temp_dir = tempfile::TempDir::new()?;
        let path = temp_dir.path().join("logs").join("app.log");

        let config = LoggerConfig::from_json5(&format!(
            r#"{{ format: "json", output: {{ type: "file", path: "{}" }} }}"#,
            path.display()
        ))?;
        let logger = config.build()?;
        logger.error("disk failure")?;

        let contents = std::fs::read_to_string(&path)?;
        let value: serde_json::Value = serde_json::from_str(contents.trim_end())?;
        assert_eq!(value["severity"], "ERROR");
        assert_eq!(value["msg"], "disk failure");
        Ok(())
    }
}
