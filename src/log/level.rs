use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 日志级别
///
/// 每个级别对应一个数值档位，档位之间留有间隔，
/// 外部传入的任意数值可以通过 [`LogLevel::from_i64`] 归并到最近的下一档。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    /// 调试信息
    Debug = -4,
    /// 一般信息
    #[default]
    Info = 0,
    /// 警告信息
    Warn = 4,
    /// 错误信息
    Error = 8,
}

impl LogLevel {
    /// 所有级别，按从低到高排列
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// 级别对应的数值档位
    pub fn as_i64(self) -> i64 {
        self as i64
    }

    /// 将任意数值归并到不高于它的最近档位，低于 Debug 的数值归为 Debug
    pub fn from_i64(n: i64) -> Self {
        match n {
            n if n >= LogLevel::Error.as_i64() => LogLevel::Error,
            n if n >= LogLevel::Warn.as_i64() => LogLevel::Warn,
            n if n >= LogLevel::Info.as_i64() => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }

    /// 级别的原生名称
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("invalid log level: {}", s)),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
