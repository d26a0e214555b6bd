//! 日志级别到外部 severity 字段的转换
//!
//! 机器可读输出中，原生的 `level` 字段被改写为 `severity`，
//! 取值为 `DEBUG`、`INFO`、`WARNING`、`ERROR` 之一。

use crate::log::level::LogLevel;
use crate::log::log_record::{Attr, Value};
use std::sync::Arc;

/// 原生级别字段名
pub const LEVEL_KEY: &str = "level";

/// 外部级别字段名
pub const SEVERITY_KEY: &str = "severity";

/// 属性改写钩子：编码器对每个属性调用一次，参数为所在分组路径和属性本身
pub type ReplaceAttr = Arc<dyn Fn(&[String], Attr) -> Attr + Send + Sync>;

/// 级别对应的外部名称
pub fn severity(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Debug => "DEBUG",
        LogLevel::Info => "INFO",
        LogLevel::Warn => "WARNING",
        LogLevel::Error => "ERROR",
    }
}

/// 改写级别属性，其他属性原样返回
///
/// 分组路径不参与判断。
pub fn translate_level(_groups: &[String], attr: Attr) -> Attr {
    if attr.key != LEVEL_KEY {
        return attr;
    }

    let label = match &attr.value {
        Value::Level(level) => severity(*level).to_string(),
        Value::I64(n) => severity(LogLevel::from_i64(*n)).to_string(),
        Value::U64(n) => {
            let n = i64::try_from(*n).unwrap_or(i64::MAX);
            severity(LogLevel::from_i64(n)).to_string()
        }
        Value::String(s) => match s.parse::<LogLevel>() {
            Ok(level) => severity(level).to_string(),
            Err(_) => s.clone(),
        },
        other => other.to_string(),
    };

    Attr::new(SEVERITY_KEY, label)
}

/// 构造级别改写钩子
///
/// `next` 用于串联已有的钩子：非级别属性交给它处理。
pub fn marshal_level(next: Option<ReplaceAttr>) -> ReplaceAttr {
    Arc::new(move |groups: &[String], attr: Attr| {
        if attr.key == LEVEL_KEY {
            return translate_level(groups, attr);
        }
        match &next {
            Some(next) => next(groups, attr),
            None => attr,
        }
    })
}
