use crate::log::color::Color;
use crate::log::level::LogLevel;
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;
use std::fmt;
use std::time::SystemTime;

/// 属性值，支持多种类型
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    I64(i64),
    U64(u64),
    F64(f64),
    Bool(bool),
    Null,
    /// 任意 JSON 兼容的数据（自定义结构体也序列化为此形式）
    Json(JsonValue),
    /// 日志级别
    Level(LogLevel),
    /// 分组，内部属性按插入顺序排列
    Group(Vec<Attr>),
}

impl Value {
    /// 从任意实现了 Serialize 的自定义结构体创建 Value
    ///
    /// 序列化失败时退化为描述错误的字符串，不会丢弃整条日志
    ///
    /// ```ignore
    /// #[derive(Serialize)]
    /// struct User { id: i64, name: String }
    ///
    /// let value = Value::from_struct(User { id: 123, name: "alice".to_string() });
    /// ```
    pub fn from_struct<T: Serialize>(value: T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => Value::Json(json),
            Err(e) => Value::String(format!("!BADVALUE: {}", e)),
        }
    }

    /// 使用 Debug 输出作为字符串值
    pub fn debug<T: fmt::Debug>(value: &T) -> Self {
        Value::String(format!("{:?}", value))
    }

    /// 转换为 JSON 值；非有限浮点数无法表示为 JSON 数字，转为字符串
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::String(s) => JsonValue::String(s.clone()),
            Value::I64(n) => JsonValue::from(*n),
            Value::U64(n) => JsonValue::from(*n),
            Value::F64(n) => serde_json::Number::from_f64(*n)
                .map(JsonValue::Number)
                .unwrap_or_else(|| JsonValue::String(n.to_string())),
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Null => JsonValue::Null,
            Value::Json(v) => v.clone(),
            Value::Level(l) => JsonValue::String(l.to_string()),
            Value::Group(attrs) => JsonValue::Object(
                attrs
                    .iter()
                    .map(|a| (a.key.clone(), a.value.to_json()))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::I64(n) => write!(f, "{}", n),
            Value::U64(n) => write!(f, "{}", n),
            Value::F64(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
            Value::Json(v) => write!(f, "{}", v),
            Value::Level(l) => write!(f, "{}", l),
            Value::Group(attrs) => {
                f.write_str("[")?;
                for (i, attr) in attrs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}={}", attr.key, attr.value)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::I64(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::I64(n as i64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::U64(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::U64(n as u64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::U64(n as u64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::F64(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::F64(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<JsonValue> for Value {
    fn from(v: JsonValue) -> Self {
        Value::Json(v)
    }
}

impl From<LogLevel> for Value {
    fn from(l: LogLevel) -> Self {
        Value::Level(l)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// 键值对属性
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// 创建分组属性
    pub fn group(key: impl Into<String>, attrs: impl IntoIterator<Item = Attr>) -> Self {
        Self {
            key: key.into(),
            value: Value::Group(attrs.into_iter().collect()),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V)> for Attr {
    fn from((key, value): (K, V)) -> Self {
        Attr::new(key, value)
    }
}

/// 日志记录
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// 时间戳
    pub timestamp: SystemTime,
    /// 日志级别
    pub level: LogLevel,
    /// 日志消息
    pub message: String,
    /// 属性，保持插入顺序
    pub attrs: Vec<Attr>,
    /// 调用方指定的显示颜色，仅文本输出使用
    pub color: Option<Color>,
}

impl LogRecord {
    /// 创建新的日志记录
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: SystemTime::now(),
            level,
            message: message.into(),
            attrs: Vec::new(),
            color: None,
        }
    }

    /// 添加属性
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.push(Attr::new(key, value));
        self
    }

    /// 批量添加属性
    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.attrs.extend(attrs);
        self
    }

    pub fn with_timestamp(mut self, timestamp: SystemTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// 指定显示颜色，覆盖按级别选择的颜色
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}
