use crate::log::error::HandlerError;
use crate::log::handler::{
    format_timestamp, HandlerOptions, LogHandler, Scope, MESSAGE_KEY, TIME_KEY,
};
use crate::log::level::LogLevel;
use crate::log::log_record::{Attr, LogRecord, Value};
use crate::log::severity::LEVEL_KEY;
use crate::log::sink::Sink;
use serde_json::{Map, Value as JsonValue};
use std::any::Any;
use std::sync::Arc;

/// JSON 处理器
///
/// 每条记录输出一行 JSON 对象，依次为 `time`、`level`、`msg` 和属性，分组输出为嵌套对象。
/// 所有非分组属性（包括内置的三个字段）在编码前都会经过 `replace_attr` 钩子。
/// 改写后顶层键（或顶层分组名）与内置字段同名的属性会被丢弃，内置字段的值不会被覆盖。
#[derive(Debug, Clone)]
pub struct JsonHandler {
    options: Arc<HandlerOptions>,
    sink: Sink,
    scope: Scope,
}

impl JsonHandler {
    pub fn new(sink: Sink, options: HandlerOptions) -> Self {
        Self {
            options: Arc::new(options),
            sink,
            scope: Scope::default(),
        }
    }

    pub fn options(&self) -> &HandlerOptions {
        &self.options
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    fn encode(&self, record: &LogRecord) -> String {
        let mut root = Map::new();

        let builtin = [
            Attr::new(TIME_KEY, format_timestamp(record.timestamp)),
            Attr::new(LEVEL_KEY, Value::Level(record.level)),
            Attr::new(MESSAGE_KEY, record.message.as_str()),
        ];
        for attr in builtin {
            if let Some(attr) = self.replace(&[], attr) {
                root.insert(attr.key, attr.value.to_json());
            }
        }

        // 内置字段优先，顶层键或顶层分组与之同名的属性丢弃
        let reserved: Vec<String> = root.keys().cloned().collect();
        self.scope.walk(&record.attrs, |groups, attr| {
            let attr = match self.replace(groups, attr.clone()) {
                Some(attr) => attr,
                None => return,
            };
            if reserved.contains(groups.first().unwrap_or(&attr.key)) {
                return;
            }
            insert_at(&mut root, groups, attr);
        });

        JsonValue::Object(root).to_string()
    }

    /// 调用改写钩子，键为空的属性返回 None
    fn replace(&self, groups: &[String], attr: Attr) -> Option<Attr> {
        let attr = match &self.options.replace_attr {
            Some(replace) => replace(groups, attr),
            None => attr,
        };
        if attr.key.is_empty() {
            None
        } else {
            Some(attr)
        }
    }
}

fn insert_at(root: &mut Map<String, JsonValue>, groups: &[String], attr: Attr) {
    let mut target = root;
    for group in groups {
        let slot = target
            .entry(group.clone())
            .or_insert_with(|| JsonValue::Object(Map::new()));
        if !slot.is_object() {
            *slot = JsonValue::Object(Map::new());
        }
        target = match slot.as_object_mut() {
            Some(map) => map,
            None => return,
        };
    }
    target.insert(attr.key, attr.value.to_json());
}

impl LogHandler for JsonHandler {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.options.level
    }

    fn handle(&self, record: &LogRecord) -> Result<(), HandlerError> {
        let line = self.encode(record);
        self.sink.write_with(|buf| {
            buf.push_str(&line);
            buf.push('\n');
        })
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn LogHandler> {
        Arc::new(Self {
            options: Arc::clone(&self.options),
            sink: self.sink.clone(),
            scope: self.scope.with_attrs(attrs),
        })
    }

    fn with_group(&self, name: &str) -> Arc<dyn LogHandler> {
        Arc::new(Self {
            options: Arc::clone(&self.options),
            sink: self.sink.clone(),
            scope: self.scope.with_group(name),
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
