//! 进程级默认 Logger 测试
//!
//! 全局状态只能初始化一次，因此放在独立的测试二进制中，且只有一个测试函数。

use slogger::log::{
    global, new_logger, with_format, with_sink, Format, JsonHandler, SharedBuffer, Sink,
};

#[test]
fn test_global_init_once() {
    let buffer = SharedBuffer::new();
    let logger = new_logger(vec![
        with_format(Format::Json),
        with_sink(Sink::new(buffer.clone())),
    ]);

    global::init(logger).expect("first init should succeed");
    assert!(global::init(new_logger(Vec::new())).is_err());

    assert!(global::default_logger().handler().as_any().is::<JsonHandler>());

    global::info("service ready").unwrap();
    global::debug("not enabled").unwrap();
    global::success("migrated", Vec::new()).unwrap();

    let lines = buffer.lines();
    assert_eq!(lines.len(), 2);
    let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(value["severity"], "INFO");
    assert_eq!(value["msg"], "service ready");
}
