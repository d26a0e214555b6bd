use crate::log::error::HandlerError;
use anyhow::Result;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

/// 单条记录渲染后缓冲区保留的最大容量，超出时收缩，避免一条超长日志长期占用内存
const MAX_RETAINED_CAPACITY: usize = 64 * 1024;

struct SinkInner {
    writer: Box<dyn Write + Send>,
    buf: String,
}

/// 日志输出目标
///
/// 持有底层 writer 和可复用的格式化缓冲区，二者由同一把锁保护。
/// 克隆得到的 Sink 指向同一个目标，共享锁和缓冲区。
#[derive(Clone)]
pub struct Sink {
    inner: Arc<Mutex<SinkInner>>,
}

impl Sink {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SinkInner {
                writer: Box::new(writer),
                buf: String::with_capacity(256),
            })),
        }
    }

    /// 标准输出
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// 标准错误
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// 以追加模式打开文件，父目录不存在时自动创建
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        Ok(Self::new(file))
    }

    /// 两个 Sink 是否指向同一个目标
    pub fn ptr_eq(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// 在锁内清空缓冲区、渲染并一次性写出
    ///
    /// 渲染和写出作为一个整体执行，并发调用不会交错输出。
    pub(crate) fn write_with<F>(&self, render: F) -> std::result::Result<(), HandlerError>
    where
        F: FnOnce(&mut String),
    {
        // 渲染不会 panic 到一半留下坏状态：缓冲区每次都会先清空
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let SinkInner { writer, buf } = &mut *guard;

        buf.clear();
        render(buf);

        let written = writer
            .write_all(buf.as_bytes())
            .and_then(|_| writer.flush());

        if buf.capacity() > MAX_RETAINED_CAPACITY {
            buf.clear();
            buf.shrink_to(MAX_RETAINED_CAPACITY / 16);
        }

        written.map_err(HandlerError::from)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("ptr", &Arc::as_ptr(&self.inner))
            .finish()
    }
}

/// 内存缓冲 writer，可以克隆后交给 Sink，再从另一份克隆读取输出
#[derive(Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已写入的全部内容
    pub fn contents(&self) -> String {
        let data = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&data).into_owned()
    }

    /// 按行拆分的内容
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
