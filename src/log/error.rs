use thiserror::Error;

/// 日志处理错误
///
/// 格式化本身不会失败，唯一的错误来源是写入输出目标。
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("写入日志失败: {0}")]
    Write(#[from] std::io::Error),
}
