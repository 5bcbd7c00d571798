//! 日志输出目标抽象

use super::error::LogError;
use super::record::LogRecord;

/// 日志输出目标
///
/// `write` 返回错误，调用方统一走 `emit`，错误不会向外传播
pub trait LogSink: Send + Sync {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), LogError>;

    /// 尽力写入，忽略错误
    fn emit(&self, record: &LogRecord<'_>) {
        let _ = self.write(record);
    }
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), LogError> {
        (**self).write(record)
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), LogError> {
        (**self).write(record)
    }
}

impl<S: LogSink + ?Sized> LogSink for std::sync::Arc<S> {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), LogError> {
        (**self).write(record)
    }
}
