//! 标准输出日志（非 Android / Apple 平台）

use super::error::LogError;
use super::record::LogRecord;
use super::sink::LogSink;
use super::timestamp::now_timestamp;
use std::io::{self, Stdout, Write};
use std::sync::Mutex;

/// 写入 `[<timestamp>] [<tag>] <message>`，每行写完立即 flush
pub struct FallbackSink<W: Write + Send = Stdout> {
    writer: Mutex<W>,
}

impl FallbackSink<Stdout> {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for FallbackSink<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write + Send> FallbackSink<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> LogSink for FallbackSink<W> {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), LogError> {
        let line = record.fallback_line(&now_timestamp());
        let mut writer = self.writer.lock().map_err(|_| LogError::Poisoned)?;
        // 每行一次 write_all，并发时行不会交错
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
