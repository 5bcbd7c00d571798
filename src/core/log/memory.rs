use super::error::LogError;
use super::record::LogRecord;
use super::sink::LogSink;
use std::sync::Mutex;

/// 捕获到的日志（拥有所有权的副本）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLog {
    pub raw_level: i32,
    pub tag: String,
    pub message: String,
}

/// 内存日志输出，测试中替代平台日志
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<CapturedLog>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<CapturedLog> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for MemorySink {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), LogError> {
        let mut entries = self.entries.lock().map_err(|_| LogError::Poisoned)?;
        entries.push(CapturedLog {
            raw_level: record.raw_level,
            tag: record.tag.to_string(),
            message: record.message.to_string(),
        });
        Ok(())
    }
}
