//! iOS / macOS unified logging 输出

use super::error::LogError;
use super::level::AppleLogType;
use super::record::LogRecord;
use super::sink::LogSink;
use super::timestamp::now_timestamp;
use oslog::{Level, OsLog};

/// 写入默认 os_log 句柄：`[<timestamp>] [<L>] [<tag>] <message>`
///
/// oslog 以 `%{public}s` 输出，内容不会被系统隐藏
#[derive(Debug, Clone, Copy, Default)]
pub struct AppleSink;

impl From<AppleLogType> for Level {
    fn from(ty: AppleLogType) -> Self {
        match ty {
            AppleLogType::Default => Level::Default,
            AppleLogType::Info => Level::Info,
            AppleLogType::Debug => Level::Debug,
            AppleLogType::Error => Level::Error,
            AppleLogType::Fault => Level::Fault,
        }
    }
}

impl LogSink for AppleSink {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), LogError> {
        let level = AppleLogType::from_raw(record.raw_level);
        let text = record.unified_text(&now_timestamp());
        OsLog::global().with_level(level.into(), &text);
        Ok(())
    }
}
