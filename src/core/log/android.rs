//! Android logcat 输出

use super::error::LogError;
use super::level::AndroidPriority;
use super::record::{to_c_string, LogRecord};
use super::sink::LogSink;
use android_log_sys::__android_log_write;
use std::os::raw::c_int;

/// 以调用方 tag 原样写入 message，时间戳由 logcat 自带
#[derive(Debug, Clone, Copy, Default)]
pub struct AndroidSink;

impl LogSink for AndroidSink {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), LogError> {
        let priority = AndroidPriority::from_raw(record.raw_level);
        let tag = to_c_string(record.tag)?;
        let message = to_c_string(record.message)?;

        let code = unsafe { __android_log_write(priority as c_int, tag.as_ptr(), message.as_ptr()) };
        if code < 0 {
            return Err(LogError::Rejected(code));
        }
        Ok(())
    }
}
