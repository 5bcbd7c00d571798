use super::level::{level_letter, LogLevel};
use super::error::LogError;
use std::ffi::CString;

/// 单次日志调用的参数，生命周期仅限本次调用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord<'a> {
    pub raw_level: i32,
    pub tag: &'a str,
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    pub fn new(raw_level: i32, tag: &'a str, message: &'a str) -> Self {
        Self {
            raw_level,
            tag,
            message,
        }
    }

    pub fn with_level(level: LogLevel, tag: &'a str, message: &'a str) -> Self {
        Self::new(level.as_raw(), tag, message)
    }

    pub fn letter(&self) -> char {
        level_letter(self.raw_level)
    }

    /// 标准输出格式：`[<timestamp>] [<tag>] <message>` 加换行
    pub fn fallback_line(&self, timestamp: &str) -> String {
        format!("[{}] [{}] {}\n", timestamp, self.tag, self.message)
    }

    /// os_log 格式：`[<timestamp>] [<letter>] [<tag>] <message>`
    ///
    /// tag 与 message 各自在第一个 NUL 处截断，结果可直接转为 C 字符串
    pub fn unified_text(&self, timestamp: &str) -> String {
        format!(
            "[{}] [{}] [{}] {}",
            truncate_at_nul(timestamp),
            self.letter(),
            truncate_at_nul(self.tag),
            truncate_at_nul(self.message)
        )
    }
}

/// C 字符串在第一个 NUL 处结束，截断而不是拒绝
pub fn truncate_at_nul(text: &str) -> &str {
    match text.find('\0') {
        Some(end) => &text[..end],
        None => text,
    }
}

pub fn to_c_string(text: &str) -> Result<CString, LogError> {
    Ok(CString::new(truncate_at_nul(text))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_line() {
        let record = LogRecord::new(4, "AUTH", "login failed");
        assert_eq!(
            record.fallback_line("2024-01-02 03:04:05.006"),
            "[2024-01-02 03:04:05.006] [AUTH] login failed\n"
        );
    }

    #[test]
    fn test_unified_text() {
        let record = LogRecord::with_level(LogLevel::Warn, "NET", "slow response");
        assert_eq!(
            record.unified_text("2024-01-02 03:04:05.006"),
            "[2024-01-02 03:04:05.006] [W] [NET] slow response"
        );
    }

    #[test]
    fn test_empty_fields_kept() {
        let record = LogRecord::new(2, "", "");
        assert_eq!(record.fallback_line("ts"), "[ts] [] \n");
        assert_eq!(record.unified_text("ts"), "[ts] [I] [] ");
    }

    #[test]
    fn test_out_of_range_record() {
        let record = LogRecord::new(17, "t", "m");
        assert_eq!(record.letter(), 'D');
    }

    #[test]
    fn test_unified_text_truncates_each_field() {
        let record = LogRecord::new(1, "A\0B", "hello");
        let text = record.unified_text("ts");
        assert_eq!(text, "[ts] [D] [A] hello");
        assert!(!text.contains('\0'));

        let record = LogRecord::new(4, "AUTH", "login\0 secret");
        assert_eq!(record.unified_text("ts"), "[ts] [E] [AUTH] login");
    }

    #[test]
    fn test_to_c_string_truncates_at_nul() {
        let c = to_c_string("abc\0def").expect("conversion succeeds");
        assert_eq!(c.as_bytes(), b"abc");
        let c = to_c_string("plain").expect("conversion succeeds");
        assert_eq!(c.as_bytes(), b"plain");
    }
}
