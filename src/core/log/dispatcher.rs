//! 按编译目标选择日志输出

use super::record::LogRecord;
use super::sink::LogSink;

#[cfg(target_os = "android")]
pub type PlatformSink = super::android::AndroidSink;

#[cfg(all(target_vendor = "apple", not(target_os = "android")))]
pub type PlatformSink = super::apple::AppleSink;

#[cfg(not(any(target_os = "android", target_vendor = "apple")))]
pub type PlatformSink = super::fallback::FallbackSink<std::io::Stdout>;

/// 当前编译目标的日志输出（无状态，每次调用新建）
pub fn platform_sink() -> PlatformSink {
    PlatformSink::default()
}

/// 写入一条平台日志，不会失败
pub fn emit(level: i32, tag: &str, message: &str) {
    emit_to(&platform_sink(), level, tag, message);
}

/// 同 [`emit`]，输出目标由调用方传入
pub fn emit_to<S: LogSink + ?Sized>(sink: &S, level: i32, tag: &str, message: &str) {
    sink.emit(&LogRecord::new(level, tag, message));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log::memory::MemorySink;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_emit_to_passes_arguments_through() {
        let sink = MemorySink::new();
        emit_to(&sink, 4, "AUTH", "login failed");

        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].raw_level, 4);
        assert_eq!(entries[0].tag, "AUTH");
        assert_eq!(entries[0].message, "login failed");
    }

    #[test]
    fn test_emit_to_dyn_sink() {
        let memory = Arc::new(MemorySink::new());
        let sink: Arc<dyn LogSink> = memory.clone();
        emit_to(sink.as_ref(), 1000, "", "");
        assert_eq!(memory.entries()[0].raw_level, 1000);
    }

    #[test]
    fn test_calls_are_independent() {
        let sink = MemorySink::new();
        emit_to(&sink, 2, "T", "same");
        emit_to(&sink, 2, "T", "same");
        emit_to(&sink, 3, "U", "other");

        let entries = sink.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], entries[1]);
        assert_eq!(entries[2].tag, "U");
    }

    #[test]
    fn test_concurrent_emit_to() {
        let sink = Arc::new(MemorySink::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for i in 0..50 {
                        emit_to(sink.as_ref(), t, &format!("T{}", t), &i.to_string());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker panicked");
        }
        assert_eq!(sink.len(), 200);
    }

    #[test]
    fn test_platform_emit_does_not_panic() {
        emit(0, "native_log", "platform smoke test");
        emit(-1, "", "");
    }
}
