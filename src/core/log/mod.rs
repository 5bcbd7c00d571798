#[cfg(target_os = "android")]
pub mod android;
#[cfg(all(target_vendor = "apple", not(target_os = "android")))]
pub mod apple;
pub mod dispatcher;
pub mod error;
pub mod facade;
pub mod fallback;
pub mod level;
pub mod memory;
pub mod record;
pub mod sink;
pub mod timestamp;

#[cfg(target_os = "android")]
pub use android::AndroidSink;
#[cfg(all(target_vendor = "apple", not(target_os = "android")))]
pub use apple::AppleSink;
pub use dispatcher::{emit, emit_to, platform_sink, PlatformSink};
pub use error::LogError;
pub use facade::{init_logging, init_logging_with, LoggerConfig, SinkLogger, DEFAULT_TAG};
pub use fallback::FallbackSink;
pub use level::{level_letter, AndroidPriority, AppleLogType, LogLevel};
pub use memory::{CapturedLog, MemorySink};
pub use record::LogRecord;
pub use sink::LogSink;
