//! `log` crate 门面桥接：库内部的 `log::info!` 等调用走平台日志

use super::level::LogLevel;
use super::record::{truncate_at_nul, LogRecord};
use super::sink::LogSink;
use log::{info, LevelFilter, Metadata, Record};
use once_cell::sync::OnceCell;

pub const DEFAULT_TAG: &str = "native_log";

/// 门面日志配置（tag + 最大级别）
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    tag: Option<String>,
    max_level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            tag: None,
            max_level: LevelFilter::Debug,
        }
    }
}

impl LoggerConfig {
    /// 所有日志使用的 tag；未设置时使用 record 的 target
    ///
    /// tag 会交给 C 接口，在第一个 NUL 处截断
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let mut tag = tag.into();
        let len = truncate_at_nul(&tag).len();
        tag.truncate(len);
        self.tag = Some(tag);
        self
    }

    pub fn with_max_level(mut self, max_level: LevelFilter) -> Self {
        self.max_level = max_level;
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn max_level(&self) -> LevelFilter {
        self.max_level
    }
}

/// 把 `log` 记录转发到 [`LogSink`]
pub struct SinkLogger<S> {
    sink: S,
    config: LoggerConfig,
}

impl<S: LogSink> SinkLogger<S> {
    pub fn new(sink: S, config: LoggerConfig) -> Self {
        Self { sink, config }
    }

    #[cfg(test)]
    pub(crate) fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: LogSink> log::Log for SinkLogger<S> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.config.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        let tag = self.config.tag().unwrap_or_else(|| record.target());
        self.sink.emit(&LogRecord::with_level(
            LogLevel::from(record.level()),
            tag,
            &message,
        ));
    }

    fn flush(&self) {}
}

#[cfg(not(target_os = "android"))]
static LOGGER: OnceCell<SinkLogger<super::dispatcher::PlatformSink>> = OnceCell::new();

#[cfg(target_os = "android")]
static ANDROID_INSTALLED: OnceCell<()> = OnceCell::new();

/// 安装全局 `log` 日志输出，仅首次调用生效
pub fn init_logging_with(config: LoggerConfig) {
    let max_level = config.max_level();

    #[cfg(target_os = "android")]
    {
        if ANDROID_INSTALLED.set(()).is_err() {
            return;
        }
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(max_level)
                .with_tag(config.tag().unwrap_or(DEFAULT_TAG)),
        );
    }

    #[cfg(not(target_os = "android"))]
    {
        let mut created = false;
        let logger = LOGGER.get_or_init(|| {
            created = true;
            SinkLogger::new(super::dispatcher::platform_sink(), config)
        });
        // 宿主可能已经设置了全局 logger
        if !created || log::set_logger(logger).is_err() {
            return;
        }
        log::set_max_level(max_level);
    }

    info!("📝 native_log: logger installed (max level {})", max_level);
}

pub fn init_logging() {
    init_logging_with(LoggerConfig::default().with_tag(DEFAULT_TAG));
}
