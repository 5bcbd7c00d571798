//! 日志级别与各平台级别映射

/// 跨平台统一日志级别，数值与 Dart 侧枚举保持一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    Verbose = 0,
    #[default]
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Verbose,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// 解析原始级别，超出 `0..=5` 返回 `None`
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Verbose),
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Warn),
            4 => Some(Self::Error),
            5 => Some(Self::Fatal),
            _ => None,
        }
    }

    /// 解析原始级别，超出范围按 `Debug` 处理
    pub fn from_raw_or_default(raw: i32) -> Self {
        Self::from_raw(raw).unwrap_or_default()
    }

    pub fn as_raw(self) -> i32 {
        self as i32
    }

    pub fn letter(self) -> char {
        match self {
            Self::Verbose => 'V',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
            Self::Fatal => 'F',
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Self::Verbose,
            log::Level::Debug => Self::Debug,
            log::Level::Info => Self::Info,
            log::Level::Warn => Self::Warn,
            log::Level::Error => Self::Error,
        }
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Verbose => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error | LogLevel::Fatal => log::LevelFilter::Error,
        }
    }
}

/// 级别单字母缩写，超出范围为 `D`
pub fn level_letter(raw: i32) -> char {
    LogLevel::from_raw_or_default(raw).letter()
}

/// Android `android_LogPriority` 取值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AndroidPriority {
    Verbose = 2,
    Debug = 3,
    Info = 4,
    Warn = 5,
    Error = 6,
    Fatal = 7,
}

impl AndroidPriority {
    pub fn from_raw(raw: i32) -> Self {
        match LogLevel::from_raw(raw) {
            Some(LogLevel::Verbose) => Self::Verbose,
            Some(LogLevel::Debug) | None => Self::Debug,
            Some(LogLevel::Info) => Self::Info,
            Some(LogLevel::Warn) => Self::Warn,
            Some(LogLevel::Error) => Self::Error,
            Some(LogLevel::Fatal) => Self::Fatal,
        }
    }
}

/// Apple `os_log_type_t` 取值
///
/// 系统没有 warning 类型：Warn 记为 `Error`，Error 与 Fatal 记为 `Fault`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppleLogType {
    Default = 0x00,
    Info = 0x01,
    Debug = 0x02,
    Error = 0x10,
    Fault = 0x11,
}

impl AppleLogType {
    pub fn from_raw(raw: i32) -> Self {
        match LogLevel::from_raw(raw) {
            Some(LogLevel::Verbose) | Some(LogLevel::Debug) => Self::Debug,
            Some(LogLevel::Info) => Self::Info,
            Some(LogLevel::Warn) => Self::Error,
            Some(LogLevel::Error) | Some(LogLevel::Fatal) => Self::Fault,
            None => Self::Default,
        }
    }
}
