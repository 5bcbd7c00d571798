//! 原生日志 - Dart 侧入口

use crate::core::log::{self, LogLevel, LoggerConfig};
use flutter_rust_bridge::frb;

/// 写入一条平台原生日志
///
/// level: 0=Verbose 1=Debug 2=Info 3=Warn 4=Error 5=Fatal，其他值按 Debug 处理
///
/// ```dart
/// nativeLog(level: 4, tag: "AUTH", message: "login failed");
/// ```
#[frb(sync)]
pub fn native_log(level: i32, tag: String, message: String) {
    log::emit(level, &tag, &message);
}

/// 安装 Rust 侧 `log` 日志输出（重复调用无副作用）
#[frb(sync)]
pub fn init_native_logging(tag: Option<String>, max_level: i32) {
    let max_level = LogLevel::from_raw_or_default(max_level);
    let mut config = LoggerConfig::default().with_max_level(max_level.into());
    if let Some(tag) = tag {
        config = config.with_tag(tag);
    }
    log::init_logging_with(config);
}
