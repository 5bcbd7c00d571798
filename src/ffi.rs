//! 供 `dart:ffi` 调用的 C ABI 导出

use crate::core::log::{emit_to, platform_sink, LogSink};
use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// 写入一条平台日志
///
/// `tag` 或 `message` 为空指针时直接返回；非法 UTF-8 按替换字符处理
///
/// # Safety
/// 非空的 `tag` / `message` 必须指向以 NUL 结尾、在调用期间有效的字符串
#[no_mangle]
pub unsafe extern "C" fn emit_log(level: i32, tag: *const c_char, message: *const c_char) {
    emit_log_to(&platform_sink(), level, tag, message);
}

/// 旧版插件导出的符号名，行为同 [`emit_log`]
///
/// # Safety
/// 同 [`emit_log`]
#[no_mangle]
pub unsafe extern "C" fn custom_log(level: i32, tag: *const c_char, message: *const c_char) {
    emit_log(level, tag, message);
}

unsafe fn emit_log_to<S: LogSink + ?Sized>(
    sink: &S,
    level: i32,
    tag: *const c_char,
    message: *const c_char,
) {
    if tag.is_null() || message.is_null() {
        return;
    }
    let tag = CStr::from_ptr(tag).to_string_lossy();
    let message = CStr::from_ptr(message).to_string_lossy();
    // never unwind into the caller's frames
    let _ = catch_unwind(AssertUnwindSafe(|| emit_to(sink, level, &tag, &message)));
}
