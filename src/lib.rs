pub mod api;
pub mod core;
pub mod ffi;

pub use crate::core::log::{emit, init_logging, LogLevel};
