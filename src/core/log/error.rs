use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Interior NUL byte: {0}")]
    Nul(#[from] std::ffi::NulError),
    #[error("Writer lock poisoned")]
    Poisoned,
    #[error("Platform log rejected entry (code {0})")]
    Rejected(i32),
}
