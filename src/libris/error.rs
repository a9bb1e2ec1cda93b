use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibrisError {
    #[error("Index out of range: {0}")]
    IndexOutOfRange(usize),

    #[error("Truncated catalog data: {0}")]
    Truncated(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Login failed")]
    LoginFailed,

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, LibrisError>;
