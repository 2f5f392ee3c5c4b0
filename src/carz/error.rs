use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarzError {
    #[error("No car found with id {0}")]
    CarNotFound(i64),

    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CarzError>;
