use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected configuration. The message names the offending flag or field.
    #[error("{0}")]
    InvalidInput(String),

    /// Command-line parse failure, including `--help` and `--version` requests.
    #[error("{0}")]
    Cli(#[from] clap::Error),

    #[error("Invalid API JSON payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("CSV export failed: {0}")]
    Export(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl ApiError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        ApiError::InvalidInput(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) | ApiError::Cli(_) | ApiError::Payload(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Export(_) | ApiError::Io(_) | ApiError::Utf8(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

pub type Result<T, E = ApiError> = std::result::Result<T, E>;
