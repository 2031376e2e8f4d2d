// Error types for folio.
// Separates recoverable fetch failures from unexpected payload errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("GitHub API request timed out")]
    Timeout,

    #[error("GitHub API error: HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected repository data: {0}")]
    Unexpected(String),

    #[error("{0}")]
    Other(String),
}

impl FolioError {
    /// Whether the provider may swallow this error and serve fallback data.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, FolioError::Unexpected(_))
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
