use http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DatasourceError>;

#[derive(Debug, Error)]
pub enum DatasourceError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Request error: {0}")]
    Transport(String),

    #[error("Backend returned {status} for {url}")]
    BackendStatus { status: StatusCode, url: String },

    #[error("Malformed backend response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Helper for mapping any client-side failure into a transport error
pub fn transport_error<E: ToString>(err: E) -> DatasourceError {
    DatasourceError::Transport(err.to_string())
}

impl From<reqwest::Error> for DatasourceError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => DatasourceError::BackendStatus {
                status,
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => transport_error(err),
        }
    }
}

impl From<validator::ValidationErrors> for DatasourceError {
    fn from(err: validator::ValidationErrors) -> Self {
        DatasourceError::InvalidQuery(err.to_string())
    }
}

impl From<serde_json::Error> for DatasourceError {
    fn from(err: serde_json::Error) -> Self {
        DatasourceError::MalformedResponse(err.to_string())
    }
}

impl DatasourceError {
    /// Status code reported by the backend, when the failure carries one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            DatasourceError::BackendStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
