//! Shared error types for the services crate.

use thiserror::Error;

use analyzer_core::RequestFailure;

/// Errors emitted by backend calls.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnalyzerError {
    #[error("backend did not respond in time")]
    Timeout,
    #[error("backend request failed with status {status}")]
    HttpStatus {
        status: reqwest::StatusCode,
        message: Option<String>,
    },
    #[error(transparent)]
    Http(reqwest::Error),
    #[error("backend returned an unexpected body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid endpoint url: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("could not read upload: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for AnalyzerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

impl AnalyzerError {
    /// Collapse into the failure categories the session understands.
    #[must_use]
    pub fn to_failure(&self) -> RequestFailure {
        match self {
            Self::Timeout => RequestFailure::Timeout,
            Self::HttpStatus { message, .. } => RequestFailure::Backend {
                message: message.clone(),
            },
            Self::Http(_) | Self::Decode(_) | Self::Endpoint(_) | Self::Io(_) => {
                RequestFailure::Transport
            }
        }
    }
}

/// Errors emitted while reading backend configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid backend url {raw:?}: {source}")]
    InvalidUrl {
        raw: String,
        source: url::ParseError,
    },
    #[error("backend url must use http or https: {raw}")]
    UnsupportedScheme { raw: String },
}
