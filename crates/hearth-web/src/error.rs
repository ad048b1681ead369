//! Error type for the HTTP layer

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

pub type Result<T> = std::result::Result<T, WebError>;

#[derive(Debug, Error)]
pub enum WebError {
    /// Malformed or missing request parameters; state is left untouched
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Serializing a fragment failed
    #[error("Render failed: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<hearth_config::ConfigError> for WebError {
    fn from(err: hearth_config::ConfigError) -> Self {
        WebError::Config(err.to_string())
    }
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WebError::Render(_) | WebError::Io(_) | WebError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            WebError::BadRequest(message) => {
                warn!(%message, "Rejected request");
                (status, message.clone()).into_response()
            }
            other => {
                error!(error = %other, "Request failed");
                (status, "Internal Server Error").into_response()
            }
        }
    }
}
