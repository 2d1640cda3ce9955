/// Errors raised by the guidance backend client.
///
/// Callers that surface failures to a user should go through
/// [`ClientError::user_message`], which collapses every variant into a single
/// human-readable string.
use reqwest::StatusCode;

pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to fetch guidance. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status code {}", .status.as_u16())]
    Server {
        status: StatusCode,
        detail: Option<String>,
    },

    #[error("invalid response JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            Self::Validation(_) => Some(StatusCode::BAD_REQUEST),
            Self::InvalidJson(_) => None,
        }
    }

    /// Server-supplied detail first, then the transport-level message, then a
    /// generic fallback.
    pub fn user_message(&self) -> String {
        if let Self::Server {
            detail: Some(detail),
            ..
        } = self
        {
            let detail = detail.trim();
            if !detail.is_empty() {
                return detail.to_string();
            }
        }

        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}
