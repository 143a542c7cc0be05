//! API Errors

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx status. `message` is the server's `error` field when the body carried one.
    #[error("HTTP error! status: {status}{}", status_suffix(.message))]
    Status { status: u16, message: Option<String> },

    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// Body was not the expected envelope
    #[error("malformed response: {0}")]
    Decode(String),

    /// `success: false` reported by the server
    #[error("{0}")]
    Application(String),
}

fn status_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(" ({m})")).unwrap_or_default()
}

impl ApiError {
    /// True for failures below the application envelope (status or network)
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Status { .. } | ApiError::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let plain = ApiError::Status { status: 500, message: None };
        assert_eq!(plain.to_string(), "HTTP error! status: 500");

        let detailed = ApiError::Status { status: 404, message: Some("Task not found".into()) };
        assert_eq!(detailed.to_string(), "HTTP error! status: 404 (Task not found)");
        assert!(detailed.is_transport());
    }

    #[test]
    fn test_application_error_is_not_transport() {
        let err = ApiError::Application("Title is required".into());
        assert_eq!(err.to_string(), "Title is required");
        assert!(!err.is_transport());
        assert!(!ApiError::Decode("eof".into()).is_transport());
    }
}
