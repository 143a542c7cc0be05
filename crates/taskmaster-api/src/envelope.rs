//! Response Envelope
//!
//! Every endpoint answers `{success, data?, message?, error?}`.

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    fn check(self) -> ApiResult<Self> {
        if self.success {
            Ok(self)
        } else {
            let error = self.error.unwrap_or_else(|| "Unknown error".to_string());
            Err(ApiError::Application(error))
        }
    }

    pub fn into_data(self) -> ApiResult<T> {
        self.check()?
            .data
            .ok_or_else(|| ApiError::Decode("missing `data` field".to_string()))
    }
}

impl Envelope<IgnoredAny> {
    pub fn into_message(self) -> ApiResult<String> {
        Ok(self.check()?.message.unwrap_or_default())
    }
}

/// Decode a 2xx body into an envelope
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<Envelope<T>> {
    Ok(serde_json::from_str(body)?)
}

/// Best-effort `error` field of a non-2xx body
pub(crate) fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Envelope<IgnoredAny>>(body)
        .ok()
        .and_then(|envelope| envelope.error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    #[test]
    fn test_success_with_data() {
        let body = r#"{"success": true, "data": [{"id": 1, "title": "a", "priority": "Low", "completed": false}], "count": 1}"#;
        let tasks = decode::<Vec<Task>>(body).unwrap().into_data().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "a");
    }

    #[test]
    fn test_failure_payload() {
        let body = r#"{"success": false, "error": "Search query is required"}"#;
        let err = decode::<Vec<Task>>(body).unwrap().into_data().unwrap_err();
        assert_eq!(err, ApiError::Application("Search query is required".into()));
    }

    #[test]
    fn test_missing_data_is_decode_error() {
        let err = decode::<Task>(r#"{"success": true}"#).unwrap().into_data().unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_message_ignores_data() {
        let body = r#"{"success": true, "data": {"id": 3}, "message": "Task created successfully"}"#;
        let message = decode::<IgnoredAny>(body).unwrap().into_message().unwrap();
        assert_eq!(message, "Task created successfully");
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(decode::<Task>("<html>"), Err(ApiError::Decode(_))));
        assert_eq!(error_message("<html>"), None);
        assert_eq!(
            error_message(r#"{"success": false, "error": "Task not found"}"#).as_deref(),
            Some("Task not found")
        );
    }
}
