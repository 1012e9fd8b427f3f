use shared_types::ApiErrorBody;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Backend client not initialized")]
    NotConfigured,

    #[error("Backend client already initialized")]
    AlreadyInitialized,

    #[error("Request to hotel API failed: {0}")]
    Request(String),

    #[error("Hotel API returned HTTP {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Status { status: u16, message: Option<String> },

    #[error("Unexpected response from hotel API: {0}")]
    Decode(String),
}

impl BackendError {
    /// Builds a status error from a non-2xx response body, keeping the API's
    /// `message` field when the body carries one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.trim().is_empty());

        BackendError::Status { status, message }
    }

    /// The API refused the admin bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, BackendError::Status { status: 401 | 403, .. })
    }

    /// Message supplied by the API itself, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            BackendError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::Decode(err.to_string())
        } else {
            BackendError::Request(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn status_error_keeps_server_message() {
        let err = BackendError::from_status(422, r#"{"message":"Room unavailable"}"#);
        assert_eq!(err.server_message(), Some("Room unavailable"));
        assert_matches!(err, BackendError::Status { status: 422, .. });
    }

    #[test]
    fn status_error_without_json_body_has_no_message() {
        let err = BackendError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.server_message(), None);
        assert_eq!(err.to_string(), "Hotel API returned HTTP 502: no details");
    }

    #[test]
    fn rejected_token_is_unauthorized() {
        assert!(BackendError::from_status(401, "").is_unauthorized());
        assert!(BackendError::from_status(403, "{}").is_unauthorized());
        assert!(!BackendError::from_status(404, "").is_unauthorized());
        assert!(!BackendError::Request("timeout".into()).is_unauthorized());
    }

    #[test]
    fn server_message_is_kept_verbatim() {
        let err = BackendError::from_status(422, r#"{"message":"  Room unavailable.\n"}"#);
        assert_eq!(err.server_message(), Some("  Room unavailable.\n"));
    }

    #[test]
    fn blank_server_message_is_dropped() {
        let err = BackendError::from_status(400, r#"{"message":"   "}"#);
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn transport_errors_carry_no_server_message() {
        let err = BackendError::Request("connection refused".to_string());
        assert_eq!(err.server_message(), None);
    }
}
