//! Structured error for API calls.

use std::fmt;

use serde_json::Value;

/// Categories of API errors for logging and consistent handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Non-2xx HTTP response.
    Http,
    /// Transport failure (connect, DNS, read).
    Network,
    /// 2xx response whose body could not be decoded.
    Parse,
    /// Client-side precondition failure (no credential set).
    Auth,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Http => write!(f, "http"),
            ApiErrorKind::Network => write!(f, "network"),
            ApiErrorKind::Parse => write!(f, "parse"),
            ApiErrorKind::Auth => write!(f, "auth"),
        }
    }
}

/// Error from an API call.
///
/// `message` is the user-facing string the screens display verbatim; `details`
/// carries the raw payload or transport error for the log file only.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// HTTP status error for the todo endpoints: prefer the payload's
    /// `message` (then `error`) field, fall back to the bare status.
    pub fn http_status(status: u16, body: &str) -> Self {
        let message = payload_field(body, "message")
            .or_else(|| payload_field(body, "error"))
            .map_or_else(
                || format!("HTTP {status}"),
                |msg| format!("HTTP {status}: {msg}"),
            );
        let error = Self::new(ApiErrorKind::Http, message);
        if body.is_empty() {
            error
        } else {
            error.with_details(body)
        }
    }

    pub fn network(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message).with_details(details)
    }

    pub fn parse(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Parse, message).with_details(details)
    }

    pub fn not_authenticated() -> Self {
        Self::new(ApiErrorKind::Auth, "Not authenticated.")
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Extracts a string field from a JSON error payload, if the body is JSON and
/// the field is present.
pub(crate) fn payload_field(body: &str, field: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    json.get(field)?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_extracts_message_field() {
        let error = ApiError::http_status(404, r#"{"message":"No such todo"}"#);
        assert_eq!(error.to_string(), "HTTP 404: No such todo");
        assert_eq!(error.kind, ApiErrorKind::Http);
    }

    #[test]
    fn test_http_status_falls_back_to_bare_status() {
        let error = ApiError::http_status(500, "<html>oops</html>");
        assert_eq!(error.to_string(), "HTTP 500");
        assert_eq!(error.details.as_deref(), Some("<html>oops</html>"));
    }

    #[test]
    fn test_payload_field_ignores_non_strings() {
        assert_eq!(payload_field(r#"{"message":42}"#, "message"), None);
        assert_eq!(payload_field("not json", "message"), None);
    }
}
