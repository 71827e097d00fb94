use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Main error type for App Search operations
#[derive(Debug, Error)]
pub enum RestError {
    /// A required construction option is missing or invalid
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A required call argument is missing or malformed
    #[error("invalid argument: {0}")]
    Argument(String),

    /// The connect or overall time budget elapsed
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Transport failure before a response was obtained
    #[error("connection error: {0}")]
    Connection(#[source] reqwest::Error),

    /// Error returned by the App Search API (non-2xx status)
    #[error("API error {status}: {}", .messages.join("; "))]
    Api { status: u16, messages: Vec<String> },

    /// A single indexed document was rejected by the server
    #[error("invalid document: {}", .0.join("; "))]
    InvalidDocument(Vec<String>),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Signed search key encoding error
    #[error("signing error: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

impl RestError {
    /// Build an API error from a status code and the raw response body.
    ///
    /// Messages come from the body's `errors` field (list or single string)
    /// or its `error` field. When neither is present the status reason is used.
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let messages = serde_json::from_slice::<Value>(body)
            .ok()
            .map(|value| extract_messages(&value))
            .filter(|messages| !messages.is_empty())
            .unwrap_or_else(|| {
                vec![match status.canonical_reason() {
                    Some(reason) => format!("HTTP {} {}", status.as_u16(), reason),
                    None => format!("HTTP {}", status.as_u16()),
                }]
            });

        RestError::Api {
            status: status.as_u16(),
            messages,
        }
    }

    /// Check if this error is a bad request error (400)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, RestError::Api { status: 400, .. })
    }

    /// Check if this error is an invalid credentials error (401)
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, RestError::Api { status: 401, .. })
    }

    /// Check if this error is a forbidden error (403)
    pub fn is_forbidden(&self) -> bool {
        matches!(self, RestError::Api { status: 403, .. })
    }

    /// Check if this error is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, RestError::Api { status: 404, .. })
    }

    /// Check if this error is a conflict error (409), e.g. an engine that already exists
    pub fn is_conflict(&self) -> bool {
        matches!(self, RestError::Api { status: 409, .. })
    }

    /// Check if this error is a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, RestError::Timeout(_))
    }

    /// Get the HTTP status code if this is an API error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RestError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the server-provided messages if this is an API error
    pub fn messages(&self) -> &[String] {
        match self {
            RestError::Api { messages, .. } | RestError::InvalidDocument(messages) => messages,
            _ => &[],
        }
    }
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        // connect timeouts report both is_connect and is_timeout
        if err.is_timeout() {
            RestError::Timeout(err)
        } else {
            RestError::Connection(err)
        }
    }
}

impl From<url::ParseError> for RestError {
    fn from(err: url::ParseError) -> Self {
        RestError::Configuration(format!("invalid API endpoint: {}", err))
    }
}

/// Collect error strings from an App Search error body.
pub(crate) fn extract_messages(value: &Value) -> Vec<String> {
    let field = value.get("errors").or_else(|| value.get("error"));
    match field {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}

/// Result type for App Search operations
pub type Result<T> = std::result::Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_not_found() {
        let error = RestError::from_status(StatusCode::NOT_FOUND, br#"{"errors": ["not found"]}"#);
        assert!(error.is_not_found());
        assert_eq!(error.status_code(), Some(404));
        assert_eq!(error.messages(), ["not found".to_string()]);
    }

    #[test]
    fn test_error_single_string() {
        let error = RestError::from_status(StatusCode::UNAUTHORIZED, br#"{"error": "Invalid credentials"}"#);
        assert!(error.is_invalid_credentials());
        assert_eq!(error.messages(), ["Invalid credentials".to_string()]);
    }

    #[test]
    fn test_error_without_body() {
        let error = RestError::from_status(StatusCode::CONFLICT, b"");
        assert!(error.is_conflict());
        assert_eq!(error.messages(), ["HTTP 409 Conflict".to_string()]);
    }

    #[test]
    fn test_error_non_json_body() {
        let error = RestError::from_status(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>");
        assert_eq!(error.status_code(), Some(502));
        assert_eq!(error.messages(), ["HTTP 502 Bad Gateway".to_string()]);
    }

    #[test]
    fn test_extract_messages_mixed() {
        let messages = extract_messages(&json!({"errors": ["a", {"field": "b"}]}));
        assert_eq!(messages, vec!["a".to_string(), r#"{"field":"b"}"#.to_string()]);
        assert!(extract_messages(&json!({"results": []})).is_empty());
    }

    #[test]
    fn test_error_display() {
        let error = RestError::Api {
            status: 400,
            messages: vec!["a".to_string(), "b".to_string()],
        };
        assert!(error.is_bad_request());
        assert_eq!(error.to_string(), "API error 400: a; b");
    }
}
