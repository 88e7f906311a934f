use serde_json::Value;
use thiserror::Error;

/// Failure of a single HTTP round trip.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("Network Error: {0}")]
    Network(String),

    /// The request was aborted after the configured interval.
    #[error("timeout of {0}ms exceeded")]
    Timeout(u64),

    /// The server answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status {
        status: u16,
        message: Option<String>,
        body: Option<Value>,
    },

    /// A 2xx response whose body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Coarse classification used by views to pick a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Unauthenticated,
    RateLimited,
    Validation,
    NotFound,
    Server,
    Decode,
}

impl ApiError {
    /// Build a `Status` error from a raw response body, lifting the server's
    /// `message` field when the body is a JSON object.
    pub fn from_response(status: u16, body: &str) -> Self {
        let body: Option<Value> = serde_json::from_str(body).ok();
        let message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string);
        ApiError::Status { status, message, body }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network(_) | ApiError::Timeout(_) => ErrorKind::Network,
            ApiError::Decode(_) => ErrorKind::Decode,
            ApiError::Status { status, .. } => match status {
                401 => ErrorKind::Unauthenticated,
                429 => ErrorKind::RateLimited,
                422 => ErrorKind::Validation,
                404 => ErrorKind::NotFound,
                _ => ErrorKind::Server,
            },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        self.kind() == ErrorKind::Network
    }

    /// The server-provided `message`, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message: Some(message), .. } if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// Parsed JSON body of a status error.
    pub fn body(&self) -> Option<&Value> {
        match self {
            ApiError::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Server message when present, otherwise the error's own description.
    pub fn detail(&self) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| self.to_string())
    }
}
