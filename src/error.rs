use std::fmt;

use serde::{Deserialize, Serialize};

/// Code reported when a success body does not match the expected schema
pub const FORMAT_EXCEPTION: &str = "FormatException";

/// Structured error body returned by AvaTax
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ApiError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub target: Option<String>,
    /// AvaTax sends either a string or a list of detail objects here
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Details rendered as text (JSON for structured details)
    pub fn details_text(&self) -> String {
        match &self.details {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (code: {}, target: {}, details: {})",
            self.message,
            self.code,
            self.target.as_deref().unwrap_or(""),
            self.details_text()
        )
    }
}

/// Envelope wrapping [`ApiError`] in error responses
#[derive(Deserialize, Debug)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiError,
}

/// Custom error type for connector operations
#[derive(Debug)]
pub enum ConnectorError {
    /// HTTP request failed before a response was received
    Http(reqwest::Error),
    /// API returned a structured error body
    Api(ApiError),
    /// API returned a non-success status without a parseable error body
    Status { status: u16 },
    /// Success response whose body did not match the expected schema
    Format { details: String },
    /// URL could not be parsed
    Url(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// Error wrapped with the operation that failed
    Context {
        context: String,
        source: Box<ConnectorError>,
    },
}

impl ConnectorError {
    /// Wrap this error with the name of the failing operation
    pub fn context(self, context: impl Into<String>) -> Self {
        ConnectorError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Innermost error, skipping any context wrappers
    pub fn root(&self) -> &ConnectorError {
        match self {
            ConnectorError::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Structured API error, if this error carries one
    pub fn api_error(&self) -> Option<&ApiError> {
        match self.root() {
            ConnectorError::Api(e) => Some(e),
            _ => None,
        }
    }

    /// AvaTax error code for API and format errors
    pub fn code(&self) -> Option<&str> {
        match self.root() {
            ConnectorError::Api(e) => Some(e.code.as_str()),
            ConnectorError::Format { .. } => Some(FORMAT_EXCEPTION),
            _ => None,
        }
    }
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectorError::Http(e) => write!(f, "HTTP request failed: {}", e),
            ConnectorError::Api(e) => write!(f, "AvaTax error: {}", e),
            ConnectorError::Status { status } => {
                write!(f, "unexpected status code: {}", status)
            }
            ConnectorError::Format { details } => write!(
                f,
                "The server returned the response in an unexpected format: {}",
                details
            ),
            ConnectorError::Url(msg) => write!(f, "invalid URL: {}", msg),
            ConnectorError::Json(msg) => write!(f, "JSON error: {}", msg),
            ConnectorError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ConnectorError::Context { context, source } => write!(f, "{}: {}", context, source),
        }
    }
}

impl std::error::Error for ConnectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConnectorError::Http(e) => Some(e),
            ConnectorError::Context { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        ConnectorError::Http(err)
    }
}

impl From<serde_json::Error> for ConnectorError {
    fn from(err: serde_json::Error) -> Self {
        ConnectorError::Json(err.to_string())
    }
}

impl From<std::io::Error> for ConnectorError {
    fn from(err: std::io::Error) -> Self {
        ConnectorError::Config(err.to_string())
    }
}

/// Result type alias for connector operations
pub type Result<T> = std::result::Result<T, ConnectorError>;
