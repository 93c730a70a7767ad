use reqwest::StatusCode;

/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for contract checks and fixtures
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A fixture could not provide a prerequisite before the test body ran
    #[error("Setup error: {0}")]
    Setup(String),

    /// Response body broke the expected schema or a data invariant
    #[error("Contract violation: {0}")]
    Contract(String),

    /// Response status differed from the expected one
    #[error("Expected status {expected}, got {actual}: {body}")]
    UnexpectedStatus {
        expected: u16,
        actual: u16,
        body: String,
    },

    /// Token acquisition failed
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthFailure),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A scenario or the whole run exceeded its time budget
    #[error("Timed out: {0}")]
    Timeout(String),
}

/// Reasons a token could not be obtained from `POST /auth`
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    /// Service answered with a non-2xx status
    #[error("token request rejected with status {status}")]
    Rejected { status: u16 },

    /// Service answered 2xx but the body carried no token
    #[error("no token in response (reason: {})", reason.as_deref().unwrap_or("none"))]
    MissingToken { reason: Option<String> },

    /// Request never produced a readable response
    #[error("transport failure: {0}")]
    Transport(String),
}

impl AppError {
    pub fn contract(msg: impl Into<String>) -> Self {
        AppError::Contract(msg.into())
    }

    pub fn setup(msg: impl Into<String>) -> Self {
        AppError::Setup(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn unexpected_status(expected: StatusCode, actual: StatusCode, body: impl Into<String>) -> Self {
        AppError::UnexpectedStatus {
            expected: expected.as_u16(),
            actual: actual.as_u16(),
            body: body.into(),
        }
    }

    /// Transient failures are the only ones the runner may retry
    pub fn is_transient(&self) -> bool {
        match self {
            AppError::HttpClient(_) | AppError::Timeout(_) => true,
            AppError::UnexpectedStatus { actual, .. } => *actual >= 500,
            _ => false,
        }
    }
}
