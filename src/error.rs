use std::fmt;

/// Custom error type for Rainforest operations
#[derive(Debug)]
pub enum RfError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// JSON or YAML (de)serialization error
    Json(String),
    /// Configuration error
    Config(String),
    /// Writing to the output sink failed
    Output(String),
}

impl fmt::Display for RfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RfError::Http(e) => write!(f, "HTTP request failed: {}", e),
            RfError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            RfError::Json(msg) => write!(f, "JSON error: {}", msg),
            RfError::Config(msg) => write!(f, "Configuration error: {}", msg),
            RfError::Output(msg) => write!(f, "Output error: {}", msg),
        }
    }
}

impl std::error::Error for RfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RfError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RfError {
    fn from(err: reqwest::Error) -> Self {
        RfError::Http(err)
    }
}

impl From<serde_json::Error> for RfError {
    fn from(err: serde_json::Error) -> Self {
        RfError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for RfError {
    fn from(err: serde_yml::Error) -> Self {
        RfError::Json(err.to_string())
    }
}

impl From<std::io::Error> for RfError {
    fn from(err: std::io::Error) -> Self {
        RfError::Output(err.to_string())
    }
}

/// Result type alias for Rainforest operations
pub type Result<T> = std::result::Result<T, RfError>;
