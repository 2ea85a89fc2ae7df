//! Error types for the extractor client

use std::fmt;

/// Errors that can occur when talking to the extraction service
#[derive(Debug)]
pub enum ExtractorError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Failed to parse JSON response
    Json(serde_json::Error),
    /// Extractor responded with a non-2xx status
    Upstream { status: u16, message: String },
}

impl fmt::Display for ExtractorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "extractor HTTP error: {}", e),
            Self::Json(e) => write!(f, "extractor JSON parse error: {}", e),
            Self::Upstream { status, message } => {
                write!(f, "extractor returned {}: {}", status, message)
            }
        }
    }
}

impl std::error::Error for ExtractorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Upstream { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ExtractorError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for extractor operations
pub type Result<T> = std::result::Result<T, ExtractorError>;
