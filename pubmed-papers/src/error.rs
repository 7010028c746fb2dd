use std::result;

use thiserror::Error;

/// Error types for PubMed paper retrieval and export
#[derive(Error, Debug)]
pub enum PubMedError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// Non-success HTTP status, or an error reported inside a 200 response body
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// CSV serialization or deserialization failed
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// IO error for file operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PubMedError {
    /// Whether the failure happened while talking to the server rather than
    /// while interpreting what it sent back.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            PubMedError::RequestError(_) | PubMedError::ApiError { .. }
        )
    }

    /// HTTP status associated with the failure, if one is known
    pub fn status(&self) -> Option<u16> {
        match self {
            PubMedError::RequestError(err) => err.status().map(|s| s.as_u16()),
            PubMedError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = result::Result<T, PubMedError>;
