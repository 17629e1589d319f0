//! Error types for the comparison core and its calling layer

use std::fmt;
use std::io;

use thiserror::Error;

use crate::extract::DocumentKind;
use crate::store::RecordId;

/// Which input of a comparison an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Original,
    Modified,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Original => write!(f, "original"),
            Side::Modified => write!(f, "modified"),
        }
    }
}

/// Failures of the diff core itself
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("Invalid input: {side} text is missing")]
    InvalidInput { side: Side },
}

pub type CompareResult<T> = Result<T, CompareError>;

/// Failures of the text extraction collaborator
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unsupported document type: {0}")]
    Unsupported(DocumentKind),

    #[error("No text could be extracted")]
    Empty,
}

/// Failures of the comparison record store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record not found: {0}")]
    NotFound(RecordId),
}

/// Everything a comparison request can be rejected with.
///
/// Each variant maps to a distinct [`reason`](RequestError::reason) code so
/// callers can tell "insufficient text" from "too large" from "upload failed".
#[derive(Error, Debug)]
pub enum RequestError {
    #[error(transparent)]
    InvalidInput(#[from] CompareError),

    #[error("Insufficient text: {side} has {actual} characters, at least {min_chars} required")]
    InputTooShort {
        side: Side,
        min_chars: usize,
        actual: usize,
    },

    #[error("Documents too large: {actual} characters combined, limit is {limit}")]
    InputTooLarge { limit: usize, actual: usize },

    #[error("Upload failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Storage failed: {0}")]
    Store(#[from] StoreError),
}

impl RequestError {
    /// Stable machine-readable reason code
    pub fn reason(&self) -> &'static str {
        match self {
            RequestError::InvalidInput(_) => "invalid_input",
            RequestError::InputTooShort { .. } => "insufficient_text",
            RequestError::InputTooLarge { .. } => "too_large",
            RequestError::Extraction(_) => "upload_failed",
            RequestError::Store(_) => "storage_failed",
        }
    }
}

pub type RequestResult<T> = Result<T, RequestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_reasons_are_distinct() {
        let errors = [
            RequestError::from(CompareError::InvalidInput { side: Side::Original }),
            RequestError::InputTooShort {
                side: Side::Modified,
                min_chars: 10,
                actual: 3,
            },
            RequestError::InputTooLarge {
                limit: 500_000,
                actual: 500_001,
            },
            RequestError::from(ExtractionError::Empty),
            RequestError::from(StoreError::NotFound(RecordId::new())),
        ];

        let reasons: HashSet<&str> = errors.iter().map(RequestError::reason).collect();
        assert_eq!(reasons.len(), errors.len());
        assert!(reasons.contains("storage_failed"));
    }

    #[test]
    fn test_messages() {
        let err = RequestError::InputTooShort {
            side: Side::Modified,
            min_chars: 10,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient text: modified has 3 characters, at least 10 required"
        );
        assert_eq!(
            CompareError::InvalidInput { side: Side::Original }.to_string(),
            "Invalid input: original text is missing"
        );
    }
}
