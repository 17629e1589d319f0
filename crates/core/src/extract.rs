//! Text extraction from uploaded files
//!
//! Only plain text is read here; PDF, Word and OCR back ends plug in through
//! [`TextExtractor`]. Uploaded files are temporary and are removed once
//! extraction finishes, whatever the outcome.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ExtractionError;

/// File type of an upload, derived from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Word,
    PlainText,
    Image,
    Other,
}

impl DocumentKind {
    pub fn from_file_name(name: &str) -> Self {
        let extension = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => DocumentKind::Pdf,
            Some("doc") | Some("docx") => DocumentKind::Word,
            Some("txt") => DocumentKind::PlainText,
            Some("jpg") | Some("jpeg") | Some("png") => DocumentKind::Image,
            _ => DocumentKind::Other,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Word => "word",
            DocumentKind::PlainText => "text",
            DocumentKind::Image => "image",
            DocumentKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// A file received from a client, stored at a temporary path
#[derive(Debug, Clone)]
pub struct Upload {
    /// Where the upload was written
    pub path: PathBuf,
    /// Name the client gave the file
    pub original_name: String,
}

impl Upload {
    pub fn new(path: impl Into<PathBuf>, original_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            original_name: original_name.into(),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        DocumentKind::from_file_name(&self.original_name)
    }
}

/// Trait for extraction back ends
pub trait TextExtractor: Send + Sync {
    /// Extract plain text from an upload
    fn extract(&self, upload: &Upload) -> Result<String, ExtractionError>;

    /// Whether this extractor can handle the given kind
    fn supports(&self, kind: DocumentKind) -> bool;
}

/// Reads UTF-8 `.txt` uploads
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, upload: &Upload) -> Result<String, ExtractionError> {
        let kind = upload.kind();
        if !self.supports(kind) {
            return Err(ExtractionError::Unsupported(kind));
        }
        Ok(fs::read_to_string(&upload.path)?)
    }

    fn supports(&self, kind: DocumentKind) -> bool {
        kind == DocumentKind::PlainText
    }
}

/// Extract text and remove the uploaded file on every exit path.
///
/// Cleanup failures are logged and never mask the extraction result.
/// Uploads yielding no text at all are reported as [`ExtractionError::Empty`].
pub fn extract_scoped(
    extractor: &dyn TextExtractor,
    upload: &Upload,
) -> Result<String, ExtractionError> {
    let _cleanup = scopeguard::guard(upload.path.clone(), |path| {
        if let Err(e) = fs::remove_file(&path) {
            warn!("Failed to remove upload {:?}: {}", path, e);
        }
    });

    let text = extractor.extract(upload)?;
    if text.is_empty() {
        return Err(ExtractionError::Empty);
    }

    debug!(
        file = %upload.original_name,
        kind = %upload.kind(),
        chars = text.chars().count(),
        "extracted text"
    );
    Ok(text)
}
