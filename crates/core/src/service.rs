//! Request handling around the diff engine
//!
//! Validates inputs against [`InputLimits`], runs the engine and saves each
//! successful comparison. Every rejection is a typed [`RequestError`].

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::InputLimits;
use crate::engine::DiffEngine;
use crate::error::{CompareError, RequestResult, Side};
use crate::extract::{extract_scoped, TextExtractor, Upload};
use crate::store::{ComparisonRecord, ComparisonStore};

/// Body of a text comparison request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    #[serde(default)]
    pub original: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
}

impl CompareRequest {
    pub fn new(original: impl Into<String>, modified: impl Into<String>) -> Self {
        Self {
            original: Some(original.into()),
            modified: Some(modified.into()),
        }
    }
}

pub struct ComparisonService<S: ComparisonStore> {
    engine: DiffEngine,
    limits: InputLimits,
    store: S,
}

impl<S: ComparisonStore> ComparisonService<S> {
    pub fn new(store: S) -> Self {
        Self {
            engine: DiffEngine::default(),
            limits: InputLimits::default(),
            store,
        }
    }

    pub fn with_engine(mut self, engine: DiffEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_limits(mut self, limits: InputLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn limits(&self) -> &InputLimits {
        &self.limits
    }

    /// Check limits, compare and save the result
    pub fn compare_texts(&self, original: &str, modified: &str) -> RequestResult<ComparisonRecord> {
        if let Err(e) = self.limits.check(original, modified) {
            warn!(reason = e.reason(), "rejected comparison: {}", e);
            return Err(e);
        }

        let result = self.engine.compare(original, modified);
        let record = ComparisonRecord::new(original, modified, result);
        self.store.save(record.clone())?;

        info!(
            id = %record.id,
            changes = record.result.changes.len(),
            status = %record.result.summary.status,
            "comparison saved"
        );
        Ok(record)
    }

    /// Missing texts are rejected before any limit is checked
    pub fn compare_request(&self, request: &CompareRequest) -> RequestResult<ComparisonRecord> {
        let original = request.original.as_deref().ok_or(CompareError::InvalidInput {
            side: Side::Original,
        })?;
        let modified = request.modified.as_deref().ok_or(CompareError::InvalidInput {
            side: Side::Modified,
        })?;
        self.compare_texts(original, modified)
    }

    /// Extract both uploads, then compare their text.
    ///
    /// Both files are removed even when the first extraction fails.
    pub fn compare_uploads(
        &self,
        extractor: &dyn TextExtractor,
        original: &Upload,
        modified: &Upload,
    ) -> RequestResult<ComparisonRecord> {
        let original_text = extract_scoped(extractor, original);
        let modified_text = extract_scoped(extractor, modified);

        let original_text = original_text.inspect_err(|e| {
            warn!(file = %original.original_name, "extraction failed: {}", e);
        })?;
        let modified_text = modified_text.inspect_err(|e| {
            warn!(file = %modified.original_name, "extraction failed: {}", e);
        })?;

        self.compare_texts(&original_text, &modified_text)
    }
}
