//! Main diff engine that orchestrates the entire comparison

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annotate::{search_changes, Annotator, Change, ChangeId, DiffSummary};
use crate::config::DiffConfig;
use crate::diff::spans_from_ops;
use crate::error::{CompareError, CompareResult, Side};
use crate::render::{project, Column, Fragment};
use crate::script::Granularity;
use crate::tokenizers::tokenizer_for;

/// Complete result of comparing two texts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub granularity: Granularity,
    pub changes: Vec<Change>,
    pub summary: DiffSummary,
    pub left_column: Column,
    pub right_column: Column,
}

impl Comparison {
    /// Whether the texts differ in anything but whitespace
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn change(&self, id: ChangeId) -> Option<&Change> {
        self.changes.iter().find(|change| change.id == id)
    }

    /// Rendered fragment for a change, on whichever side it lives
    pub fn fragment(&self, id: ChangeId) -> Option<&Fragment> {
        self.left_column
            .find_anchor(id)
            .or_else(|| self.right_column.find_anchor(id))
    }

    /// Changes whose text contains `term`, ignoring case
    pub fn search(&self, term: &str) -> Vec<&Change> {
        search_changes(&self.changes, term)
    }
}

/// The main diff engine
#[derive(Clone, Default)]
pub struct DiffEngine {
    config: DiffConfig,
}

impl DiffEngine {
    /// Create a new diff engine with the given configuration
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Compare two texts.
    ///
    /// 1. Pick the granularity and tokenize both sides
    /// 2. Align the token sequences
    /// 3. Annotate the spans with change ids, counts and impact
    /// 4. Project the spans into two display columns
    pub fn compare(&self, original: &str, modified: &str) -> Comparison {
        let granularity = self.config.granularity.resolve(original, modified);
        let tokenizer = tokenizer_for(granularity);
        let original_tokens = tokenizer.tokenize(original);
        let modified_tokens = tokenizer.tokenize(modified);

        let algorithm = self.config.algorithm.build();
        let ops = algorithm.compute(&original_tokens, &modified_tokens);
        let spans = spans_from_ops(&original_tokens, &modified_tokens, &ops);

        debug!(
            ?granularity,
            algorithm = algorithm.name(),
            original_tokens = original_tokens.len(),
            modified_tokens = modified_tokens.len(),
            spans = spans.len(),
            "aligned texts"
        );

        let annotation = Annotator::new(self.config.scorer.as_ref(), granularity).annotate(spans);
        let columns = project(&annotation.spans);

        debug!(
            changes = annotation.changes.len(),
            inserted_tokens = annotation.summary.inserted_tokens,
            deleted_tokens = annotation.summary.deleted_tokens,
            "annotated comparison"
        );

        Comparison {
            granularity,
            changes: annotation.changes,
            summary: annotation.summary,
            left_column: columns.left,
            right_column: columns.right,
        }
    }

    /// Compare texts that may be absent, failing fast without a partial
    /// result.
    pub fn compare_optional(
        &self,
        original: Option<&str>,
        modified: Option<&str>,
    ) -> CompareResult<Comparison> {
        let original = original.ok_or(CompareError::InvalidInput {
            side: Side::Original,
        })?;
        let modified = modified.ok_or(CompareError::InvalidInput {
            side: Side::Modified,
        })?;
        Ok(self.compare(original, modified))
    }
}
