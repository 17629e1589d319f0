//! Change annotation
//!
//! Promotes non-equal spans to navigable [`Change`]s with dense, ordered ids
//! and aggregates the token totals reported in the [`DiffSummary`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::diff::{Span, SpanKind};
use crate::impact::ImpactScorer;
use crate::script::{count_tokens_in, is_whitespace_only, Granularity};

/// 1-based identifier of a change, shared by the change list and the
/// rendered fragment it anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeId(pub u32);

impl ChangeId {
    /// Element id used for scroll-to-change
    pub fn anchor(&self) -> String {
        format!("chg-{}", self.0)
    }
}

impl fmt::Display for ChangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChangeKind {
    Inserted,
    Deleted,
}

impl ChangeKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Inserted => "INSERTED",
            ChangeKind::Deleted => "REMOVED",
        }
    }

    fn sign(&self) -> char {
        match self {
            ChangeKind::Inserted => '+',
            ChangeKind::Deleted => '-',
        }
    }
}

/// A counted, navigable change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    pub id: ChangeId,
    pub kind: ChangeKind,
    /// Span text with surrounding whitespace trimmed
    pub text: String,
    pub token_count: usize,
    pub impact_score: u32,
}

impl Change {
    /// One-line entry for a change list, e.g. `2. INSERTED (+1, Impact: 1)`
    pub fn label(&self) -> String {
        format!(
            "{}. {} ({}{}, Impact: {})",
            self.id,
            self.kind.label(),
            self.kind.sign(),
            self.token_count,
            self.impact_score
        )
    }
}

/// Aggregate over all changes of a comparison
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSummary {
    pub inserted_tokens: usize,
    pub deleted_tokens: usize,
    pub total_changes: usize,
    pub insertions: usize,
    pub deletions: usize,
    pub status: String,
}

impl DiffSummary {
    pub const NO_CHANGES: &'static str = "No changes detected";

    fn record(&mut self, change: &Change) {
        self.total_changes += 1;
        match change.kind {
            ChangeKind::Inserted => {
                self.insertions += 1;
                self.inserted_tokens += change.token_count;
            }
            ChangeKind::Deleted => {
                self.deletions += 1;
                self.deleted_tokens += change.token_count;
            }
        }
    }

    fn finalize(&mut self) {
        self.status = if self.inserted_tokens == 0 && self.deleted_tokens == 0 {
            Self::NO_CHANGES.to_string()
        } else {
            format!(
                "Inserted {} {}, Removed {} {}.",
                self.inserted_tokens,
                plural_token(self.inserted_tokens),
                self.deleted_tokens,
                plural_token(self.deleted_tokens)
            )
        };
    }

    pub fn has_changes(&self) -> bool {
        self.total_changes > 0
    }
}

fn plural_token(count: usize) -> &'static str {
    if count == 1 {
        "token"
    } else {
        "tokens"
    }
}

/// A span together with the id of the change it was promoted to, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedSpan {
    pub span: Span,
    pub change_id: Option<ChangeId>,
}

/// Output of the annotator
#[derive(Debug, Clone)]
pub struct Annotation {
    pub spans: Vec<AnnotatedSpan>,
    pub changes: Vec<Change>,
    pub summary: DiffSummary,
}

/// Scans spans in order and assigns change ids
pub struct Annotator<'a> {
    scorer: &'a dyn ImpactScorer,
    granularity: Granularity,
}

impl<'a> Annotator<'a> {
    pub fn new(scorer: &'a dyn ImpactScorer, granularity: Granularity) -> Self {
        Self {
            scorer,
            granularity,
        }
    }

    /// Annotate spans in document order.
    ///
    /// Whitespace-only insertions and deletions are kept as spans but get no
    /// id and are left out of every count.
    pub fn annotate(&self, spans: Vec<Span>) -> Annotation {
        let mut changes = Vec::new();
        let mut summary = DiffSummary::default();
        let mut next_id = 1u32;

        let spans = spans
            .into_iter()
            .map(|span| {
                let kind = match span.kind {
                    SpanKind::Equal => None,
                    _ if is_whitespace_only(&span.text) => None,
                    SpanKind::Inserted => Some(ChangeKind::Inserted),
                    SpanKind::Deleted => Some(ChangeKind::Deleted),
                };

                let change_id = kind.map(|kind| {
                    let id = ChangeId(next_id);
                    next_id += 1;

                    let change = Change {
                        id,
                        kind,
                        text: span.text.trim().to_string(),
                        token_count: count_tokens_in(&span.text, self.granularity),
                        impact_score: self.scorer.score(&span.text),
                    };
                    summary.record(&change);
                    changes.push(change);
                    id
                });

                AnnotatedSpan { span, change_id }
            })
            .collect();

        summary.finalize();

        Annotation {
            spans,
            changes,
            summary,
        }
    }
}

/// Case-insensitive substring search over change text
pub fn search_changes<'c>(changes: &'c [Change], term: &str) -> Vec<&'c Change> {
    let needle = term.to_lowercase();
    changes
        .iter()
        .filter(|change| change.text.to_lowercase().contains(&needle))
        .collect()
}
