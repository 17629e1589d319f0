//! Diff result types and structures

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::tokenizers::Token;

/// Classification of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpanKind {
    /// Present on both sides
    Equal,
    /// Present only in the modified text
    Inserted,
    /// Present only in the original text
    Deleted,
}

/// A single run-length edit over token indices, as produced by an aligner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffOp {
    Equal {
        old_index: usize,
        new_index: usize,
        len: usize,
    },
    Delete {
        old_index: usize,
        old_len: usize,
    },
    Insert {
        new_index: usize,
        new_len: usize,
    },
}

impl DiffOp {
    /// Number of tokens this op removes or adds
    pub fn edit_cost(&self) -> usize {
        match *self {
            DiffOp::Equal { .. } => 0,
            DiffOp::Delete { old_len, .. } => old_len,
            DiffOp::Insert { new_len, .. } => new_len,
        }
    }
}

/// Collects ops, merging a new op into the previous one when they continue
/// the same run.
#[derive(Debug, Default)]
pub struct OpSink {
    ops: Vec<DiffOp>,
}

impl OpSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn equal(&mut self, old_index: usize, new_index: usize, len: usize) {
        if len == 0 {
            return;
        }
        if let Some(DiffOp::Equal {
            old_index: o,
            new_index: n,
            len: l,
        }) = self.ops.last_mut()
        {
            if *o + *l == old_index && *n + *l == new_index {
                *l += len;
                return;
            }
        }
        self.ops.push(DiffOp::Equal {
            old_index,
            new_index,
            len,
        });
    }

    pub fn delete(&mut self, old_index: usize, old_len: usize) {
        if old_len == 0 {
            return;
        }
        if let Some(DiffOp::Delete {
            old_index: o,
            old_len: l,
        }) = self.ops.last_mut()
        {
            if *o + *l == old_index {
                *l += old_len;
                return;
            }
        }
        self.ops.push(DiffOp::Delete { old_index, old_len });
    }

    pub fn insert(&mut self, new_index: usize, new_len: usize) {
        if new_len == 0 {
            return;
        }
        if let Some(DiffOp::Insert {
            new_index: n,
            new_len: l,
        }) = self.ops.last_mut()
        {
            if *n + *l == new_index {
                *l += new_len;
                return;
            }
        }
        self.ops.push(DiffOp::Insert { new_index, new_len });
    }

    pub fn finish(self) -> Vec<DiffOp> {
        self.ops
    }
}

/// A maximal run of tokens sharing one classification.
///
/// Ranges are half-open token index ranges: `original` is set for `Equal`
/// and `Deleted`, `modified` for `Equal` and `Inserted`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
    pub original: Option<Range<usize>>,
    pub modified: Option<Range<usize>>,
}

impl Span {
    fn from_tokens(
        kind: SpanKind,
        tokens: &[Token],
        original: Option<Range<usize>>,
        modified: Option<Range<usize>>,
    ) -> Self {
        Self {
            kind,
            text: tokens.iter().map(|t| t.text.as_str()).collect(),
            original,
            modified,
        }
    }

    /// Token range on the side this span belongs to (original side for
    /// `Equal`)
    pub fn source_range(&self) -> Range<usize> {
        match self.kind {
            SpanKind::Inserted => self.modified.clone(),
            SpanKind::Equal | SpanKind::Deleted => self.original.clone(),
        }
        .unwrap_or(0..0)
    }

    pub fn is_change(&self) -> bool {
        self.kind != SpanKind::Equal
    }

    /// Whether this span contributes to the original text
    pub fn in_original(&self) -> bool {
        matches!(self.kind, SpanKind::Equal | SpanKind::Deleted)
    }

    /// Whether this span contributes to the modified text
    pub fn in_modified(&self) -> bool {
        matches!(self.kind, SpanKind::Equal | SpanKind::Inserted)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SpanKind::Equal => write!(f, "={:?}", self.text),
            SpanKind::Inserted => write!(f, "+{:?}", self.text),
            SpanKind::Deleted => write!(f, "-{:?}", self.text),
        }
    }
}

/// Turn aligner output into spans.
///
/// Consecutive non-equal ops form one changed gap; each gap yields at most one
/// `Deleted` span followed by at most one `Inserted` span.
pub fn spans_from_ops(original: &[Token], modified: &[Token], ops: &[DiffOp]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut deleted: Option<Range<usize>> = None;
    let mut inserted: Option<Range<usize>> = None;

    for op in ops {
        match *op {
            DiffOp::Equal {
                old_index,
                new_index,
                len,
            } => {
                flush_gap(original, modified, &mut deleted, &mut inserted, &mut spans);
                let old_range = old_index..old_index + len;
                let new_range = new_index..new_index + len;
                spans.push(Span::from_tokens(
                    SpanKind::Equal,
                    &original[old_range.clone()],
                    Some(old_range),
                    Some(new_range),
                ));
            }
            DiffOp::Delete { old_index, old_len } => {
                extend(&mut deleted, old_index..old_index + old_len);
            }
            DiffOp::Insert { new_index, new_len } => {
                extend(&mut inserted, new_index..new_index + new_len);
            }
        }
    }
    flush_gap(original, modified, &mut deleted, &mut inserted, &mut spans);

    spans
}

fn extend(slot: &mut Option<Range<usize>>, range: Range<usize>) {
    *slot = Some(match slot.take() {
        Some(existing) => existing.start.min(range.start)..existing.end.max(range.end),
        None => range,
    });
}

fn flush_gap(
    original: &[Token],
    modified: &[Token],
    deleted: &mut Option<Range<usize>>,
    inserted: &mut Option<Range<usize>>,
    spans: &mut Vec<Span>,
) {
    if let Some(range) = deleted.take() {
        spans.push(Span::from_tokens(
            SpanKind::Deleted,
            &original[range.clone()],
            Some(range),
            None,
        ));
    }
    if let Some(range) = inserted.take() {
        spans.push(Span::from_tokens(
            SpanKind::Inserted,
            &modified[range.clone()],
            None,
            Some(range),
        ));
    }
}

/// Concatenate the text of every span belonging to the original side
pub fn reconstruct_original(spans: &[Span]) -> String {
    spans
        .iter()
        .filter(|s| s.in_original())
        .map(|s| s.text.as_str())
        .collect()
}

/// Concatenate the text of every span belonging to the modified side
pub fn reconstruct_modified(spans: &[Span]) -> String {
    spans
        .iter()
        .filter(|s| s.in_modified())
        .map(|s| s.text.as_str())
        .collect()
}
