//! Diff algorithms implementation
//!
//! Aligners compare token sequences by text and return run-length
//! [`DiffOp`]s. Both implementations here are minimal: the number of deleted
//! plus inserted tokens equals `len(original) + len(modified) - 2 * LCS`.
//!
//! Several minimal scripts usually exist. Both aligners finish with
//! [`align_early`], which settles each matched token on the earliest position
//! it can take, so equally short alignments resolve towards earlier common
//! tokens.
pub mod lcs;
pub mod myers;

use crate::diff::{DiffOp, OpSink};
use crate::tokenizers::Token;

pub use lcs::LcsAlgorithm;
pub use myers::MyersAlgorithm;

/// Trait for diff algorithms
pub trait DiffAlgorithm: Send + Sync {
    /// Compute a minimal diff between two token sequences, with matches
    /// placed as [`align_early`] leaves them
    fn compute(&self, original: &[Token], modified: &[Token]) -> Vec<DiffOp>;

    /// Get the name of this algorithm
    fn name(&self) -> &str;
}

// ============================================================================
// Helper Functions
// ============================================================================

fn common_prefix_len(original: &[Token], modified: &[Token]) -> usize {
    original
        .iter()
        .zip(modified)
        .take_while(|(a, b)| a.text == b.text)
        .count()
}

fn common_suffix_len(original: &[Token], modified: &[Token]) -> usize {
    original
        .iter()
        .rev()
        .zip(modified.iter().rev())
        .take_while(|(a, b)| a.text == b.text)
        .count()
}

/// Total number of tokens deleted or inserted by a script
pub fn edit_cost(ops: &[DiffOp]) -> usize {
    ops.iter().map(DiffOp::edit_cost).sum()
}

/// Move every matched token to the earliest original position, then the
/// earliest modified position, that keeps the matches in order.
///
/// The edit cost is unchanged and the result is a fixed point: running it
/// twice gives the same ops.
pub fn align_early(original: &[Token], modified: &[Token], ops: &[DiffOp]) -> Vec<DiffOp> {
    let mut pairs: Vec<(usize, usize)> = Vec::new();
    for op in ops {
        if let DiffOp::Equal {
            old_index,
            new_index,
            len,
        } = *op
        {
            pairs.extend((0..len).map(|k| (old_index + k, new_index + k)));
        }
    }

    let mut floor = 0;
    for pair in pairs.iter_mut() {
        let text = &modified[pair.1].text;
        if let Some(i) = (floor..pair.0).find(|&i| original[i].text == *text) {
            pair.0 = i;
        }
        floor = pair.0 + 1;
    }

    let mut floor = 0;
    for pair in pairs.iter_mut() {
        let text = &original[pair.0].text;
        if let Some(j) = (floor..pair.1).find(|&j| modified[j].text == *text) {
            pair.1 = j;
        }
        floor = pair.1 + 1;
    }

    let mut sink = OpSink::new();
    let (mut i, mut j) = (0, 0);
    for (old_index, new_index) in pairs {
        sink.delete(i, old_index - i);
        sink.insert(j, new_index - j);
        sink.equal(old_index, new_index, 1);
        i = old_index + 1;
        j = new_index + 1;
    }
    sink.delete(i, original.len() - i);
    sink.insert(j, modified.len() - j);
    sink.finish()
}
