use crate::algorithm::{align_early, common_prefix_len, common_suffix_len, DiffAlgorithm};
use crate::diff::{DiffOp, OpSink};
use crate::tokenizers::Token;

/// Table-driven longest common subsequence.
///
/// Quadratic in time and memory over the part left after stripping the shared
/// prefix and suffix, so it suits short inputs and serves as a reference for
/// the Myers aligner. The table walk itself favours deleting on ties; the
/// final [`align_early`] pass then pulls each match to its earliest position.
#[derive(Debug, Clone, Default)]
pub struct LcsAlgorithm;

impl LcsAlgorithm {
    pub fn new() -> Self {
        Self
    }
}

impl DiffAlgorithm for LcsAlgorithm {
    fn compute(&self, original: &[Token], modified: &[Token]) -> Vec<DiffOp> {
        let mut sink = OpSink::new();

        let prefix = common_prefix_len(original, modified);
        let suffix = common_suffix_len(&original[prefix..], &modified[prefix..]);
        let old_end = original.len() - suffix;
        let new_end = modified.len() - suffix;

        sink.equal(0, 0, prefix);
        walk(
            &original[prefix..old_end],
            &modified[prefix..new_end],
            prefix,
            prefix,
            &mut sink,
        );
        sink.equal(old_end, new_end, suffix);

        align_early(original, modified, &sink.finish())
    }

    fn name(&self) -> &str {
        "lcs"
    }
}

fn walk(original: &[Token], modified: &[Token], old_base: usize, new_base: usize, sink: &mut OpSink) {
    let n = original.len();
    let m = modified.len();

    // dp[i][j] = LCS length of original[i..] and modified[j..]
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            dp[i][j] = if original[i].text == modified[j].text {
                dp[i + 1][j + 1] + 1
            } else {
                dp[i + 1][j].max(dp[i][j + 1])
            };
        }
    }

    let mut i = 0;
    let mut j = 0;
    while i < n && j < m {
        if original[i].text == modified[j].text {
            sink.equal(old_base + i, new_base + j, 1);
            i += 1;
            j += 1;
        } else if dp[i + 1][j] >= dp[i][j + 1] {
            sink.delete(old_base + i, 1);
            i += 1;
        } else {
            sink.insert(new_base + j, 1);
            j += 1;
        }
    }
    sink.delete(old_base + i, n - i);
    sink.insert(new_base + j, m - j);
}
