use std::ops::{Index, IndexMut, Range};

use crate::algorithm::{align_early, common_prefix_len, common_suffix_len, DiffAlgorithm};
use crate::diff::{DiffOp, OpSink};
use crate::tokenizers::Token;

/// Myers O(ND) diff algorithm.
///
/// Uses the linear-space divide-and-conquer variant: each level strips the
/// common prefix and suffix, finds the middle snake of what remains and
/// recurses on both halves. Memory stays proportional to the input length
/// regardless of how many edits separate the two sides.
///
/// Which of several equally short scripts the recursion lands on depends on
/// where the middle snakes fall, so the result goes through [`align_early`]
/// before it is returned.
#[derive(Debug, Clone, Default)]
pub struct MyersAlgorithm;

impl MyersAlgorithm {
    pub fn new() -> Self {
        Self
    }
}

impl DiffAlgorithm for MyersAlgorithm {
    fn compute(&self, original: &[Token], modified: &[Token]) -> Vec<DiffOp> {
        let max_d = max_d(original.len(), modified.len());
        let mut vf = V::new(max_d);
        let mut vb = V::new(max_d);
        let mut sink = OpSink::new();

        conquer(
            original,
            0..original.len(),
            modified,
            0..modified.len(),
            &mut vf,
            &mut vb,
            &mut sink,
        );

        align_early(original, modified, &sink.finish())
    }

    fn name(&self) -> &str {
        "myers"
    }
}

/// Furthest-reaching x per diagonal, indexed by a signed diagonal `k`
struct V {
    offset: isize,
    v: Vec<isize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        Self {
            offset: max_d as isize,
            v: vec![0; 2 * max_d + 2],
        }
    }
}

impl Index<isize> for V {
    type Output = isize;

    fn index(&self, k: isize) -> &isize {
        &self.v[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, k: isize) -> &mut isize {
        &mut self.v[(k + self.offset) as usize]
    }
}

fn max_d(len1: usize, len2: usize) -> usize {
    (len1 + len2 + 1) / 2 + 1
}

fn conquer(
    original: &[Token],
    mut old_range: Range<usize>,
    modified: &[Token],
    mut new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
    sink: &mut OpSink,
) {
    let prefix = common_prefix_len(&original[old_range.clone()], &modified[new_range.clone()]);
    sink.equal(old_range.start, new_range.start, prefix);
    old_range.start += prefix;
    new_range.start += prefix;

    let suffix = common_suffix_len(&original[old_range.clone()], &modified[new_range.clone()]);
    let suffix_old = old_range.end - suffix;
    let suffix_new = new_range.end - suffix;
    old_range.end = suffix_old;
    new_range.end = suffix_new;

    if old_range.is_empty() && new_range.is_empty() {
        // only the shared affixes remain
    } else if new_range.is_empty() {
        sink.delete(old_range.start, old_range.len());
    } else if old_range.is_empty() {
        sink.insert(new_range.start, new_range.len());
    } else if let Some((x_start, y_start)) =
        find_middle_snake(original, old_range.clone(), modified, new_range.clone(), vf, vb)
    {
        conquer(
            original,
            old_range.start..x_start,
            modified,
            new_range.start..y_start,
            vf,
            vb,
            sink,
        );
        conquer(
            original,
            x_start..old_range.end,
            modified,
            y_start..new_range.end,
            vf,
            vb,
            sink,
        );
    } else {
        sink.delete(old_range.start, old_range.len());
        sink.insert(new_range.start, new_range.len());
    }

    sink.equal(suffix_old, suffix_new, suffix);
}

/// Find the start of the middle snake of the optimal path through the edit
/// graph of `old_range` x `new_range`, in absolute token indices.
fn find_middle_snake(
    original: &[Token],
    old_range: Range<usize>,
    modified: &[Token],
    new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
) -> Option<(usize, usize)> {
    let n = old_range.len() as isize;
    let m = new_range.len() as isize;
    let old = &original[old_range.clone()];
    let new = &modified[new_range.clone()];

    let delta = n - m;
    let odd = delta & 1 == 1;

    vf[1] = 0;
    vb[1] = 0;

    let d_max = max_d(old.len(), new.len()) as isize;

    for d in 0..d_max {
        // forward path
        let mut k = d;
        while k >= -d {
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y = x - k;
            let (x0, y0) = (x, y);
            if x >= 0 && y >= 0 && x < n && y < m {
                x += common_prefix_len(&old[x as usize..], &new[y as usize..]) as isize;
            }
            vf[k] = x;
            if odd && (k - delta).abs() <= d - 1 && vf[k] + vb[-(k - delta)] >= n {
                if let Some(point) = split_point(x0, y0, n, m, &old_range, &new_range) {
                    return Some(point);
                }
            }
            k -= 2;
        }

        // backward path
        let mut k = d;
        while k >= -d {
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let mut y = x - k;
            if x >= 0 && y >= 0 && x < n && y < m {
                let advance = common_suffix_len(
                    &old[..(n - x) as usize],
                    &new[..(m - y) as usize],
                ) as isize;
                x += advance;
                y += advance;
            }
            vb[k] = x;
            if !odd && (k - delta).abs() <= d && vb[k] + vf[-(k - delta)] >= n {
                if let Some(point) = split_point(n - x, m - y, n, m, &old_range, &new_range) {
                    return Some(point);
                }
            }
            k -= 2;
        }
    }

    None
}

/// Convert a relative split point to absolute indices, refusing points
/// outside the edit graph.
fn split_point(
    x: isize,
    y: isize,
    n: isize,
    m: isize,
    old_range: &Range<usize>,
    new_range: &Range<usize>,
) -> Option<(usize, usize)> {
    if (0..=n).contains(&x) && (0..=m).contains(&y) {
        Some((old_range.start + x as usize, new_range.start + y as usize))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::create_tokens;
    use super::*;
    use crate::algorithm::{edit_cost, LcsAlgorithm};
    use crate::tokenizers::{CharacterTokenizer, Tokenizer};

    #[test]
    fn test_myers_basic() {
        let orig = create_tokens("hello world");
        let modified = create_tokens("hello rust");

        let ops = MyersAlgorithm::new().compute(&orig, &modified);

        assert_eq!(ops[0], DiffOp::Equal { old_index: 0, new_index: 0, len: 2 });
        assert_eq!(ops.len(), 3);
        assert_eq!(edit_cost(&ops), 2);
    }

    #[test]
    fn test_identical_input_is_one_equal_run() {
        let tokens = create_tokens("the same text twice");

        let ops = MyersAlgorithm::new().compute(&tokens, &tokens);

        assert_eq!(
            ops,
            vec![DiffOp::Equal { old_index: 0, new_index: 0, len: tokens.len() }]
        );
    }

    #[test]
    fn test_all_deletions() {
        let orig = create_tokens("hello world");
        let modified = create_tokens("");

        let ops = MyersAlgorithm::new().compute(&orig, &modified);

        assert_eq!(ops, vec![DiffOp::Delete { old_index: 0, old_len: 3 }]);
    }

    #[test]
    fn test_all_insertions() {
        let orig = create_tokens("");
        let modified = create_tokens("hello world");

        let ops = MyersAlgorithm::new().compute(&orig, &modified);

        assert_eq!(ops, vec![DiffOp::Insert { new_index: 0, new_len: 3 }]);
    }

    #[test]
    fn test_both_empty() {
        assert!(MyersAlgorithm::new().compute(&[], &[]).is_empty());
    }

    #[test]
    fn test_minimal_on_repeated_tokens() {
        // A bounded lookahead re-sync would misalign the repeated "a"s here.
        let orig = create_tokens("a b a b a c a b a");
        let modified = create_tokens("a b a c a b a b a");

        let ops = MyersAlgorithm::new().compute(&orig, &modified);
        let reference = LcsAlgorithm::new().compute(&orig, &modified);

        assert_eq!(edit_cost(&ops), edit_cost(&reference));
    }

    #[test]
    fn test_classic_character_example() {
        let orig = CharacterTokenizer.tokenize("ABCABBA");
        let modified = CharacterTokenizer.tokenize("CBABAC");

        let ops = MyersAlgorithm::new().compute(&orig, &modified);

        // LCS length is 4, so 3 + 2 edits
        assert_eq!(edit_cost(&ops), 5);
    }
}
