//! Property-based tests for the comparison pipeline.

use comparely_core::algorithm::{align_early, edit_cost, DiffAlgorithm, LcsAlgorithm, MyersAlgorithm};
use comparely_core::navigator::{next, prev};
use comparely_core::tokenizers::{Tokenizer, WordTokenizer};
use comparely_core::{compare, ChangeId, ChangeKind, DiffSummary, Granularity};
use proptest::prelude::*;

/// Short Latin documents with plenty of repeated words and punctuation
fn latin_text() -> impl Strategy<Value = String> {
    "[a-c .,\n]{0,40}"
}

/// Documents mixing Arabic letters, Latin letters and spaces
fn mixed_text() -> impl Strategy<Value = String> {
    "[\u{0627}-\u{064A}a-c ]{0,30}"
}

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 1..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: a text compared with itself has no changes.
    #[test]
    fn identical_input_has_no_changes(text in latin_text()) {
        let result = compare(&text, &text);

        prop_assert!(result.changes.is_empty());
        prop_assert_eq!(result.summary.inserted_tokens, 0);
        prop_assert_eq!(result.summary.deleted_tokens, 0);
        prop_assert_eq!(result.summary.status.as_str(), DiffSummary::NO_CHANGES);
    }

    /// Property: each column reproduces its input exactly.
    #[test]
    fn columns_reconstruct_inputs(original in latin_text(), modified in latin_text()) {
        let result = compare(&original, &modified);

        prop_assert_eq!(result.left_column.text(), original);
        prop_assert_eq!(result.right_column.text(), modified);
    }

    /// Property: reconstruction also holds at character level.
    #[test]
    fn columns_reconstruct_mixed_script(original in mixed_text(), modified in mixed_text()) {
        let result = compare(&original, &modified);

        prop_assert_eq!(result.left_column.text(), original);
        prop_assert_eq!(result.right_column.text(), modified);
    }

    /// Property: change ids are exactly 1..=N in list order.
    #[test]
    fn change_ids_are_dense(original in latin_text(), modified in latin_text()) {
        let result = compare(&original, &modified);

        let ids: Vec<ChangeId> = result.changes.iter().map(|c| c.id).collect();
        let expected: Vec<ChangeId> = (1..=result.changes.len() as u32).map(ChangeId).collect();
        prop_assert_eq!(ids, expected);
    }

    /// Property: summary totals are the sums over the change list.
    #[test]
    fn summary_matches_changes(original in mixed_text(), modified in mixed_text()) {
        let result = compare(&original, &modified);

        let inserted: usize = result.changes.iter()
            .filter(|c| c.kind == ChangeKind::Inserted)
            .map(|c| c.token_count)
            .sum();
        let deleted: usize = result.changes.iter()
            .filter(|c| c.kind == ChangeKind::Deleted)
            .map(|c| c.token_count)
            .sum();

        prop_assert_eq!(result.summary.inserted_tokens, inserted);
        prop_assert_eq!(result.summary.deleted_tokens, deleted);
        prop_assert_eq!(result.summary.total_changes, result.changes.len());
    }

    /// Property: widening the gaps between words is never a change.
    #[test]
    fn spacing_changes_are_suppressed(words in words()) {
        let original = words.join(" ");
        let modified = words.join("  ");

        let result = compare(&original, &modified);

        prop_assert!(result.changes.is_empty());
        prop_assert_eq!(result.right_column.text(), modified);
    }

    /// Property: Arabic anywhere in the input selects character level.
    #[test]
    fn arabic_selects_character_level(text in latin_text(), arabic in "[\u{0627}-\u{064A}]{1,5}") {
        let with_arabic = format!("{text}{arabic}");

        prop_assert_eq!(compare(&text, &with_arabic).granularity, Granularity::CharacterLevel);
        prop_assert_eq!(compare(&with_arabic, &text).granularity, Granularity::CharacterLevel);
    }

    /// Property: Myers finds an edit script as short as the LCS table does.
    #[test]
    fn myers_is_minimal(original in latin_text(), modified in latin_text()) {
        let tokenizer = WordTokenizer::new();
        let a = tokenizer.tokenize(&original);
        let b = tokenizer.tokenize(&modified);

        let myers = MyersAlgorithm::new().compute(&a, &b);
        let lcs = LcsAlgorithm::new().compute(&a, &b);

        prop_assert_eq!(edit_cost(&myers), edit_cost(&lcs));
    }

    /// Property: aligner output already has every match at its earliest spot.
    #[test]
    fn aligner_output_is_settled(original in latin_text(), modified in latin_text()) {
        let tokenizer = WordTokenizer::new();
        let a = tokenizer.tokenize(&original);
        let b = tokenizer.tokenize(&modified);

        for ops in [
            MyersAlgorithm::new().compute(&a, &b),
            LcsAlgorithm::new().compute(&a, &b),
        ] {
            prop_assert_eq!(align_early(&a, &b, &ops), ops);
        }
    }

    /// Property: navigation stays in bounds and never wraps.
    #[test]
    fn navigation_is_clamped(original in latin_text(), modified in latin_text(), start in 0usize..20) {
        let result = compare(&original, &modified);
        let changes = &result.changes;
        let last = changes.len().saturating_sub(1);

        let forward = next(changes, start);
        let backward = prev(changes, start);

        prop_assert!(forward <= last);
        prop_assert!(backward <= last);
        prop_assert_eq!(prev(changes, 0), 0);
        prop_assert_eq!(next(changes, last), last);
    }
}
