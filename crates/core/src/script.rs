//! Script detection and token counting
//!
//! Connected scripts such as Arabic do not align meaningfully on whitespace
//! boundaries, so any comparison touching Arabic text is carried out at
//! character granularity on both sides.

use serde::{Deserialize, Serialize};

/// First and last code points of the Arabic block.
const ARABIC_START: char = '\u{0600}';
const ARABIC_END: char = '\u{06FF}';

/// Size of the unit the aligner compares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Granularity {
    /// One token per character
    CharacterLevel,
    /// Words, whitespace runs and punctuation runs
    WordLevel,
}

impl Granularity {
    /// Pick the granularity for a pair of texts.
    ///
    /// Character level wins as soon as either side contains Arabic.
    pub fn classify(original: &str, modified: &str) -> Self {
        if contains_arabic(original) || contains_arabic(modified) {
            Granularity::CharacterLevel
        } else {
            Granularity::WordLevel
        }
    }

    pub fn is_character_level(self) -> bool {
        self == Granularity::CharacterLevel
    }
}

/// Whether `text` has at least one character in U+0600..=U+06FF
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(|ch| (ARABIC_START..=ARABIC_END).contains(&ch))
}

/// Non-empty and made only of space, tab, CR or LF.
///
/// Other Unicode whitespace (NBSP, ideographic space) is not treated as
/// noise. The word tokenizer still groups it into whitespace runs, so an edit
/// that only swaps in an NBSP becomes a change whose trimmed text is empty and
/// whose token count is zero; it is listed but leaves the summary totals at
/// zero.
pub fn is_whitespace_only(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|ch| matches!(ch, ' ' | '\t' | '\r' | '\n'))
}

/// Count tokens in a piece of text.
///
/// Arabic-bearing text counts non-whitespace characters, anything else counts
/// whitespace-delimited words.
pub fn count_tokens(text: &str) -> usize {
    if contains_arabic(text) {
        count_characters(text)
    } else {
        text.split_whitespace().count()
    }
}

/// Count tokens for a change produced under `granularity`.
///
/// Character counting applies when the comparison itself ran at character
/// level or when the change text carries Arabic on its own.
pub fn count_tokens_in(text: &str, granularity: Granularity) -> usize {
    if granularity.is_character_level() {
        count_characters(text)
    } else {
        count_tokens(text)
    }
}

fn count_characters(text: &str) -> usize {
    text.chars().filter(|ch| !ch.is_whitespace()).count()
}
