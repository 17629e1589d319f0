//! Impact scoring for changes
//!
//! The impact score is a soft relevance signal: how much meaningful content a
//! change carries. Scorers are pluggable so hosts can swap the heuristic, and
//! tests can pin it, without touching the annotator.

/// Function words that carry little content on their own
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "can", "do", "does", "for",
    "from", "had", "has", "have", "he", "her", "his", "i", "if", "in", "into", "is", "it", "its",
    "me", "my", "of", "on", "or", "our", "she", "so", "than", "that", "the", "their", "them",
    "then", "there", "these", "they", "this", "those", "to", "us", "was", "we", "were", "what",
    "when", "which", "who", "will", "with", "would", "you", "your",
    // Arabic particles and prepositions
    "و", "في", "من", "على", "إلى", "الى", "عن", "أن", "ان", "إن", "لا", "ما", "مع", "هذا", "هذه",
    "ذلك", "التي", "الذي", "هو", "هي", "كان", "قد", "ثم", "أو", "او",
];

/// Trait for change impact heuristics
pub trait ImpactScorer: Send + Sync {
    /// Score the text of a single change. Must be deterministic.
    fn score(&self, text: &str) -> u32;

    /// Get the name of this scorer
    fn name(&self) -> &str;

    /// Clone into a box
    fn clone_box(&self) -> Box<dyn ImpactScorer>;
}

impl Clone for Box<dyn ImpactScorer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Counts content words: whitespace-delimited words that contain at least one
/// letter and are not stop-words. Surrounding punctuation is ignored.
///
/// Stands in for a noun + verb count; it grows with the amount of meaningful
/// text changed and never with punctuation, numbers or function words.
#[derive(Debug, Clone, Default)]
pub struct LexicalImpactScorer;

impl LexicalImpactScorer {
    pub fn new() -> Self {
        Self
    }
}

impl ImpactScorer for LexicalImpactScorer {
    fn score(&self, text: &str) -> u32 {
        text.split_whitespace()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|word| word.chars().any(char::is_alphabetic))
            .filter(|word| !is_stopword(word))
            .count() as u32
    }

    fn name(&self) -> &str {
        "lexical"
    }

    fn clone_box(&self) -> Box<dyn ImpactScorer> {
        Box::new(self.clone())
    }
}

/// Always scores zero
#[derive(Debug, Clone, Default)]
pub struct NullImpactScorer;

impl ImpactScorer for NullImpactScorer {
    fn score(&self, _text: &str) -> u32 {
        0
    }

    fn name(&self) -> &str {
        "null"
    }

    fn clone_box(&self) -> Box<dyn ImpactScorer> {
        Box::new(self.clone())
    }
}

fn is_stopword(word: &str) -> bool {
    let lower = word.to_lowercase();
    STOPWORDS.contains(&lower.as_str())
}
