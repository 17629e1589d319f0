//! Configuration for the diff engine and the request limits enforced before it
//! runs

use serde::{Deserialize, Serialize};

use crate::algorithm::{DiffAlgorithm as DiffAlgoTrait, LcsAlgorithm, MyersAlgorithm};
use crate::error::{RequestError, RequestResult, Side};
use crate::impact::{ImpactScorer, LexicalImpactScorer, NullImpactScorer};
use crate::script::Granularity;

/// Diff algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiffAlgorithm {
    /// Linear-space Myers O(ND) (default)
    #[default]
    Myers,
    /// Quadratic table-driven LCS, for short inputs
    Lcs,
}

impl DiffAlgorithm {
    pub(crate) fn build(self) -> Box<dyn DiffAlgoTrait> {
        match self {
            DiffAlgorithm::Myers => Box::new(MyersAlgorithm::new()),
            DiffAlgorithm::Lcs => Box::new(LcsAlgorithm::new()),
        }
    }
}

/// How the token granularity of a comparison is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GranularityPolicy {
    /// Character level if either text contains Arabic, word level otherwise
    #[default]
    Auto,
    /// Always compare characters
    Character,
    /// Always compare words
    Word,
}

impl GranularityPolicy {
    pub fn resolve(self, original: &str, modified: &str) -> Granularity {
        match self {
            GranularityPolicy::Auto => Granularity::classify(original, modified),
            GranularityPolicy::Character => Granularity::CharacterLevel,
            GranularityPolicy::Word => Granularity::WordLevel,
        }
    }
}

/// Configuration for diff computation
pub struct DiffConfig {
    /// Algorithm to use for computing diffs
    pub algorithm: DiffAlgorithm,

    /// Token granularity selection
    pub granularity: GranularityPolicy,

    /// Heuristic behind `Change::impact_score`
    pub scorer: Box<dyn ImpactScorer>,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DiffConfig {
    fn clone(&self) -> Self {
        Self {
            algorithm: self.algorithm,
            granularity: self.granularity,
            scorer: self.scorer.clone_box(),
        }
    }
}

impl DiffConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self {
            algorithm: DiffAlgorithm::default(),
            granularity: GranularityPolicy::default(),
            scorer: Box::new(LexicalImpactScorer::new()),
        }
    }

    /// Myers with impact scoring switched off
    pub fn minimal() -> Self {
        Self::new().with_scorer(Box::new(NullImpactScorer))
    }

    /// Set the diff algorithm
    pub fn with_algorithm(mut self, algorithm: DiffAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the granularity policy
    pub fn with_granularity(mut self, granularity: GranularityPolicy) -> Self {
        self.granularity = granularity;
        self
    }

    /// Set the impact scorer
    pub fn with_scorer(mut self, scorer: Box<dyn ImpactScorer>) -> Self {
        self.scorer = scorer;
        self
    }
}

/// Size policy applied to a request before the core is invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputLimits {
    /// Minimum trimmed length of each text, in characters
    pub min_chars: usize,
    /// Maximum combined length of both texts, in characters
    pub max_combined_chars: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_chars: 10,
            max_combined_chars: 500_000,
        }
    }
}

impl InputLimits {
    /// Parse limits from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    pub fn with_max_combined_chars(mut self, max_combined_chars: usize) -> Self {
        self.max_combined_chars = max_combined_chars;
        self
    }

    /// Reject texts that are too short to compare meaningfully or too large to
    /// compare in bounded time. Shortness is checked first.
    pub fn check(&self, original: &str, modified: &str) -> RequestResult<()> {
        for (side, text) in [(Side::Original, original), (Side::Modified, modified)] {
            let actual = text.trim().chars().count();
            if actual < self.min_chars {
                return Err(RequestError::InputTooShort {
                    side,
                    min_chars: self.min_chars,
                    actual,
                });
            }
        }

        let combined = original.chars().count() + modified.chars().count();
        if combined > self.max_combined_chars {
            return Err(RequestError::InputTooLarge {
                limit: self.max_combined_chars,
                actual: combined,
            });
        }

        Ok(())
    }
}
