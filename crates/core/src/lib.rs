//! # Comparely Core
//!
//! Document comparison: align two texts, annotate every change and project the
//! result into two display columns.
//!
//! ## Core Concepts
//!
//! - **Granularity**: Arabic text is compared character by character, anything
//!   else word by word
//! - **Tokenizers**: Split text into lossless token sequences
//! - **Algorithms**: Align token sequences (linear-space Myers by default)
//! - **Annotator**: Number changes, count tokens and score their impact,
//!   ignoring whitespace-only edits
//! - **Render**: Left/right columns of escaped, anchored fragments
//! - **Navigator**: Clamped previous/next movement across changes
//!
//! ## Example
//!
//! ```rust
//! use comparely_core::{DiffAlgorithm, DiffConfig, DiffEngine};
//!
//! let config = DiffConfig::default().with_algorithm(DiffAlgorithm::Myers);
//! let engine = DiffEngine::new(config);
//!
//! let result = engine.compare("The cat sat.", "The dog sat.");
//! assert_eq!(result.changes.len(), 2);
//! assert_eq!(result.summary.status, "Inserted 1 token, Removed 1 token.");
//! ```

pub mod algorithm;
pub mod annotate;
pub mod collab;
pub mod config;
pub mod diff;
pub mod engine;
pub mod error;
pub mod extract;
pub mod impact;
pub mod navigator;
pub mod render;
pub mod script;
pub mod service;
pub mod store;
pub mod tokenizers;

// Re-export main types
pub use annotate::{Change, ChangeId, ChangeKind, DiffSummary};
pub use config::{DiffAlgorithm, DiffConfig, GranularityPolicy, InputLimits};
pub use diff::{Span, SpanKind};
pub use engine::{Comparison, DiffEngine};
pub use error::{CompareError, RequestError, Side};
pub use navigator::ChangeCursor;
pub use render::{Column, Fragment, FragmentClass};
pub use script::{count_tokens, Granularity};
pub use service::{CompareRequest, ComparisonService};
pub use store::{ComparisonRecord, ComparisonStore, MemoryStore};

/// Compare two texts with the default configuration
///
/// # Example
///
/// ```rust
/// use comparely_core::compare;
///
/// let result = compare("a b", "a  b");
/// assert!(result.is_empty());
/// ```
pub fn compare(original: &str, modified: &str) -> Comparison {
    DiffEngine::default().compare(original, modified)
}
