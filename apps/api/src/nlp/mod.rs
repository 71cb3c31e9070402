//! Text normalization — the shared NLP layer used by every scoring component.
//!
//! The stopword set and lemmatizer tables are process-wide and read-only.
//! Both are built once behind `LazyLock`; `init()` forces them at startup so
//! no request pays the construction cost.

pub mod lemmatizer;
pub mod normalizer;
pub mod stopwords;

pub use normalizer::{normalize, NormalizedTokenSet};

/// Eagerly builds the stopword set. Safe to call from multiple threads.
pub fn init() -> usize {
    stopwords::english().len()
}
