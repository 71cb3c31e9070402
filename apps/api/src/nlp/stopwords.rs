use std::collections::HashSet;
use std::sync::LazyLock;

use stop_words::{get, LANGUAGE};

static ENGLISH: LazyLock<HashSet<String>> = LazyLock::new(|| {
    get(LANGUAGE::English)
        .into_iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
});

/// The English stopword set, built on first access.
pub fn english() -> &'static HashSet<String> {
    &ENGLISH
}

/// Expects an already-lowercased token.
pub fn is_stopword(token: &str) -> bool {
    ENGLISH.contains(token)
}
