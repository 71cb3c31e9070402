use std::collections::HashSet;

use crate::nlp::lemmatizer::lemmatize;
use crate::nlp::stopwords::is_stopword;

/// Lowercase, lemmatized, stopword-free, alphanumeric-only tokens of a text.
pub type NormalizedTokenSet = HashSet<String>;

/// Normalizes `text` into a token set. Callers only ever test membership,
/// so duplicates collapse.
pub fn normalize(text: &str) -> NormalizedTokenSet {
    normalize_tokens(text).into_iter().collect()
}

/// Ordered form of [`normalize`]. Duplicates are kept.
///
/// 1. lowercase
/// 2. split on every non-alphanumeric character (whitespace and punctuation),
///    so only purely alphanumeric tokens remain
/// 3. drop stopwords
/// 4. lemmatize
pub fn normalize_tokens(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .filter(|token| !is_stopword(token))
        .map(lemmatize)
        .collect()
}
