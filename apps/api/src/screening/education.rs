//! Education Estimator — presence of degree/credential keywords.

use crate::nlp::NormalizedTokenSet;

/// Compared by exact token equality against the normalized résumé.
pub const EDUCATION_KEYWORDS: [&str; 5] = ["phd", "master", "bachelor", "mba", "degree"];

/// Fraction of [`EDUCATION_KEYWORDS`] present in the token set. Each keyword
/// counts once regardless of how often it appears.
pub fn education_score_from_tokens(resume_tokens: &NormalizedTokenSet) -> f64 {
    let present = EDUCATION_KEYWORDS
        .iter()
        .filter(|kw| resume_tokens.contains(**kw))
        .count();
    present as f64 / EDUCATION_KEYWORDS.len() as f64
}
