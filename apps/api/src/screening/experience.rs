//! Experience Estimator — reads explicit "N years of experience" phrasing.

use std::sync::LazyLock;

use regex::Regex;

/// Years at which the experience score saturates.
pub const SATURATION_YEARS: f64 = 10.0;

/// `<integer> year|years|yr|yrs [of] experience`, matched on lowercased text.
/// Whitespace between the parts is optional.
static EXPERIENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([0-9]+)\s*(?:years?|yrs?)\s*(?:of\s*)?experience\b")
        .expect("experience pattern is a valid regex")
});

/// Largest year count mentioned in an experience phrase, if any.
///
/// Counts too large for `u64` saturate rather than being dropped.
pub fn max_years_mentioned(resume_text: &str) -> Option<u64> {
    let lowered = resume_text.to_lowercase();
    EXPERIENCE_PATTERN
        .captures_iter(&lowered)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .max()
}

/// `min(max_years / 10, 1.0)`, or `0.0` when no phrase is present.
pub fn experience_score(resume_text: &str) -> f64 {
    match max_years_mentioned(resume_text) {
        Some(years) => (years as f64 / SATURATION_YEARS).min(1.0),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_phrase_scores_zero() {
        assert_eq!(experience_score("Seasoned engineer, worked at Acme."), 0.0);
        assert_eq!(experience_score(""), 0.0);
    }

    #[test]
    fn test_basic_phrase() {
        assert_eq!(experience_score("5 years of experience in backend"), 0.5);
    }

    #[test]
    fn test_phrase_variants() {
        assert_eq!(max_years_mentioned("3 yrs experience"), Some(3));
        assert_eq!(max_years_mentioned("1 year experience"), Some(1));
        assert_eq!(max_years_mentioned("7yr of experience"), Some(7));
        assert_eq!(max_years_mentioned("4 Years Of Experience"), Some(4));
        assert_eq!(max_years_mentioned("2years experience"), Some(2));
    }

    #[test]
    fn test_takes_maximum_of_all_mentions() {
        let text = "2 years of experience with Go. 8 years experience with Python. 4 yrs experience in ops.";
        assert_eq!(max_years_mentioned(text), Some(8));
        assert_eq!(experience_score(text), 0.8);
    }

    #[test]
    fn test_saturates_at_ten_years() {
        assert_eq!(experience_score("10 years of experience"), 1.0);
        assert_eq!(experience_score("25 years of experience"), 1.0);
    }

    #[test]
    fn test_requires_experience_word() {
        assert_eq!(experience_score("5 years at Google"), 0.0);
        assert_eq!(experience_score("experience: 5 years"), 0.0);
    }

    #[test]
    fn test_requires_word_boundaries() {
        assert_eq!(experience_score("5 years of experienced leadership"), 0.0);
        assert_eq!(experience_score("5 yearsly experience"), 0.0);
    }

    #[test]
    fn test_oversized_count_saturates() {
        let text = "99999999999999999999999 years of experience";
        assert_eq!(max_years_mentioned(text), Some(u64::MAX));
        assert_eq!(experience_score(text), 1.0);
    }

    #[test]
    fn test_monotonic_in_years() {
        let mut previous = 0.0;
        for years in 0..15 {
            let score = experience_score(&format!("{years} years of experience"));
            assert!(score >= previous);
            previous = score;
        }
    }
}
