//! Aggregator & Ranker — weighted combination of component scores and the
//! stable descending sort over a batch.

use crate::models::analysis::{ResumeResult, ScoreDetails};

#[derive(Debug, Clone)]
pub struct ScoringWeights {
    pub skill: f64,
    pub experience: f64,
    pub education: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.8,
            experience: 0.15,
            education: 0.05,
        }
    }
}

/// Per-résumé component scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentScores {
    pub skill: f64,
    pub experience: f64,
    pub education: f64,
}

impl ComponentScores {
    pub const ZERO: Self = Self {
        skill: 0.0,
        experience: 0.0,
        education: 0.0,
    };

    /// Percentages for display, rounded to two decimals.
    pub fn to_details(self) -> ScoreDetails {
        ScoreDetails {
            skill_score: round2(self.skill * 100.0),
            experience_score: round2(self.experience * 100.0),
            education_score: round2(self.education * 100.0),
        }
    }
}

/// Weighted sum as a percentage: `(0.8·skill + 0.15·experience + 0.05·education) × 100`.
pub fn compute_final_score(scores: &ComponentScores, weights: &ScoringWeights) -> f64 {
    (scores.skill * weights.skill
        + scores.experience * weights.experience
        + scores.education * weights.education)
        * 100.0
}

/// Assembles the immutable result record for one résumé.
pub fn build_result(
    file_name: String,
    scores: ComponentScores,
    matching_skills: Vec<String>,
    weights: &ScoringWeights,
) -> ResumeResult {
    ResumeResult {
        file_name,
        match_score: round2(compute_final_score(&scores, weights)),
        matching_skills,
        details: scores.to_details(),
        extraction_error: None,
    }
}

/// Stable sort by `match_score`, descending. Equal scores keep batch order.
pub fn rank(results: &mut [ResumeResult]) {
    results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
}

/// Two decimals, halves away from zero on the scaled value (`0.125` → `0.13`).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
