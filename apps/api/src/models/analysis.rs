use serde::{Deserialize, Serialize};

/// Component scores as percentages, rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    pub skill_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
}

/// One ranked entry of an analysis response. Built once per résumé.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeResult {
    pub file_name: String,
    /// 0 – 100, rounded to two decimals
    pub match_score: f64,
    pub matching_skills: Vec<String>,
    pub details: ScoreDetails,
    /// Set when the document could not be decoded and was scored as empty text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extraction_error: Option<String>,
}

/// Ranked results, best match first.
pub type AnalysisResponse = Vec<ResumeResult>;
