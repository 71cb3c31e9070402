//! Skill Matcher — tiered partial-credit token overlap between required skill
//! phrases and a résumé.
//!
//! Each required skill is normalized into its own token set and compared
//! against the résumé token set:
//!
//! | token ratio | credit |
//! |-------------|--------|
//! | 1.0         | 1.2    |
//! | ≥ 0.8       | 1.0    |
//! | ≥ 0.6       | 0.7    |
//! | ≥ 0.4       | 0.5    |
//! | > 0         | 0.2    |
//! | 0           | 0.0    |
//!
//! `skill_score = min(1.0, Σ credit / required_skills.len())`. The denominator
//! counts every skill passed in, including phrases that normalize to nothing.

use crate::nlp::{normalize, NormalizedTokenSet};

pub const PERFECT_MATCH_CREDIT: f64 = 1.2;

/// `(minimum ratio, credit)` for every tier below a perfect match, highest first.
const PARTIAL_TIERS: &[(f64, f64)] = &[(0.8, 1.0), (0.6, 0.7), (0.4, 0.5)];

pub const WEAK_MATCH_CREDIT: f64 = 0.2;

/// Per-skill overlap, reported in trace logs.
#[derive(Debug, Clone)]
pub struct SkillMatchResult {
    pub skill: String,
    pub token_ratio: f64,
    pub credit: f64,
}

#[derive(Debug, Clone)]
pub struct SkillMatchOutcome {
    pub skill_score: f64,
    pub matching_skills: Vec<String>,
    /// Only skills with a non-empty normalized form appear here.
    pub per_skill: Vec<SkillMatchResult>,
}

/// Maps a token ratio in `[0, 1]` to its tier credit.
pub fn tier_credit(token_ratio: f64) -> f64 {
    if token_ratio >= 1.0 {
        return PERFECT_MATCH_CREDIT;
    }
    for &(min_ratio, credit) in PARTIAL_TIERS {
        if token_ratio >= min_ratio {
            return credit;
        }
    }
    if token_ratio > 0.0 {
        WEAK_MATCH_CREDIT
    } else {
        0.0
    }
}

/// Scores an already-normalized résumé token set against `required_skills`.
pub fn match_skills_against(
    resume_tokens: &NormalizedTokenSet,
    required_skills: &[String],
) -> SkillMatchOutcome {
    let total_skills = required_skills.len();
    let mut total_score = 0.0_f64;
    let mut matching_skills = Vec::new();
    let mut per_skill = Vec::new();

    for skill in required_skills {
        let skill_tokens = normalize(skill);
        if skill_tokens.is_empty() {
            continue;
        }

        let matched = skill_tokens
            .iter()
            .filter(|t| resume_tokens.contains(*t))
            .count();

        // Any-token overlap, independent of the tier the skill lands in.
        if matched > 0 {
            matching_skills.push(skill.clone());
        }

        let token_ratio = if matched == skill_tokens.len() {
            1.0
        } else {
            matched as f64 / skill_tokens.len() as f64
        };
        let credit = tier_credit(token_ratio);
        total_score += credit;

        per_skill.push(SkillMatchResult {
            skill: skill.clone(),
            token_ratio,
            credit,
        });
    }

    let skill_score = if total_skills == 0 {
        0.0
    } else {
        (total_score / total_skills as f64).min(1.0)
    };

    SkillMatchOutcome {
        skill_score,
        matching_skills,
        per_skill,
    }
}
