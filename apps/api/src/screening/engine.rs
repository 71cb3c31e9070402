//! Batch driver: extract → normalize → {skills, experience, education} → aggregate → rank.
//!
//! Documents are processed strictly one after another. A document that cannot
//! be decoded is scored against empty text and flagged, never dropped, and
//! never aborts its siblings.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info, trace, warn};

use crate::models::analysis::{AnalysisResponse, ResumeResult};
use crate::nlp::normalize;
use crate::screening::aggregate::{build_result, rank, ComponentScores, ScoringWeights};
use crate::screening::education::education_score_from_tokens;
use crate::screening::experience::experience_score;
use crate::screening::ingest::{ExtractionError, TextExtractor};
use crate::screening::skill_match::match_skills_against;

/// One uploaded résumé, as received from the transport.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Per-document ingestion result.
#[derive(Debug)]
pub enum DocumentOutcome {
    Extracted(String),
    Failed(ExtractionError),
}

/// Scores one résumé's text. Normalizes the text once and shares the token
/// set between the skill matcher and the education estimator.
pub fn score_resume(
    file_name: String,
    resume_text: &str,
    required_skills: &[String],
    weights: &ScoringWeights,
) -> ResumeResult {
    let resume_tokens = normalize(resume_text);
    let skills = match_skills_against(&resume_tokens, required_skills);
    for m in &skills.per_skill {
        trace!(skill = %m.skill, ratio = m.token_ratio, credit = m.credit, "Skill overlap");
    }

    let scores = ComponentScores {
        skill: skills.skill_score,
        experience: experience_score(resume_text),
        education: education_score_from_tokens(&resume_tokens),
    };

    debug!(
        file_name = %file_name,
        skill = scores.skill,
        experience = scores.experience,
        education = scores.education,
        matched = skills.matching_skills.len(),
        "Scored resume"
    );

    build_result(file_name, scores, skills.matching_skills, weights)
}

/// Scores an ingestion outcome. Failed documents fall back to empty text and
/// carry the failure reason.
pub fn score_document(
    file_name: String,
    outcome: DocumentOutcome,
    required_skills: &[String],
    weights: &ScoringWeights,
) -> ResumeResult {
    match outcome {
        DocumentOutcome::Extracted(text) => {
            score_resume(file_name, &text, required_skills, weights)
        }
        DocumentOutcome::Failed(err) => {
            warn!(file_name = %file_name, error = %err, "Extraction failed, scoring as empty text");
            let mut result = score_resume(file_name, "", required_skills, weights);
            result.extraction_error = Some(err.to_string());
            result
        }
    }
}

/// Runs the extractor on the blocking pool. A panicking extractor is reported
/// as a failed document.
pub async fn extract_document(extractor: Arc<dyn TextExtractor>, bytes: Bytes) -> DocumentOutcome {
    match tokio::task::spawn_blocking(move || extractor.extract_text(&bytes)).await {
        Ok(Ok(text)) => DocumentOutcome::Extracted(text),
        Ok(Err(err)) => DocumentOutcome::Failed(err),
        Err(join_err) => DocumentOutcome::Failed(ExtractionError::Aborted(join_err.to_string())),
    }
}

/// Scores every document in order, then ranks the batch.
pub async fn analyze_documents(
    extractor: Arc<dyn TextExtractor>,
    documents: Vec<UploadedDocument>,
    required_skills: &[String],
    job_role: &str,
) -> AnalysisResponse {
    let weights = ScoringWeights::default();
    let total = documents.len();
    let mut results = Vec::with_capacity(total);
    let mut failed = 0usize;

    for doc in documents {
        let outcome = extract_document(Arc::clone(&extractor), doc.bytes).await;
        if matches!(outcome, DocumentOutcome::Failed(_)) {
            failed += 1;
        }
        results.push(score_document(doc.file_name, outcome, required_skills, &weights));
    }

    rank(&mut results);

    info!(
        job_role = %job_role,
        resumes = total,
        skills = required_skills.len(),
        failed,
        top_score = results.first().map(|r| r.match_score),
        "Analyzed resume batch"
    );

    results
}
