//! Axum route handlers for the Analysis API.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::errors::AppError;
use crate::models::analysis::AnalysisResponse;
use crate::screening::engine::{analyze_documents, UploadedDocument};
use crate::state::AppState;

const RESUMES_FIELD: &str = "resumes";
const JOB_ROLE_FIELD: &str = "jobRole";
const SKILLS_FIELD: &str = "skills";

/// Parsed multipart form of an analysis request.
#[derive(Debug, Default)]
pub struct AnalyzeForm {
    pub documents: Vec<UploadedDocument>,
    pub job_role: Option<String>,
    pub skills: Option<String>,
}

/// Parses the `skills` form field: a JSON array of skill phrases.
pub fn parse_required_skills(raw: &str) -> Result<Vec<String>, AppError> {
    serde_json::from_str::<Vec<String>>(raw).map_err(|e| {
        AppError::InputFormat(format!("skills must be a JSON array of strings: {e}"))
    })
}

/// Drains the multipart stream. Unknown fields are ignored.
async fn read_form(mut multipart: Multipart) -> Result<AnalyzeForm, AppError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(RESUMES_FIELD) => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("resume-{}.pdf", form.documents.len() + 1));
                let bytes = field.bytes().await?;
                form.documents.push(UploadedDocument { file_name, bytes });
            }
            Some(JOB_ROLE_FIELD) => form.job_role = Some(field.text().await?),
            Some(SKILLS_FIELD) => form.skills = Some(field.text().await?),
            _ => {}
        }
    }

    Ok(form)
}

/// POST /analyze
///
/// Multipart form: `resumes` (repeatable file), `jobRole` (text), `skills`
/// (JSON array of strings). Returns the batch ranked by match score.
/// A malformed skill list fails the whole request; an unreadable document
/// is scored as empty text and flagged with `extractionError`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let form = read_form(multipart).await?;

    let job_role = form
        .job_role
        .ok_or_else(|| AppError::Validation(format!("{JOB_ROLE_FIELD} is required")))?;
    let raw_skills = form
        .skills
        .ok_or_else(|| AppError::Validation(format!("{SKILLS_FIELD} is required")))?;
    let required_skills = parse_required_skills(&raw_skills)?;

    let results = analyze_documents(
        Arc::clone(&state.extractor),
        form.documents,
        &required_skills,
        &job_role,
    )
    .await;

    Ok(Json(results))
}
