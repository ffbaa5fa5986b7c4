//! Axum route handlers for the AI flows.

use axum::{extract::State, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::flows::cover_letter::{generate_cover_letter, CoverLetterInput, CoverLetterOutput};
use crate::flows::extract_keywords::{extract_keywords, ExtractKeywordsInput};
use crate::matching::{analyze, MatchAnalysis};
use crate::models::resume::Resume;
use crate::state::AppState;
use crate::tracker::crud;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysisRequest {
    pub user_id: Uuid,
    pub job_description: String,
    pub resume_id: Uuid,
}

/// POST /api/v1/analyze
///
/// Extracts keywords from the job description, then scores the selected
/// resume against them. Empty inputs are rejected before any LLM call.
pub async fn handle_keyword_analysis(
    State(state): State<AppState>,
    Json(req): Json<KeywordAnalysisRequest>,
) -> Result<Json<MatchAnalysis>, AppError> {
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Please paste a job description".to_string(),
        ));
    }

    let resume: Resume = crud::fetch(&state, req.user_id, req.resume_id).await?;
    if resume.content.trim().is_empty() {
        return Err(AppError::Validation(
            "Selected resume has no content".to_string(),
        ));
    }

    let extraction = extract_keywords(
        &ExtractKeywordsInput {
            job_description: req.job_description,
        },
        &state.llm,
    )
    .await?;

    Ok(Json(analyze(extraction, &resume.content)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    pub user_id: Uuid,
    pub job_description: String,
    pub resume_id: Uuid,
}

/// POST /api/v1/cover-letter
///
/// Generates a cover letter tailored to the job description from the selected
/// resume's plain-text content.
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Json(req): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterOutput>, AppError> {
    let resume: Resume = crud::fetch(&state, req.user_id, req.resume_id).await?;

    let input = CoverLetterInput {
        job_description: req.job_description,
        selected_resume: resume.content,
    };
    Ok(Json(generate_cover_letter(&input, &state.llm).await?))
}
