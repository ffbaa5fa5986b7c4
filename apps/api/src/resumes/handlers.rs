//! Axum route handlers for resumes: whole-document CRUD, the summarization
//! flow, and template rendering.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::flows::summarize::{summarize_resume, SummarizeResumeInput, SummarizeResumeOutput};
use crate::models::resume::{Resume, TemplateId};
use crate::state::AppState;
use crate::templates;
use crate::tracker::crud;
use crate::tracker::handlers::UserIdQuery;

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(resume): Json<Resume>,
) -> Result<(StatusCode, Json<Resume>), AppError> {
    let created = crud::create(&state, params.user_id, resume).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<Resume>>, AppError> {
    Ok(Json(crud::list(&state, params.user_id).await?))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Resume>, AppError> {
    Ok(Json(crud::fetch(&state, params.user_id, id).await?))
}

/// PUT /api/v1/resumes/:id
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
    Json(resume): Json<Resume>,
) -> Result<Json<Resume>, AppError> {
    Ok(Json(crud::update(&state, params.user_id, id, resume).await?))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    crud::remove::<Resume>(&state, params.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/resumes/watch — SSE stream of full-collection snapshots.
pub async fn handle_watch_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    crud::watch::<Resume>(&state, params.user_id).await
}

/// POST /api/v1/resumes/:id/summarize
///
/// Runs the summarization flow over the resume's plain-text content and
/// persists the summary back onto the document. Builder resumes keep their
/// summary in the form, so they are rejected here.
pub async fn handle_summarize_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SummarizeResumeOutput>, AppError> {
    let mut resume: Resume = crud::fetch(&state, params.user_id, id).await?;
    if resume.template_id.is_some() {
        return Err(AppError::Validation(
            "AI summarization is available for plain-text resumes only".to_string(),
        ));
    }

    let output = summarize_resume(
        &SummarizeResumeInput {
            resume_text: resume.content.clone(),
        },
        &state.llm,
    )
    .await?;

    resume.summary = Some(output.summary.clone());
    crud::collection::<Resume>(&state, params.user_id)
        .save(resume)
        .await?;

    Ok(Json(output))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    #[serde(default)]
    pub template_id: Option<TemplateId>,
}

/// POST /api/v1/resumes/:id/render
///
/// Renders the resume's structured data through one of the three templates.
/// Template preference: request body, then the resume's own template, then
/// `modern`.
pub async fn handle_render_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
    Json(req): Json<RenderRequest>,
) -> Result<Html<String>, AppError> {
    let resume: Resume = crud::fetch(&state, params.user_id, id).await?;
    let data = resume.structured_data.as_ref().ok_or_else(|| {
        AppError::Validation("Resume has no structured data to render".to_string())
    })?;

    let template = req
        .template_id
        .or(resume.template_id)
        .unwrap_or(TemplateId::Modern);
    Ok(Html(templates::render(data, template)))
}
