//! Axum route handlers for the tracker entities. Each entity gets the same
//! whole-document CRUD surface plus a `watch` SSE endpoint; the shared logic
//! lives in `crud`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use super::crud;
use crate::errors::AppError;
use crate::models::email::EmailLog;
use crate::models::interview::InterviewNote;
use crate::models::job::JobApplication;
use crate::models::research::CompanyResearch;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

// ────────────────────────────────────────────────────────────────────────────
// Job applications
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(job): Json<JobApplication>,
) -> Result<(StatusCode, Json<JobApplication>), AppError> {
    let created = crud::create(&state, params.user_id, job).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<JobApplication>>, AppError> {
    Ok(Json(crud::list(&state, params.user_id).await?))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<JobApplication>, AppError> {
    Ok(Json(crud::fetch(&state, params.user_id, id).await?))
}

/// PUT /api/v1/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
    Json(job): Json<JobApplication>,
) -> Result<Json<JobApplication>, AppError> {
    Ok(Json(crud::update(&state, params.user_id, id, job).await?))
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    crud::remove::<JobApplication>(&state, params.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/jobs/watch — SSE stream of full-collection snapshots.
pub async fn handle_watch_jobs(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    crud::watch::<JobApplication>(&state, params.user_id).await
}

// ────────────────────────────────────────────────────────────────────────────
// Email logs
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/emails
pub async fn handle_create_email(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(email): Json<EmailLog>,
) -> Result<(StatusCode, Json<EmailLog>), AppError> {
    let created = crud::create(&state, params.user_id, email).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/emails
pub async fn handle_list_emails(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<EmailLog>>, AppError> {
    Ok(Json(crud::list(&state, params.user_id).await?))
}

/// GET /api/v1/emails/:id
pub async fn handle_get_email(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<EmailLog>, AppError> {
    Ok(Json(crud::fetch(&state, params.user_id, id).await?))
}

/// PUT /api/v1/emails/:id
pub async fn handle_update_email(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
    Json(email): Json<EmailLog>,
) -> Result<Json<EmailLog>, AppError> {
    Ok(Json(crud::update(&state, params.user_id, id, email).await?))
}

/// DELETE /api/v1/emails/:id
pub async fn handle_delete_email(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    crud::remove::<EmailLog>(&state, params.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/emails/watch
pub async fn handle_watch_emails(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    crud::watch::<EmailLog>(&state, params.user_id).await
}

// ────────────────────────────────────────────────────────────────────────────
// Interview notes
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interviews
pub async fn handle_create_interview(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(note): Json<InterviewNote>,
) -> Result<(StatusCode, Json<InterviewNote>), AppError> {
    let created = crud::create(&state, params.user_id, note).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/interviews
pub async fn handle_list_interviews(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<InterviewNote>>, AppError> {
    Ok(Json(crud::list(&state, params.user_id).await?))
}

/// GET /api/v1/interviews/:id
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<InterviewNote>, AppError> {
    Ok(Json(crud::fetch(&state, params.user_id, id).await?))
}

/// PUT /api/v1/interviews/:id
pub async fn handle_update_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
    Json(note): Json<InterviewNote>,
) -> Result<Json<InterviewNote>, AppError> {
    Ok(Json(crud::update(&state, params.user_id, id, note).await?))
}

/// DELETE /api/v1/interviews/:id
pub async fn handle_delete_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    crud::remove::<InterviewNote>(&state, params.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/interviews/watch
pub async fn handle_watch_interviews(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    crud::watch::<InterviewNote>(&state, params.user_id).await
}

// ────────────────────────────────────────────────────────────────────────────
// Company research
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/research
pub async fn handle_create_research(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(research): Json<CompanyResearch>,
) -> Result<(StatusCode, Json<CompanyResearch>), AppError> {
    let created = crud::create(&state, params.user_id, research).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/research
pub async fn handle_list_research(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<CompanyResearch>>, AppError> {
    Ok(Json(crud::list(&state, params.user_id).await?))
}

/// GET /api/v1/research/:id
pub async fn handle_get_research(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<CompanyResearch>, AppError> {
    Ok(Json(crud::fetch(&state, params.user_id, id).await?))
}

/// PUT /api/v1/research/:id
pub async fn handle_update_research(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
    Json(research): Json<CompanyResearch>,
) -> Result<Json<CompanyResearch>, AppError> {
    Ok(Json(
        crud::update(&state, params.user_id, id, research).await?,
    ))
}

/// DELETE /api/v1/research/:id
pub async fn handle_delete_research(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    crud::remove::<CompanyResearch>(&state, params.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/research/watch
pub async fn handle_watch_research(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    crud::watch::<CompanyResearch>(&state, params.user_id).await
}
