pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::flows::handlers as flows;
use crate::resumes::handlers as resumes;
use crate::state::AppState;
use crate::tracker::handlers as tracker;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // AI flows
        .route("/api/v1/analyze", post(flows::handle_keyword_analysis))
        .route(
            "/api/v1/cover-letter",
            post(flows::handle_generate_cover_letter),
        )
        // Resumes
        .route(
            "/api/v1/resumes",
            get(resumes::handle_list_resumes).post(resumes::handle_create_resume),
        )
        .route("/api/v1/resumes/watch", get(resumes::handle_watch_resumes))
        .route(
            "/api/v1/resumes/:id",
            get(resumes::handle_get_resume)
                .put(resumes::handle_update_resume)
                .delete(resumes::handle_delete_resume),
        )
        .route(
            "/api/v1/resumes/:id/summarize",
            post(resumes::handle_summarize_resume),
        )
        .route(
            "/api/v1/resumes/:id/render",
            post(resumes::handle_render_resume),
        )
        // Job applications
        .route(
            "/api/v1/jobs",
            get(tracker::handle_list_jobs).post(tracker::handle_create_job),
        )
        .route("/api/v1/jobs/watch", get(tracker::handle_watch_jobs))
        .route(
            "/api/v1/jobs/:id",
            get(tracker::handle_get_job)
                .put(tracker::handle_update_job)
                .delete(tracker::handle_delete_job),
        )
        // Email logs
        .route(
            "/api/v1/emails",
            get(tracker::handle_list_emails).post(tracker::handle_create_email),
        )
        .route("/api/v1/emails/watch", get(tracker::handle_watch_emails))
        .route(
            "/api/v1/emails/:id",
            get(tracker::handle_get_email)
                .put(tracker::handle_update_email)
                .delete(tracker::handle_delete_email),
        )
        // Interview notes
        .route(
            "/api/v1/interviews",
            get(tracker::handle_list_interviews).post(tracker::handle_create_interview),
        )
        .route(
            "/api/v1/interviews/watch",
            get(tracker::handle_watch_interviews),
        )
        .route(
            "/api/v1/interviews/:id",
            get(tracker::handle_get_interview)
                .put(tracker::handle_update_interview)
                .delete(tracker::handle_delete_interview),
        )
        // Company research
        .route(
            "/api/v1/research",
            get(tracker::handle_list_research).post(tracker::handle_create_research),
        )
        .route("/api/v1/research/watch", get(tracker::handle_watch_research))
        .route(
            "/api/v1/research/:id",
            get(tracker::handle_get_research)
                .put(tracker::handle_update_research)
                .delete(tracker::handle_delete_research),
        )
        .with_state(state)
}
