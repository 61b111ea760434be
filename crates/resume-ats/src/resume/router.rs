use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{DraftId, ResumeData};
use super::repository::{DraftRecord, DraftRepository, RepositoryError};
use super::scoring::compute_ats_score;
use super::service::{ResumeService, ResumeServiceError};

/// Router builder exposing the scoring, draft, and export endpoints.
pub fn resume_router<R>(service: Arc<ResumeService<R>>) -> Router
where
    R: DraftRepository + 'static,
{
    Router::new()
        .route("/api/v1/resume/score", post(score_handler::<R>))
        .route(
            "/api/v1/resume/drafts",
            post(save_handler::<R>).get(list_handler::<R>),
        )
        .route(
            "/api/v1/resume/drafts/:draft_id",
            get(status_handler::<R>).put(replace_handler::<R>),
        )
        .route(
            "/api/v1/resume/drafts/:draft_id/export",
            get(export_handler::<R>),
        )
        .with_state(service)
}

/// Stateless scoring of a posted resume snapshot. Total over the documented
/// input shape, so the only failure mode is a malformed request body.
pub(crate) async fn score_handler<R>(
    State(_service): State<Arc<ResumeService<R>>>,
    axum::Json(resume): axum::Json<ResumeData>,
) -> Response
where
    R: DraftRepository + 'static,
{
    let result = compute_ats_score(&resume);
    (StatusCode::OK, axum::Json(result)).into_response()
}

pub(crate) async fn save_handler<R>(
    State(service): State<Arc<ResumeService<R>>>,
    axum::Json(resume): axum::Json<ResumeData>,
) -> Response
where
    R: DraftRepository + 'static,
{
    match service.save(resume) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.status_view())).into_response(),
        Err(ResumeServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "draft already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

const DEFAULT_LIST_LIMIT: usize = 20;

#[derive(Debug, Deserialize)]
pub(crate) struct ListQuery {
    limit: Option<usize>,
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<ResumeService<R>>>,
    Query(query): Query<ListQuery>,
) -> Response
where
    R: DraftRepository + 'static,
{
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    match service.recent(limit) {
        Ok(records) => {
            let views: Vec<_> = records.iter().map(DraftRecord::status_view).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<ResumeService<R>>>,
    Path(draft_id): Path<String>,
) -> Response
where
    R: DraftRepository + 'static,
{
    let id = DraftId(draft_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(&id, error),
    }
}

pub(crate) async fn replace_handler<R>(
    State(service): State<Arc<ResumeService<R>>>,
    Path(draft_id): Path<String>,
    axum::Json(resume): axum::Json<ResumeData>,
) -> Response
where
    R: DraftRepository + 'static,
{
    let id = DraftId(draft_id);
    match service.replace(&id, resume) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(&id, error),
    }
}

pub(crate) async fn export_handler<R>(
    State(service): State<Arc<ResumeService<R>>>,
    Path(draft_id): Path<String>,
) -> Response
where
    R: DraftRepository + 'static,
{
    let id = DraftId(draft_id);
    match service.export(&id) {
        Ok(exported) => {
            let mut response = (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime::TEXT_PLAIN_UTF_8.as_ref())],
                exported.body,
            )
                .into_response();
            if let Some(warning) = exported.warning {
                if let Ok(value) = warning.parse() {
                    response.headers_mut().insert("x-export-warning", value);
                }
            }
            response
        }
        Err(error) => error_response(&id, error),
    }
}

fn error_response(id: &DraftId, error: ResumeServiceError) -> Response {
    match error {
        ResumeServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({
                "draft_id": id.0,
                "error": "draft not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        other => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
