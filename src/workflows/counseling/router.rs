use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{DraftId, Mark, MosCategory, StatementKind, WorksheetForm};
use super::phrases;
use super::render::RenderLayout;
use super::repository::{DraftRepository, RepositoryError};
use super::service::{CounselingService, CounselingServiceError};
use super::templates::{self, TemplateKind};

/// Router builder exposing the worksheet assistant endpoints.
pub fn counseling_router<R>(service: Arc<CounselingService<R>>) -> Router
where
    R: DraftRepository + 'static,
{
    Router::new()
        .route("/api/v1/counseling/alignment", post(alignment_handler::<R>))
        .route(
            "/api/v1/counseling/recommendation",
            post(recommendation_handler::<R>),
        )
        .route("/api/v1/counseling/phrases", post(phrases_handler::<R>))
        .route("/api/v1/counseling/templates", get(templates_handler::<R>))
        .route(
            "/api/v1/counseling/drafts",
            post(save_draft_handler::<R>).get(list_drafts_handler::<R>),
        )
        .route(
            "/api/v1/counseling/drafts/:draft_id",
            get(load_draft_handler::<R>).delete(delete_draft_handler::<R>),
        )
        .route("/api/v1/counseling/render", post(render_handler::<R>))
        .with_state(service)
}

pub(crate) async fn alignment_handler<R>(
    State(service): State<Arc<CounselingService<R>>>,
    Json(form): Json<WorksheetForm>,
) -> Response
where
    R: DraftRepository + 'static,
{
    let verdict = service.check_worksheet(&form);
    (StatusCode::OK, Json(verdict)).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationRequest {
    #[serde(default)]
    statement: String,
}

pub(crate) async fn recommendation_handler<R>(
    State(service): State<Arc<CounselingService<R>>>,
    Json(request): Json<RecommendationRequest>,
) -> Response
where
    R: DraftRepository + 'static,
{
    let recommendation = service.recommend(&request.statement);
    (StatusCode::OK, Json(recommendation)).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct PhrasesRequest {
    kind: StatementKind,
    #[serde(default = "default_level")]
    level: Mark,
    #[serde(default)]
    mos: MosCategory,
}

fn default_level() -> Mark {
    Mark::parse("4.0")
}

pub(crate) async fn phrases_handler<R>(
    State(_service): State<Arc<CounselingService<R>>>,
    Json(request): Json<PhrasesRequest>,
) -> Response
where
    R: DraftRepository + 'static,
{
    let level = request.level.value();
    let payload = json!({
        "phrases": phrases::level_phrases(request.kind, level),
        "quick_phrases": phrases::quick_phrases(request.kind, level),
        "mos_phrases": phrases::mos_phrases(request.mos),
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn templates_handler<R>(
    State(_service): State<Arc<CounselingService<R>>>,
) -> Response
where
    R: DraftRepository + 'static,
{
    let catalog: Vec<_> = TemplateKind::ALL
        .iter()
        .map(|kind| {
            let template = templates::template(*kind);
            let (pro, con) = templates::suggested_marks(*kind);
            json!({
                "id": kind,
                "name": template.name,
                "description": template.description,
                "proficiency": template.proficiency,
                "conduct": template.conduct,
                "suggested_proficiency_mark": pro,
                "suggested_conduct_mark": con,
            })
        })
        .collect();
    (StatusCode::OK, Json(catalog)).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct SaveDraftRequest {
    name: String,
    #[serde(default)]
    form: WorksheetForm,
}

pub(crate) async fn save_draft_handler<R>(
    State(service): State<Arc<CounselingService<R>>>,
    Json(request): Json<SaveDraftRequest>,
) -> Response
where
    R: DraftRepository + 'static,
{
    match service.save_draft(&request.name, request.form) {
        Ok(record) => {
            let view = record.summary_view();
            (StatusCode::CREATED, Json(view)).into_response()
        }
        Err(CounselingServiceError::EmptyDraftName) => {
            let payload = json!({
                "error": "draft name must not be empty",
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(CounselingServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "draft already exists",
            });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_drafts_handler<R>(
    State(service): State<Arc<CounselingService<R>>>,
) -> Response
where
    R: DraftRepository + 'static,
{
    match service.list_drafts() {
        Ok(drafts) => (StatusCode::OK, Json(drafts)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn load_draft_handler<R>(
    State(service): State<Arc<CounselingService<R>>>,
    Path(draft_id): Path<String>,
) -> Response
where
    R: DraftRepository + 'static,
{
    let id = DraftId(draft_id);
    match service.load_draft(&id) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(CounselingServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "draft not found",
                "draft_id": id.0,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn delete_draft_handler<R>(
    State(service): State<Arc<CounselingService<R>>>,
    Path(draft_id): Path<String>,
) -> Response
where
    R: DraftRepository + 'static,
{
    let id = DraftId(draft_id);
    match service.delete_draft(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(CounselingServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "draft not found",
                "draft_id": id.0,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RenderRequest {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default)]
    layout: RenderLayout,
    #[serde(default)]
    form: WorksheetForm,
}

fn default_title() -> String {
    "Counseling Worksheet".to_string()
}

pub(crate) async fn render_handler<R>(
    State(service): State<Arc<CounselingService<R>>>,
    Json(request): Json<RenderRequest>,
) -> Response
where
    R: DraftRepository + 'static,
{
    let html = service.render(&request.title, &request.form, request.layout);
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
        .into_response()
}
