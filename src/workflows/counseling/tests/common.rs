use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::counseling::alignment::AlignmentEngine;
use crate::workflows::counseling::domain::{Mark, WorksheetForm};
use crate::workflows::counseling::repository::MemoryDraftRepository;
use crate::workflows::counseling::router::counseling_router;
use crate::workflows::counseling::service::CounselingService;

/// Three positive indicators (outstanding, exceptional, leader), nothing else.
pub(super) const STRONG_POSITIVE: &str =
    "Marine is an outstanding, exceptional leader in every regard.";

/// Two negative indicators (fails, constant supervision), nothing else.
pub(super) const CLEARLY_NEGATIVE: &str =
    "Marine fails to meet standards and requires constant supervision.";

/// Two average indicators (satisfactory, meets minimum), nothing else.
pub(super) const PLAINLY_AVERAGE: &str =
    "Marine is satisfactory and meets minimum requirements.";

/// Long enough to evaluate, but matches no indicator in any set.
pub(super) const NO_INDICATORS: &str = "Completed the quarterly maintenance checklist.";

/// One positive (strong) and one negative (struggles) indicator.
pub(super) const MIXED: &str = "Strong performer but struggles with timeliness.";

/// Exactly one negative indicator (struggles).
pub(super) const ONE_NEGATIVE: &str = "Struggles with unfamiliar taskings under pressure.";

/// Below the 10-character floor after trimming.
pub(super) const TOO_SHORT: &str = "  Solid.  ";

pub(super) fn engine() -> AlignmentEngine {
    AlignmentEngine::standard()
}

pub(super) fn mark(raw: &str) -> Mark {
    Mark::parse(raw)
}

pub(super) fn form(
    proficiency_statement: &str,
    proficiency_mark: &str,
    conduct_statement: &str,
    conduct_mark: &str,
) -> WorksheetForm {
    WorksheetForm {
        proficiency_statement: proficiency_statement.to_string(),
        conduct_statement: conduct_statement.to_string(),
        proficiency_mark: mark(proficiency_mark),
        conduct_mark: mark(conduct_mark),
        ..WorksheetForm::default()
    }
}

pub(super) fn build_service() -> (
    CounselingService<MemoryDraftRepository>,
    Arc<MemoryDraftRepository>,
) {
    let repository = Arc::new(MemoryDraftRepository::default());
    let service = CounselingService::new(repository.clone());
    (service, repository)
}

pub(super) fn build_router() -> axum::Router {
    let repository = Arc::new(MemoryDraftRepository::default());
    counseling_router(Arc::new(CounselingService::new(repository)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
