//! Counseling worksheet workflow: the mark/language alignment engine plus
//! drafts, phrase banks, templates, and document rendering around it.

pub mod alignment;
pub mod domain;
pub mod phrases;
pub mod render;
pub mod repository;
pub mod router;
pub mod service;
pub mod templates;

#[cfg(test)]
mod tests;

pub use alignment::{
    AlignmentEngine, AlignmentVerdict, CombinedVerdict, IndicatorProfile, Lexicon, MarkBand,
    MarkRecommendation, Tone, ToneCategory, ToneReading, VerdictCategory, VerdictStatus,
};
pub use domain::{DraftId, Mark, MosCategory, StatementKind, WorksheetForm};
pub use render::RenderLayout;
pub use repository::{
    DraftRecord, DraftRepository, DraftSummaryView, MemoryDraftRepository, RepositoryError,
};
pub use router::counseling_router;
pub use service::{CounselingService, CounselingServiceError};
pub use templates::{CounselingTemplate, TemplateKind};
