use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::alignment::{AlignmentEngine, CombinedVerdict, Lexicon, MarkRecommendation};
use super::domain::{DraftId, WorksheetForm};
use super::render::{self, RenderLayout};
use super::repository::{DraftRecord, DraftRepository, DraftSummaryView, RepositoryError};
use super::templates::{self, TemplateKind};

/// Service composing the alignment engine, draft repository, templates, and
/// renderer behind one facade.
pub struct CounselingService<R> {
    repository: Arc<R>,
    engine: AlignmentEngine,
}

static DRAFT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Timestamp-based id with a sequence suffix so same-millisecond saves stay
/// distinct.
fn next_draft_id() -> DraftId {
    let seq = DRAFT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    DraftId(format!("draft-{}-{seq:04}", Utc::now().timestamp_millis()))
}

impl<R> CounselingService<R>
where
    R: DraftRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_lexicon(repository, Lexicon::standard())
    }

    pub fn with_lexicon(repository: Arc<R>, lexicon: Lexicon) -> Self {
        Self {
            repository,
            engine: AlignmentEngine::new(lexicon),
        }
    }

    pub fn engine(&self) -> &AlignmentEngine {
        &self.engine
    }

    /// Evaluate both worksheet fields against their marks.
    pub fn check_worksheet(&self, form: &WorksheetForm) -> CombinedVerdict {
        self.engine.evaluate_worksheet(
            &form.proficiency_statement,
            &form.proficiency_mark,
            &form.conduct_statement,
            &form.conduct_mark,
        )
    }

    /// Suggest a mark range from a single statement.
    pub fn recommend(&self, statement: &str) -> MarkRecommendation {
        self.engine.recommend(statement)
    }

    /// Save the current form under a user-supplied name.
    pub fn save_draft(
        &self,
        name: &str,
        form: WorksheetForm,
    ) -> Result<DraftRecord, CounselingServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CounselingServiceError::EmptyDraftName);
        }

        let record = DraftRecord {
            id: next_draft_id(),
            name: name.to_string(),
            created_at: Utc::now(),
            form,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    pub fn load_draft(&self, id: &DraftId) -> Result<DraftRecord, CounselingServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn delete_draft(&self, id: &DraftId) -> Result<(), CounselingServiceError> {
        self.repository.delete(id)?;
        Ok(())
    }

    /// Draft summaries, newest first.
    pub fn list_drafts(&self) -> Result<Vec<DraftSummaryView>, CounselingServiceError> {
        let drafts = self.repository.list()?;
        Ok(drafts.iter().map(DraftRecord::summary_view).collect())
    }

    pub fn draft_count(&self) -> Result<usize, CounselingServiceError> {
        Ok(self.repository.count()?)
    }

    /// Pre-fill a worksheet from a counseling template.
    pub fn apply_template(&self, kind: TemplateKind) -> WorksheetForm {
        templates::apply(kind)
    }

    /// Render the form into a printable HTML document.
    pub fn render(&self, title: &str, form: &WorksheetForm, layout: RenderLayout) -> String {
        render::render_document(title, form, layout)
    }

    /// Plain-text export of the form for the clipboard path.
    pub fn export_text(&self, form: &WorksheetForm) -> String {
        render::clipboard_text(form)
    }
}

/// Error raised by the counseling service.
#[derive(Debug, thiserror::Error)]
pub enum CounselingServiceError {
    #[error("draft name must not be empty")]
    EmptyDraftName,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
