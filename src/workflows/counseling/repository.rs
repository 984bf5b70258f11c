use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{display_date, DraftId, WorksheetForm};

/// A saved worksheet draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftRecord {
    pub id: DraftId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub form: WorksheetForm,
}

impl DraftRecord {
    pub fn summary_view(&self) -> DraftSummaryView {
        DraftSummaryView {
            id: self.id.clone(),
            name: self.name.clone(),
            created_at: self.created_at,
            created_label: display_date(self.created_at),
        }
    }
}

/// Sanitized listing entry for the draft picker.
#[derive(Debug, Clone, Serialize)]
pub struct DraftSummaryView {
    pub id: DraftId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_label: String,
}

/// Storage abstraction so the service module can be exercised in isolation.
/// Best-effort local storage; no durability guarantees.
pub trait DraftRepository: Send + Sync {
    fn insert(&self, record: DraftRecord) -> Result<DraftRecord, RepositoryError>;
    fn fetch(&self, id: &DraftId) -> Result<Option<DraftRecord>, RepositoryError>;
    /// All drafts, newest first.
    fn list(&self) -> Result<Vec<DraftRecord>, RepositoryError>;
    fn delete(&self, id: &DraftId) -> Result<(), RepositoryError>;
    fn count(&self) -> Result<usize, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("draft already exists")]
    Conflict,
    #[error("draft not found")]
    NotFound,
    #[error("draft store unavailable: {0}")]
    Unavailable(String),
}

/// In-process draft store, the server-side stand-in for the worksheet's
/// local key-value storage.
#[derive(Debug, Default)]
pub struct MemoryDraftRepository {
    records: Mutex<BTreeMap<DraftId, DraftRecord>>,
}

impl DraftRepository for MemoryDraftRepository {
    fn insert(&self, record: DraftRecord) -> Result<DraftRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("draft mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &DraftId) -> Result<Option<DraftRecord>, RepositoryError> {
        let guard = self.records.lock().expect("draft mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<DraftRecord>, RepositoryError> {
        let guard = self.records.lock().expect("draft mutex poisoned");
        let mut drafts: Vec<DraftRecord> = guard.values().cloned().collect();
        drafts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(drafts)
    }

    fn delete(&self, id: &DraftId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("draft mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        let guard = self.records.lock().expect("draft mutex poisoned");
        Ok(guard.len())
    }
}
