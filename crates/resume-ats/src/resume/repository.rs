use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{DraftId, ResumeData};
use super::scoring::ScoreResult;

/// Repository record pairing a draft with its most recent score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftRecord {
    pub id: DraftId,
    pub resume: ResumeData,
    pub score: Option<ScoreResult>,
    pub updated_at: DateTime<Utc>,
}

impl DraftRecord {
    pub fn status_view(&self) -> DraftStatusView {
        DraftStatusView {
            draft_id: self.id.clone(),
            score: self.score.as_ref().map(|result| result.score),
            max_score: self.score.as_ref().map(|result| result.max_score),
            suggestion_count: self
                .score
                .as_ref()
                .map(|result| result.suggestions.len()),
            updated_at: self.updated_at,
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait DraftRepository: Send + Sync {
    fn insert(&self, record: DraftRecord) -> Result<DraftRecord, RepositoryError>;
    fn update(&self, record: DraftRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &DraftId) -> Result<Option<DraftRecord>, RepositoryError>;
    /// At most `limit` records, most recently updated first.
    fn list(&self, limit: usize) -> Result<Vec<DraftRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("draft already exists")]
    Conflict,
    #[error("draft not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized representation of a draft's exposed state.
#[derive(Debug, Clone, Serialize)]
pub struct DraftStatusView {
    pub draft_id: DraftId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion_count: Option<usize>,
    pub updated_at: DateTime<Utc>,
}
