use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use super::domain::{DraftId, ResumeData};
use super::export::{export_warnings, resume_to_plain_text};
use super::repository::{DraftRecord, DraftRepository, RepositoryError};
use super::scoring::{compute_ats_score, ScoreResult};

/// Service composing the draft repository with the scoring and export rules.
pub struct ResumeService<R> {
    repository: Arc<R>,
}

static DRAFT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_draft_id() -> DraftId {
    let id = DRAFT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    DraftId(format!("draft-{id:06}"))
}

/// Rendered export plus its non-blocking completeness warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedResume {
    pub body: String,
    pub warning: Option<String>,
}

impl<R> ResumeService<R>
where
    R: DraftRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Store a new draft, scoring it eagerly so status views are never stale.
    pub fn save(&self, resume: ResumeData) -> Result<DraftRecord, ResumeServiceError> {
        let score = compute_ats_score(&resume);
        let record = DraftRecord {
            id: next_draft_id(),
            resume,
            score: Some(score),
            updated_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        debug!(draft_id = %stored.id.0, "draft stored");
        Ok(stored)
    }

    /// Replace a draft's contents and rescore it.
    pub fn replace(
        &self,
        draft_id: &DraftId,
        resume: ResumeData,
    ) -> Result<DraftRecord, ResumeServiceError> {
        let mut record = self
            .repository
            .fetch(draft_id)?
            .ok_or(RepositoryError::NotFound)?;

        record.score = Some(compute_ats_score(&resume));
        record.resume = resume;
        record.updated_at = Utc::now();

        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Recompute and persist a draft's score. Scoring is deterministic, so
    /// repeated calls with an unchanged draft return identical results.
    pub fn score(&self, draft_id: &DraftId) -> Result<ScoreResult, ResumeServiceError> {
        let mut record = self
            .repository
            .fetch(draft_id)?
            .ok_or(RepositoryError::NotFound)?;

        let result = compute_ats_score(&record.resume);
        record.score = Some(result.clone());
        self.repository.update(record)?;

        Ok(result)
    }

    /// List the most recently updated drafts for overview responses.
    pub fn recent(&self, limit: usize) -> Result<Vec<DraftRecord>, ResumeServiceError> {
        let records = self.repository.list(limit)?;
        Ok(records)
    }

    /// Fetch a draft record for API responses.
    pub fn get(&self, draft_id: &DraftId) -> Result<DraftRecord, ResumeServiceError> {
        let record = self
            .repository
            .fetch(draft_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Render a draft as plain text along with its completeness warning.
    pub fn export(&self, draft_id: &DraftId) -> Result<ExportedResume, ResumeServiceError> {
        let record = self
            .repository
            .fetch(draft_id)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(ExportedResume {
            body: resume_to_plain_text(&record.resume),
            warning: export_warnings(&record.resume),
        })
    }
}

/// Error raised by the resume service.
#[derive(Debug, thiserror::Error)]
pub enum ResumeServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
