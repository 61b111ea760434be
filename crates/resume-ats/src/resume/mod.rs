//! Resume drafting, scoring, guidance, and export.
//!
//! The scoring rubric is the load-bearing piece: a pure function over a
//! [`domain::ResumeData`] snapshot. Drafting, export, and the HTTP router are
//! the service scaffolding around it.

pub mod domain;
pub mod export;
pub mod guidance;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    DraftId, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeData,
    SkillCategories, Skills,
};
pub use export::{export_warnings, resume_to_plain_text};
pub use guidance::{bullet_suggestions, has_measurable_impact, starts_with_action_verb};
pub use repository::{DraftRecord, DraftRepository, DraftStatusView, RepositoryError};
pub use router::resume_router;
pub use scoring::{compute_ats_score, ScoreResult, Suggestion, ACTION_VERBS, MAX_SCORE};
pub use service::{ExportedResume, ResumeService, ResumeServiceError};
