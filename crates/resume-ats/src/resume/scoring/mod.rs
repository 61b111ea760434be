//! Deterministic ATS readiness rubric.
//!
//! Eleven independent binary criteria, each worth a fixed number of points
//! summing to 100. Every unmet criterion contributes exactly one suggestion,
//! reported in rubric order and never truncated.

mod rules;
mod verbs;

pub use verbs::ACTION_VERBS;

use super::domain::ResumeData;
use serde::{Deserialize, Serialize};

/// Total achievable points under the rubric.
pub const MAX_SCORE: u8 = 100;

/// One unmet rubric criterion and the points it would recover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    pub points: u8,
}

/// Outcome of scoring a resume snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub max_score: u8,
    pub suggestions: Vec<Suggestion>,
}

/// Scores a resume snapshot against the rubric. Pure and total: the same
/// input always produces the same output, missing or blank fields simply fail
/// their criterion, and the final score is clamped to `[0, MAX_SCORE]`.
pub fn compute_ats_score(resume: &ResumeData) -> ScoreResult {
    let (total, suggestions) = rules::apply_rubric(resume);

    ScoreResult {
        score: total.min(u32::from(MAX_SCORE)) as u8,
        max_score: MAX_SCORE,
        suggestions,
    }
}
