//! Domain crate for the resume builder backend: draft storage, the
//! deterministic ATS scoring rubric, bullet guidance, and plain-text export.

pub mod config;
pub mod error;
pub mod resume;
pub mod telemetry;
