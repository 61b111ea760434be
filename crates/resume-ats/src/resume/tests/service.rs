use std::sync::Arc;

use super::common::*;
use crate::resume::domain::DraftId;
use crate::resume::repository::{DraftRepository, RepositoryError};
use crate::resume::service::{ResumeService, ResumeServiceError};

#[test]
fn save_scores_the_draft_eagerly() {
    let (service, repository) = build_service();

    let record = service.save(sample_resume()).expect("save succeeds");

    assert!(record.id.0.starts_with("draft-"));
    let stored = repository
        .fetch(&record.id)
        .expect("fetch")
        .expect("record present");
    let score = stored.score.expect("score persisted");
    assert_eq!(score.score, 100);
    assert!(score.suggestions.is_empty());
}

#[test]
fn replace_rescores_the_draft() {
    let (service, _) = build_service();

    let record = service.save(empty_resume()).expect("save succeeds");
    assert_eq!(record.score.as_ref().expect("scored").score, 0);

    let updated = service
        .replace(&record.id, named_resume())
        .expect("replace succeeds");

    assert_eq!(updated.id, record.id);
    assert_eq!(updated.score.expect("rescored").score, 10);
}

#[test]
fn score_is_idempotent_for_an_unchanged_draft() {
    let (service, _) = build_service();
    let record = service.save(named_resume()).expect("save succeeds");

    let first = service.score(&record.id).expect("first score");
    let second = service.score(&record.id).expect("second score");

    assert_eq!(first, second);
    assert_eq!(first.score, 10);
}

#[test]
fn recent_lists_saved_drafts_up_to_the_limit() {
    let (service, _) = build_service();

    let first = service.save(named_resume()).expect("save succeeds");
    let second = service.save(sample_resume()).expect("save succeeds");

    let all = service.recent(10).expect("recent succeeds");
    assert_eq!(all.len(), 2);
    let ids: Vec<_> = all.iter().map(|record| record.id.clone()).collect();
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));

    let capped = service.recent(1).expect("recent succeeds");
    assert_eq!(capped.len(), 1);
}

#[test]
fn unknown_draft_is_reported_as_not_found() {
    let (service, _) = build_service();
    let missing = DraftId("draft-999999".to_string());

    for result in [
        service.get(&missing).err(),
        service.score(&missing).err(),
        service.export(&missing).err(),
    ] {
        match result {
            Some(ResumeServiceError::Repository(RepositoryError::NotFound)) => {}
            other => panic!("expected not-found error, got {other:?}"),
        }
    }
}

#[test]
fn export_carries_the_completeness_warning() {
    let (service, _) = build_service();

    let sparse = service.save(named_resume()).expect("save succeeds");
    let exported = service.export(&sparse.id).expect("export succeeds");
    assert_eq!(exported.body, "JANE DOE");
    assert_eq!(
        exported.warning.as_deref(),
        Some("Your resume may look incomplete.")
    );

    let complete = service.save(sample_resume()).expect("save succeeds");
    let exported = service.export(&complete.id).expect("export succeeds");
    assert!(exported.body.contains("EXPERIENCE"));
    assert!(exported.warning.is_none());
}

#[test]
fn conflicting_insert_surfaces_the_repository_error() {
    let service = ResumeService::new(Arc::new(ConflictRepository));

    match service.save(empty_resume()) {
        Err(ResumeServiceError::Repository(RepositoryError::Conflict)) => {}
        other => panic!("expected conflict, got {other:?}"),
    }
}
