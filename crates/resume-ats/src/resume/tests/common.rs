use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::resume::domain::{
    DraftId, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeData,
    SkillCategories, Skills,
};
use crate::resume::repository::{DraftRecord, DraftRepository, RepositoryError};
use crate::resume::service::ResumeService;

pub(super) fn empty_resume() -> ResumeData {
    ResumeData::default()
}

pub(super) fn named_resume() -> ResumeData {
    ResumeData {
        personal: PersonalInfo {
            full_name: "Jane Doe".to_string(),
            ..PersonalInfo::default()
        },
        ..ResumeData::default()
    }
}

/// The builder's "load sample data" fixture. Satisfies every rubric criterion.
pub(super) fn sample_resume() -> ResumeData {
    ResumeData {
        personal: PersonalInfo {
            full_name: "Alex Morgan".to_string(),
            email: "alex.morgan@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
            github: "github.com/alexmorgan".to_string(),
            linkedin: "linkedin.com/in/alexmorgan".to_string(),
            portfolio: "alexmorgan.dev".to_string(),
        },
        summary: "Senior Software Engineer with 6+ years of experience in full-stack \
                  development. Built scalable web applications, led cross-functional \
                  teams, and improved delivery across the stack."
            .to_string(),
        education: vec![EducationEntry {
            institution: "University of California, Berkeley".to_string(),
            degree: "B.S. Computer Science".to_string(),
            year: "2016 - 2020".to_string(),
        }],
        experience: vec![
            ExperienceEntry {
                role: "Senior Frontend Engineer".to_string(),
                company: "TechFlow Inc.".to_string(),
                duration: "2022 - Present".to_string(),
                description: "Leading a team of 5 developers. Improved site performance by 40%."
                    .to_string(),
            },
            ExperienceEntry {
                role: "Software Developer".to_string(),
                company: "BuildLite".to_string(),
                duration: "2020 - 2022".to_string(),
                description: "Developed key features for the main product securely and efficiently."
                    .to_string(),
            },
        ],
        projects: vec![ProjectEntry {
            name: "E-Commerce Platform".to_string(),
            description: "A full-featured shopping platform built with React and Node.js."
                .to_string(),
            link: Some("github.com/alex/shop".to_string()),
            ..ProjectEntry::default()
        }],
        skills: Skills::Legacy(
            "JavaScript, React, Node.js, Python, AWS, Docker, TypeScript, GraphQL".to_string(),
        ),
    }
}

pub(super) fn categorized_skills(
    technical: &[&str],
    soft: &[&str],
    tools: &[&str],
) -> Skills {
    Skills::Categorized(SkillCategories {
        technical: technical.iter().map(|s| s.to_string()).collect(),
        soft: soft.iter().map(|s| s.to_string()).collect(),
        tools: tools.iter().map(|s| s.to_string()).collect(),
    })
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<DraftId, DraftRecord>>>,
}

impl DraftRepository for MemoryRepository {
    fn insert(&self, record: DraftRecord) -> Result<DraftRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: DraftRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &DraftId) -> Result<Option<DraftRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        Ok(guard.get(id).cloned())
    }

    fn list(&self, limit: usize) -> Result<Vec<DraftRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        let mut records: Vec<_> = guard.values().cloned().collect();
        records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        records.truncate(limit);
        Ok(records)
    }
}

/// Repository that rejects every insert, for conflict-path tests.
pub(super) struct ConflictRepository;

impl DraftRepository for ConflictRepository {
    fn insert(&self, _record: DraftRecord) -> Result<DraftRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: DraftRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &DraftId) -> Result<Option<DraftRecord>, RepositoryError> {
        Ok(None)
    }

    fn list(&self, _limit: usize) -> Result<Vec<DraftRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

/// Repository that fails every call, for internal-error-path tests.
pub(super) struct UnavailableRepository;

impl DraftRepository for UnavailableRepository {
    fn insert(&self, _record: DraftRecord) -> Result<DraftRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn update(&self, _record: DraftRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn fetch(&self, _id: &DraftId) -> Result<Option<DraftRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn list(&self, _limit: usize) -> Result<Vec<DraftRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}

pub(super) fn build_service() -> (ResumeService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ResumeService::new(repository.clone());
    (service, repository)
}
