use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use resume_ats::resume::domain::{
    DraftId, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeData, Skills,
};
use resume_ats::resume::repository::{DraftRecord, DraftRepository, RepositoryError};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryDraftRepository {
    records: Arc<Mutex<HashMap<DraftId, DraftRecord>>>,
}

impl DraftRepository for InMemoryDraftRepository {
    fn insert(&self, record: DraftRecord) -> Result<DraftRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: DraftRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &DraftId) -> Result<Option<DraftRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self, limit: usize) -> Result<Vec<DraftRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<DraftRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        records.truncate(limit);
        Ok(records)
    }
}

/// The builder UI's "load sample data" resume, reused for the CLI demo.
pub(crate) fn sample_resume() -> ResumeData {
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
