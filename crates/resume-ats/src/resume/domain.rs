use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored resume drafts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftId(pub String);

/// Contact block of a resume. Empty strings mean the field was never filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github: String,
    pub linkedin: String,
    pub portfolio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

/// Link and tech-stack fields are carried for export only; scoring ignores them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    /// Pre-categorization single link field, still accepted on intake.
    pub link: Option<String>,
    pub tech_stack: Vec<String>,
}

/// Both historical skill representations: the early builder stored a flat
/// comma-separated string, the current one a categorized structure. Untagged
/// deserialization accepts either JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Skills {
    Legacy(String),
    Categorized(SkillCategories),
}

impl Default for Skills {
    fn default() -> Self {
        Skills::Legacy(String::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategories {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub tools: Vec<String>,
}

impl Skills {
    /// Normalizes either variant to a total skill count. Legacy strings split
    /// on commas with blank tokens dropped; repeated tokens are NOT
    /// deduplicated. Categorized skills sum the three category lengths.
    pub fn total_count(&self) -> usize {
        match self {
            Skills::Legacy(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .count(),
            Skills::Categorized(categories) => {
                categories.technical.len() + categories.soft.len() + categories.tools.len()
            }
        }
    }
}

/// Snapshot of everything the builder form collects. The scoring engine reads
/// one of these per call and never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub personal: PersonalInfo,
    pub summary: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Skills,
}
