//! Plain-text rendering of a resume snapshot, the format handed to
//! clipboard/print collaborators outside this crate.

use super::domain::{ResumeData, Skills};

const RULE_WIDTH: usize = 40;

fn section_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Serializes a resume to the sectioned plain-text layout. Sections with no
/// content are omitted entirely rather than rendered empty.
pub fn resume_to_plain_text(resume: &ResumeData) -> String {
    let mut lines: Vec<String> = Vec::new();
    let personal = &resume.personal;

    if !personal.full_name.is_empty() {
        lines.push(personal.full_name.to_uppercase());
        lines.push(String::new());
    }

    let mut contact: Vec<&str> = Vec::new();
    if !personal.location.is_empty() {
        contact.push(&personal.location);
    }
    if !personal.phone.is_empty() {
        contact.push(&personal.phone);
    }
    if !personal.email.is_empty() {
        contact.push(&personal.email);
    }
    if !contact.is_empty() {
        lines.push(contact.join(" | "));
        lines.push(String::new());
    }

    if !resume.summary.trim().is_empty() {
        lines.push("SUMMARY".to_string());
        lines.push(section_rule());
        lines.push(resume.summary.trim().to_string());
        lines.push(String::new());
    }

    if !resume.education.is_empty() {
        lines.push("EDUCATION".to_string());
        lines.push(section_rule());
        for entry in &resume.education {
            let parts: Vec<&str> = [&entry.institution, &entry.degree, &entry.year]
                .into_iter()
                .filter(|part| !part.is_empty())
                .map(String::as_str)
                .collect();
            lines.push(parts.join(" — "));
        }
        lines.push(String::new());
    }

    if !resume.experience.is_empty() {
        lines.push("EXPERIENCE".to_string());
        lines.push(section_rule());
        for entry in &resume.experience {
            let mut header = String::new();
            if !entry.role.is_empty() {
                header.push_str(&entry.role);
            }
            if !entry.company.is_empty() {
                header.push_str(&format!(" at {}", entry.company));
            }
            if !entry.duration.is_empty() {
                header.push_str(&format!(" ({})", entry.duration));
            }
            lines.push(header);
            if !entry.description.is_empty() {
                lines.push(format!("  {}", entry.description));
            }
            lines.push(String::new());
        }
    }

    if !resume.projects.is_empty() {
        lines.push("PROJECTS".to_string());
        lines.push(section_rule());
        for project in &resume.projects {
            let mut header = project.name.clone();
            let mut urls: Vec<&str> = Vec::new();
            if let Some(live) = project.live_url.as_deref() {
                urls.push(live);
            }
            if let Some(github) = project.github_url.as_deref() {
                urls.push(github);
            }
            // Single-link entries from the earlier builder, honored only when
            // no live URL superseded them.
            if let (Some(link), None) = (project.link.as_deref(), project.live_url.as_deref()) {
                urls.push(link);
            }
            if !urls.is_empty() {
                header.push_str(&format!(" — {}", urls.join(" | ")));
            }
            lines.push(header);
            if !project.description.is_empty() {
                lines.push(format!("  {}", project.description));
            }
            if !project.tech_stack.is_empty() {
                lines.push(format!("  Tech: {}", project.tech_stack.join(", ")));
            }
            lines.push(String::new());
        }
    }

    let skill_lines = render_skills(&resume.skills);
    if !skill_lines.is_empty() {
        lines.push("SKILLS".to_string());
        lines.push(section_rule());
        lines.extend(skill_lines);
        lines.push(String::new());
    }

    let mut links: Vec<String> = Vec::new();
    if !personal.github.is_empty() {
        links.push(format!("GitHub: {}", personal.github));
    }
    if !personal.linkedin.is_empty() {
        links.push(format!("LinkedIn: {}", personal.linkedin));
    }
    if !personal.portfolio.is_empty() {
        links.push(format!("Portfolio: {}", personal.portfolio));
    }
    if !links.is_empty() {
        lines.push("LINKS".to_string());
        lines.push(section_rule());
        lines.extend(links);
        lines.push(String::new());
    }

    lines.join("\n").trim().to_string()
}

fn render_skills(skills: &Skills) -> Vec<String> {
    match skills {
        Skills::Legacy(raw) => {
            let tokens: Vec<&str> = raw
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .collect();
            if tokens.is_empty() {
                Vec::new()
            } else {
                vec![tokens.join(", ")]
            }
        }
        Skills::Categorized(categories) => {
            let mut rendered = Vec::new();
            if !categories.technical.is_empty() {
                rendered.push(format!("Technical: {}", categories.technical.join(", ")));
            }
            if !categories.soft.is_empty() {
                rendered.push(format!("Soft Skills: {}", categories.soft.join(", ")));
            }
            if !categories.tools.is_empty() {
                rendered.push(format!("Tools: {}", categories.tools.join(", ")));
            }
            rendered
        }
    }
}

/// Non-blocking completeness check surfaced alongside an export. Returns a
/// single warning string, or `None` when the resume looks presentable.
pub fn export_warnings(resume: &ResumeData) -> Option<String> {
    let name_missing = resume.personal.full_name.trim().is_empty();
    let body_missing = resume.experience.is_empty() && resume.projects.is_empty();

    if name_missing || body_missing {
        Some("Your resume may look incomplete.".to_string())
    } else {
        None
    }
}
