use super::super::domain::ResumeData;
use super::verbs::ACTION_VERBS;
use super::Suggestion;

const MIN_SUMMARY_CHARS: usize = 50;
const MIN_SKILLS: usize = 5;

/// Walks the eleven rubric criteria in their fixed order, accumulating points
/// for satisfied checks and one suggestion per unmet check. The returned total
/// is unclamped; the caller owns the [0, 100] clamp.
pub(crate) fn apply_rubric(resume: &ResumeData) -> (u32, Vec<Suggestion>) {
    let mut total: u32 = 0;
    let mut suggestions = Vec::new();

    // 1. Full name
    if !resume.personal.full_name.trim().is_empty() {
        total += 10;
    } else {
        suggestions.push(Suggestion {
            text: "Add your full name".to_string(),
            points: 10,
        });
    }

    // 2. Email
    if !resume.personal.email.trim().is_empty() {
        total += 10;
    } else {
        suggestions.push(Suggestion {
            text: "Add your email address".to_string(),
            points: 10,
        });
    }

    // 3. Summary length
    if resume.summary.trim().chars().count() > MIN_SUMMARY_CHARS {
        total += 10;
    } else {
        suggestions.push(Suggestion {
            text: format!("Write a professional summary ({MIN_SUMMARY_CHARS}+ characters)"),
            points: 10,
        });
    }

    // 4. Experience with at least one written-out description
    let has_experience_content = resume
        .experience
        .iter()
        .any(|entry| !entry.description.trim().is_empty());
    if !resume.experience.is_empty() && has_experience_content {
        total += 15;
    } else {
        suggestions.push(Suggestion {
            text: "Add at least 1 experience entry with bullet points".to_string(),
            points: 15,
        });
    }

    // 5. Education
    if !resume.education.is_empty() {
        total += 10;
    } else {
        suggestions.push(Suggestion {
            text: "Add your education".to_string(),
            points: 10,
        });
    }

    // 6. Skills breadth
    let skill_count = resume.skills.total_count();
    if skill_count >= MIN_SKILLS {
        total += 10;
    } else {
        suggestions.push(Suggestion {
            text: format!("Add more skills ({skill_count}/{MIN_SKILLS} minimum)"),
            points: 10,
        });
    }

    // 7. Projects
    if !resume.projects.is_empty() {
        total += 10;
    } else {
        suggestions.push(Suggestion {
            text: "Add at least 1 project".to_string(),
            points: 10,
        });
    }

    // 8. Phone
    if !resume.personal.phone.trim().is_empty() {
        total += 5;
    } else {
        suggestions.push(Suggestion {
            text: "Add your phone number".to_string(),
            points: 5,
        });
    }

    // 9. LinkedIn
    if !resume.personal.linkedin.trim().is_empty() {
        total += 5;
    } else {
        suggestions.push(Suggestion {
            text: "Add your LinkedIn profile".to_string(),
            points: 5,
        });
    }

    // 10. GitHub
    if !resume.personal.github.trim().is_empty() {
        total += 5;
    } else {
        suggestions.push(Suggestion {
            text: "Add your GitHub profile".to_string(),
            points: 5,
        });
    }

    // 11. Action verbs anywhere in the summary
    let summary_lower = resume.summary.to_lowercase();
    if ACTION_VERBS.iter().any(|verb| summary_lower.contains(verb)) {
        total += 10;
    } else {
        suggestions.push(Suggestion {
            text: "Use action verbs in your summary (e.g. built, led, improved)".to_string(),
            points: 10,
        });
    }

    (total, suggestions)
}
