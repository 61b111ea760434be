use crate::infra::{sample_resume, InMemoryDraftRepository};
use clap::Args;
use resume_ats::error::AppError;
use resume_ats::resume::domain::ResumeData;
use resume_ats::resume::{bullet_suggestions, compute_ats_score, ResumeService};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a resume JSON file (the builder's saved data shape)
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Emit the raw ScoreResult JSON instead of the readable report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Include the plain-text export in the demo output
    #[arg(long)]
    pub(crate) show_export: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.file)?;
    let resume: ResumeData = serde_json::from_str(&raw)
        .map_err(|err| AppError::InvalidInput(format!("resume JSON: {err}")))?;

    let result = compute_ats_score(&resume);

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => return Err(AppError::InvalidInput(err.to_string())),
        }
        return Ok(());
    }

    println!("ATS readiness: {}/{}", result.score, result.max_score);
    if result.suggestions.is_empty() {
        println!("No improvements left — every rubric criterion is satisfied.");
    } else {
        println!("Improvements ({} available):", result.suggestions.len());
        for suggestion in &result.suggestions {
            println!("  - [+{}] {}", suggestion.points, suggestion.text);
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Resume scoring demo");

    let repository = Arc::new(InMemoryDraftRepository::default());
    let service = Arc::new(ResumeService::new(repository));

    let resume = sample_resume();
    let record = match service.save(resume.clone()) {
        Ok(record) => record,
        Err(err) => {
            println!("  Draft rejected: {err}");
            return Ok(());
        }
    };
    println!("- Stored draft {}", record.id.0);

    let result = match service.score(&record.id) {
        Ok(result) => result,
        Err(err) => {
            println!("  Scoring unavailable: {err}");
            return Ok(());
        }
    };
    println!("  Score: {}/{}", result.score, result.max_score);
    if result.suggestions.is_empty() {
        println!("  Suggestions: none");
    } else {
        println!("  Suggestions:");
        for suggestion in &result.suggestions {
            println!("    - [+{}] {}", suggestion.points, suggestion.text);
        }
    }

    println!("  Bullet guidance:");
    for entry in &resume.experience {
        let hints = bullet_suggestions(&entry.description);
        if hints.is_empty() {
            println!("    - {} at {}: clean", entry.role, entry.company);
        } else {
            println!("    - {} at {}:", entry.role, entry.company);
            for hint in hints {
                println!("        {hint}");
            }
        }
    }

    match serde_json::to_string_pretty(&record.status_view()) {
        Ok(json) => println!("  Public status payload:\n{json}"),
        Err(err) => println!("  Public status payload unavailable: {err}"),
    }

    if args.show_export {
        match service.export(&record.id) {
            Ok(exported) => {
                if let Some(warning) = &exported.warning {
                    println!("  Export warning: {warning}");
                }
                println!("\n{}", exported.body);
            }
            Err(err) => println!("  Export unavailable: {err}"),
        }
    }

    Ok(())
}
