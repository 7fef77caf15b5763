use std::{
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use analysis_client::{
    selection_feedback, ControllerOptions, FileField, FileUpload, FormSnapshot,
    HttpAnalysisEndpoint, SubmitController, TextFields, UiSurface,
};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

mod config;

use config::load_settings;

#[derive(Parser, Debug)]
#[command(name = "analysis-cli", about = "Submit the math-feedback upload form to the analysis endpoint")]
struct Args {
    /// Base URL of the analysis server; overrides client.toml and env.
    #[arg(long)]
    server_url: Option<String>,
    /// Problem-and-answer upload (JPEG, PNG or PDF). The form requires it;
    /// leaving it off exercises the client-side validation path.
    #[arg(long)]
    problem_answer: Option<PathBuf>,
    /// Optional feedback-criteria upload (PDF).
    #[arg(long)]
    feedback_criteria: Option<PathBuf>,
    #[arg(long, default_value = "")]
    achievement_standard: String,
    #[arg(long, default_value = "")]
    math_object: String,
    #[arg(long, default_value = "")]
    routine: String,
    #[arg(long, default_value = "")]
    narrative: String,
    #[arg(long, default_value = "")]
    other: String,
    /// Legacy rendering: line breaks only, no scroll cues.
    #[arg(long)]
    plain: bool,
}

/// Terminal rendition of the form's result panel and loading indicator.
struct TerminalSurface;

impl UiSurface for TerminalSurface {
    fn set_submit_enabled(&self, enabled: bool) {
        debug!(enabled, "submit control");
    }

    fn set_loading_visible(&self, visible: bool) {
        if visible {
            println!("분석 중...");
        }
    }

    fn hide_result(&self) {
        debug!("result panel hidden");
    }

    fn set_error_marker(&self, on: bool) {
        debug!(on, "error marker");
    }

    fn show_result(&self, markup: &str) {
        println!("{markup}");
    }

    fn show_error(&self, message: &str) {
        eprintln!("{message}");
    }

    fn scroll_to_loading(&self) {
        debug!("scroll to loading indicator");
    }

    fn scroll_to_result(&self) {
        debug!("scroll to result panel");
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let settings = load_settings();
    let server_url = args.server_url.unwrap_or(settings.server_url);

    let problem_answer = read_optional_upload(args.problem_answer.as_deref()).await?;
    let feedback_criteria = read_optional_upload(args.feedback_criteria.as_deref()).await?;

    for (field, upload) in [
        (FileField::ProblemAnswer, problem_answer.as_ref()),
        (FileField::FeedbackCriteria, feedback_criteria.as_ref()),
    ] {
        let feedback = selection_feedback(field, upload.map(|f| f.filename.as_str()));
        println!("{}", feedback.label);
    }

    let snapshot = FormSnapshot {
        problem_answer,
        feedback_criteria,
        fields: TextFields {
            achievement_standard: args.achievement_standard,
            math_object: args.math_object,
            routine: args.routine,
            narrative: args.narrative,
            other: args.other,
        },
    };

    let controller = SubmitController::with_options(
        Arc::new(HttpAnalysisEndpoint::new(server_url)),
        Arc::new(TerminalSurface),
        ControllerOptions {
            rich_rendering: !args.plain,
        },
    );

    // Failures are already surfaced and logged by the controller; the exit
    // code is the terminal equivalent of the error panel staying visible.
    match controller.submit(snapshot).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(_) => Ok(ExitCode::FAILURE),
    }
}

async fn read_optional_upload(path: Option<&Path>) -> Result<Option<FileUpload>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read upload '{}'", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload")
        .to_string();
    Ok(Some(FileUpload {
        filename,
        mime_type: guess_mime(path),
        bytes,
    }))
}

fn guess_mime(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg".to_string()),
        "png" => Some("image/png".to_string()),
        "pdf" => Some("application/pdf".to_string()),
        _ => None,
    }
}
