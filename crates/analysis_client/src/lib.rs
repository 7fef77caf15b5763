//! Form submission controller for the math-feedback analysis form.
//!
//! One component owns the submit-to-render lifecycle: it validates the
//! snapshot, dispatches one multipart request to the analysis endpoint,
//! walks the UI through idle → submitting → success|error, and renders the
//! returned text into display markup. The endpoint and the UI surface are
//! both injected, so the controller runs the same against a browser-like
//! host, a terminal host, or the fakes in the tests.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info};

pub mod endpoint;
pub mod error;
pub mod form;
pub mod render;
pub mod surface;

pub use endpoint::{AnalysisEndpoint, HttpAnalysisEndpoint};
pub use error::SubmitError;
pub use form::{AnalysisRequest, FileUpload, FormSnapshot, TextFields};
pub use surface::{
    selection_feedback, FileField, SelectionFeedback, SubmissionState, UiSurface,
};

/// Behavior knobs. The rich renderer with scroll cues is canonical; the
/// legacy newline-only form is this flag turned off, not a second code path.
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    pub rich_rendering: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            rich_rendering: true,
        }
    }
}

/// The single logical unit owning the submit-to-render lifecycle.
pub struct SubmitController {
    endpoint: Arc<dyn AnalysisEndpoint>,
    surface: Arc<dyn UiSurface>,
    options: ControllerOptions,
    state: Mutex<SubmissionState>,
}

impl SubmitController {
    pub fn new(endpoint: Arc<dyn AnalysisEndpoint>, surface: Arc<dyn UiSurface>) -> Self {
        Self::with_options(endpoint, surface, ControllerOptions::default())
    }

    pub fn with_options(
        endpoint: Arc<dyn AnalysisEndpoint>,
        surface: Arc<dyn UiSurface>,
        options: ControllerOptions,
    ) -> Self {
        Self {
            endpoint,
            surface,
            options,
            state: Mutex::new(SubmissionState::Idle),
        }
    }

    pub async fn state(&self) -> SubmissionState {
        *self.state.lock().await
    }

    /// Mediates one user-initiated submission end-to-end. Single attempt,
    /// no retry, no timeout beyond the transport's own; the submit control
    /// stays disabled for the full duration, so no second submission can
    /// overlap this one from the same control.
    pub async fn submit(&self, snapshot: FormSnapshot) -> Result<(), SubmitError> {
        self.set_state(SubmissionState::Submitting).await;
        self.surface.set_submit_enabled(false);
        self.surface.set_loading_visible(true);
        self.surface.hide_result();
        self.surface.set_error_marker(false);
        if self.options.rich_rendering {
            self.surface.scroll_to_loading();
        }

        let outcome = self.run(snapshot).await;

        match &outcome {
            Ok(markup) => {
                self.set_state(SubmissionState::Success).await;
                self.surface.show_result(markup);
                if self.options.rich_rendering {
                    self.surface.scroll_to_result();
                }
                info!("analysis result rendered");
            }
            Err(err) => {
                error!(error = %err, "analysis submission failed");
                self.set_state(SubmissionState::Error).await;
                self.surface.set_error_marker(true);
                self.surface.show_error(&err.surfaced_message());
                if self.options.rich_rendering {
                    self.surface.scroll_to_result();
                }
            }
        }

        // The one step that runs exactly once per submission no matter
        // which path was taken.
        self.surface.set_submit_enabled(true);
        self.surface.set_loading_visible(false);

        outcome.map(|_| ())
    }

    async fn run(&self, snapshot: FormSnapshot) -> Result<String, SubmitError> {
        // Validation failures must never reach the endpoint.
        let request = snapshot.into_request()?;
        let result_text = self.endpoint.analyze(request).await?;
        Ok(render::render(&result_text, self.options.rich_rendering))
    }

    async fn set_state(&self, next: SubmissionState) {
        *self.state.lock().await = next;
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
