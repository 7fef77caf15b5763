//! Injected UI seam and the presentational helpers around it.
//!
//! The controller never looks anything up in a global document; the host
//! hands it a [`UiSurface`] at construction time and implements these
//! operations for whatever rendering environment it owns.

/// Four-valued submission status. Exactly one is active at a time and only
/// the controller writes it; Submitting is the only state during which the
/// submit control is disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Operations the submission lifecycle performs against the host UI.
pub trait UiSurface: Send + Sync {
    fn set_submit_enabled(&self, enabled: bool);
    fn set_loading_visible(&self, visible: bool);
    /// Hides the result panel left over from a previous submission.
    fn hide_result(&self);
    /// Toggles the error styling on the result panel.
    fn set_error_marker(&self, on: bool);
    /// Reveals the result panel populated with the rendered markup.
    fn show_result(&self, markup: &str);
    /// Reveals the result panel with a failure message.
    fn show_error(&self, message: &str);
    fn scroll_to_loading(&self);
    fn scroll_to_result(&self);
}

/// The two file-selecting controls of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileField {
    ProblemAnswer,
    FeedbackCriteria,
}

/// Default helper prompt under the problem-and-answer control.
pub const PROBLEM_ANSWER_PROMPT: &str =
    "문제와 작성한 답안을 JPEG, PNG 또는 PDF 파일로 업로드하세요.";

/// Default helper prompt under the feedback-criteria control.
pub const FEEDBACK_CRITERIA_PROMPT: &str =
    "성취기준, 수학적 대상, 루틴, 내러티브 등의 피드백 고려사항을 PDF 파일로 업로드하세요.";

/// Helper text plus the "file selected" visual flag for one file control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionFeedback {
    pub label: String,
    pub selected: bool,
}

/// Presentational feedback for a file control, reflecting its current value.
/// Not part of the submission lifecycle; the host applies this on every
/// change of the associated input.
pub fn selection_feedback(field: FileField, chosen: Option<&str>) -> SelectionFeedback {
    match chosen {
        Some(name) => SelectionFeedback {
            label: format!("선택된 파일: {name}"),
            selected: true,
        },
        None => SelectionFeedback {
            label: match field {
                FileField::ProblemAnswer => PROBLEM_ANSWER_PROMPT,
                FileField::FeedbackCriteria => FEEDBACK_CRITERIA_PROMPT,
            }
            .to_string(),
            selected: false,
        },
    }
}
