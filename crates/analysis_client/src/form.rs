//! Transient submission data read from the upload form.
//!
//! A [`FormSnapshot`] is built fresh from current form contents on every
//! submit and consumed once; nothing here is retained between submissions.

use crate::error::SubmitError;

/// Multipart field names of the `/analyze` wire contract.
pub const FIELD_PROBLEM_ANSWER: &str = "problem-answer";
pub const FIELD_FEEDBACK_CRITERIA: &str = "feedback-criteria";
pub const FIELD_ACHIEVEMENT_STANDARD: &str = "achievement-standard";
pub const FIELD_MATH_OBJECT: &str = "math-object";
pub const FIELD_ROUTINE: &str = "routine";
pub const FIELD_NARRATIVE: &str = "narrative";
pub const FIELD_OTHER: &str = "other";

/// One file chosen in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub filename: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// The five free-text inputs. Unset values stay empty strings; the wire
/// contract always sends all five, never omitting one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFields {
    pub achievement_standard: String,
    pub math_object: String,
    pub routine: String,
    pub narrative: String,
    pub other: String,
}

impl TextFields {
    /// Field-name/value pairs in wire order.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            (FIELD_ACHIEVEMENT_STANDARD, self.achievement_standard.as_str()),
            (FIELD_MATH_OBJECT, self.math_object.as_str()),
            (FIELD_ROUTINE, self.routine.as_str()),
            (FIELD_NARRATIVE, self.narrative.as_str()),
            (FIELD_OTHER, self.other.as_str()),
        ]
    }
}

/// Raw form contents as read synchronously at submit time.
#[derive(Debug, Clone, Default)]
pub struct FormSnapshot {
    pub problem_answer: Option<FileUpload>,
    pub feedback_criteria: Option<FileUpload>,
    pub fields: TextFields,
}

/// A validated submission, guaranteed to carry the required file.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub problem_answer: FileUpload,
    pub feedback_criteria: Option<FileUpload>,
    pub fields: TextFields,
}

impl FormSnapshot {
    /// Validates the snapshot. A missing required file is a validation
    /// failure, not a network error; the caller must not contact the
    /// endpoint when this returns `Err`.
    pub fn into_request(self) -> Result<AnalysisRequest, SubmitError> {
        let problem_answer = self.problem_answer.ok_or(SubmitError::Validation)?;
        Ok(AnalysisRequest {
            problem_answer,
            feedback_criteria: self.feedback_criteria,
            fields: self.fields,
        })
    }
}
