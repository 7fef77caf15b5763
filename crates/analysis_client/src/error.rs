use thiserror::Error;

/// Fixed user-facing message for a submission missing the required file.
pub const MISSING_REQUIRED_FILE_MESSAGE: &str = "문제 및 작성한 답안 파일을 업로드해주세요.";

/// Fixed phrase prepended to every failure surfaced into the result panel.
pub const ERROR_MESSAGE_PREFIX: &str = "오류가 발생했습니다: ";

#[derive(Debug, Error)]
pub enum SubmitError {
    /// Required file absent; detected client-side, never reaches the network.
    #[error("{}", MISSING_REQUIRED_FILE_MESSAGE)]
    Validation,
    /// The request itself could not complete.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// HTTP response received with a non-success status.
    #[error("서버 오류 ({status}): {body}")]
    Server { status: u16, body: String },
}

impl SubmitError {
    /// Message shown in the result panel: fixed prefix + failure detail.
    pub fn surfaced_message(&self) -> String {
        format!("{ERROR_MESSAGE_PREFIX}{self}")
    }

    /// Markup variant for surfaces that render HTML, carrying the warning
    /// icon the result panel shows next to the message.
    pub fn surfaced_markup(&self) -> String {
        format!(
            "<i class=\"fas fa-exclamation-triangle\"></i> {}",
            self.surfaced_message()
        )
    }
}
