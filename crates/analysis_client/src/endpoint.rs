//! Transport seam to the analysis backend.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::error::SubmitError;
use crate::form::{
    AnalysisRequest, FileUpload, FIELD_FEEDBACK_CRITERIA, FIELD_PROBLEM_ANSWER,
};

/// Fixed path of the one wire interface this client consumes.
pub const ANALYZE_PATH: &str = "/analyze";

/// The remote analysis endpoint, as the controller sees it. The backend is
/// a black box: one request in, plain text out.
#[async_trait]
pub trait AnalysisEndpoint: Send + Sync {
    async fn analyze(&self, request: AnalysisRequest) -> Result<String, SubmitError>;
}

/// Production implementation posting a multipart body to `{server_url}/analyze`.
pub struct HttpAnalysisEndpoint {
    http: Client,
    server_url: String,
}

impl HttpAnalysisEndpoint {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            server_url: server_url.into(),
        }
    }

    fn multipart_form(request: AnalysisRequest) -> Result<Form, SubmitError> {
        let mut form = Form::new().part(FIELD_PROBLEM_ANSWER, file_part(request.problem_answer)?);
        if let Some(file) = request.feedback_criteria {
            form = form.part(FIELD_FEEDBACK_CRITERIA, file_part(file)?);
        }
        for (name, value) in request.fields.entries() {
            form = form.text(name, value.to_string());
        }
        Ok(form)
    }
}

fn file_part(file: FileUpload) -> Result<Part, SubmitError> {
    let mut part = Part::bytes(file.bytes).file_name(file.filename);
    if let Some(mime) = &file.mime_type {
        part = part.mime_str(mime)?;
    }
    Ok(part)
}

#[async_trait]
impl AnalysisEndpoint for HttpAnalysisEndpoint {
    async fn analyze(&self, request: AnalysisRequest) -> Result<String, SubmitError> {
        let form = Self::multipart_form(request)?;
        let response = self
            .http
            .post(format!("{}{ANALYZE_PATH}", self.server_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SubmitError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}
