//! HTTP boundary to the backend services.
//!
//! One client covers the four collaborators: the generation service, the
//! image store, the quality-analysis service, and the auth service. All
//! transport mechanics live here; the content model stays transport-free.
//! Remote failures surface as a single descriptive [`Error::Service`]
//! value, and no retries happen at this layer.

mod auth;
mod report;

pub use auth::{AuthResponse, AuthSession};
pub use report::{OverallStatus, QualityReport, ReportStatistics};

use std::time::Duration;

use reqwest::multipart;
use serde::Deserialize;

use crate::detect;
use crate::error::{Error, Result};
use crate::model::{JsonFormat, Paper};

/// Default backend base URL, matching the development server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// MIME type uploaded for .docx documents.
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Configuration for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the backend.
    pub base_url: String,

    /// Bearer token attached to requests, if any.
    pub token: Option<String>,

    /// Transport-level timeout. None means no timeout is enforced.
    pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout: None,
        }
    }
}

impl ClientOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set a transport timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Async client for the backend services.
pub struct ApiClient {
    http: reqwest::Client,
    options: ClientOptions,
}

/// Error body shape used by the backend for failed requests.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Response shape of the image store.
#[derive(Deserialize)]
struct UploadResponse {
    path: String,
}

impl ApiClient {
    /// Create a client against the default base URL.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            options: ClientOptions::default(),
        }
    }

    /// Create a client with explicit options.
    pub fn with_options(options: ClientOptions) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self { http, options })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.options.base_url
    }

    /// Replace the bearer token on an existing client.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.options.token = Some(token.into());
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.options.base_url.trim_end_matches('/'), endpoint)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.options.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Submit a paper to the generation service and return the generated
    /// document bytes.
    ///
    /// The paper is validated locally first so an obviously incomplete
    /// submission never reaches the wire.
    pub async fn generate(&self, paper: &Paper) -> Result<Vec<u8>> {
        paper.validate_for_generation()?;

        log::debug!(
            "posting paper with {} sections to {}",
            paper.section_count(),
            self.base_url()
        );
        let response = self
            .request(self.http.post(self.url("/generate")).json(paper))
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Upload raw image bytes to the image store and return the opaque
    /// reference path to record on an [`crate::model::Image`] entry.
    pub async fn upload_image(&self, data: Vec<u8>, filename: &str) -> Result<String> {
        let part = multipart::Part::bytes(data).file_name(filename.to_string());
        let form = multipart::Form::new().part("file", part);

        let response = self
            .request(self.http.post(self.url("/upload-image")).multipart(form))
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let upload: UploadResponse = response.json().await?;
        Ok(upload.path)
    }

    /// Upload a document to the quality-analysis service and return its
    /// report. Rejects anything that does not look like a .docx file
    /// before sending.
    pub async fn check_quality(&self, data: Vec<u8>, filename: &str) -> Result<QualityReport> {
        detect::ensure_docx(filename, &data)?;

        let part = multipart::Part::bytes(data)
            .file_name(filename.to_string())
            .mime_str(DOCX_MIME)?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .request(self.http.post(self.url("/check-plagiarism/")).multipart(form))
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Log in and return the issued session.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&auth::LoginRequest { email, password })
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        auth::into_session(response.json().await?)
    }

    /// Create an account and return the issued session.
    pub async fn signup(&self, email: &str, password: &str, full_name: &str) -> Result<AuthSession> {
        if full_name.trim().is_empty() {
            return Err(Error::Validation("full name is required".to_string()));
        }
        if password.len() < 6 {
            return Err(Error::Validation(
                "password must be at least 6 characters".to_string(),
            ));
        }

        let response = self
            .http
            .post(self.url("/auth/signup"))
            .json(&auth::SignupRequest {
                email,
                password,
                full_name,
            })
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        auth::into_session(response.json().await?)
    }

    /// Probe whether a token is still accepted by the auth service.
    pub async fn verify(&self, token: &str) -> Result<bool> {
        let response = self
            .http
            .get(self.url("/auth/verify"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(response.status().is_success())
    }

    /// Turn a non-success response into a descriptive service error,
    /// preferring the backend's `detail` message when one is present.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        Err(Error::Service(match detail {
            Some(detail) => detail,
            None => format!("request failed with status {}", status),
        }))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a paper exactly as the generation endpoint receives it.
///
/// Useful for inspecting or archiving the submission payload.
pub fn generation_payload(paper: &Paper) -> Result<String> {
    paper.to_json(JsonFormat::Compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_options_builder() {
        let options = ClientOptions::new()
            .with_base_url("https://api.example.com/")
            .with_token("tok")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(options.base_url, "https://api.example.com/");
        assert_eq!(options.token.as_deref(), Some("tok"));
        assert_eq!(options.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_url_join_strips_trailing_slash() {
        let client = ApiClient::with_options(
            ClientOptions::new().with_base_url("https://api.example.com/"),
        )
        .unwrap();
        assert_eq!(client.url("/generate"), "https://api.example.com/generate");

        let client = ApiClient::new();
        assert_eq!(client.url("/auth/login"), "http://localhost:8000/auth/login");
    }

    #[test]
    fn test_generation_payload_uses_wire_names() {
        let mut paper = Paper::new();
        paper.title = "T".to_string();
        paper.abstract_text = "A".to_string();

        let payload = generation_payload(&paper).unwrap();
        assert!(payload.contains("\"abstract\":\"A\""));
        assert!(payload.contains("\"sections\":[]"));
    }
}
