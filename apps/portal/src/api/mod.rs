//! HTTP client for the external job board backend.
//!
//! All backend traffic goes through the [`Backend`] trait so the wizard and
//! the review list can run against an in-memory fake in tests. The production
//! implementation is [`JobBoardClient`], a thin `reqwest` wrapper over the
//! four REST endpoints the portal consumes.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::application::Application;
use crate::models::job::JobPosting;
use crate::wizard::submit::SubmissionPayload;

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid URL: {0}")]
    BadUrl(String),
}

/// Acknowledgment returned by `POST /apply`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitReceipt {
    pub success: bool,
    pub message: String,
    pub application_id: String,
}

#[derive(Debug, Deserialize)]
struct JobsEnvelope {
    jobs: Vec<JobPosting>,
}

#[derive(Debug, Deserialize)]
struct ApplicationsEnvelope {
    applications: Vec<Application>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: String,
}

/// Gateway to the backend REST API.
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /jobs` — the open positions, consumed once per wizard activation.
    async fn fetch_jobs(&self) -> Result<Vec<JobPosting>, ApiError>;

    /// `POST /apply` — one multipart dispatch per confirmed submission.
    async fn submit_application(
        &self,
        payload: SubmissionPayload,
    ) -> Result<SubmitReceipt, ApiError>;

    /// `GET /applications` — the full submitted collection.
    async fn fetch_applications(&self) -> Result<Vec<Application>, ApiError>;

    /// Fetches a stored document as raw bytes via its `download_url`.
    async fn fetch_document(&self, download_url: &str) -> Result<Bytes, ApiError>;
}

/// `reqwest`-backed [`Backend`] implementation.
#[derive(Clone)]
pub struct JobBoardClient {
    client: Client,
    base_url: String,
}

impl JobBoardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Resolves a possibly origin-relative `download_url` (the backend hands
    /// out `/download/<file>`) against the configured base URL.
    fn resolve(&self, url: &str) -> Result<String, ApiError> {
        if url.starts_with("http://") || url.starts_with("https://") {
            return Ok(url.to_string());
        }
        let base = reqwest::Url::parse(&self.base_url).map_err(|e| ApiError::BadUrl(e.to_string()))?;
        let joined = base.join(url).map_err(|e| ApiError::BadUrl(e.to_string()))?;
        Ok(joined.to_string())
    }

    /// Turns non-2xx responses into `ApiError::Api`, preferring the backend's
    /// `{ "error": ... }` message over the raw body.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|envelope| envelope.error)
            .unwrap_or(body);
        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl Backend for JobBoardClient {
    async fn fetch_jobs(&self) -> Result<Vec<JobPosting>, ApiError> {
        let response = self.client.get(self.endpoint("jobs")).send().await?;
        let response = Self::check(response).await?;
        let envelope: JobsEnvelope = response.json().await?;
        debug!(count = envelope.jobs.len(), "fetched job postings");
        Ok(envelope.jobs)
    }

    async fn submit_application(
        &self,
        payload: SubmissionPayload,
    ) -> Result<SubmitReceipt, ApiError> {
        let mut form = Form::new();
        for (name, value) in &payload.fields {
            form = form.text(*name, value.clone());
        }
        form = form.part("resume", file_part(&payload.resume)?);
        if let Some(cover_letter) = &payload.cover_letter {
            form = form.part("coverLetter", file_part(cover_letter)?);
        }

        let response = self
            .client
            .post(self.endpoint("apply"))
            .multipart(form)
            .send()
            .await?;
        let response = Self::check(response).await?;
        let receipt: SubmitReceipt = response.json().await?;
        debug!(application_id = %receipt.application_id, "application accepted by backend");
        Ok(receipt)
    }

    async fn fetch_applications(&self) -> Result<Vec<Application>, ApiError> {
        let response = self.client.get(self.endpoint("applications")).send().await?;
        let response = Self::check(response).await?;
        let envelope: ApplicationsEnvelope = response.json().await?;
        debug!(
            count = envelope.applications.len(),
            "fetched submitted applications"
        );
        Ok(envelope.applications)
    }

    async fn fetch_document(&self, download_url: &str) -> Result<Bytes, ApiError> {
        let url = self.resolve(download_url)?;
        let response = self.client.get(url).send().await?;
        let response = Self::check(response).await?;
        Ok(response.bytes().await?)
    }
}

fn file_part(file: &crate::models::draft::FileUpload) -> Result<Part, ApiError> {
    Ok(Part::bytes(file.content.to_vec())
        .file_name(file.file_name.clone())
        .mime_str(&file.content_type)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = JobBoardClient::new("http://127.0.0.1:5000/api/");
        assert_eq!(client.endpoint("jobs"), "http://127.0.0.1:5000/api/jobs");
        assert_eq!(client.endpoint("/apply"), "http://127.0.0.1:5000/api/apply");
    }

    #[test]
    fn test_resolve_origin_relative_download_url() {
        let client = JobBoardClient::new("http://127.0.0.1:5000/api");
        assert_eq!(
            client.resolve("/download/resume.pdf").expect("resolves"),
            "http://127.0.0.1:5000/download/resume.pdf"
        );
    }

    #[test]
    fn test_resolve_passes_absolute_urls_through() {
        let client = JobBoardClient::new("http://127.0.0.1:5000/api");
        assert_eq!(
            client.resolve("https://cdn.example.com/a.pdf").expect("resolves"),
            "https://cdn.example.com/a.pdf"
        );
    }
}
