//! Admin review list: the submitted applications, local status transitions
//! and the document previewer.
//!
//! Status changes and deletion are view-only by design — the backend exposes
//! no `PATCH`/`DELETE` for applications, so these mutations deliberately
//! never leave the client and are lost on the next activation.

pub mod preview;

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::Backend;
use crate::errors::PortalError;
use crate::models::application::{Application, ApplicationStatus};

use self::preview::DocumentPreview;

/// One row of the review list: the server record plus client-side view state.
#[derive(Debug, Clone)]
pub struct ReviewEntry {
    pub application: Application,
    /// Skills decoded from the server's JSON-encoded string at load time;
    /// malformed input decodes as an empty list.
    pub skills: Vec<String>,
    /// View-only status; starts as pending and never persists.
    pub status: ApplicationStatus,
}

/// One activation of the applicant review screen.
pub struct ReviewList {
    backend: Arc<dyn Backend>,
    entries: Vec<ReviewEntry>,
    loading: bool,
    loaded: bool,
}

impl ReviewList {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            entries: Vec::new(),
            loading: false,
            loaded: false,
        }
    }

    pub fn entries(&self) -> &[ReviewEntry] {
        &self.entries
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Non-mutating detail lookup.
    pub fn entry(&self, id: &str) -> Option<&ReviewEntry> {
        self.entries.iter().find(|entry| entry.application.id == id)
    }

    /// Fetches the application collection. Runs once per activation; a failed
    /// fetch degrades to an empty list rather than an error banner.
    pub async fn load(&mut self) {
        if self.loaded {
            return;
        }
        self.loading = true;
        match self.backend.fetch_applications().await {
            Ok(applications) => {
                info!(count = applications.len(), "application list loaded");
                self.entries = applications
                    .into_iter()
                    .map(|application| {
                        let skills = application.parsed_skills();
                        ReviewEntry {
                            application,
                            skills,
                            status: ApplicationStatus::Pending,
                        }
                    })
                    .collect();
            }
            Err(err) => {
                warn!(%err, "application list fetch failed; showing an empty list");
                self.entries.clear();
            }
        }
        self.loading = false;
        self.loaded = true;
    }

    /// Transitions an application's status in local view state only. Returns
    /// whether the id was found.
    pub fn set_status(&mut self, id: &str, status: ApplicationStatus) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.application.id == id)
        {
            Some(entry) => {
                entry.status = status;
                true
            }
            None => false,
        }
    }

    /// Removes an application from local view state only. Returns whether the
    /// id was found.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.application.id != id);
        self.entries.len() != before
    }

    /// Fetches an attachment by its `download_url` and opens it in the pager.
    pub async fn open_document(&self, download_url: &str) -> Result<DocumentPreview, PortalError> {
        let bytes = self.backend.fetch_document(download_url).await?;
        Ok(DocumentPreview::from_pdf(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use bytes::Bytes;

    use super::*;
    use crate::api::{ApiError, Backend, SubmitReceipt};
    use crate::models::job::JobPosting;
    use crate::wizard::submit::SubmissionPayload;

    struct FakeBackend {
        applications: Vec<Application>,
        fail_fetch: bool,
    }

    #[async_trait]
    impl Backend for FakeBackend {
        async fn fetch_jobs(&self) -> Result<Vec<JobPosting>, ApiError> {
            Ok(vec![])
        }

        async fn submit_application(
            &self,
            _payload: SubmissionPayload,
        ) -> Result<SubmitReceipt, ApiError> {
            Err(ApiError::Api {
                status: 405,
                message: "not under test".to_string(),
            })
        }

        async fn fetch_applications(&self) -> Result<Vec<Application>, ApiError> {
            if self.fail_fetch {
                return Err(ApiError::Api {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            Ok(self.applications.clone())
        }

        async fn fetch_document(&self, _download_url: &str) -> Result<Bytes, ApiError> {
            Ok(Bytes::from_static(b"not a pdf"))
        }
    }

    fn application(id: &str, skills_json: &str) -> Application {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "job_id": "1",
            "timestamp": "2025-03-15T10:30:00",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "phone": "+44 123",
            "age": "28",
            "address": "12 Analytical Row",
            "city": "London",
            "country": "UK",
            "currentPlace": "London",
            "availability": "2 weeks",
            "position": "Engineer",
            "experience": "Engines",
            "educationLevel": "PhD",
            "skills": skills_json,
        }))
        .expect("valid application json")
    }

    fn list_with(applications: Vec<Application>) -> ReviewList {
        ReviewList::new(Arc::new(FakeBackend {
            applications,
            fail_fetch: false,
        }))
    }

    #[tokio::test]
    async fn test_load_parses_skills_and_defaults_status() {
        let mut list = list_with(vec![application("a1", r#"["Rust","Go"]"#)]);
        list.load().await;

        let entry = list.entry("a1").expect("loaded entry");
        assert_eq!(entry.skills, vec!["Rust", "Go"]);
        assert_eq!(entry.status, ApplicationStatus::Pending);
    }

    #[tokio::test]
    async fn test_malformed_skills_degrade_to_empty() {
        let mut list = list_with(vec![application("a1", "not json")]);
        list.load().await;

        assert!(list.entry("a1").expect("loaded entry").skills.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_empty_list() {
        let mut list = ReviewList::new(Arc::new(FakeBackend {
            applications: vec![],
            fail_fetch: true,
        }));
        list.load().await;

        assert!(list.entries().is_empty());
        assert!(!list.loading());
    }

    #[tokio::test]
    async fn test_status_transition_is_local_only() {
        let mut list = list_with(vec![application("a1", "[]")]);
        list.load().await;

        assert!(list.set_status("a1", ApplicationStatus::Approved));
        assert_eq!(
            list.entry("a1").expect("entry").status,
            ApplicationStatus::Approved
        );
        assert!(!list.set_status("missing", ApplicationStatus::Rejected));
    }

    #[tokio::test]
    async fn test_remove_is_local_only() {
        let mut list = list_with(vec![
            application("a1", "[]"),
            application("a2", "[]"),
        ]);
        list.load().await;

        assert!(list.remove("a1"));
        assert!(!list.remove("a1")); // already gone
        assert_eq!(list.entries().len(), 1);
        assert!(list.entry("a2").is_some());
    }

    #[tokio::test]
    async fn test_open_document_surfaces_parse_failure() {
        let list = list_with(vec![]);
        let result = list.open_document("/download/x.pdf").await;
        assert!(matches!(result, Err(PortalError::Preview(_))));
    }
}
