//! The application wizard — a four-stage form state machine.
//!
//! Catalog → Personal Info → Professional Details → Documents → Review →
//! Submitting → back to Catalog. Stage advance runs the stage's validation
//! rule set; Back is unconditional; final submit replays stages 0–2 before
//! dispatching exactly one multipart request.

pub mod files;
pub mod submit;
pub mod validation;

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::{Backend, SubmitReceipt};
use crate::errors::PortalError;
use crate::models::draft::{ApplicationDraft, EducationLevel, FileUpload};
use crate::models::job::JobPosting;

use self::files::FileRejection;
use self::validation::{validate, Stage, ValidationErrors};

/// Synthetic error field carrying the backend's rejection message on the
/// review stage. Belongs to no stage, so stage advances never clear it.
pub const SUBMIT_ERROR_FIELD: &str = "submit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// Job listing screen; the draft is empty here.
    Catalog,
    Step(Stage),
    /// One submission in flight; the submit affordance is disabled.
    Submitting,
}

/// Editable scalar fields of the draft, keyed by their error-map name.
/// Position is excluded on purpose: it is only ever set by job selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    FirstName,
    LastName,
    Email,
    Age,
    Phone,
    Address,
    City,
    Country,
    CurrentPlace,
    Availability,
    LinkedIn,
    Portfolio,
    Experience,
}

impl TextField {
    pub fn name(self) -> &'static str {
        match self {
            TextField::FirstName => "firstName",
            TextField::LastName => "lastName",
            TextField::Email => "email",
            TextField::Age => "age",
            TextField::Phone => "phone",
            TextField::Address => "address",
            TextField::City => "city",
            TextField::Country => "country",
            TextField::CurrentPlace => "currentPlace",
            TextField::Availability => "availability",
            TextField::LinkedIn => "linkedIn",
            TextField::Portfolio => "portfolio",
            TextField::Experience => "experience",
        }
    }
}

/// One wizard activation: the catalog, the draft, the error map and the state
/// machine driving them. Owns the draft exclusively for the lifetime of one
/// application attempt.
pub struct Wizard {
    backend: Arc<dyn Backend>,
    state: WizardState,
    catalog: Vec<JobPosting>,
    catalog_loading: bool,
    catalog_loaded: bool,
    selected_job: Option<JobPosting>,
    draft: ApplicationDraft,
    errors: ValidationErrors,
    submitted_notice: bool,
}

impl Wizard {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            state: WizardState::Catalog,
            catalog: Vec::new(),
            catalog_loading: false,
            catalog_loaded: false,
            selected_job: None,
            draft: ApplicationDraft::default(),
            errors: ValidationErrors::default(),
            submitted_notice: false,
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn current_stage(&self) -> Option<Stage> {
        match self.state {
            WizardState::Step(stage) => Some(stage),
            _ => None,
        }
    }

    pub fn catalog(&self) -> &[JobPosting] {
        &self.catalog
    }

    /// Governs the catalog rendering path exclusively.
    pub fn catalog_loading(&self) -> bool {
        self.catalog_loading
    }

    pub fn selected_job(&self) -> Option<&JobPosting> {
        self.selected_job.as_ref()
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    /// Direct draft access for view bindings. Cross-field rules are re-checked
    /// at transition points, so drift introduced here is caught on Next and on
    /// final submit.
    pub fn draft_mut(&mut self) -> &mut ApplicationDraft {
        &mut self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Consumes the pending success notification, if any.
    pub fn take_submitted_notice(&mut self) -> bool {
        std::mem::take(&mut self.submitted_notice)
    }

    /// Fetches the job catalog. Runs exactly once per wizard activation —
    /// stage transitions never re-fetch. A failed fetch degrades to an empty
    /// board rather than an error banner.
    pub async fn load_catalog(&mut self) {
        if self.catalog_loaded {
            return;
        }
        self.catalog_loading = true;
        match self.backend.fetch_jobs().await {
            Ok(jobs) => {
                info!(count = jobs.len(), "job catalog loaded");
                self.catalog = jobs;
            }
            Err(err) => {
                warn!(%err, "job catalog fetch failed; showing an empty board");
                self.catalog.clear();
            }
        }
        self.catalog_loading = false;
        self.catalog_loaded = true;
    }

    /// Starts an application for one posting: resets the draft, copies the
    /// posting's title and id into it, and enters the first stage. This is the
    /// only place position/job_id are ever set.
    pub fn select_job(&mut self, job: JobPosting) {
        self.draft = ApplicationDraft::default();
        self.errors = ValidationErrors::default();
        self.draft.position = job.title.clone();
        self.draft.job_id = job.id.clone();
        self.selected_job = Some(job);
        self.state = WizardState::Step(Stage::Personal);
    }

    /// "Back to listings": unconditionally discards the draft and all errors.
    pub fn back_to_catalog(&mut self) {
        self.draft = ApplicationDraft::default();
        self.errors = ValidationErrors::default();
        self.selected_job = None;
        self.state = WizardState::Catalog;
    }

    /// Advances to the next stage if the current stage validates cleanly;
    /// otherwise records the stage's error set and stays put. Either way only
    /// the current stage's error entries are replaced.
    pub fn next(&mut self) -> Result<(), PortalError> {
        let WizardState::Step(stage) = self.state else {
            return Err(PortalError::IllegalState);
        };
        let fresh = validate(stage, &self.draft);
        self.errors.replace_stage(stage, fresh.clone());
        if !fresh.is_empty() {
            return Err(PortalError::Validation {
                stage,
                errors: fresh,
            });
        }
        if let Some(next) = stage.next() {
            self.state = WizardState::Step(next);
        }
        Ok(())
    }

    /// Unconditional step back; no validation, no error clearing. A no-op on
    /// the first stage.
    pub fn back(&mut self) {
        if let WizardState::Step(stage) = self.state {
            if let Some(prev) = stage.prev() {
                self.state = WizardState::Step(prev);
            }
        }
    }

    /// Edits one scalar field and clears that field's error entry.
    pub fn set_text(&mut self, field: TextField, value: &str) {
        self.errors.clear_field(field.name());
        let slot = match field {
            TextField::FirstName => &mut self.draft.first_name,
            TextField::LastName => &mut self.draft.last_name,
            TextField::Email => &mut self.draft.email,
            TextField::Age => &mut self.draft.age,
            TextField::Phone => &mut self.draft.phone,
            TextField::Address => &mut self.draft.address,
            TextField::City => &mut self.draft.city,
            TextField::Country => &mut self.draft.country,
            TextField::CurrentPlace => &mut self.draft.current_place,
            TextField::Availability => &mut self.draft.availability,
            TextField::LinkedIn => &mut self.draft.linked_in,
            TextField::Portfolio => &mut self.draft.portfolio,
            TextField::Experience => &mut self.draft.experience,
        };
        *slot = value.to_string();
    }

    pub fn set_education(&mut self, level: EducationLevel) {
        self.errors.clear_field("educationLevel");
        self.draft.education = Some(level);
    }

    /// Adds a skill: trims whitespace, rejects empty input and exact
    /// (case-sensitive) duplicates, appends preserving insertion order.
    /// Returns whether the skill was added.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.draft.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.draft.skills.push(skill.to_string());
        self.errors.clear_field("skills");
        true
    }

    /// Removes the exact string match, if present.
    pub fn remove_skill(&mut self, skill: &str) {
        self.draft.skills.retain(|s| s != skill);
    }

    pub fn attach_resume(&mut self, file: FileUpload) -> Result<(), FileRejection> {
        let file = self.checked_upload("resume", file)?;
        self.draft.resume = Some(file);
        Ok(())
    }

    pub fn attach_cover_letter(&mut self, file: FileUpload) -> Result<(), FileRejection> {
        let file = self.checked_upload("coverLetter", file)?;
        self.draft.cover_letter = Some(file);
        Ok(())
    }

    /// Acceptance clears the field's prior error; rejection records one and
    /// leaves the previously attached file untouched.
    fn checked_upload(
        &mut self,
        field: &'static str,
        file: FileUpload,
    ) -> Result<FileUpload, FileRejection> {
        match files::check_upload(&file) {
            Ok(()) => {
                self.errors.clear_field(field);
                Ok(file)
            }
            Err(rejection) => {
                self.errors.insert(field, rejection.to_string());
                Err(rejection)
            }
        }
    }

    /// Confirmed final submit from the review stage.
    ///
    /// Stages 0–2 are re-validated in order even though Review is only
    /// reachable via Next — this guards against state drift. On the first
    /// failing stage the machine jumps back there instead of dispatching. On
    /// backend failure the message lands under [`SUBMIT_ERROR_FIELD`] and the
    /// machine returns to Review with the draft intact for retry.
    pub async fn submit(&mut self) -> Result<SubmitReceipt, PortalError> {
        if self.state != WizardState::Step(Stage::Review) {
            return Err(PortalError::IllegalState);
        }

        for stage in [Stage::Personal, Stage::Professional, Stage::Documents] {
            let fresh = validate(stage, &self.draft);
            if !fresh.is_empty() {
                self.errors.replace_stage(stage, fresh.clone());
                self.state = WizardState::Step(stage);
                return Err(PortalError::Validation {
                    stage,
                    errors: fresh,
                });
            }
        }

        let Some(payload) = submit::assemble(&self.draft) else {
            // Unreachable after the Documents re-validation above.
            return Err(PortalError::Submission(
                "resume attachment missing".to_string(),
            ));
        };

        self.state = WizardState::Submitting;
        match self.backend.submit_application(payload).await {
            Ok(receipt) => {
                info!(application_id = %receipt.application_id, "application submitted");
                self.back_to_catalog();
                self.submitted_notice = true;
                Ok(receipt)
            }
            Err(err) => {
                let message = err.to_string();
                warn!(%message, "application submission failed");
                self.errors.insert(SUBMIT_ERROR_FIELD, message.clone());
                self.state = WizardState::Step(Stage::Review);
                Err(PortalError::Submission(message))
            }
        }
    }
}
