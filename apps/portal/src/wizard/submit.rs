//! Final submission assembly.
//!
//! The payload is transport-neutral: an ordered list of text parts plus the
//! file parts. The HTTP client turns it into `multipart/form-data`; keeping
//! assembly separate lets tests inspect exactly what would be dispatched.

use crate::models::draft::{ApplicationDraft, FileUpload};

/// The multipart payload for `POST /apply`, in dispatch order.
#[derive(Debug, Clone)]
pub struct SubmissionPayload {
    /// Scalar form fields, in the order they are appended to the form.
    pub fields: Vec<(&'static str, String)>,
    pub resume: FileUpload,
    pub cover_letter: Option<FileUpload>,
}

impl SubmissionPayload {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Builds the submission payload from a validated draft. Skills are serialized
/// as a JSON array string in insertion order; the optional links are included
/// only when non-empty; the cover letter part is omitted when absent.
///
/// Returns `None` when no resume is attached — callers re-validate the
/// Documents stage before assembling, so this only trips on state drift.
pub fn assemble(draft: &ApplicationDraft) -> Option<SubmissionPayload> {
    let resume = draft.resume.clone()?;

    let skills = serde_json::to_string(&draft.skills).unwrap_or_else(|_| "[]".to_string());
    let education = draft
        .education
        .map(|level| level.as_str().to_string())
        .unwrap_or_default();

    let mut fields = vec![
        ("firstName", draft.first_name.clone()),
        ("lastName", draft.last_name.clone()),
        ("email", draft.email.clone()),
        ("phone", draft.phone.clone()),
        ("age", draft.age.clone()),
        ("address", draft.address.clone()),
        ("city", draft.city.clone()),
        ("country", draft.country.clone()),
        ("currentPlace", draft.current_place.clone()),
        ("availability", draft.availability.clone()),
        ("position", draft.position.clone()),
        ("experience", draft.experience.clone()),
        ("educationLevel", education),
        ("skills", skills),
        ("job_id", draft.job_id.clone()),
    ];

    if !draft.linked_in.trim().is_empty() {
        fields.push(("linkedIn", draft.linked_in.clone()));
    }
    if !draft.portfolio.trim().is_empty() {
        fields.push(("portfolio", draft.portfolio.clone()));
    }

    Some(SubmissionPayload {
        fields,
        resume,
        cover_letter: draft.cover_letter.clone(),
    })
}
