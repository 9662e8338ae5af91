//! Stage validation for the application wizard.
//!
//! `validate` is a pure function evaluated at defined transition points (Next,
//! final submit) rather than on every keystroke. All rules for a stage are
//! evaluated together so the error set reflects every violated field at once.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::models::draft::ApplicationDraft;
use crate::wizard::files::MAX_UPLOAD_BYTES;

/// One of the four sequential sections of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Personal,
    Professional,
    Documents,
    Review,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::Personal,
        Stage::Professional,
        Stage::Documents,
        Stage::Review,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Stage::Personal => "Personal Info",
            Stage::Professional => "Professional Details",
            Stage::Documents => "Documents",
            Stage::Review => "Review",
        }
    }

    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Personal => Some(Stage::Professional),
            Stage::Professional => Some(Stage::Documents),
            Stage::Documents => Some(Stage::Review),
            Stage::Review => None,
        }
    }

    pub fn prev(self) -> Option<Stage> {
        match self {
            Stage::Personal => None,
            Stage::Professional => Some(Stage::Personal),
            Stage::Documents => Some(Stage::Professional),
            Stage::Review => Some(Stage::Documents),
        }
    }
}

/// Field name → human-readable message. Ordered map so iteration (and
/// therefore rendering and test output) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Clears a single field's error, as the user edits that field.
    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    /// Replaces exactly one stage's entries with a freshly computed set,
    /// leaving other stages' errors untouched.
    pub fn replace_stage(&mut self, stage: Stage, fresh: ValidationErrors) {
        for field in stage_fields(stage) {
            self.0.remove(*field);
        }
        self.0.extend(fresh.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// The error-map fields owned by each stage. `submit` is synthetic and belongs
/// to no stage.
pub fn stage_fields(stage: Stage) -> &'static [&'static str] {
    match stage {
        Stage::Personal => &[
            "firstName",
            "lastName",
            "email",
            "phone",
            "age",
            "address",
            "city",
            "country",
            "currentPlace",
            "availability",
            "linkedIn",
            "portfolio",
        ],
        Stage::Professional => &["position", "experience", "educationLevel", "skills"],
        Stage::Documents => &["resume", "coverLetter"],
        Stage::Review => &[],
    }
}

/// Validates one stage of the draft. Rules are not short-circuited; every
/// violated field of the stage appears in the result. Review has no rules of
/// its own — final submit replays the first three stages instead.
pub fn validate(stage: Stage, draft: &ApplicationDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    match stage {
        Stage::Personal => validate_personal(draft, &mut errors),
        Stage::Professional => validate_professional(draft, &mut errors),
        Stage::Documents => validate_documents(draft, &mut errors),
        Stage::Review => {}
    }
    errors
}

fn validate_personal(draft: &ApplicationDraft, errors: &mut ValidationErrors) {
    if draft.first_name.trim().is_empty() {
        errors.insert("firstName", "First name is required");
    } else if !name_re().is_match(&draft.first_name) {
        errors.insert("firstName", "First name should contain only letters");
    }

    if draft.last_name.trim().is_empty() {
        errors.insert("lastName", "Last name is required");
    } else if !name_re().is_match(&draft.last_name) {
        errors.insert("lastName", "Last name should contain only letters");
    }

    if draft.email.trim().is_empty() {
        errors.insert("email", "Email is required");
    } else if !email_re().is_match(&draft.email) {
        errors.insert("email", "Please enter a valid email address");
    }

    if draft.phone.trim().is_empty() {
        errors.insert("phone", "Phone number is required");
    } else if !phone_re().is_match(&draft.phone) {
        errors.insert("phone", "Please enter a valid phone number");
    }

    if draft.age.trim().is_empty() {
        errors.insert("age", "Age is required");
    } else {
        match draft.age.trim().parse::<i64>() {
            Ok(age) if (18..=100).contains(&age) => {}
            _ => errors.insert("age", "Age must be between 18 and 100"),
        }
    }

    for (field, value, message) in [
        ("address", &draft.address, "Address is required"),
        ("city", &draft.city, "City is required"),
        ("country", &draft.country, "Country is required"),
        (
            "currentPlace",
            &draft.current_place,
            "Current place is required",
        ),
        (
            "availability",
            &draft.availability,
            "Availability information is required",
        ),
    ] {
        if value.trim().is_empty() {
            errors.insert(field, message);
        }
    }

    // Optional links are validated only when present.
    if !draft.linked_in.trim().is_empty() && !linkedin_re().is_match(draft.linked_in.trim()) {
        errors.insert("linkedIn", "Please enter a valid LinkedIn URL");
    }
    if !draft.portfolio.trim().is_empty() && !url_re().is_match(draft.portfolio.trim()) {
        errors.insert("portfolio", "Please enter a valid portfolio URL");
    }
}

fn validate_professional(draft: &ApplicationDraft, errors: &mut ValidationErrors) {
    // Structurally guaranteed by catalog selection, but re-checked against
    // state drift.
    if draft.position.trim().is_empty() {
        errors.insert("position", "Position is required");
    }

    if draft.experience.trim().is_empty() {
        errors.insert("experience", "Experience information is required");
    } else if draft.experience.trim().chars().count() < 50 {
        errors.insert(
            "experience",
            "Please provide more detailed experience information (minimum 50 characters)",
        );
    }

    if draft.education.is_none() {
        errors.insert("educationLevel", "Education level is required");
    }

    if draft.skills.is_empty() {
        errors.insert("skills", "At least one skill is required");
    } else if draft.skills.len() < 2 {
        errors.insert("skills", "Please add at least two skills");
    }
}

fn validate_documents(draft: &ApplicationDraft, errors: &mut ValidationErrors) {
    // The size cap is re-checked uniformly for both slots, not just the cover
    // letter: attach-time acceptance is not trusted across state drift.
    match &draft.resume {
        None => errors.insert("resume", "Resume is required"),
        Some(file) if file.len() > MAX_UPLOAD_BYTES => {
            errors.insert("resume", "Resume must be less than 5MB");
        }
        Some(_) => {}
    }

    if let Some(file) = &draft.cover_letter {
        if file.len() > MAX_UPLOAD_BYTES {
            errors.insert("coverLetter", "Cover letter must be less than 5MB");
        }
    }
}

fn name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z\s]+$").expect("name pattern"))
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern")
    })
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9+\-\s()]+$").expect("phone pattern"))
}

fn linkedin_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^https?://(?:www\.)?linkedin\.com/in/[\w-]+/?$").expect("linkedin pattern")
    })
}

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^https?://(?:www\.)?[\w-]+\.[\w.-]+/?.*$").expect("url pattern")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::draft::{EducationLevel, FileUpload};

    fn valid_draft() -> ApplicationDraft {
        ApplicationDraft {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            age: "28".to_string(),
            phone: "+44 (0) 123-456".to_string(),
            address: "12 Analytical Row".to_string(),
            city: "London".to_string(),
            country: "UK".to_string(),
            current_place: "London".to_string(),
            availability: "2 weeks notice".to_string(),
            linked_in: String::new(),
            portfolio: String::new(),
            position: "Software Engineer".to_string(),
            experience: "Ten years of building web services, compilers and distributed systems."
                .to_string(),
            education: Some(EducationLevel::Masters),
            skills: vec!["Rust".to_string(), "Go".to_string()],
            resume: Some(FileUpload::new(
                "resume.pdf",
                "application/pdf",
                vec![1u8; 1024],
            )),
            cover_letter: None,
            job_id: "1".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_passes_every_stage() {
        let draft = valid_draft();
        for stage in Stage::ALL {
            assert!(validate(stage, &draft).is_empty(), "stage {stage:?}");
        }
    }

    #[test]
    fn test_validation_is_deterministic() {
        let mut draft = valid_draft();
        draft.email = "a@b".to_string();
        draft.age = "abc".to_string();
        for stage in Stage::ALL {
            assert_eq!(validate(stage, &draft), validate(stage, &draft));
        }
    }

    #[test]
    fn test_all_violations_reported_together() {
        let draft = ApplicationDraft::default();
        let errors = validate(Stage::Personal, &draft);
        // Every required personal field is flagged in one pass; optional links
        // stay silent when empty.
        assert_eq!(errors.len(), 10);
        assert!(errors.get("linkedIn").is_none());
        assert!(errors.get("portfolio").is_none());
    }

    #[test]
    fn test_email_patterns() {
        let mut draft = valid_draft();
        draft.email = "a@b.co".to_string();
        assert!(validate(Stage::Personal, &draft).get("email").is_none());

        draft.email = "a@b".to_string();
        assert!(validate(Stage::Personal, &draft).get("email").is_some());

        draft.email = "not-an-email".to_string();
        assert!(validate(Stage::Personal, &draft).get("email").is_some());
    }

    #[test]
    fn test_age_boundaries() {
        let mut draft = valid_draft();
        for (age, ok) in [("17", false), ("18", true), ("100", true), ("101", false), ("abc", false)]
        {
            draft.age = age.to_string();
            let errors = validate(Stage::Personal, &draft);
            assert_eq!(errors.get("age").is_none(), ok, "age {age}");
        }
    }

    #[test]
    fn test_name_rejects_digits() {
        let mut draft = valid_draft();
        draft.first_name = "Ada99".to_string();
        assert_eq!(
            validate(Stage::Personal, &draft).get("firstName"),
            Some("First name should contain only letters")
        );
    }

    #[test]
    fn test_phone_rejects_letters() {
        let mut draft = valid_draft();
        draft.phone = "call me".to_string();
        assert!(validate(Stage::Personal, &draft).get("phone").is_some());
    }

    #[test]
    fn test_linkedin_url_shape() {
        let mut draft = valid_draft();
        draft.linked_in = "https://www.linkedin.com/in/ada-lovelace".to_string();
        assert!(validate(Stage::Personal, &draft).get("linkedIn").is_none());

        draft.linked_in = "https://example.com/ada".to_string();
        assert!(validate(Stage::Personal, &draft).get("linkedIn").is_some());
    }

    #[test]
    fn test_portfolio_accepts_generic_url() {
        let mut draft = valid_draft();
        draft.portfolio = "https://ada.dev/projects".to_string();
        assert!(validate(Stage::Personal, &draft).get("portfolio").is_none());

        draft.portfolio = "ada.dev".to_string();
        assert!(validate(Stage::Personal, &draft).get("portfolio").is_some());
    }

    #[test]
    fn test_experience_minimum_length() {
        let mut draft = valid_draft();
        draft.experience = "short".to_string();
        assert!(validate(Stage::Professional, &draft)
            .get("experience")
            .is_some());
    }

    #[test]
    fn test_experience_minimum_counts_characters_not_bytes() {
        let mut draft = valid_draft();
        // 20 characters but 60 bytes; still under the 50-character minimum.
        draft.experience = "开发分布式系统二十年经验丰富可靠高效稳定".to_string();
        assert!(validate(Stage::Professional, &draft)
            .get("experience")
            .is_some());

        // 50 multibyte characters satisfy the minimum.
        draft.experience = "系".repeat(50);
        assert!(validate(Stage::Professional, &draft)
            .get("experience")
            .is_none());
    }

    #[test]
    fn test_skills_need_two_entries() {
        let mut draft = valid_draft();
        draft.skills = vec![];
        assert_eq!(
            validate(Stage::Professional, &draft).get("skills"),
            Some("At least one skill is required")
        );

        draft.skills = vec!["Rust".to_string()];
        assert_eq!(
            validate(Stage::Professional, &draft).get("skills"),
            Some("Please add at least two skills")
        );
    }

    #[test]
    fn test_documents_size_recheck_covers_both_slots() {
        let mut draft = valid_draft();
        draft.resume = Some(FileUpload::new(
            "resume.pdf",
            "application/pdf",
            vec![0u8; MAX_UPLOAD_BYTES + 1],
        ));
        draft.cover_letter = Some(FileUpload::new(
            "cl.pdf",
            "application/pdf",
            vec![0u8; MAX_UPLOAD_BYTES + 1],
        ));
        let errors = validate(Stage::Documents, &draft);
        assert!(errors.get("resume").is_some());
        assert!(errors.get("coverLetter").is_some());
    }

    #[test]
    fn test_missing_resume_is_flagged() {
        let mut draft = valid_draft();
        draft.resume = None;
        assert_eq!(
            validate(Stage::Documents, &draft).get("resume"),
            Some("Resume is required")
        );
    }

    #[test]
    fn test_replace_stage_leaves_other_stages_alone() {
        let mut errors = ValidationErrors::default();
        errors.insert("email", "Please enter a valid email address");
        errors.insert("skills", "Please add at least two skills");

        errors.replace_stage(Stage::Personal, ValidationErrors::default());
        assert!(errors.get("email").is_none());
        assert_eq!(errors.get("skills"), Some("Please add at least two skills"));
    }
}
