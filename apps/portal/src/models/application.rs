use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Review status of a submitted application. Entirely client-managed: the
/// backend exposes no status mutation, so transitions live in view state only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

/// Metadata for a stored document; `download_url` is fetched directly by the
/// document previewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentRef {
    pub filename: String,
    pub original_name: String,
    pub download_url: String,
}

/// A submitted application as stored and returned by the backend. Read-only
/// after submission; field names follow the backend's camelCase wire form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub job_id: String,
    /// Backend timestamps carry no timezone.
    pub timestamp: NaiveDateTime,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub address: String,
    pub city: String,
    pub country: String,
    #[serde(rename = "currentPlace")]
    pub current_place: String,
    pub availability: String,
    #[serde(rename = "linkedInProfile", default)]
    pub linked_in: String,
    #[serde(rename = "portfolioWebsite", default)]
    pub portfolio: String,
    pub position: String,
    pub experience: String,
    #[serde(rename = "educationLevel")]
    pub education_level: String,
    /// Stored server-side as a JSON-encoded array string; see
    /// [`Application::parsed_skills`].
    pub skills: String,
    #[serde(default)]
    pub resume: Option<AttachmentRef>,
    #[serde(default)]
    pub cover_letter: Option<AttachmentRef>,
}

impl Application {
    /// Decodes the JSON-encoded skills string. Malformed input decodes as an
    /// empty list rather than propagating a parse error.
    pub fn parsed_skills(&self) -> Vec<String> {
        serde_json::from_str(&self.skills).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application_json() -> serde_json::Value {
        serde_json::json!({
            "id": "a2f1",
            "job_id": "1",
            "timestamp": "2025-03-15T10:30:00.123456",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "phone": "+44 123 456",
            "age": "28",
            "address": "12 Analytical Row",
            "city": "London",
            "country": "UK",
            "currentPlace": "London",
            "availability": "2 weeks notice",
            "position": "Software Engineer",
            "experience": "Built the first engine",
            "educationLevel": "PhD",
            "skills": "[\"Rust\",\"Go\"]",
            "resume": {
                "filename": "Ada_Lovelace_a2f1.pdf",
                "original_name": "Ada_Lovelace_Resume",
                "download_url": "/download/Ada_Lovelace_a2f1.pdf"
            }
        })
    }

    #[test]
    fn test_deserializes_backend_shape() {
        let app: Application = serde_json::from_value(application_json()).expect("valid payload");
        assert_eq!(app.first_name, "Ada");
        assert_eq!(app.current_place, "London");
        assert!(app.linked_in.is_empty()); // absent on the wire, defaults
        assert!(app.cover_letter.is_none());
        assert_eq!(
            app.resume.expect("resume metadata").download_url,
            "/download/Ada_Lovelace_a2f1.pdf"
        );
    }

    #[test]
    fn test_parsed_skills_preserves_order() {
        let app: Application = serde_json::from_value(application_json()).expect("valid payload");
        assert_eq!(app.parsed_skills(), vec!["Rust", "Go"]);
    }

    #[test]
    fn test_parsed_skills_malformed_degrades_to_empty() {
        let mut value = application_json();
        value["skills"] = serde_json::Value::String("not json".to_string());
        let app: Application = serde_json::from_value(value).expect("valid payload");
        assert!(app.parsed_skills().is_empty());
    }

    #[test]
    fn test_status_wire_form_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::Approved).expect("serializes"),
            "\"approved\""
        );
        assert_eq!(ApplicationStatus::Rejected.label(), "Rejected");
    }
}
