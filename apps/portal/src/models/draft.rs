use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// One uploaded document held in memory until submission. At most one file is
/// attached per slot at a time; accepting a new file discards the previous one.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    /// MIME type as reported by the file picker.
    pub content_type: String,
    pub content: Bytes,
}

impl FileUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            content: content.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Fixed education levels offered on the Professional Details stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    HighSchool,
    AssociateDegree,
    Bachelors,
    Masters,
    Phd,
    Other,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 6] = [
        EducationLevel::HighSchool,
        EducationLevel::AssociateDegree,
        EducationLevel::Bachelors,
        EducationLevel::Masters,
        EducationLevel::Phd,
        EducationLevel::Other,
    ];

    /// The display string, which is also the value sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::AssociateDegree => "Associate Degree",
            EducationLevel::Bachelors => "Bachelor's Degree",
            EducationLevel::Masters => "Master's Degree",
            EducationLevel::Phd => "PhD",
            EducationLevel::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == value)
    }
}

/// The in-progress, not-yet-submitted application form state. Owned
/// exclusively by the wizard for the lifetime of one application attempt:
/// created empty on mount or on "back to listings", destroyed on successful
/// submission.
///
/// `position` and `job_id` are set together, exclusively by selecting a
/// [`crate::models::job::JobPosting`]; an empty `job_id` means no selection.
#[derive(Debug, Clone, Default)]
pub struct ApplicationDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Kept as entered; validated as an integer in [18, 100].
    pub age: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub current_place: String,
    /// Free-text notice-period description.
    pub availability: String,
    pub linked_in: String,
    pub portfolio: String,
    pub position: String,
    pub experience: String,
    pub education: Option<EducationLevel>,
    /// Distinct skills in order of addition.
    pub skills: Vec<String>,
    pub resume: Option<FileUpload>,
    pub cover_letter: Option<FileUpload>,
    pub job_id: String,
}
