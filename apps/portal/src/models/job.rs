use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An open position the applicant can apply to. Server-owned and read-only to
/// the wizard; selecting one is the only way a draft acquires its position and
/// job_id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    /// Not every backend record carries a company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub posted_date: NaiveDate,
}
