//! Attach-time policy shared by the resume and cover letter inputs.

use thiserror::Error;

use crate::models::draft::FileUpload;

/// Upper bound for any uploaded document, boundary inclusive.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// MIME types accepted for resume and cover letter uploads: PDF and the two
/// Word document flavors.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Why an attachment was refused. Recoverable: it blocks that attachment only
/// and the previously accepted file (if any) is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileRejection {
    #[error("Please upload a PDF or Word document only")]
    UnsupportedType { content_type: String },

    #[error("File size must be less than 5MB")]
    TooLarge { size: usize },
}

/// Applies the shared attach policy. Type is checked before size, so an
/// oversized `.txt` reports a type error, not a size error.
pub fn check_upload(file: &FileUpload) -> Result<(), FileRejection> {
    if !ALLOWED_CONTENT_TYPES.contains(&file.content_type.as_str()) {
        return Err(FileRejection::UnsupportedType {
            content_type: file.content_type.clone(),
        });
    }
    if file.len() > MAX_UPLOAD_BYTES {
        return Err(FileRejection::TooLarge { size: file.len() });
    }
    Ok(())
}
