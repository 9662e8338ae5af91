use thiserror::Error;

use crate::api::ApiError;
use crate::review::preview::PreviewError;
use crate::session::auth::AuthError;
use crate::wizard::files::FileRejection;
use crate::wizard::validation::{Stage, ValidationErrors};

/// Portal-level error type. Every variant is recoverable in place — validation
/// blocks a stage advance, rejections block one attachment, submission and
/// auth failures are surfaced and retried. Nothing here is fatal to the
/// portal.
#[derive(Debug, Error)]
pub enum PortalError {
    /// Stage validation failed; the wizard stays on (or jumps back to) the
    /// offending stage with the per-field messages recorded.
    #[error("validation failed on the {stage:?} stage")]
    Validation {
        stage: Stage,
        errors: ValidationErrors,
    },

    #[error(transparent)]
    FileRejected(#[from] FileRejection),

    /// The backend rejected the application or the request failed. The draft
    /// survives on the review stage for retry.
    #[error("application submission failed: {0}")]
    Submission(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Preview(#[from] PreviewError),

    /// An operation was invoked in a state where it is not legal (e.g. submit
    /// outside the review stage).
    #[error("operation not allowed in the current wizard state")]
    IllegalState,
}
