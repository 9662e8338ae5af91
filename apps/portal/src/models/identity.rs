use serde::{Deserialize, Serialize};

/// The locally stored record proving the current user passed the login check.
/// Persisted as JSON under a fixed key in one of the two storage scopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub name: String,
    pub role: String,
}

/// A login attempt's credential pair.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
