//! The credential check behind the login form, as an injected collaborator so
//! the portal can swap in a real identity provider without touching the
//! session store or the route guard.

use thiserror::Error;

use crate::models::identity::{Credentials, Identity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Swappable credential check: credentials in, identity or a mismatch out.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthError>;
}

/// Accepts exactly one configured credential pair and mints the fixed admin
/// identity for it.
pub struct StaticAuthenticator {
    email: String,
    password: String,
}

impl StaticAuthenticator {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Authenticator for StaticAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        if credentials.email == self.email && credentials.password == self.password {
            Ok(Identity {
                email: credentials.email.clone(),
                name: "Admin User".to_string(),
                role: "admin".to_string(),
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
