//! Route guard for the protected layout subtree.

use crate::models::identity::Identity;

use super::SessionStore;

/// Outcome of the guard check. The redirect mechanics themselves are a
/// routing concern; the guard only decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// A session is present; render the protected content for this identity.
    Allow(Identity),
    /// No session in either storage scope; send the user to the login entry
    /// point.
    RedirectToLogin,
}

/// Gates protected content on session presence. Either storage scope having
/// produced an identity satisfies the guard.
pub fn check(session: &SessionStore) -> GuardDecision {
    match session.identity() {
        Some(identity) => GuardDecision::Allow(identity.clone()),
        None => GuardDecision::RedirectToLogin,
    }
}
