//! Session store: the current authenticated identity, persisted to one of
//! two storage scopes depending on the "remember me" choice at login.

pub mod auth;
pub mod guard;
pub mod storage;

use tracing::warn;

use crate::models::identity::{Credentials, Identity};

use self::auth::{AuthError, Authenticator};
use self::storage::Storage;

/// Fixed key the identity record is persisted under in either scope.
pub const SESSION_KEY: &str = "user";

pub struct SessionStore {
    durable: Box<dyn Storage>,
    tab: Box<dyn Storage>,
    current: Option<Identity>,
}

impl SessionStore {
    /// Builds the store and restores any previously saved identity, checking
    /// the durable scope first and falling back to the tab scope.
    pub fn new(durable: Box<dyn Storage>, tab: Box<dyn Storage>) -> Self {
        let current = restore(durable.as_ref()).or_else(|| restore(tab.as_ref()));
        Self {
            durable,
            tab,
            current,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    /// Runs the injected credential check; on success persists the identity
    /// JSON to the scope selected by `remember` and holds it in memory. On
    /// mismatch nothing changes.
    pub fn login(
        &mut self,
        authenticator: &dyn Authenticator,
        credentials: &Credentials,
        remember: bool,
    ) -> Result<Identity, AuthError> {
        let identity = authenticator.authenticate(credentials)?;
        match serde_json::to_string(&identity) {
            Ok(json) => {
                let scope: &dyn Storage = if remember {
                    self.durable.as_ref()
                } else {
                    self.tab.as_ref()
                };
                scope.set(SESSION_KEY, &json);
            }
            Err(err) => warn!(%err, "identity not serializable; session will not be persisted"),
        }
        self.current = Some(identity.clone());
        Ok(identity)
    }

    /// Clears the in-memory identity and both storage scopes. Idempotent.
    pub fn logout(&mut self) {
        self.current = None;
        self.durable.remove(SESSION_KEY);
        self.tab.remove(SESSION_KEY);
    }
}

fn restore(scope: &dyn Storage) -> Option<Identity> {
    let raw = scope.get(SESSION_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(identity) => Some(identity),
        Err(err) => {
            warn!(%err, "discarding unreadable saved session");
            None
        }
    }
}
