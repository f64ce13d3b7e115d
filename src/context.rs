//! Application Context
//!
//! The session store, provided via the Leptos Context API so any component
//! can read auth state or trigger transitions.

use leptos::prelude::*;

use crate::session::{Role, Session};
use crate::storage::LocalTokenStore;
use crate::token::TokenError;

/// Reactive wrapper over the session state machine.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Session>,
    store: LocalTokenStore,
}

impl AuthContext {
    /// Restore the session from local storage. Called once, at mount.
    pub fn new() -> Self {
        let store = LocalTokenStore;
        Self {
            session: RwSignal::new(Session::restore(&store)),
            store,
        }
    }

    /// Explicit login with a freshly issued token.
    ///
    /// Decode failure forces `Anonymous` and surfaces to the caller as an
    /// authentication error.
    pub fn login(&self, token: String) -> Result<(), TokenError> {
        match Session::login(&self.store, token) {
            Ok(session) => {
                self.session.set(session);
                Ok(())
            }
            Err(err) => {
                self.session.set(Session::Anonymous);
                Err(err)
            }
        }
    }

    pub fn logout(&self) {
        self.session.set(Session::logout(&self.store));
    }

    /// Reactive: re-runs consumers when the session changes.
    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    /// Reactive: whether the current session carries the privileged role.
    /// Advisory only; the server is the authority on every mutation.
    pub fn is_admin(&self) -> bool {
        self.session.with(|s| s.role() == Some(Role::Admin))
    }

    pub fn role(&self) -> Option<Role> {
        self.session.with(|s| s.role())
    }

    /// Snapshot of the current token for use inside async handlers.
    pub fn token_untracked(&self) -> Option<String> {
        self.session.with_untracked(|s| s.token().map(str::to_string))
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the auth context from any component below `App`.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
