//! Session State Machine
//!
//! Two states, `Anonymous` and `Authenticated`, with transitions driven by
//! login/logout and token restore. All transitions go through an injected
//! [`TokenStore`] so the logic stays independent of the storage medium.

use crate::token::{decode_claims, TokenError};

/// Persistence port for the access token.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Role derived from the token's `role` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    /// The server treats `admin` and `superadmin` as privileged.
    pub fn from_claim(role: &str) -> Self {
        match role {
            "admin" | "superadmin" => Role::Admin,
            _ => Role::Customer,
        }
    }
}

/// Who is logged in, and with what role.
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Anonymous,
    Authenticated { token: String, role: Role },
}

impl Session {
    /// Startup path: restore the persisted token, if any.
    ///
    /// A persisted token that no longer decodes is purged silently; a
    /// corrupt token must not leave the user half-authenticated.
    pub fn restore(store: &dyn TokenStore) -> Self {
        let Some(token) = store.get() else {
            return Session::Anonymous;
        };
        match decode_claims(&token) {
            Ok(claims) => Session::Authenticated {
                role: Role::from_claim(&claims.role),
                token,
            },
            Err(_) => {
                store.clear();
                Session::Anonymous
            }
        }
    }

    /// Explicit login with a freshly issued token.
    ///
    /// The token is persisted only after it decodes; on failure the store
    /// is cleared, the session is forced to `Anonymous`, and the error
    /// surfaces to the caller.
    pub fn login(store: &dyn TokenStore, token: String) -> Result<Self, TokenError> {
        match decode_claims(&token) {
            Ok(claims) => {
                store.set(&token);
                Ok(Session::Authenticated {
                    role: Role::from_claim(&claims.role),
                    token,
                })
            }
            Err(err) => {
                store.clear();
                Err(err)
            }
        }
    }

    /// Clear the persisted token and return to `Anonymous`. No server call.
    pub fn logout(store: &dyn TokenStore) -> Self {
        store.clear();
        Session::Anonymous
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Session::Authenticated { role, .. } => Some(*role),
            Session::Anonymous => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token, .. } => Some(token),
            Session::Anonymous => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use std::cell::RefCell;

    /// In-memory stand-in for local storage.
    #[derive(Default)]
    struct MemoryStore(RefCell<Option<String>>);

    impl TokenStore for MemoryStore {
        fn get(&self) -> Option<String> {
            self.0.borrow().clone()
        }
        fn set(&self, token: &str) {
            *self.0.borrow_mut() = Some(token.to_string());
        }
        fn clear(&self) {
            *self.0.borrow_mut() = None;
        }
    }

    fn token_for_role(role: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"u","role":"{role}"}}"#));
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn login_then_logout_returns_to_anonymous() {
        let store = MemoryStore::default();
        let session =
            Session::login(&store, token_for_role("customer")).expect("login should succeed");
        assert!(session.is_authenticated());
        assert_eq!(store.get(), Some(token_for_role("customer")));

        let session = Session::logout(&store);
        assert_eq!(session, Session::Anonymous);
        assert_eq!(session.token(), None);
        assert_eq!(session.role(), None);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn login_with_undecodable_token_never_authenticates() {
        let store = MemoryStore::default();
        store.set("stale-token");

        let err = Session::login(&store, "garbage".to_string());
        assert!(err.is_err());
        // Forced back to Anonymous: nothing persisted either.
        assert_eq!(store.get(), None);
    }

    #[test]
    fn restore_from_valid_token() {
        let store = MemoryStore::default();
        store.set(&token_for_role("admin"));

        let session = Session::restore(&store);
        assert_eq!(session.role(), Some(Role::Admin));
        assert!(session.is_authenticated());
    }

    #[test]
    fn restore_purges_corrupt_token_silently() {
        let store = MemoryStore::default();
        store.set("corrupt");

        let session = Session::restore(&store);
        assert_eq!(session, Session::Anonymous);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn restore_with_empty_store_is_anonymous() {
        let store = MemoryStore::default();
        assert_eq!(Session::restore(&store), Session::Anonymous);
    }

    #[test]
    fn role_claim_mapping() {
        assert_eq!(Role::from_claim("admin"), Role::Admin);
        assert_eq!(Role::from_claim("superadmin"), Role::Admin);
        assert_eq!(Role::from_claim("customer"), Role::Customer);
        assert_eq!(Role::from_claim("anything-else"), Role::Customer);
    }
}
