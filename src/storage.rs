//! Browser Local Storage
//!
//! [`TokenStore`] implementation over `window.localStorage` so the session
//! survives page reloads.

use crate::session::TokenStore;

const TOKEN_KEY: &str = "token";
// Written by an older page variant that stored the role separately.
// Cleared alongside the token so stale installs converge on the
// decode-role-from-token contract.
const LEGACY_ROLE_KEY: &str = "userRole";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Token persistence backed by `localStorage`.
#[derive(Clone, Copy, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<String> {
        local_storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn set(&self, token: &str) {
        let Some(storage) = local_storage() else { return };
        let _ = storage.set_item(TOKEN_KEY, token);
    }

    fn clear(&self) {
        let Some(storage) = local_storage() else { return };
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(LEGACY_ROLE_KEY);
    }
}
