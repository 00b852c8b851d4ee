//! Browser storage helpers for advisory client-side state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only read/write glue so pages and utils can persist
//! JSON blobs (rate-limit history) and ephemeral auth flags (pending signup
//! email, post-confirmation marker) without repeating web-sys plumbing.
//! Native/SSR paths no-op so server rendering stays deterministic.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Session-storage key holding the email address awaiting confirmation.
pub const PENDING_SIGNUP_EMAIL_KEY: &str = "linkleaf_pending_signup_email";
/// Session-storage marker set after a confirmation link was exchanged.
pub const CONFIRMED_SESSION_KEY: &str = "linkleaf_email_confirmed";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_local_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_local_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Read a plain string flag from `sessionStorage`.
pub fn session_flag(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a plain string flag to `sessionStorage`.
pub fn set_session_flag(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove a flag from `sessionStorage`.
pub fn clear_session_flag(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
