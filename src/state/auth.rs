//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and identity-aware components to coordinate login
//! redirects. The profile row rides along with the session because an
//! inactive or missing profile is a fatal session condition (forced
//! sign-out), decided wherever both are loaded together.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Profile, Session};

/// Authentication state tracking the session, its profile, and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub profile: Option<Profile>,
    /// True until the initial session restore has settled.
    pub loading: bool,
}

impl AuthState {
    /// Install a fresh session; the profile arrives with the next fetch.
    pub fn signed_in(&mut self, session: Session) {
        self.session = Some(session);
        self.profile = None;
        self.loading = false;
    }

    /// Attach the loaded profile row to the current session.
    pub fn profile_loaded(&mut self, profile: Profile) {
        self.profile = Some(profile);
    }

    /// Drop all session state (sign-out or fatal session error).
    pub fn signed_out(&mut self) {
        self.session = None;
        self.profile = None;
        self.loading = false;
    }

    /// Whether the loaded profile forces termination: missing row or
    /// `is_active = false`. Only meaningful after a profile fetch settled.
    #[must_use]
    pub fn profile_is_fatal(&self) -> bool {
        match &self.profile {
            Some(profile) => !profile.is_active,
            None => self.session.is_some(),
        }
    }

    /// Whether the admin console may render. Advisory only; the backend is
    /// the real boundary.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.profile.as_ref().is_some_and(|p| p.is_admin)
    }
}
