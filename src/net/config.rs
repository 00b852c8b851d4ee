//! Backend endpoint configuration.
//!
//! DESIGN
//! ======
//! The browser has no environment, so overrides are baked in at compile time:
//! `LINKLEAF_API_URL` / `LINKLEAF_ANON_KEY` set during the build win over the
//! checked-in development defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_API_URL: &str = "http://localhost:54321";
const DEFAULT_ANON_KEY: &str = "dev-anon-key";

/// Base URL of the hosted backend, without a trailing slash.
#[must_use]
pub fn api_url() -> &'static str {
    option_env!("LINKLEAF_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
}

/// Publishable anon key sent as the `apikey` header on every request.
#[must_use]
pub fn anon_key() -> &'static str {
    option_env!("LINKLEAF_ANON_KEY").unwrap_or(DEFAULT_ANON_KEY)
}
