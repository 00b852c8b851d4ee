//! User-facing sanitization of backend error text.
//!
//! ERROR HANDLING
//! ==============
//! Raw backend messages can leak schema details ("violates foreign key
//! constraint on relation links"). Everything surfaced in a toast passes
//! through `sanitize_message`: known auth phrases get friendlier copy,
//! anything that smells like database internals collapses to a generic line,
//! and the rest is shown as-is.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Shown whenever the raw message would reveal implementation details.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Lowercase needles that indicate schema or driver internals.
const REVEALING_KEYWORDS: &[&str] = &[
    "constraint",
    "relation",
    "column",
    "schema",
    "duplicate key",
    "violates",
    "syntax error",
    "sqlstate",
    "pgrst",
    "jwt",
];

/// Known auth phrases mapped to friendlier copy.
const AUTH_PHRASES: &[(&str, &str)] = &[
    ("invalid login credentials", "Incorrect email or password."),
    ("email not confirmed", "Please confirm your email address first."),
    ("user already registered", "An account with this email already exists."),
    ("password should be at least", "That password is too short."),
    ("email rate limit exceeded", "Too many emails sent. Please wait a bit and try again."),
];

/// Rewrite a raw backend error into safe, user-facing copy.
#[must_use]
pub fn sanitize_message(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return GENERIC_ERROR.to_owned();
    }
    let lower = trimmed.to_lowercase();

    for (phrase, friendly) in AUTH_PHRASES {
        if lower.contains(phrase) {
            return (*friendly).to_owned();
        }
    }
    if REVEALING_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return GENERIC_ERROR.to_owned();
    }
    trimmed.to_owned()
}
