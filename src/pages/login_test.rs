use super::{MAX_ATTEMPTS, field_error};
use crate::util::rate_limit::RateLimiter;

#[test]
fn blank_fields_are_rejected_locally() {
    assert_eq!(field_error("", "hunter2", false), Some("Enter your email address."));
    assert_eq!(field_error("ada@example.com", "", false), Some("Enter your password."));
    assert_eq!(field_error("ada@example.com", "hunter2", false), None);
}

#[test]
fn reset_mode_needs_no_password() {
    assert_eq!(field_error("ada@example.com", "", true), None);
    assert_eq!(field_error("", "", true), Some("Enter your email address."));
}

#[test]
fn incomplete_submissions_never_consume_attempts() {
    let mut limiter = RateLimiter::new(60_000, MAX_ATTEMPTS);

    // Mirrors the submit handler: field checks gate the limiter, so a blank
    // password can be submitted any number of times without locking out.
    for _ in 0..MAX_ATTEMPTS * 4 {
        if field_error("ada@example.com", "", false).is_some() {
            continue;
        }
        limiter.is_allowed("ada@example.com");
    }
    assert!(limiter.is_allowed("ada@example.com"));
}
