use super::*;

// =============================================================
// is_allowed — window behavior
// =============================================================

#[test]
fn allows_exactly_max_attempts_inside_window() {
    let mut limiter = RateLimiter::new(60_000, 3);
    assert!(limiter.is_allowed_at("a@example.com", 1_000));
    assert!(limiter.is_allowed_at("a@example.com", 2_000));
    assert!(limiter.is_allowed_at("a@example.com", 3_000));
    assert!(!limiter.is_allowed_at("a@example.com", 4_000));
    assert!(!limiter.is_allowed_at("a@example.com", 59_000));
}

#[test]
fn oldest_attempt_aging_out_frees_one_slot() {
    let mut limiter = RateLimiter::new(10_000, 2);
    assert!(limiter.is_allowed_at("id", 0));
    assert!(limiter.is_allowed_at("id", 5_000));
    assert!(!limiter.is_allowed_at("id", 9_999));
    // t=0 attempt expires at t=10_000.
    assert!(limiter.is_allowed_at("id", 10_000));
    // Window now holds t=5_000 and t=10_000.
    assert!(!limiter.is_allowed_at("id", 11_000));
}

#[test]
fn identifiers_are_limited_independently() {
    let mut limiter = RateLimiter::new(60_000, 1);
    assert!(limiter.is_allowed_at("a@example.com", 0));
    assert!(!limiter.is_allowed_at("a@example.com", 1));
    assert!(limiter.is_allowed_at("b@example.com", 1));
}

#[test]
fn rolling_window_is_continuous_not_bucketed() {
    let mut limiter = RateLimiter::new(10_000, 2);
    assert!(limiter.is_allowed_at("id", 9_000));
    assert!(limiter.is_allowed_at("id", 9_500));
    // A fixed-bucket limiter would reset at t=10_000; a rolling one must not.
    assert!(!limiter.is_allowed_at("id", 10_500));
    assert!(limiter.is_allowed_at("id", 19_000));
}

// =============================================================
// retry_after_ms
// =============================================================

#[test]
fn retry_after_is_zero_while_allowed() {
    let mut limiter = RateLimiter::new(10_000, 2);
    assert_eq!(limiter.retry_after_ms_at("id", 0), 0);
    assert!(limiter.is_allowed_at("id", 0));
    assert_eq!(limiter.retry_after_ms_at("id", 1_000), 0);
}

#[test]
fn retry_after_counts_down_to_oldest_expiry() {
    let mut limiter = RateLimiter::new(10_000, 2);
    assert!(limiter.is_allowed_at("id", 1_000));
    assert!(limiter.is_allowed_at("id", 2_000));
    assert_eq!(limiter.retry_after_ms_at("id", 3_000), 8_000);
    assert_eq!(limiter.retry_after_ms_at("id", 10_999), 1);
    assert_eq!(limiter.retry_after_ms_at("id", 11_000), 0);
}

// =============================================================
// persistence round-trip shape
// =============================================================

#[test]
fn serializes_and_restores_attempt_history() {
    let mut limiter = RateLimiter::new(10_000, 2);
    assert!(limiter.is_allowed_at("id", 1_000));
    let raw = serde_json::to_string(&limiter).expect("serialize");
    let mut restored: RateLimiter = serde_json::from_str(&raw).expect("deserialize");
    assert!(restored.is_allowed_at("id", 2_000));
    assert!(!restored.is_allowed_at("id", 3_000));
}
