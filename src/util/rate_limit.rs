//! Client-side sliding-window rate limiting for auth attempts.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<String, VecDeque<u64>>` of
//! millisecond timestamps, pruned on every check. Attempt history is persisted
//! to `localStorage` so a reload does not reset the window.
//!
//! TRADE-OFFS
//! ==========
//! This is an advisory UI affordance only: anyone can clear storage or call
//! the backend directly. Real throttling belongs to the backend; this exists
//! to keep honest users from hammering the sign-in form.

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod rate_limit_test;

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::util::storage;

const STORAGE_KEY: &str = "linkleaf_auth_attempts";

/// Sliding-window attempt limiter keyed by caller-chosen identifier
/// (typically the email being signed in).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RateLimiter {
    window_ms: u64,
    max_attempts: usize,
    attempts: HashMap<String, VecDeque<u64>>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(window_ms: u64, max_attempts: usize) -> Self {
        Self {
            window_ms,
            max_attempts,
            attempts: HashMap::new(),
        }
    }

    /// Restore a limiter from `localStorage`, falling back to a fresh one.
    #[must_use]
    pub fn load(window_ms: u64, max_attempts: usize) -> Self {
        storage::load_local_json::<Self>(STORAGE_KEY)
            .filter(|l| l.window_ms == window_ms && l.max_attempts == max_attempts)
            .unwrap_or_else(|| Self::new(window_ms, max_attempts))
    }

    /// Persist the current attempt history to `localStorage`.
    pub fn save(&self) {
        storage::save_local_json(STORAGE_KEY, self);
    }

    /// Record an attempt for `id` and report whether it is allowed.
    ///
    /// Returns `true` for the first `max_attempts` attempts inside any rolling
    /// window, then `false` until the oldest attempt ages out.
    pub fn is_allowed(&mut self, id: &str) -> bool {
        self.is_allowed_at(id, now_ms())
    }

    /// Internal: check + record with an explicit clock (for testing).
    fn is_allowed_at(&mut self, id: &str, now: u64) -> bool {
        let window = self.attempts.entry(id.to_owned()).or_default();
        prune_window(window, now, self.window_ms);
        if window.len() >= self.max_attempts {
            return false;
        }
        window.push_back(now);
        true
    }

    /// Milliseconds until `id` may attempt again, or 0 when allowed now.
    pub fn retry_after_ms(&self, id: &str) -> u64 {
        self.retry_after_ms_at(id, now_ms())
    }

    fn retry_after_ms_at(&self, id: &str, now: u64) -> u64 {
        let Some(window) = self.attempts.get(id) else {
            return 0;
        };
        let live = window
            .iter()
            .filter(|&&ts| now.saturating_sub(ts) < self.window_ms)
            .count();
        if live < self.max_attempts {
            return 0;
        }
        window
            .front()
            .map_or(0, |&oldest| (oldest + self.window_ms).saturating_sub(now))
    }
}

/// Drop timestamps older than `window_ms` from the front of the deque.
fn prune_window(window: &mut VecDeque<u64>, now: u64, window_ms: u64) {
    while let Some(&front) = window.front() {
        if now.saturating_sub(front) >= window_ms {
            window.pop_front();
        } else {
            break;
        }
    }
}

/// Wall-clock milliseconds; `js_sys::Date` in the browser, zero in native
/// builds where the explicit-clock test paths are used instead.
fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            js_sys::Date::now() as u64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
