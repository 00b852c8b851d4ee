//! Debounced persistence for text-field edits.
//!
//! DESIGN
//! ======
//! Every qualifying edit arms the gate with a fresh generation token and
//! schedules a delayed flush. When a flush wakes up it runs only if its token
//! is still the latest, so a burst of edits inside the window collapses to a
//! single persistence call carrying the final value. File uploads bypass this
//! entirely and fire immediately.
//!
//! The token arithmetic is plain and synchronous so the coalescing contract
//! can be tested without a timer or a browser.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::Cell;
use std::rc::Rc;

/// Delay applied to dashboard text-field edits before persisting.
pub const EDIT_DEBOUNCE_MS: u32 = 600;

/// Coalescing gate: only the most recently armed token may fire.
#[derive(Clone, Debug, Default)]
pub struct DebounceGate {
    generation: Rc<Cell<u64>>,
}

impl DebounceGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate all outstanding tokens and issue a new one.
    pub fn arm(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    /// Whether `token` is still the latest armed token.
    #[must_use]
    pub fn is_current(&self, token: u64) -> bool {
        self.generation.get() == token
    }

    /// Run `flush` only if `token` has not been superseded.
    ///
    /// Returns whether the flush ran.
    pub fn fire_if_current<F: FnOnce()>(&self, token: u64, flush: F) -> bool {
        if self.is_current(token) {
            flush();
            true
        } else {
            false
        }
    }
}

/// Arm `gate` and schedule `flush` to run after `delay_ms`, unless a later
/// edit re-arms the gate first.
#[cfg(feature = "hydrate")]
pub fn schedule<F>(gate: &DebounceGate, delay_ms: u32, flush: F)
where
    F: FnOnce() + 'static,
{
    let token = gate.arm();
    let gate = gate.clone();
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        gate.fire_if_current(token, flush);
    });
}
