//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability.

pub mod auth;
pub mod color;
pub mod dark_mode;
pub mod debounce;
pub mod rate_limit;
pub mod scroll;
pub mod storage;
pub mod url;
