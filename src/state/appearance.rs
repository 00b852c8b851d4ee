//! Appearance-editor state.
//!
//! The settings row is the unit of persistence: any change marks the whole
//! row dirty, and the debounced flush upserts it whole. File-backed fields
//! (custom background) are written through immediately by the caller after
//! the upload returns a URL.

#[cfg(test)]
#[path = "appearance_test.rs"]
mod appearance_test;

use crate::net::types::AppearanceSettings;

/// Shared appearance state for the editor and its live preview.
#[derive(Clone, Debug, Default)]
pub struct AppearanceState {
    pub settings: AppearanceSettings,
    pub loading: bool,
    /// Set after any local edit until the next successful upsert.
    pub dirty: bool,
}

impl AppearanceState {
    /// Replace settings from a fetch (or defaults when no row exists yet).
    pub fn set_loaded(&mut self, settings: AppearanceSettings) {
        self.settings = settings;
        self.loading = false;
        self.dirty = false;
    }

    /// Apply a local edit and mark the row dirty.
    pub fn edit<F: FnOnce(&mut AppearanceSettings)>(&mut self, apply: F) {
        apply(&mut self.settings);
        self.dirty = true;
    }

    /// Mark the row clean after a successful upsert.
    pub fn saved(&mut self) {
        self.dirty = false;
    }
}
