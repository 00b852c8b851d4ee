use super::*;
use crate::net::types::ThemePreset;

#[test]
fn default_is_clean_and_not_loading() {
    let state = AppearanceState::default();
    assert!(!state.dirty);
    assert!(!state.loading);
    assert_eq!(state.settings.theme, ThemePreset::Midnight);
}

#[test]
fn edit_marks_dirty() {
    let mut state = AppearanceState::default();
    state.edit(|s| s.theme = ThemePreset::Ocean);
    assert!(state.dirty);
    assert_eq!(state.settings.theme, ThemePreset::Ocean);
}

#[test]
fn saved_clears_dirty_without_touching_settings() {
    let mut state = AppearanceState::default();
    state.edit(|s| s.hide_branding = true);
    state.saved();
    assert!(!state.dirty);
    assert!(state.settings.hide_branding);
}

#[test]
fn set_loaded_resets_dirty() {
    let mut state = AppearanceState::default();
    state.edit(|s| s.hide_branding = true);
    state.set_loaded(AppearanceSettings::default());
    assert!(!state.dirty);
    assert!(!state.settings.hide_branding);
}
