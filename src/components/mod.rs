//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome and editor surfaces while reading/writing shared
//! state from Leptos context providers. `profile_view` is the one renderer
//! shared by the dashboard preview and the public page.

pub mod admin_pricing_panel;
pub mod admin_system_panel;
pub mod admin_users_panel;
pub mod appearance_panel;
pub mod confirm_dialog;
pub mod links_panel;
pub mod navbar;
pub mod profile_view;
pub mod settings_panel;
pub mod toast;
