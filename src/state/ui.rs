//! Local UI chrome state (toasts, dashboard tab, dark mode).
//!
//! DESIGN
//! ======
//! Transient presentation concerns stay out of domain state (`links`,
//! `appearance`) so panels can evolve independently of wire data.
//! Confirmation prompts are deliberately not modeled here: each page owns an
//! `Option` of the pending action and renders the generic `ConfirmDialog`
//! with contextual title/message text.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Editor tab on the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Links,
    Appearance,
    Settings,
}

/// Severity of a toast notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// One transient toast notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// UI state for chrome shared across pages.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub tab: DashboardTab,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl UiState {
    /// Queue an informational toast; returns its id for dismissal.
    pub fn toast_info(&mut self, message: impl Into<String>) -> u64 {
        self.push_toast(ToastKind::Info, message.into())
    }

    /// Queue an error toast; returns its id for dismissal.
    pub fn toast_error(&mut self, message: impl Into<String>) -> u64 {
        self.push_toast(ToastKind::Error, message.into())
    }

    fn push_toast(&mut self, kind: ToastKind, message: String) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast { id, kind, message });
        id
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
