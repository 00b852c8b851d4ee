use super::*;

#[test]
fn default_tab_is_links() {
    assert_eq!(UiState::default().tab, DashboardTab::Links);
}

#[test]
fn toast_ids_are_unique_and_monotonic() {
    let mut state = UiState::default();
    let a = state.toast_info("saved");
    let b = state.toast_error("failed");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].kind, ToastKind::Info);
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = UiState::default();
    let a = state.toast_info("one");
    let b = state.toast_info("two");
    state.dismiss_toast(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
    // Unknown id is a no-op.
    state.dismiss_toast(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = UiState::default();
    let a = state.toast_info("one");
    state.dismiss_toast(a);
    let b = state.toast_info("two");
    assert_ne!(a, b);
}
