use super::*;

fn seeded() -> AdminState {
    let mut state = AdminState::default();
    state.seed_mock_users();
    state
}

#[test]
fn default_gate_is_undecided() {
    let state = AdminState::default();
    assert_eq!(state.authorized, None);
    assert!(state.users.is_empty());
}

#[test]
fn seeding_is_idempotent() {
    let mut state = seeded();
    let count = state.users.len();
    state.seed_mock_users();
    assert_eq!(state.users.len(), count);
}

#[test]
fn empty_search_shows_everyone() {
    let state = seeded();
    assert_eq!(state.visible_users().len(), state.users.len());
}

#[test]
fn search_matches_username_or_email_case_insensitively() {
    let mut state = seeded();
    state.search = "GRACE".to_owned();
    let visible = state.visible_users();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].username, "grace");

    state.search = "example.com".to_owned();
    assert_eq!(state.visible_users().len(), state.users.len());

    state.search = "nobody".to_owned();
    assert!(state.visible_users().is_empty());
}

#[test]
fn toggle_user_active_flips_matching_row() {
    let mut state = seeded();
    let id = state.users[0].id.clone();
    let was_active = state.users[0].is_active;
    assert!(state.toggle_user_active(&id));
    assert_eq!(state.users[0].is_active, !was_active);
    assert!(!state.toggle_user_active("u-nope"));
}

#[test]
fn delete_user_removes_matching_row_only() {
    let mut state = seeded();
    let count = state.users.len();
    let id = state.users[1].id.clone();
    assert!(state.delete_user(&id));
    assert_eq!(state.users.len(), count - 1);
    assert!(!state.delete_user(&id));
}
