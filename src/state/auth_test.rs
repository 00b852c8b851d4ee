use super::*;

fn session() -> Session {
    Session {
        access_token: "tok".to_owned(),
        refresh_token: String::new(),
        user_id: "u1".to_owned(),
        email: "a@example.com".to_owned(),
    }
}

fn profile(active: bool, admin: bool) -> Profile {
    Profile {
        id: "u1".to_owned(),
        username: "sam".to_owned(),
        bio: String::new(),
        avatar_url: None,
        cover_url: None,
        plan: "free".to_owned(),
        is_active: active,
        is_admin: admin,
        created_at: None,
    }
}

#[test]
fn default_has_no_session() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(state.profile.is_none());
    assert!(!state.loading);
}

#[test]
fn signed_in_resets_profile() {
    let mut state = AuthState::default();
    state.profile_loaded(profile(true, false));
    state.signed_in(session());
    assert!(state.session.is_some());
    assert!(state.profile.is_none());
}

#[test]
fn signed_out_clears_everything() {
    let mut state = AuthState::default();
    state.signed_in(session());
    state.profile_loaded(profile(true, false));
    state.signed_out();
    assert!(state.session.is_none());
    assert!(state.profile.is_none());
}

#[test]
fn inactive_profile_is_fatal() {
    let mut state = AuthState::default();
    state.signed_in(session());
    state.profile_loaded(profile(false, false));
    assert!(state.profile_is_fatal());
}

#[test]
fn missing_profile_with_session_is_fatal() {
    let mut state = AuthState::default();
    state.signed_in(session());
    assert!(state.profile_is_fatal());
}

#[test]
fn active_profile_is_not_fatal() {
    let mut state = AuthState::default();
    state.signed_in(session());
    state.profile_loaded(profile(true, false));
    assert!(!state.profile_is_fatal());
}

#[test]
fn no_session_is_never_fatal() {
    let state = AuthState::default();
    assert!(!state.profile_is_fatal());
}

#[test]
fn is_admin_requires_admin_profile() {
    let mut state = AuthState::default();
    state.signed_in(session());
    assert!(!state.is_admin());
    state.profile_loaded(profile(true, true));
    assert!(state.is_admin());
}
