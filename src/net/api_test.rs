use super::*;

#[test]
fn profile_queries_filter_by_id_and_username() {
    assert_eq!(profiles_by_id_query("u1"), "/rest/v1/profiles?id=eq.u1&select=*");
    assert_eq!(
        profiles_by_username_query("sam"),
        "/rest/v1/profiles?username=eq.sam&select=*"
    );
}

#[test]
fn links_query_orders_by_position() {
    assert_eq!(links_query("u1"), "/rest/v1/links?user_id=eq.u1&select=*&order=position.asc");
}

#[test]
fn link_by_id_query_targets_one_row() {
    assert_eq!(link_by_id_query("l9"), "/rest/v1/links?id=eq.l9");
}

#[test]
fn appearance_query_filters_by_owner() {
    assert_eq!(
        appearance_query("u1"),
        "/rest/v1/appearance_settings?user_id=eq.u1&select=*"
    );
}

#[test]
fn site_settings_query_is_single_row() {
    assert_eq!(site_settings_query(), "/rest/v1/site_settings?select=*&limit=1");
}

#[test]
fn storage_paths_nest_objects_under_owner() {
    assert_eq!(
        storage_object_path("avatars", "u1", "abc-pic.png"),
        "/storage/v1/object/avatars/u1/abc-pic.png"
    );
    let url = public_object_url("avatars", "u1", "abc-pic.png");
    assert!(url.ends_with("/storage/v1/object/public/avatars/u1/abc-pic.png"));
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("link update", 409), "link update failed: 409");
}
