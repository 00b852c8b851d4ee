use super::*;

#[test]
fn schema_revealing_messages_become_generic() {
    assert_eq!(
        sanitize_message("insert violates foreign key constraint \"links_user_id_fkey\""),
        GENERIC_ERROR
    );
    assert_eq!(sanitize_message("relation \"appearance_settings\" does not exist"), GENERIC_ERROR);
    assert_eq!(
        sanitize_message("duplicate key value violates unique constraint"),
        GENERIC_ERROR
    );
    assert_eq!(sanitize_message("column profiles.plan_tier not found"), GENERIC_ERROR);
    assert_eq!(sanitize_message("JWT expired"), GENERIC_ERROR);
}

#[test]
fn auth_phrases_get_friendly_copy() {
    assert_eq!(sanitize_message("Invalid login credentials"), "Incorrect email or password.");
    assert_eq!(
        sanitize_message("400: Email not confirmed"),
        "Please confirm your email address first."
    );
    assert_eq!(
        sanitize_message("User already registered"),
        "An account with this email already exists."
    );
    assert_eq!(
        sanitize_message("Password should be at least 6 characters"),
        "That password is too short."
    );
}

#[test]
fn auth_phrase_wins_over_revealing_keyword() {
    // "jwt" is revealing, but the auth phrase takes precedence.
    assert_eq!(
        sanitize_message("invalid login credentials (jwt check failed)"),
        "Incorrect email or password."
    );
}

#[test]
fn benign_messages_pass_through_trimmed() {
    assert_eq!(sanitize_message("  Network request failed  "), "Network request failed");
    assert_eq!(sanitize_message("Profile not found"), "Profile not found");
}

#[test]
fn empty_messages_become_generic() {
    assert_eq!(sanitize_message(""), GENERIC_ERROR);
    assert_eq!(sanitize_message("   "), GENERIC_ERROR);
}
