use super::*;

#[test]
fn api_url_is_nonempty_without_trailing_slash() {
    let url = api_url();
    assert!(!url.is_empty());
    assert!(!url.ends_with('/'));
}

#[test]
fn anon_key_is_nonempty() {
    assert!(!anon_key().is_empty());
}
