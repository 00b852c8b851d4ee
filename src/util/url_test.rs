use super::*;

// =============================================================
// validate_url — acceptance and normalization
// =============================================================

#[test]
fn bare_domain_gets_https_scheme_and_trailing_slash() {
    assert_eq!(validate_url("example.com"), Some("https://example.com/".to_owned()));
}

#[test]
fn explicit_https_host_gets_trailing_slash() {
    assert_eq!(validate_url("https://a.co"), Some("https://a.co/".to_owned()));
}

#[test]
fn scheme_and_host_are_lowercased() {
    assert_eq!(
        validate_url("HTTPS://Example.COM/Path?Q=1"),
        Some("https://example.com/Path?Q=1".to_owned())
    );
}

#[test]
fn path_query_and_fragment_are_preserved() {
    assert_eq!(
        validate_url("example.com/a/b?x=1#top"),
        Some("https://example.com/a/b?x=1#top".to_owned())
    );
    // Query with no path still gets the root path inserted.
    assert_eq!(
        validate_url("https://example.com?x=1"),
        Some("https://example.com/?x=1".to_owned())
    );
}

#[test]
fn host_with_port_is_accepted() {
    assert_eq!(
        validate_url("example.com:8080/admin"),
        Some("https://example.com:8080/admin".to_owned())
    );
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(validate_url("  example.com  "), Some("https://example.com/".to_owned()));
}

// =============================================================
// validate_url — rejection
// =============================================================

#[test]
fn javascript_scheme_is_rejected() {
    assert_eq!(validate_url("javascript:alert(1)"), None);
}

#[test]
fn other_non_web_schemes_are_rejected() {
    assert_eq!(validate_url("data:text/html,hi"), None);
    assert_eq!(validate_url("file:///etc/passwd"), None);
    assert_eq!(validate_url("mailto:me@example.com"), None);
    assert_eq!(validate_url("ftp://example.com"), None);
}

#[test]
fn empty_and_dotless_hosts_are_rejected() {
    assert_eq!(validate_url(""), None);
    assert_eq!(validate_url("   "), None);
    assert_eq!(validate_url("localhost"), None);
    assert_eq!(validate_url("https://"), None);
    assert_eq!(validate_url("https://nodots"), None);
}

#[test]
fn malformed_hosts_are_rejected() {
    assert_eq!(validate_url(".example.com"), None);
    assert_eq!(validate_url("example.com."), None);
    assert_eq!(validate_url("exa mple.com"), None);
    assert_eq!(validate_url("example..com"), None);
    assert_eq!(validate_url("example.com:ninety"), None);
}
