//! Link URL validation and normalization.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every destination URL a user types passes through here before it is saved
//! or rendered as a navigation target. The public profile page silently skips
//! links whose stored URL no longer validates.
//!
//! Rules: only `http`/`https` destinations are accepted; scheme-less input is
//! treated as an `https` host; scheme and host are lowercased; an empty path
//! becomes `/`.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

/// Validate and normalize a user-supplied URL.
///
/// Returns the canonical form (`https://example.com/`) or `None` when the
/// input is not a safe web destination.
pub fn validate_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (scheme, rest) = match split_scheme(trimmed) {
        Some((scheme, rest)) => {
            let scheme = scheme.to_ascii_lowercase();
            if scheme != "http" && scheme != "https" {
                return None;
            }
            (scheme, rest)
        }
        // Bare host like `example.com` gets an https scheme.
        None => ("https".to_owned(), trimmed),
    };

    let (host, tail) = match rest.find(['/', '?', '#']) {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, ""),
    };
    if !is_valid_host(host) {
        return None;
    }

    let host = host.to_ascii_lowercase();
    let tail = if tail.is_empty() || tail.starts_with(['?', '#']) {
        format!("/{tail}")
    } else {
        tail.to_owned()
    };
    Some(format!("{scheme}://{host}{tail}"))
}

/// Split `scheme://rest` or detect a scheme-only prefix like `javascript:`.
///
/// Returns `None` when the input carries no scheme at all. A scheme with a
/// single colon but no `//` (e.g. `javascript:alert(1)`) is returned as-is so
/// the caller can reject it by name.
fn split_scheme(input: &str) -> Option<(&str, &str)> {
    let colon = input.find(':')?;
    let scheme = &input[..colon];
    if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic() || c == '+' || c == '-') {
        // A dotted prefix before the colon is a bare `host:port`, not a scheme.
        return None;
    }
    let rest = &input[colon + 1..];
    Some((scheme, rest.strip_prefix("//").unwrap_or(rest)))
}

/// Hostname sanity check: dotted label form with an optional port.
fn is_valid_host(host: &str) -> bool {
    let (name, port) = match host.rsplit_once(':') {
        Some((name, port)) => (name, Some(port)),
        None => (host, None),
    };
    if let Some(port) = port {
        if port.is_empty() || !port.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
    }
    if name.is_empty() || !name.contains('.') || name.starts_with('.') || name.ends_with('.') {
        return false;
    }
    name.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && name.split('.').all(|label| !label.is_empty())
}
