use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#FA3"), Some((255, 170, 51)));
    assert_eq!(parse_hex_rgb("  #1a2B3c "), Some((26, 43, 60)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("1a2b3c"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#1234"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
}

#[test]
fn normalize_hex_color_uses_canonical_lowercase() {
    assert_eq!(normalize_hex_color("#FA3", "#000000"), "#ffaa33");
    assert_eq!(normalize_hex_color("#A1B2C3", "#000000"), "#a1b2c3");
}

#[test]
fn normalize_hex_color_falls_back_to_input_fallback_or_default() {
    assert_eq!(normalize_hex_color("teal", "#ff0000"), "#ff0000");
    assert_eq!(normalize_hex_color("teal", "invalid"), "#111111");
}

#[test]
fn relative_luminance_bounds() {
    assert!(relative_luminance(0, 0, 0) < 1e-9);
    assert!((relative_luminance(255, 255, 255) - 1.0).abs() < 1e-9);
}

#[test]
fn is_light_color_classifies_extremes() {
    assert!(is_light_color("#ffffff"));
    assert!(is_light_color("#ffe066"));
    assert!(!is_light_color("#000000"));
    assert!(!is_light_color("#112233"));
}

#[test]
fn is_light_color_treats_garbage_as_dark() {
    assert!(!is_light_color("cornflower"));
    assert!(!is_light_color(""));
}
