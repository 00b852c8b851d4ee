//! Hex color parsing and luminance helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The appearance editor stores colors as hex strings; the theme renderer
//! classifies an override color as light or dark to pick a readable button
//! palette.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('#') {
        return None;
    }
    let hex = &trimmed[1..];
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Normalize a color to canonical lowercase `#rrggbb`.
pub fn normalize_hex_color(value: &str, fallback: &str) -> String {
    let fallback_rgb = parse_hex_rgb(fallback).unwrap_or((17, 17, 17));
    let (r, g, b) = parse_hex_rgb(value).unwrap_or(fallback_rgb);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Relative luminance in `[0, 1]` using the ITU-R BT.709 coefficients.
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    (0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)) / 255.0
}

/// Whether a hex color reads as light (luminance above 0.5).
///
/// Unparseable values are treated as dark so the renderer falls back to a
/// light-on-dark palette, which stays legible on every theme preset.
pub fn is_light_color(hex: &str) -> bool {
    parse_hex_rgb(hex).map_or(false, |(r, g, b)| relative_luminance(r, g, b) > 0.5)
}
