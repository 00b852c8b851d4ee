//! Appearance settings -> visual style descriptors.
//!
//! DESIGN
//! ======
//! One pure mapping shared by the dashboard's live preview and the public
//! profile page, so the two can never drift apart. Inputs are the tagged
//! enums on `AppearanceSettings`; outputs are plain style descriptors the
//! view layer turns into inline CSS.
//!
//! The one override rule: an explicit `font_color` forces the button palette
//! light or dark by that color's luminance, regardless of the theme preset.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::net::types::{AppearanceSettings, ButtonFill, ButtonShadow, ButtonShape, FontFamily, ThemePreset};
use crate::util::color::{is_light_color, normalize_hex_color};

/// Page-level styling for a rendered profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageStyle {
    /// CSS `background` value (gradient, flat color, or cover image).
    pub background: String,
    /// Hex text color for bio and headings.
    pub text_color: String,
    /// CSS `font-family` stack.
    pub font_stack: &'static str,
}

impl PageStyle {
    /// Inline `style` attribute for the page wrapper.
    #[must_use]
    pub fn style_attr(&self) -> String {
        format!(
            "background:{};color:{};font-family:{};",
            self.background, self.text_color, self.font_stack
        )
    }
}

/// Button-level styling composed from the three independent axes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonStyle {
    pub background: String,
    pub text_color: String,
    pub border: String,
    pub radius: &'static str,
    pub shadow: &'static str,
}

impl ButtonStyle {
    /// Inline `style` attribute for one link button.
    #[must_use]
    pub fn style_attr(&self) -> String {
        format!(
            "background:{};color:{};border:{};border-radius:{};box-shadow:{};",
            self.background, self.text_color, self.border, self.radius, self.shadow
        )
    }
}

/// Fixed palette carried by each theme preset.
struct PresetStyle {
    background: &'static str,
    text: &'static str,
    button_bg: &'static str,
    button_text: &'static str,
}

fn preset_style(preset: ThemePreset) -> PresetStyle {
    match preset {
        // Custom shares Midnight's colors; the uploaded image replaces the
        // gradient in `page_style` when present.
        ThemePreset::Midnight | ThemePreset::Custom => PresetStyle {
            background: "linear-gradient(160deg, #0f172a 0%, #1e293b 100%)",
            text: "#f8fafc",
            button_bg: "#f8fafc",
            button_text: "#0f172a",
        },
        ThemePreset::Daybreak => PresetStyle {
            background: "linear-gradient(160deg, #fefce8 0%, #fde68a 100%)",
            text: "#1c1917",
            button_bg: "#1c1917",
            button_text: "#fefce8",
        },
        ThemePreset::Forest => PresetStyle {
            background: "linear-gradient(160deg, #14532d 0%, #166534 100%)",
            text: "#f0fdf4",
            button_bg: "#f0fdf4",
            button_text: "#14532d",
        },
        ThemePreset::Ocean => PresetStyle {
            background: "linear-gradient(160deg, #0c4a6e 0%, #0369a1 100%)",
            text: "#f0f9ff",
            button_bg: "#f0f9ff",
            button_text: "#0c4a6e",
        },
        ThemePreset::Blush => PresetStyle {
            background: "linear-gradient(160deg, #fdf2f8 0%, #fbcfe8 100%)",
            text: "#500724",
            button_bg: "#500724",
            button_text: "#fdf2f8",
        },
        ThemePreset::Mono => PresetStyle {
            background: "#fafafa",
            text: "#171717",
            button_bg: "#171717",
            button_text: "#fafafa",
        },
    }
}

fn font_stack(family: FontFamily) -> &'static str {
    match family {
        FontFamily::Sans => "'Inter', 'Helvetica Neue', Arial, sans-serif",
        FontFamily::Serif => "'Georgia', 'Times New Roman', serif",
        FontFamily::Mono => "'JetBrains Mono', 'Courier New', monospace",
        FontFamily::Rounded => "'Nunito', 'Comic Sans MS', sans-serif",
    }
}

/// Compute page styling from appearance settings.
#[must_use]
pub fn page_style(settings: &AppearanceSettings) -> PageStyle {
    let preset = preset_style(settings.theme);
    let background = match (&settings.theme, &settings.background_url) {
        (ThemePreset::Custom, Some(url)) if !url.is_empty() => {
            format!("url('{url}') center / cover no-repeat fixed")
        }
        _ => preset.background.to_owned(),
    };
    let text_color = settings
        .font_color
        .as_deref()
        .map_or_else(|| preset.text.to_owned(), |c| normalize_hex_color(c, preset.text));
    PageStyle {
        background,
        text_color,
        font_stack: font_stack(settings.font_family),
    }
}

/// Button palette: background + label pair before the fill axis is applied.
struct Palette {
    bg: String,
    text: String,
}

fn button_palette(settings: &AppearanceSettings) -> Palette {
    match settings.font_color.as_deref() {
        // Explicit font color forces the palette: a light font color means a
        // dark button with light text, and the inverse for a dark font color.
        Some(color) if !color.is_empty() => {
            if is_light_color(color) {
                Palette {
                    bg: "#111827".to_owned(),
                    text: "#f9fafb".to_owned(),
                }
            } else {
                Palette {
                    bg: "#f9fafb".to_owned(),
                    text: "#111827".to_owned(),
                }
            }
        }
        _ => {
            let preset = preset_style(settings.theme);
            Palette {
                bg: preset.button_bg.to_owned(),
                text: preset.button_text.to_owned(),
            }
        }
    }
}

/// Compute button styling from appearance settings.
#[must_use]
pub fn button_style(settings: &AppearanceSettings) -> ButtonStyle {
    let palette = button_palette(settings);

    let (background, text_color, border) = match settings.button_fill {
        ButtonFill::Solid => (palette.bg.clone(), palette.text.clone(), "none".to_owned()),
        // Outline uses the palette's fill tone as the accent for both the
        // border and the label, over a transparent tile.
        ButtonFill::Outline => (
            "transparent".to_owned(),
            palette.bg.clone(),
            format!("1.5px solid {}", palette.bg),
        ),
        ButtonFill::Glass => {
            let translucent = if is_light_color(&palette.bg) {
                "rgba(255, 255, 255, 0.18)"
            } else {
                "rgba(17, 24, 39, 0.12)"
            };
            (translucent.to_owned(), palette.bg.clone(), "none".to_owned())
        }
    };

    ButtonStyle {
        background,
        text_color,
        border,
        radius: match settings.button_shape {
            ButtonShape::Square => "0",
            ButtonShape::Rounded => "14px",
            ButtonShape::Pill => "999px",
        },
        shadow: match settings.button_shadow {
            ButtonShadow::None => "none",
            ButtonShadow::Soft => "0 2px 10px rgba(0, 0, 0, 0.18)",
            ButtonShadow::Hard => "4px 4px 0 rgba(0, 0, 0, 0.85)",
        },
    }
}

// =============================================================================
// SOCIAL ICONS
// =============================================================================

/// Icon source for a link row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkIcon {
    /// A known platform, identified by icon slug.
    Brand(&'static str),
    /// Favicon-service URL for an unrecognized host.
    Favicon(String),
}

/// Domain substrings mapped to brand icon slugs. First match wins.
const BRAND_DOMAINS: &[(&str, &str)] = &[
    ("instagram.com", "instagram"),
    ("twitter.com", "twitter"),
    ("x.com", "twitter"),
    ("github.com", "github"),
    ("youtube.com", "youtube"),
    ("youtu.be", "youtube"),
    ("tiktok.com", "tiktok"),
    ("linkedin.com", "linkedin"),
    ("facebook.com", "facebook"),
    ("twitch.tv", "twitch"),
    ("spotify.com", "spotify"),
    ("discord.gg", "discord"),
    ("discord.com", "discord"),
];

/// Pick an icon for a link URL: brand match by domain substring, then a
/// favicon-service fallback, then none for unparseable URLs.
#[must_use]
pub fn link_icon(url: &str) -> Option<LinkIcon> {
    let host = host_of(url)?;
    for (domain, slug) in BRAND_DOMAINS {
        if host == *domain || host.ends_with(&format!(".{domain}")) {
            return Some(LinkIcon::Brand(slug));
        }
    }
    Some(LinkIcon::Favicon(format!(
        "https://icons.duckduckgo.com/ip3/{host}.ico"
    )))
}

/// Extract the lowercased host from an already-normalized web URL.
fn host_of(url: &str) -> Option<String> {
    let rest = url.strip_prefix("https://").or_else(|| url.strip_prefix("http://"))?;
    let host = rest.split(['/', '?', '#']).next()?;
    let host = host.split(':').next()?;
    if host.is_empty() || !host.contains('.') {
        return None;
    }
    Some(host.to_ascii_lowercase())
}
