use super::*;
use crate::net::types::{AppearanceSettings, ButtonFill, ButtonShadow, ButtonShape, FontFamily, ThemePreset};
use crate::util::color::is_light_color;

fn settings_with(theme: ThemePreset) -> AppearanceSettings {
    AppearanceSettings {
        user_id: "u1".to_owned(),
        theme,
        ..AppearanceSettings::default()
    }
}

// =============================================================
// page_style
// =============================================================

#[test]
fn each_preset_has_distinct_background() {
    let presets = [
        ThemePreset::Midnight,
        ThemePreset::Daybreak,
        ThemePreset::Forest,
        ThemePreset::Ocean,
        ThemePreset::Blush,
        ThemePreset::Mono,
    ];
    let backgrounds: Vec<String> = presets
        .iter()
        .map(|&p| page_style(&settings_with(p)).background)
        .collect();
    for (i, a) in backgrounds.iter().enumerate() {
        for b in &backgrounds[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn custom_theme_uses_uploaded_background_image() {
    let mut settings = settings_with(ThemePreset::Custom);
    settings.background_url = Some("https://cdn.example.com/bg.jpg".to_owned());
    let style = page_style(&settings);
    assert_eq!(
        style.background,
        "url('https://cdn.example.com/bg.jpg') center / cover no-repeat fixed"
    );
}

#[test]
fn custom_theme_without_image_falls_back_to_midnight_colors() {
    let style = page_style(&settings_with(ThemePreset::Custom));
    assert_eq!(style.background, page_style(&settings_with(ThemePreset::Midnight)).background);
}

#[test]
fn font_color_override_wins_over_preset_text() {
    let mut settings = settings_with(ThemePreset::Midnight);
    settings.font_color = Some("#FFD700".to_owned());
    assert_eq!(page_style(&settings).text_color, "#ffd700");
}

#[test]
fn invalid_font_color_falls_back_to_preset_text() {
    let mut settings = settings_with(ThemePreset::Mono);
    settings.font_color = Some("gold".to_owned());
    assert_eq!(page_style(&settings).text_color, "#171717");
}

#[test]
fn font_family_changes_the_stack() {
    let mut settings = settings_with(ThemePreset::Mono);
    settings.font_family = FontFamily::Mono;
    assert!(page_style(&settings).font_stack.contains("monospace"));
}

// =============================================================
// button_style — override rule (the binding contract)
// =============================================================

#[test]
fn light_font_color_forces_dark_solid_buttons_on_every_preset() {
    for preset in [
        ThemePreset::Midnight,
        ThemePreset::Daybreak,
        ThemePreset::Forest,
        ThemePreset::Ocean,
        ThemePreset::Blush,
        ThemePreset::Mono,
        ThemePreset::Custom,
    ] {
        let mut settings = settings_with(preset);
        settings.font_color = Some("#ffffff".to_owned());
        settings.button_fill = ButtonFill::Solid;
        let style = button_style(&settings);
        assert!(!is_light_color(&style.background), "preset {preset:?}: background must be dark");
        assert!(is_light_color(&style.text_color), "preset {preset:?}: text must be light");
    }
}

#[test]
fn dark_font_color_forces_light_solid_buttons_on_every_preset() {
    for preset in [ThemePreset::Midnight, ThemePreset::Daybreak, ThemePreset::Mono] {
        let mut settings = settings_with(preset);
        settings.font_color = Some("#000000".to_owned());
        settings.button_fill = ButtonFill::Solid;
        let style = button_style(&settings);
        assert!(is_light_color(&style.background), "preset {preset:?}: background must be light");
        assert!(!is_light_color(&style.text_color), "preset {preset:?}: text must be dark");
    }
}

#[test]
fn without_override_the_preset_palette_applies() {
    let style = button_style(&settings_with(ThemePreset::Midnight));
    assert_eq!(style.background, "#f8fafc");
    assert_eq!(style.text_color, "#0f172a");
}

// =============================================================
// button_style — independent axes
// =============================================================

#[test]
fn shape_axis_sets_radius_only() {
    let mut settings = settings_with(ThemePreset::Mono);
    settings.button_shape = ButtonShape::Square;
    assert_eq!(button_style(&settings).radius, "0");
    settings.button_shape = ButtonShape::Pill;
    assert_eq!(button_style(&settings).radius, "999px");
}

#[test]
fn outline_fill_is_transparent_with_accent_border() {
    let mut settings = settings_with(ThemePreset::Midnight);
    settings.button_fill = ButtonFill::Outline;
    let style = button_style(&settings);
    assert_eq!(style.background, "transparent");
    assert_eq!(style.border, "1.5px solid #f8fafc");
}

#[test]
fn shadow_axis_is_independent_of_fill() {
    let mut settings = settings_with(ThemePreset::Mono);
    settings.button_shadow = ButtonShadow::Hard;
    settings.button_fill = ButtonFill::Glass;
    let style = button_style(&settings);
    assert_eq!(style.shadow, "4px 4px 0 rgba(0, 0, 0, 0.85)");
    assert!(style.background.starts_with("rgba("));
}

#[test]
fn style_attr_emits_inline_css() {
    let attr = button_style(&settings_with(ThemePreset::Mono)).style_attr();
    assert!(attr.contains("background:#171717;"));
    assert!(attr.contains("border-radius:14px;"));
}

// =============================================================
// link_icon
// =============================================================

#[test]
fn known_domains_map_to_brand_slugs() {
    assert_eq!(link_icon("https://github.com/someone"), Some(LinkIcon::Brand("github")));
    assert_eq!(link_icon("https://www.instagram.com/someone/"), Some(LinkIcon::Brand("instagram")));
    assert_eq!(link_icon("https://x.com/someone"), Some(LinkIcon::Brand("twitter")));
    assert_eq!(link_icon("https://youtu.be/abc123"), Some(LinkIcon::Brand("youtube")));
}

#[test]
fn unknown_hosts_fall_back_to_favicon_service() {
    assert_eq!(
        link_icon("https://blog.example.com/post"),
        Some(LinkIcon::Favicon(
            "https://icons.duckduckgo.com/ip3/blog.example.com.ico".to_owned()
        ))
    );
}

#[test]
fn lookalike_hosts_do_not_match_brands() {
    // Substring alone must not be enough; only the domain or a subdomain of it.
    assert_eq!(
        link_icon("https://github.com.evil.example/phish"),
        Some(LinkIcon::Favicon(
            "https://icons.duckduckgo.com/ip3/github.com.evil.example.ico".to_owned()
        ))
    );
}

#[test]
fn unparseable_urls_get_no_icon() {
    assert_eq!(link_icon("not a url"), None);
    assert_eq!(link_icon("https://"), None);
}
