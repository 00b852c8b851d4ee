use super::*;

// =============================================================
// Wire tolerance
// =============================================================

#[test]
fn profile_fills_missing_optional_columns() {
    let raw = r#"{"id":"u1","username":"sam","avatar_url":null,"cover_url":null,"created_at":null}"#;
    let profile: Profile = serde_json::from_str(raw).expect("deserialize");
    assert_eq!(profile.bio, "");
    assert_eq!(profile.plan, "free");
    assert!(profile.is_active);
    assert!(!profile.is_admin);
}

#[test]
fn link_defaults_active_with_zero_clicks() {
    let raw = r#"{"id":"l1","user_id":"u1","title":"Blog","url":"https://example.com/","position":0,"thumbnail_url":null}"#;
    let link: Link = serde_json::from_str(raw).expect("deserialize");
    assert!(link.is_active);
    assert_eq!(link.clicks, 0);
}

#[test]
fn appearance_row_with_only_owner_defaults_every_axis() {
    let raw = r#"{"user_id":"u1","font_color":null,"background_url":null,"seo_title":null,"seo_description":null}"#;
    let settings: AppearanceSettings = serde_json::from_str(raw).expect("deserialize");
    assert_eq!(settings.theme, ThemePreset::Midnight);
    assert_eq!(settings.button_shape, ButtonShape::Rounded);
    assert_eq!(settings.button_fill, ButtonFill::Solid);
    assert_eq!(settings.button_shadow, ButtonShadow::None);
    assert_eq!(settings.font_family, FontFamily::Sans);
    assert!(!settings.hide_branding);
}

// =============================================================
// Enum wire encoding
// =============================================================

#[test]
fn appearance_enums_encode_snake_case() {
    assert_eq!(serde_json::to_string(&ThemePreset::Daybreak).expect("serialize"), r#""daybreak""#);
    assert_eq!(serde_json::to_string(&ButtonShape::Pill).expect("serialize"), r#""pill""#);
    assert_eq!(serde_json::to_string(&ButtonFill::Glass).expect("serialize"), r#""glass""#);
    assert_eq!(serde_json::to_string(&ButtonShadow::Soft).expect("serialize"), r#""soft""#);
    assert_eq!(serde_json::to_string(&FontFamily::Rounded).expect("serialize"), r#""rounded""#);
}

#[test]
fn unknown_theme_value_is_an_error_not_a_panic() {
    let raw = r#""vaporwave""#;
    assert!(serde_json::from_str::<ThemePreset>(raw).is_err());
}

#[test]
fn site_settings_default_is_open_and_not_in_maintenance() {
    let settings = SiteSettings::default();
    assert!(!settings.maintenance_mode);
    assert!(settings.registration_open);
}
