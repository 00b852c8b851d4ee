use super::{PublicPage, page_description, page_title, resolve_page};
use crate::net::types::{AppearanceSettings, Link, Profile, ThemePreset};

fn profile(active: bool) -> Profile {
    Profile {
        id: "user-1".to_owned(),
        username: "ada".to_owned(),
        bio: String::new(),
        avatar_url: None,
        cover_url: None,
        plan: "free".to_owned(),
        is_active: active,
        is_admin: false,
        created_at: None,
    }
}

fn link(id: &str) -> Link {
    Link {
        id: id.to_owned(),
        user_id: "user-1".to_owned(),
        title: "Example".to_owned(),
        url: "https://example.com/".to_owned(),
        is_active: true,
        position: 0,
        clicks: 0,
        thumbnail_url: None,
    }
}

#[test]
fn unknown_username_is_not_found() {
    assert_eq!(resolve_page(None, None, None), PublicPage::NotFound);
}

#[test]
fn deactivated_profile_is_not_found() {
    let page = resolve_page(Some(profile(false)), None, Some(vec![link("l1")]));
    assert_eq!(page, PublicPage::NotFound);
}

#[test]
fn missing_rows_degrade_to_defaults() {
    let page = resolve_page(Some(profile(true)), None, None);
    match page {
        PublicPage::Ready { appearance, links, .. } => {
            assert_eq!(appearance.theme, ThemePreset::Midnight);
            assert!(links.is_empty());
        }
        other => panic!("expected ready page, got {other:?}"),
    }
}

#[test]
fn seo_title_override_wins_over_username() {
    let settings = AppearanceSettings {
        seo_title: Some("Ada's corner".to_owned()),
        ..AppearanceSettings::default()
    };
    assert_eq!(page_title(&profile(true), &settings), "Ada's corner");
}

#[test]
fn blank_seo_title_falls_back_to_username() {
    let settings = AppearanceSettings {
        seo_title: Some("   ".to_owned()),
        ..AppearanceSettings::default()
    };
    assert_eq!(page_title(&profile(true), &settings), "ada | Linkleaf");
    assert_eq!(
        page_title(&profile(true), &AppearanceSettings::default()),
        "ada | Linkleaf"
    );
}

#[test]
fn seo_description_falls_back_to_bio_then_nothing() {
    let settings = AppearanceSettings {
        seo_description: Some("Links and writing.".to_owned()),
        ..AppearanceSettings::default()
    };
    assert_eq!(
        page_description(&profile(true), &settings),
        Some("Links and writing.".to_owned())
    );

    let mut with_bio = profile(true);
    with_bio.bio = "Engineer and gardener.".to_owned();
    assert_eq!(
        page_description(&with_bio, &AppearanceSettings::default()),
        Some("Engineer and gardener.".to_owned())
    );

    assert_eq!(page_description(&profile(true), &AppearanceSettings::default()), None);
}

#[test]
fn full_rows_pass_through() {
    let settings = AppearanceSettings {
        theme: ThemePreset::Ocean,
        ..AppearanceSettings::default()
    };
    let page = resolve_page(Some(profile(true)), Some(settings), Some(vec![link("l1"), link("l2")]));
    match page {
        PublicPage::Ready { profile, appearance, links } => {
            assert_eq!(profile.username, "ada");
            assert_eq!(appearance.theme, ThemePreset::Ocean);
            assert_eq!(links.len(), 2);
        }
        other => panic!("expected ready page, got {other:?}"),
    }
}
