//! Public profile page at `/:username`.
//!
//! Rendered anonymously; unknown or deactivated usernames get a friendly
//! not-found card instead of an error page. Click-throughs are counted here
//! and nowhere else.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;

use crate::components::profile_view::ProfileView;
use crate::net::types::{AppearanceSettings, Link, Profile};

/// Resolution of a public profile request, independent of the transport.
#[derive(Clone, Debug, PartialEq)]
enum PublicPage {
    Loading,
    NotFound,
    Ready {
        profile: Profile,
        appearance: AppearanceSettings,
        links: Vec<Link>,
    },
}

/// Map fetch results onto a page state. Missing rows degrade rather than
/// error: no appearance row means defaults, no link rows means an empty list,
/// but a missing or deactivated profile is a not-found page.
fn resolve_page(
    profile: Option<Profile>,
    appearance: Option<AppearanceSettings>,
    links: Option<Vec<Link>>,
) -> PublicPage {
    match profile {
        Some(profile) if profile.is_active => PublicPage::Ready {
            profile,
            appearance: appearance.unwrap_or_default(),
            links: links.unwrap_or_default(),
        },
        _ => PublicPage::NotFound,
    }
}

/// Document title for the public page. The SEO override wins when set,
/// otherwise the username is used.
fn page_title(profile: &Profile, appearance: &AppearanceSettings) -> String {
    match appearance.seo_title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => title.to_owned(),
        _ => format!("{} | Linkleaf", profile.username),
    }
}

/// Meta description for the public page: the SEO override, the bio as a
/// fallback, or nothing at all.
fn page_description(profile: &Profile, appearance: &AppearanceSettings) -> Option<String> {
    match appearance.seo_description.as_deref().map(str::trim) {
        Some(description) if !description.is_empty() => Some(description.to_owned()),
        _ => {
            let bio = profile.bio.trim();
            (!bio.is_empty()).then(|| bio.to_owned())
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let params = use_params_map();
    let page = RwSignal::new(PublicPage::Loading);

    Effect::new(move || {
        let Some(username) = params.with(|p| p.get("username")) else {
            page.set(PublicPage::NotFound);
            return;
        };
        page.set(PublicPage::Loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let profile = crate::net::api::fetch_profile_by_username(&username).await;
            let resolved = match profile {
                Some(profile) => {
                    let (links, appearance) = futures::join!(
                        crate::net::api::fetch_links(&profile.id, None),
                        crate::net::api::fetch_appearance(&profile.id, None),
                    );
                    resolve_page(Some(profile), appearance, links)
                }
                None => resolve_page(None, None, None),
            };
            page.set(resolved);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = username;
    });

    view! {
        <main class="public-page">
            {move || match page.get() {
                PublicPage::Loading => view! { <div class="public-page__loading"></div> }.into_any(),
                PublicPage::NotFound => view! {
                    <div class="public-page__missing">
                        <h1>"This page is not here."</h1>
                        <p>"The profile you are looking for does not exist or was taken down."</p>
                        <a class="btn btn--primary" href="/">
                            "Claim this name on Linkleaf"
                        </a>
                    </div>
                }
                .into_any(),
                PublicPage::Ready { profile, appearance, links } => {
                    let title = page_title(&profile, &appearance);
                    let description = page_description(&profile, &appearance);
                    view! {
                        <Title text=title/>
                        {description.map(|content| view! { <Meta name="description" content=content/> })}
                        <ProfileView
                            profile=profile
                            appearance=appearance
                            links=links
                            track_clicks=true
                        />
                    }
                    .into_any()
                }
            }}
        </main>
    }
}
