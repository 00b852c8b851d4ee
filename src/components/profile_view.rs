//! Themed profile renderer shared by the editor preview and the public page.
//!
//! DESIGN
//! ======
//! Both surfaces call this one component with the same inputs, so preview and
//! published page cannot drift. Inactive links and links whose stored URL no
//! longer validates are silently omitted rather than surfaced as errors.

use leptos::prelude::*;

use crate::net::types::{AppearanceSettings, Link, Profile};
use crate::theme::{self, LinkIcon};
use crate::util::url::validate_url;

#[component]
pub fn ProfileView(
    profile: Profile,
    appearance: AppearanceSettings,
    links: Vec<Link>,
    /// Count click-throughs (public page only; the preview never counts).
    #[prop(default = false)]
    track_clicks: bool,
) -> impl IntoView {
    let page = theme::page_style(&appearance);
    let button = theme::button_style(&appearance);
    let hide_branding = appearance.hide_branding;

    let username = profile.username;
    let bio = profile.bio;
    let avatar_url = profile.avatar_url.unwrap_or_default();
    let cover_url = profile.cover_url.unwrap_or_default();
    let avatar_alt = format!("@{username}");
    let has_avatar = !avatar_url.is_empty();
    let has_cover = !cover_url.is_empty();
    let has_bio = !bio.is_empty();

    let rendered_links: Vec<_> = links
        .into_iter()
        .filter(|link| link.is_active)
        .filter_map(|link| validate_url(&link.url).map(|url| (link, url)))
        .collect();

    view! {
        <div class="profile-page" style=page.style_attr()>
            <Show when=move || has_cover>
                <img class="profile-page__cover" src=cover_url.clone() alt="" />
            </Show>
            <Show when=move || has_avatar>
                <img class="profile-page__avatar" src=avatar_url.clone() alt=avatar_alt.clone() />
            </Show>
            <h1 class="profile-page__username">"@" {username.clone()}</h1>
            <Show when=move || has_bio>
                <p class="profile-page__bio">{bio.clone()}</p>
            </Show>

            <div class="profile-page__links">
                {rendered_links
                    .into_iter()
                    .map(|(link, url)| {
                        let link_id = link.id;
                        let icon = theme::link_icon(&url);
                        view! {
                            <a
                                class="profile-link"
                                style=button.style_attr()
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                on:click=move |_| {
                                    if track_clicks {
                                        let link_id = link_id.clone();
                                        #[cfg(feature = "hydrate")]
                                        leptos::task::spawn_local(async move {
                                            crate::net::api::increment_link_clicks(&link_id).await;
                                        });
                                        #[cfg(not(feature = "hydrate"))]
                                        let _ = link_id;
                                    }
                                }
                            >
                                {match icon {
                                    Some(LinkIcon::Brand(slug)) => view! {
                                        <span class=format!("profile-link__icon icon-{slug}")></span>
                                    }
                                    .into_any(),
                                    Some(LinkIcon::Favicon(src)) => view! {
                                        <img class="profile-link__icon" src=src alt="" />
                                    }
                                    .into_any(),
                                    None => view! { <span class="profile-link__icon"></span> }.into_any(),
                                }}
                                <span class="profile-link__title">{link.title}</span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show when=move || !hide_branding>
                <a class="profile-page__branding" href="/">
                    "made with Linkleaf"
                </a>
            </Show>
        </div>
    }
}
