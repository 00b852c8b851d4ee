//! Authenticated dashboard: editor tabs on the left, live preview on the right.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mount kicks off the profile, links, and appearance fetches together. A
//! missing or deactivated profile is fatal: the session is revoked and the
//! user lands back on the login page. The preview pane renders the same
//! component as the public page, fed from editor state, so what you see is
//! what visitors get.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::appearance_panel::AppearancePanel;
use crate::components::links_panel::LinksPanel;
use crate::components::navbar::Navbar;
use crate::components::profile_view::ProfileView;
use crate::components::settings_panel::SettingsPanel;
use crate::state::appearance::AppearanceState;
use crate::state::auth::AuthState;
use crate::state::links::LinksState;
use crate::state::ui::{DashboardTab, UiState};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let links = expect_context::<RwSignal<LinksState>>();
    let appearance = expect_context::<RwSignal<AppearanceState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(auth, navigate.clone());

    // Load everything for the signed-in user as soon as a session is present.
    Effect::new(move || {
        let Some(session) = auth.get().session else {
            return;
        };
        if auth.with_untracked(|a| a.profile.is_some()) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let user_id = session.user_id.clone();
            links.update(|s| s.loading = true);
            leptos::task::spawn_local(async move {
                let (profile, fetched_links, settings) = futures::join!(
                    crate::net::api::fetch_profile(&session),
                    crate::net::api::fetch_links(&user_id, Some(&session)),
                    crate::net::api::fetch_appearance(&user_id, Some(&session)),
                );

                if let Some(profile) = profile {
                    auth.update(|a| a.profile_loaded(profile));
                }
                if auth.with_untracked(crate::state::auth::AuthState::profile_is_fatal) {
                    crate::net::api::sign_out(&session).await;
                    auth.update(crate::state::auth::AuthState::signed_out);
                    navigate("/login", Default::default());
                    return;
                }

                links.update(|s| match fetched_links {
                    Some(items) => s.set_all(items),
                    None => {
                        s.loading = false;
                        s.error = Some("Could not load your links.".to_owned());
                    }
                });
                let mut settings = settings.unwrap_or_default();
                if settings.user_id.is_empty() {
                    settings.user_id = user_id;
                }
                appearance.update(|s| s.set_loaded(settings));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, session, links, appearance);
    });

    let tab = move || ui.with(|u| u.tab);
    let set_tab = move |next: DashboardTab| ui.update(|u| u.tab = next);

    let preview_profile = move || auth.get().profile;
    let preview = move || {
        preview_profile().map(|profile| {
            let settings = appearance.with(|s| s.settings.clone());
            let items = links.with(|s| s.items.clone());
            view! { <ProfileView profile=profile appearance=settings links=items /> }
        })
    };

    view! {
        <Navbar />
        <main class="dashboard">
            <div class="dashboard__editor">
                <nav class="dashboard__tabs">
                    <button
                        class="tab"
                        class=("tab--active", move || tab() == DashboardTab::Links)
                        on:click=move |_| set_tab(DashboardTab::Links)
                    >
                        "Links"
                    </button>
                    <button
                        class="tab"
                        class=("tab--active", move || tab() == DashboardTab::Appearance)
                        on:click=move |_| set_tab(DashboardTab::Appearance)
                    >
                        "Appearance"
                    </button>
                    <button
                        class="tab"
                        class=("tab--active", move || tab() == DashboardTab::Settings)
                        on:click=move |_| set_tab(DashboardTab::Settings)
                    >
                        "Settings"
                    </button>
                </nav>

                {move || match tab() {
                    DashboardTab::Links => view! { <LinksPanel /> }.into_any(),
                    DashboardTab::Appearance => view! { <AppearancePanel /> }.into_any(),
                    DashboardTab::Settings => view! { <SettingsPanel /> }.into_any(),
                }}
            </div>

            <aside class="dashboard__preview">
                <div class="dashboard__preview-frame">{preview}</div>
            </aside>
        </main>
    }
}
