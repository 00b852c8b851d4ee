//! Admin system panel: site-wide toggles plus placeholder operator tools.
//!
//! The maintenance and registration toggles persist to the site-settings row.
//! Analytics, reports, and bug-tracker sections render canned data and say so;
//! the export buttons only raise an alert.

use leptos::prelude::*;

use crate::net::error::sanitize_message;
use crate::state::admin::AdminState;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn AdminSystemPanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let admin = expect_context::<RwSignal<AdminState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Persist the toggles as they stand; revert both on failure.
    let persist_site = move || {
        #[cfg(feature = "hydrate")]
        {
            let Some(session) = auth.get_untracked().session else {
                return;
            };
            let settings = admin.with_untracked(|a| a.site);
            let previous = settings;
            admin.update(|a| a.site_saving = true);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::update_site_settings(&session, &settings).await;
                admin.update(|a| a.site_saving = false);
                if let Err(e) = result {
                    admin.update(|a| a.site = previous);
                    ui.update(|u| {
                        u.toast_error(sanitize_message(&e));
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (auth, ui);
    };

    let stub_export = move |what: &'static str| {
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!("{what} export is not available yet."));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = what;
    };

    view! {
        <section class="admin-system">
            <h3>"Site"</h3>
            <label class="admin-system__toggle">
                <input
                    type="checkbox"
                    prop:checked=move || admin.with(|a| a.site.maintenance_mode)
                    disabled=move || admin.with(|a| a.site_saving)
                    on:change=move |_| {
                        admin.update(|a| a.site.maintenance_mode = !a.site.maintenance_mode);
                        persist_site();
                    }
                />
                "Maintenance mode"
            </label>
            <label class="admin-system__toggle">
                <input
                    type="checkbox"
                    prop:checked=move || admin.with(|a| a.site.registration_open)
                    disabled=move || admin.with(|a| a.site_saving)
                    on:change=move |_| {
                        admin.update(|a| a.site.registration_open = !a.site.registration_open);
                        persist_site();
                    }
                />
                "Registration open"
            </label>

            <h3>"Analytics " <span class="admin-system__badge">"sample data"</span></h3>
            <div class="admin-system__stats">
                <div class="stat"><strong>"12,408"</strong> " profile views (30d)"</div>
                <div class="stat"><strong>"3,911"</strong> " link clicks (30d)"</div>
                <div class="stat"><strong>"287"</strong> " signups (30d)"</div>
            </div>
            <button class="btn btn--small" on:click=move |_| stub_export("Analytics")>
                "Export CSV"
            </button>

            <h3>"Reports " <span class="admin-system__badge">"sample data"</span></h3>
            <ul class="admin-system__list">
                <li>"Spam profile reported: /spamlinks4u (2 reports)"</li>
                <li>"Impersonation reported: /notarealceleb (1 report)"</li>
            </ul>
            <button class="btn btn--small" on:click=move |_| stub_export("Reports")>
                "Export CSV"
            </button>

            <h3>"Bug tracker " <span class="admin-system__badge">"sample data"</span></h3>
            <ul class="admin-system__list">
                <li>"Avatar upload fails on Safari 16 (open)"</li>
                <li>"Dark-mode flash on first paint (open)"</li>
                <li>"Pill buttons clip long titles (closed)"</li>
            </ul>
            <button class="btn btn--small" on:click=move |_| stub_export("Bug tracker")>
                "Export CSV"
            </button>
        </section>
    }
}
