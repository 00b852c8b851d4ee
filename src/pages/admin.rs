//! Admin console behind an advisory role check.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate resolves after mount: the profile row is fetched if the dashboard
//! has not already loaded it, and `is_admin` decides whether the console
//! renders. This is a UI affordance; the backend's row rules are the real
//! boundary, so a forged client sees panels that cannot write anything.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::admin_pricing_panel::AdminPricingPanel;
use crate::components::admin_system_panel::AdminSystemPanel;
use crate::components::admin_users_panel::AdminUsersPanel;
use crate::components::navbar::Navbar;
use crate::state::admin::AdminState;
use crate::state::auth::AuthState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminSection {
    Users,
    Pricing,
    System,
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let admin = expect_context::<RwSignal<AdminState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(auth, navigate);

    let section = RwSignal::new(AdminSection::Users);

    // Resolve the role gate once a session is present.
    Effect::new(move || {
        let Some(session) = auth.get().session else {
            return;
        };
        if admin.with_untracked(|a| a.authorized.is_some()) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if auth.with_untracked(|a| a.profile.is_none()) {
                if let Some(profile) = crate::net::api::fetch_profile(&session).await {
                    auth.update(|a| a.profile_loaded(profile));
                }
            }
            let allowed = auth.with_untracked(crate::state::auth::AuthState::is_admin);
            admin.update(|a| {
                a.authorized = Some(allowed);
                if allowed {
                    a.seed_mock_users();
                }
            });
            if allowed {
                if let Some(site) = crate::net::api::fetch_site_settings(&session).await {
                    admin.update(|a| a.site = site);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, admin);
    });

    let gate = move || admin.with(|a| a.authorized);

    view! {
        <Navbar />
        <main class="admin">
            {move || match gate() {
                None => view! { <p class="admin__checking">"Checking access"</p> }.into_any(),
                Some(false) => view! {
                    <div class="admin__denied">
                        <h1>"No access"</h1>
                        <p>"This console is for Linkleaf operators only."</p>
                        <a class="btn" href="/dashboard">
                            "Back to your dashboard"
                        </a>
                    </div>
                }
                .into_any(),
                Some(true) => view! {
                    <div class="admin__console">
                        <nav class="dashboard__tabs">
                            <button
                                class="tab"
                                class=("tab--active", move || section.get() == AdminSection::Users)
                                on:click=move |_| section.set(AdminSection::Users)
                            >
                                "Users"
                            </button>
                            <button
                                class="tab"
                                class=("tab--active", move || section.get() == AdminSection::Pricing)
                                on:click=move |_| section.set(AdminSection::Pricing)
                            >
                                "Pricing"
                            </button>
                            <button
                                class="tab"
                                class=("tab--active", move || section.get() == AdminSection::System)
                                on:click=move |_| section.set(AdminSection::System)
                            >
                                "System"
                            </button>
                        </nav>
                        {move || match section.get() {
                            AdminSection::Users => view! { <AdminUsersPanel /> }.into_any(),
                            AdminSection::Pricing => view! { <AdminPricingPanel /> }.into_any(),
                            AdminSection::System => view! { <AdminSystemPanel /> }.into_any(),
                        }}
                    </div>
                }
                .into_any(),
            }}
        </main>
    }
}
