//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::ToastHost;
use crate::pages::{
    admin::AdminPage, confirm::ConfirmPage, dashboard::DashboardPage, home::HomePage,
    login::LoginPage, profile::ProfilePage, signup::SignupPage,
};
use crate::state::{
    admin::AdminState, appearance::AppearanceState, auth::AuthState, links::LinksState,
    plans::PlansState, ui::UiState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components. Auth starts
    // in `loading` until the session restore below settles.
    let auth = RwSignal::new(AuthState {
        loading: true,
        ..AuthState::default()
    });
    let links = RwSignal::new(LinksState::default());
    let appearance = RwSignal::new(AppearanceState::default());
    let plans = RwSignal::new(PlansState::default());
    let admin = RwSignal::new(AdminState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(links);
    provide_context(appearance);
    provide_context(plans);
    provide_context(admin);
    provide_context(ui);

    // Restore the cached session and apply the dark-mode preference on mount.
    Effect::new(move || {
        let dark = crate::util::dark_mode::init();
        ui.update(|u| u.dark_mode = dark);

        match crate::net::api::load_session() {
            Some(session) => auth.update(|a| a.signed_in(session)),
            None => auth.update(|a| a.loading = false),
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/linkleaf.css"/>
        <Title text="Linkleaf"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("confirm") view=ConfirmPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route path=ParamSegment("username") view=ProfilePage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
