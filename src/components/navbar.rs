//! Top navigation bar shared by marketing pages and the dashboard.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let signed_in = move || auth.get().session.is_some();

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                "Linkleaf"
            </a>
            <span class="navbar__spacer"></span>
            <button
                class="btn navbar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
            <Show
                when=signed_in
                fallback=|| {
                    view! {
                        <a class="btn" href="/login">
                            "Log in"
                        </a>
                        <a class="btn btn--primary" href="/signup">
                            "Sign up free"
                        </a>
                    }
                }
            >
                <a class="btn btn--primary" href="/dashboard">
                    "Dashboard"
                </a>
            </Show>
        </header>
    }
}
