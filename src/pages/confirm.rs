//! Email-confirmation landing page.
//!
//! The confirmation email links here with a `token_hash` query parameter. The
//! token is exchanged for a session on mount; success signs the user straight
//! in and lands them on the dashboard.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::navbar::Navbar;
use crate::net::api;
use crate::net::error::sanitize_message;
use crate::state::auth::AuthState;

#[component]
pub fn ConfirmPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(token_hash) = query.with(|q| q.get("token_hash")) else {
            navigate("/login", Default::default());
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::exchange_confirmation(&token_hash).await {
                    Ok(session) => {
                        auth.update(|a| a.signed_in(session));
                        navigate("/dashboard", Default::default());
                    }
                    Err(e) => error.set(Some(sanitize_message(&e))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (token_hash, auth);
    });

    view! {
        <Navbar />
        <main class="auth-page">
            <div class="auth-card">
                <Show
                    when=move || error.get().is_some()
                    fallback=|| {
                        view! {
                            <h1>"Confirming your email"</h1>
                            <p>"Hold on a moment."</p>
                        }
                    }
                >
                    <h1>"Confirmation failed"</h1>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                    <p>
                        "The link may have expired. " <a href="/login">"Back to log in"</a>
                    </p>
                </Show>
            </div>
        </main>
    }
}
