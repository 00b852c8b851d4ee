//! Login page: password sign-in, reset-request mode, local attempt limiting.
//!
//! SYSTEM CONTEXT
//! ==============
//! The attempt limiter is advisory and purely client-side; the auth backend
//! enforces its own limits. Its history persists in localStorage so a reload
//! does not reset the window. A marker left by the confirmation page surfaces
//! a "you can sign in now" banner exactly once.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::net::api;
use crate::net::error::sanitize_message;
use crate::state::auth::AuthState;
use crate::util::rate_limit::RateLimiter;
use crate::util::storage::{self, CONFIRMED_SESSION_KEY, PENDING_SIGNUP_EMAIL_KEY};

const ATTEMPT_WINDOW_MS: u64 = 60_000;
const MAX_ATTEMPTS: usize = 5;

/// Field checks that run before the attempt limiter, so an incomplete form
/// never consumes an attempt. Reset mode needs no password.
fn field_error(email: &str, password: &str, reset_mode: bool) -> Option<&'static str> {
    if email.is_empty() {
        return Some("Enter your email address.");
    }
    if !reset_mode && password.is_empty() {
        return Some("Enter your password.");
    }
    None
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    // Reset-request mode replaces the password field with a single send button.
    let reset_mode = RwSignal::new(false);

    // One-shot banner after a confirmation link was exchanged, and a prefill
    // for users who signed up in this tab but have not confirmed yet.
    if storage::session_flag(CONFIRMED_SESSION_KEY).is_some() {
        storage::clear_session_flag(CONFIRMED_SESSION_KEY);
        notice.set(Some("Email confirmed. You can sign in now.".to_owned()));
    }
    if let Some(pending) = storage::session_flag(PENDING_SIGNUP_EMAIL_KEY) {
        email.set(pending);
    }

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            error.set(None);
            notice.set(None);

            let email_value = email.get().trim().to_lowercase();
            let password_value = password.get();
            if let Some(message) = field_error(&email_value, &password_value, reset_mode.get()) {
                error.set(Some(message.to_owned()));
                return;
            }

            // Only submissions that reach the network count against the
            // attempt window.
            let mut limiter = RateLimiter::load(ATTEMPT_WINDOW_MS, MAX_ATTEMPTS);
            if !limiter.is_allowed(&email_value) {
                let wait_s = limiter.retry_after_ms(&email_value).div_ceil(1000);
                error.set(Some(format!(
                    "Too many attempts. Try again in {wait_s}s."
                )));
                return;
            }
            limiter.save();

            if reset_mode.get() {
                busy.set(true);
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    let result = api::request_password_reset(&email_value).await;
                    busy.set(false);
                    match result {
                        Ok(()) => notice.set(Some(
                            "If that address has an account, a reset link is on its way.".to_owned(),
                        )),
                        Err(e) => error.set(Some(sanitize_message(&e))),
                    }
                });
                return;
            }

            busy.set(true);
            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let result = api::sign_in(&email_value, &password_value).await;
                    busy.set(false);
                    match result {
                        Ok(session) => {
                            auth.update(|a| a.signed_in(session));
                            navigate("/dashboard", Default::default());
                        }
                        Err(e) => error.set(Some(sanitize_message(&e))),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&navigate, password_value, auth);
        }
    };

    view! {
        <Navbar />
        <main class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>{move || if reset_mode.get() { "Reset password" } else { "Log in" }}</h1>

                <Show when=move || notice.get().is_some()>
                    <p class="auth-card__notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <label>
                    "Email"
                    <input
                        class="input"
                        type="email"
                        prop:value=email
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !reset_mode.get()>
                    <label>
                        "Password"
                        <input
                            class="input"
                            type="password"
                            prop:value=password
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if reset_mode.get() { "Send reset link" } else { "Log in" }}
                </button>

                <button
                    class="link-button"
                    type="button"
                    on:click=move |_| {
                        reset_mode.update(|m| *m = !*m);
                        error.set(None);
                    }
                >
                    {move || {
                        if reset_mode.get() { "Back to log in" } else { "Forgot your password?" }
                    }}
                </button>

                <p class="auth-card__alt">
                    "No account yet? " <a href="/signup">"Sign up free"</a>
                </p>
            </form>
        </main>
    }
}
