//! Signup page: claim a username, register, then wait for email confirmation.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::api;
use crate::net::error::sanitize_message;
use crate::util::rate_limit::RateLimiter;

const ATTEMPT_WINDOW_MS: u64 = 60_000;
const MAX_ATTEMPTS: usize = 3;

/// Usernames become URL path segments, so only a narrow charset is allowed.
fn valid_username(name: &str) -> bool {
    (3..=30).contains(&name.len())
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        && !name.starts_with('-')
        && !name.ends_with('-')
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    // After a successful registration the form gives way to a check-your-inbox card.
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let email_value = email.get().trim().to_lowercase();
        let username_value = username.get().trim().to_lowercase();
        let password_value = password.get();

        if email_value.is_empty() {
            error.set(Some("Enter your email address.".to_owned()));
            return;
        }
        if !valid_username(&username_value) {
            error.set(Some(
                "Usernames are 3-30 characters: lowercase letters, digits, - or _.".to_owned(),
            ));
            return;
        }
        if password_value.len() < 8 {
            error.set(Some("Passwords need at least 8 characters.".to_owned()));
            return;
        }
        if password_value != confirm.get() {
            error.set(Some("Passwords do not match.".to_owned()));
            return;
        }

        let mut limiter = RateLimiter::load(ATTEMPT_WINDOW_MS, MAX_ATTEMPTS);
        if !limiter.is_allowed(&email_value) {
            let wait_s = limiter.retry_after_ms(&email_value).div_ceil(1000);
            error.set(Some(format!("Too many attempts. Try again in {wait_s}s.")));
            return;
        }
        limiter.save();

        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api::sign_up(&email_value, &password_value, &username_value).await;
            busy.set(false);
            match result {
                Ok(()) => submitted.set(true),
                Err(e) => error.set(Some(sanitize_message(&e))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (password_value, username_value);
    };

    view! {
        <Navbar />
        <main class="auth-page">
            <Show
                when=move || !submitted.get()
                fallback=move || {
                    view! {
                        <div class="auth-card">
                            <h1>"Check your inbox"</h1>
                            <p>
                                "We sent a confirmation link to " <strong>{email.get()}</strong>
                                ". Click it to activate your page."
                            </p>
                        </div>
                    }
                }
            >
                <form class="auth-card" on:submit=on_submit>
                    <h1>"Create your Linkleaf"</h1>

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
                    <label>
                        "Username"
                        <div class="auth-card__handle">
                            <span>"linkleaf.app/"</span>
                            <input
                                class="input"
                                type="text"
                                prop:value=username
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                        </div>
                    </label>
                    <label>
                        "Password"
                        <input
                            class="input"
                            type="password"
                            prop:value=password
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Confirm password"
                        <input
                            class="input"
                            type="password"
                            prop:value=confirm
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>

                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign up free"
                    </button>

                    <p class="auth-card__alt">
                        "Already have an account? " <a href="/login">"Log in"</a>
                    </p>
                </form>
            </Show>
        </main>
    }
}
