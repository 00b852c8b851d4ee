//! Account settings: username, bio, avatar and cover images, sign-out.
//!
//! Text edits apply to the in-memory profile immediately and persist after the
//! debounce window. Image uploads persist as soon as the upload finishes.

use leptos::prelude::*;

use crate::net::error::sanitize_message;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::debounce::DebounceGate;

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let username_gate = DebounceGate::new();
    let bio_gate = DebounceGate::new();

    // Send a partial profile update for the signed-in user.
    let persist_patch = move |patch: serde_json::Value| {
        #[cfg(feature = "hydrate")]
        {
            let Some(session) = auth.get_untracked().session else {
                return;
            };
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::update_profile(&session, &patch).await {
                    ui.update(|u| {
                        u.toast_error(sanitize_message(&e));
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (patch, ui);
    };

    let on_username_input = {
        let username_gate = username_gate.clone();
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev).trim().to_owned();
            auth.update(|a| {
                if let Some(profile) = a.profile.as_mut() {
                    profile.username = value.clone();
                }
            });
            #[cfg(feature = "hydrate")]
            crate::util::debounce::schedule(
                &username_gate,
                crate::util::debounce::EDIT_DEBOUNCE_MS,
                move || {
                    let latest =
                        auth.with_untracked(|a| a.profile.as_ref().map(|p| p.username.clone()));
                    if let Some(username) = latest {
                        if !username.is_empty() {
                            persist_patch(serde_json::json!({ "username": username }));
                        }
                    }
                },
            );
            #[cfg(not(feature = "hydrate"))]
            let _ = (&username_gate, &persist_patch, value);
        }
    };

    let on_bio_input = {
        let bio_gate = bio_gate.clone();
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            auth.update(|a| {
                if let Some(profile) = a.profile.as_mut() {
                    profile.bio = value.clone();
                }
            });
            #[cfg(feature = "hydrate")]
            crate::util::debounce::schedule(
                &bio_gate,
                crate::util::debounce::EDIT_DEBOUNCE_MS,
                move || {
                    let latest = auth.with_untracked(|a| a.profile.as_ref().map(|p| p.bio.clone()));
                    if let Some(bio) = latest {
                        persist_patch(serde_json::json!({ "bio": bio }));
                    }
                },
            );
            #[cfg(not(feature = "hydrate"))]
            let _ = (&bio_gate, &persist_patch, value);
        }
    };

    // Upload to `bucket`, then patch `field` with the public URL.
    let upload_and_patch = move |bucket: &'static str, field: &'static str, ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_from_input(&ev) else {
                return;
            };
            let Some(session) = auth.get_untracked().session else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_image(&session, bucket, &file).await {
                    Ok(url) => {
                        auth.update(|a| {
                            if let Some(profile) = a.profile.as_mut() {
                                match field {
                                    "avatar_url" => profile.avatar_url = Some(url.clone()),
                                    _ => profile.cover_url = Some(url.clone()),
                                }
                            }
                        });
                        persist_patch(serde_json::json!({ field: url }));
                    }
                    Err(e) => ui.update(|u| {
                        u.toast_error(sanitize_message(&e));
                    }),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (bucket, field, ev, &persist_patch);
    };

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let session = auth.get_untracked().session;
            leptos::task::spawn_local(async move {
                if let Some(session) = session {
                    crate::net::api::sign_out(&session).await;
                }
                auth.update(crate::state::auth::AuthState::signed_out);
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            });
        }
    };

    let username = move || {
        auth.get()
            .profile
            .map(|p| p.username)
            .unwrap_or_default()
    };
    let bio = move || auth.get().profile.map(|p| p.bio).unwrap_or_default();

    view! {
        <section class="settings-panel">
            <h3>"Profile"</h3>
            <label class="settings-panel__field">
                "Username"
                <input class="input" type="text" prop:value=username on:input=on_username_input />
            </label>
            <label class="settings-panel__field">
                "Bio"
                <textarea class="input" prop:value=bio on:input=on_bio_input></textarea>
            </label>

            <h3>"Images"</h3>
            <label class="settings-panel__upload">
                "Avatar"
                <input
                    type="file"
                    accept="image/*"
                    on:change=move |ev| upload_and_patch("avatars", "avatar_url", ev)
                />
            </label>
            <label class="settings-panel__upload">
                "Cover"
                <input
                    type="file"
                    accept="image/*"
                    on:change=move |ev| upload_and_patch("covers", "cover_url", ev)
                />
            </label>

            <h3>"Account"</h3>
            <button class="btn btn--danger" on:click=on_sign_out>
                "Sign out"
            </button>
        </section>
    }
}

#[cfg(feature = "hydrate")]
fn file_from_input(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}
