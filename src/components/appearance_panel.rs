//! Appearance editor: theme preset, button axes, font, SEO, branding.
//!
//! Discrete choices (preset, shape, fill, shadow, font, toggles) upsert the
//! settings row immediately; free-text fields (SEO title/description, font
//! color) are debounced; the custom background image uploads immediately and
//! persists the returned URL.

use leptos::prelude::*;

use crate::net::error::sanitize_message;
use crate::net::types::{
    AppearanceSettings, ButtonFill, ButtonShadow, ButtonShape, FontFamily, ThemePreset,
};
use crate::state::appearance::AppearanceState;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::debounce::DebounceGate;

const THEME_CHOICES: &[(ThemePreset, &str)] = &[
    (ThemePreset::Midnight, "Midnight"),
    (ThemePreset::Daybreak, "Daybreak"),
    (ThemePreset::Forest, "Forest"),
    (ThemePreset::Ocean, "Ocean"),
    (ThemePreset::Blush, "Blush"),
    (ThemePreset::Mono, "Mono"),
    (ThemePreset::Custom, "Custom"),
];

#[component]
pub fn AppearancePanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let appearance = expect_context::<RwSignal<AppearanceState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let text_gate = DebounceGate::new();

    // Upsert the whole settings row as it stands right now.
    let persist_now = move || {
        #[cfg(feature = "hydrate")]
        {
            let Some(session) = auth.get_untracked().session else {
                return;
            };
            let settings = appearance.with_untracked(|s| s.settings.clone());
            leptos::task::spawn_local(async move {
                match crate::net::api::upsert_appearance(&session, &settings).await {
                    Ok(()) => appearance.update(|s| s.saved()),
                    Err(e) => ui.update(|u| {
                        u.toast_error(sanitize_message(&e));
                    }),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (auth, ui);
    };

    // Apply a discrete edit and persist immediately.
    let edit_now = move |apply: fn(&mut AppearanceSettings)| {
        appearance.update(|s| s.edit(apply));
        persist_now();
    };

    // Apply a text edit and persist after the debounce window.
    let edit_debounced = {
        let text_gate = text_gate.clone();
        move |apply: Box<dyn FnOnce(&mut AppearanceSettings)>| {
            appearance.update(|s| s.edit(apply));
            #[cfg(feature = "hydrate")]
            crate::util::debounce::schedule(
                &text_gate,
                crate::util::debounce::EDIT_DEBOUNCE_MS,
                persist_now,
            );
            #[cfg(not(feature = "hydrate"))]
            let _ = &text_gate;
        }
    };

    let on_background_upload = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_from_input(&ev) else {
                return;
            };
            let Some(session) = auth.get_untracked().session else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_image(&session, "backgrounds", &file).await {
                    Ok(url) => {
                        appearance.update(|s| {
                            s.edit(|settings| {
                                settings.theme = ThemePreset::Custom;
                                settings.background_url = Some(url);
                            });
                        });
                        persist_now();
                    }
                    Err(e) => ui.update(|u| {
                        u.toast_error(sanitize_message(&e));
                    }),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let settings = move || appearance.get().settings;
    let edit_debounced_color = edit_debounced.clone();
    let edit_debounced_seo_title = edit_debounced.clone();
    let edit_debounced_seo_desc = edit_debounced;

    view! {
        <section class="appearance-panel">
            <h3>"Theme"</h3>
            <div class="appearance-panel__themes">
                {THEME_CHOICES
                    .iter()
                    .map(|&(preset, label)| {
                        view! {
                            <button
                                class="chip"
                                class=("chip--selected", move || settings().theme == preset)
                                on:click=move |_| {
                                    appearance.update(|s| s.edit(|x| x.theme = preset));
                                    persist_now();
                                }
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <Show when=move || settings().theme == ThemePreset::Custom>
                <label class="appearance-panel__upload">
                    "Background image"
                    <input type="file" accept="image/*" on:change=on_background_upload />
                </label>
            </Show>

            <h3>"Buttons"</h3>
            <div class="appearance-panel__axis">
                <button class="chip" class=("chip--selected", move || settings().button_shape == ButtonShape::Square)
                    on:click=move |_| edit_now(|x| x.button_shape = ButtonShape::Square)>"Square"</button>
                <button class="chip" class=("chip--selected", move || settings().button_shape == ButtonShape::Rounded)
                    on:click=move |_| edit_now(|x| x.button_shape = ButtonShape::Rounded)>"Rounded"</button>
                <button class="chip" class=("chip--selected", move || settings().button_shape == ButtonShape::Pill)
                    on:click=move |_| edit_now(|x| x.button_shape = ButtonShape::Pill)>"Pill"</button>
            </div>
            <div class="appearance-panel__axis">
                <button class="chip" class=("chip--selected", move || settings().button_fill == ButtonFill::Solid)
                    on:click=move |_| edit_now(|x| x.button_fill = ButtonFill::Solid)>"Solid"</button>
                <button class="chip" class=("chip--selected", move || settings().button_fill == ButtonFill::Outline)
                    on:click=move |_| edit_now(|x| x.button_fill = ButtonFill::Outline)>"Outline"</button>
                <button class="chip" class=("chip--selected", move || settings().button_fill == ButtonFill::Glass)
                    on:click=move |_| edit_now(|x| x.button_fill = ButtonFill::Glass)>"Glass"</button>
            </div>
            <div class="appearance-panel__axis">
                <button class="chip" class=("chip--selected", move || settings().button_shadow == ButtonShadow::None)
                    on:click=move |_| edit_now(|x| x.button_shadow = ButtonShadow::None)>"Flat"</button>
                <button class="chip" class=("chip--selected", move || settings().button_shadow == ButtonShadow::Soft)
                    on:click=move |_| edit_now(|x| x.button_shadow = ButtonShadow::Soft)>"Soft"</button>
                <button class="chip" class=("chip--selected", move || settings().button_shadow == ButtonShadow::Hard)
                    on:click=move |_| edit_now(|x| x.button_shadow = ButtonShadow::Hard)>"Hard"</button>
            </div>

            <h3>"Font"</h3>
            <div class="appearance-panel__axis">
                <button class="chip" class=("chip--selected", move || settings().font_family == FontFamily::Sans)
                    on:click=move |_| edit_now(|x| x.font_family = FontFamily::Sans)>"Sans"</button>
                <button class="chip" class=("chip--selected", move || settings().font_family == FontFamily::Serif)
                    on:click=move |_| edit_now(|x| x.font_family = FontFamily::Serif)>"Serif"</button>
                <button class="chip" class=("chip--selected", move || settings().font_family == FontFamily::Mono)
                    on:click=move |_| edit_now(|x| x.font_family = FontFamily::Mono)>"Mono"</button>
                <button class="chip" class=("chip--selected", move || settings().font_family == FontFamily::Rounded)
                    on:click=move |_| edit_now(|x| x.font_family = FontFamily::Rounded)>"Rounded"</button>
            </div>
            <label class="appearance-panel__color">
                "Font color override"
                <input
                    type="color"
                    prop:value=move || settings().font_color.unwrap_or_else(|| "#ffffff".to_owned())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_debounced_color(Box::new(move |x| x.font_color = Some(value)));
                    }
                />
                <button class="btn" on:click=move |_| edit_now(|x| x.font_color = None)>
                    "Clear"
                </button>
            </label>

            <h3>"SEO"</h3>
            <input
                class="input"
                type="text"
                placeholder="Page title"
                prop:value=move || settings().seo_title.unwrap_or_default()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    edit_debounced_seo_title(Box::new(move |x| {
                        x.seo_title = if value.is_empty() { None } else { Some(value) };
                    }));
                }
            />
            <input
                class="input"
                type="text"
                placeholder="Meta description"
                prop:value=move || settings().seo_description.unwrap_or_default()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    edit_debounced_seo_desc(Box::new(move |x| {
                        x.seo_description = if value.is_empty() { None } else { Some(value) };
                    }));
                }
            />

            <label class="appearance-panel__branding">
                <input
                    type="checkbox"
                    prop:checked=move || settings().hide_branding
                    on:change=move |_| {
                        appearance.update(|s| s.edit(|x| x.hide_branding = !x.hide_branding));
                        persist_now();
                    }
                />
                "Hide \"made with Linkleaf\" tag"
            </label>
        </section>
    }
}

#[cfg(feature = "hydrate")]
fn file_from_input(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}
