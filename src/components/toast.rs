//! Toast notification host.
//!
//! All remote-call failures surface here as transient, dismissable messages;
//! nothing retries automatically.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};

#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-host">
            {move || {
                ui.get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = match toast.kind {
                            ToastKind::Info => "toast toast--info",
                            ToastKind::Error => "toast toast--error",
                        };
                        view! {
                            <div class=class>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| ui.update(|u| u.dismiss_toast(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
