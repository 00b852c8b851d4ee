//! Link editor: add, edit, toggle, reorder, delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Local state renders immediately; persistence follows. Text edits are
//! debounced per field, reorders fan out one write per changed row, and
//! deletes go through the confirm dialog with a snapshot for rollback. See
//! `state::links` for the (asymmetric) rollback policy.

use leptos::prelude::*;
use uuid::Uuid;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::error::sanitize_message;
use crate::net::types::Link;
use crate::state::auth::AuthState;
use crate::state::links::LinksState;
use crate::state::ui::UiState;
use crate::util::debounce::DebounceGate;
use crate::util::url::validate_url;

#[component]
pub fn LinksPanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let links = expect_context::<RwSignal<LinksState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let new_title = RwSignal::new(String::new());
    let new_url = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<String>);

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get().trim().to_owned();
        if title.is_empty() {
            ui.update(|u| {
                u.toast_error("Give the link a title.");
            });
            return;
        }
        let Some(url) = validate_url(&new_url.get()) else {
            ui.update(|u| {
                u.toast_error("That doesn't look like a valid web address.");
            });
            return;
        };
        let Some(user_id) = auth.get_untracked().session.map(|s| s.user_id) else {
            return;
        };

        let link = Link {
            id: Uuid::new_v4().to_string(),
            user_id,
            title,
            url,
            is_active: true,
            position: 0,
            clicks: 0,
            thumbnail_url: None,
        };
        // Optimistic append; position is assigned by the state model.
        let appended = {
            let mut appended = link;
            links.update(|s| appended = s.append(appended.clone()));
            appended
        };
        new_title.set(String::new());
        new_url.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let Some(session) = auth.get_untracked().session else {
                return;
            };
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::create_link(&session, &appended).await {
                    links.update(|s| {
                        s.remove(&appended.id);
                    });
                    ui.update(|u| {
                        u.toast_error(sanitize_message(&e));
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = appended;
    };

    let on_delete_cancel = Callback::new(move |_| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |_| {
        let Some(link_id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);

        // Optimistic removal with a snapshot for full rollback on failure.
        let mut snapshot = None;
        links.update(|s| snapshot = s.remove(&link_id));
        let Some(snapshot) = snapshot else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let Some(session) = auth.get_untracked().session else {
                return;
            };
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::delete_link(&session, &snapshot.link.id).await {
                    links.update(|s| s.restore(snapshot));
                    ui.update(|u| {
                        u.toast_error(sanitize_message(&e));
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = snapshot;
    });

    view! {
        <section class="links-panel">
            <form class="links-panel__add" on:submit=on_add>
                <input
                    class="input"
                    type="text"
                    placeholder="Title"
                    prop:value=move || new_title.get()
                    on:input=move |ev| new_title.set(event_target_value(&ev))
                />
                <input
                    class="input"
                    type="text"
                    placeholder="example.com/me"
                    prop:value=move || new_url.get()
                    on:input=move |ev| new_url.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "+ Add link"
                </button>
            </form>

            <Show when=move || links.get().loading>
                <p>"Loading links..."</p>
            </Show>

            <div class="links-panel__list">
                {move || {
                    let count = links.get().items.len();
                    links
                        .get()
                        .items
                        .into_iter()
                        .enumerate()
                        .map(|(index, link)| {
                            view! {
                                <LinkRow
                                    link=link
                                    index=index
                                    count=count
                                    on_delete_request=Callback::new(move |id: String| {
                                        pending_delete.set(Some(id));
                                    })
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete link"
                    message="This removes the link from your page. Click counts are lost."
                    confirm_label="Delete"
                    danger=true
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </section>
    }
}

/// One editable row. Each text field owns a debounce gate so a typing burst
/// persists once, with the final value.
#[component]
fn LinkRow(link: Link, index: usize, count: usize, on_delete_request: Callback<String>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let links = expect_context::<RwSignal<LinksState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let link_id = link.id.clone();
    let title_gate = DebounceGate::new();
    let url_gate = DebounceGate::new();

    // Persist a single-field patch now (used by debounce flushes and the
    // active toggle, never by raw keystrokes).
    let persist_patch = {
        let link_id = link_id.clone();
        move |patch: serde_json::Value| {
            #[cfg(feature = "hydrate")]
            {
                let Some(session) = auth.get_untracked().session else {
                    return;
                };
                let link_id = link_id.clone();
                leptos::task::spawn_local(async move {
                    if let Err(e) = crate::net::api::update_link(&session, &link_id, &patch).await {
                        ui.update(|u| {
                            u.toast_error(sanitize_message(&e));
                        });
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (patch, &link_id);
        }
    };

    let on_title_input = {
        let link_id = link_id.clone();
        let persist_patch = persist_patch.clone();
        let title_gate = title_gate.clone();
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            let edit_id = link_id.clone();
            links.update(|s| {
                s.patch(&edit_id, |l| l.title = value.clone());
            });

            #[cfg(feature = "hydrate")]
            {
                let flush_id = link_id.clone();
                let persist_patch = persist_patch.clone();
                crate::util::debounce::schedule(
                    &title_gate,
                    crate::util::debounce::EDIT_DEBOUNCE_MS,
                    move || {
                        let Some(title) = links
                            .with_untracked(|s| s.items.iter().find(|l| l.id == flush_id).map(|l| l.title.clone()))
                        else {
                            return;
                        };
                        persist_patch(serde_json::json!({ "title": title }));
                    },
                );
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&title_gate, &persist_patch);
        }
    };

    let on_url_input = {
        let link_id = link_id.clone();
        let persist_patch = persist_patch.clone();
        let url_gate = url_gate.clone();
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            let edit_id = link_id.clone();
            links.update(|s| {
                s.patch(&edit_id, |l| l.url = value.clone());
            });

            #[cfg(feature = "hydrate")]
            {
                let flush_id = link_id.clone();
                let persist_patch = persist_patch.clone();
                crate::util::debounce::schedule(
                    &url_gate,
                    crate::util::debounce::EDIT_DEBOUNCE_MS,
                    move || {
                        let Some(raw) = links
                            .with_untracked(|s| s.items.iter().find(|l| l.id == flush_id).map(|l| l.url.clone()))
                        else {
                            return;
                        };
                        // Only persist URLs that validate; the field keeps the
                        // raw text so the user can finish typing.
                        if let Some(url) = validate_url(&raw) {
                            persist_patch(serde_json::json!({ "url": url }));
                        }
                    },
                );
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&url_gate, &persist_patch);
        }
    };

    let on_toggle_active = {
        let link_id = link_id.clone();
        let persist_patch = persist_patch.clone();
        move |_| {
            let mut now_active = false;
            let toggle_id = link_id.clone();
            links.update(|s| {
                s.patch(&toggle_id, |l| {
                    l.is_active = !l.is_active;
                    now_active = l.is_active;
                });
            });
            persist_patch(serde_json::json!({ "is_active": now_active }));
        }
    };

    // Reorder by one slot: recompute every position client-side, then fan out
    // one write per changed row. Failures toast; positions stand.
    let move_to = move |from: usize, to: usize| {
        let mut changed = Vec::new();
        links.update(|s| changed = s.reorder(from, to));
        if changed.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(session) = auth.get_untracked().session else {
                return;
            };
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::persist_positions(&session, &changed).await {
                    ui.update(|u| {
                        u.toast_error(sanitize_message(&e));
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = changed;
    };

    let delete_id = link_id.clone();
    let clicks = link.clicks;

    view! {
        <div class="link-row" class=("link-row--inactive", !link.is_active)>
            <div class="link-row__reorder">
                <button
                    class="btn link-row__up"
                    disabled={index == 0}
                    on:click=move |_| move_to(index, index.saturating_sub(1))
                >
                    "↑"
                </button>
                <button
                    class="btn link-row__down"
                    disabled={index + 1 >= count}
                    on:click=move |_| move_to(index, index + 1)
                >
                    "↓"
                </button>
            </div>
            <div class="link-row__fields">
                <input class="input" type="text" prop:value=link.title.clone() on:input=on_title_input />
                <input class="input" type="text" prop:value=link.url.clone() on:input=on_url_input />
            </div>
            <span class="link-row__clicks" title="Click-throughs">
                {clicks} " clicks"
            </span>
            <label class="link-row__active">
                <input type="checkbox" prop:checked=link.is_active on:change=on_toggle_active />
                "Live"
            </label>
            <button class="btn btn--danger" on:click=move |_| on_delete_request.run(delete_id.clone())>
                "Delete"
            </button>
        </div>
    }
}
