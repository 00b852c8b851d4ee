//! Admin user table: search, suspend/reactivate, delete.
//!
//! Rows are seeded mock data; operator actions mutate the local table only.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::state::admin::AdminState;
use crate::state::ui::UiState;

#[component]
pub fn AdminUsersPanel() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let pending_delete = RwSignal::new(None::<String>);

    let on_search = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        admin.update(|a| a.search = value);
    };

    let rows = move || {
        admin.with(|a| {
            a.visible_users()
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="admin-users">
            <input
                class="input admin-users__search"
                type="search"
                placeholder="Search by username or email"
                prop:value=move || admin.with(|a| a.search.clone())
                on:input=on_search
            />
            <table class="admin-users__table">
                <thead>
                    <tr>
                        <th>"Username"</th>
                        <th>"Email"</th>
                        <th>"Plan"</th>
                        <th>"Joined"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows()
                            .into_iter()
                            .map(|user| {
                                let toggle_id = user.id.clone();
                                let delete_id = user.id.clone();
                                let status = if user.is_active { "Active" } else { "Suspended" };
                                let toggle_label = if user.is_active { "Suspend" } else { "Reactivate" };
                                view! {
                                    <tr class=("admin-users__row--suspended", !user.is_active)>
                                        <td>{user.username.clone()}</td>
                                        <td>{user.email.clone()}</td>
                                        <td>{user.plan.clone()}</td>
                                        <td>{user.joined.clone()}</td>
                                        <td>{status}</td>
                                        <td>
                                            <button
                                                class="btn btn--small"
                                                on:click=move |_| {
                                                    admin.update(|a| {
                                                        a.toggle_user_active(&toggle_id);
                                                    });
                                                }
                                            >
                                                {toggle_label}
                                            </button>
                                            <button
                                                class="btn btn--small btn--danger"
                                                on:click=move |_| {
                                                    pending_delete.set(Some(delete_id.clone()));
                                                }
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <Show when=move || rows().is_empty()>
                <p class="admin-users__empty">"No users match that search."</p>
            </Show>

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete user"
                    message="This removes the account and its profile. This cannot be undone."
                    confirm_label="Delete"
                    danger=true
                    on_confirm=Callback::new(move |()| {
                        if let Some(id) = pending_delete.get_untracked() {
                            let removed = admin
                                .try_update(|a| a.delete_user(&id))
                                .unwrap_or(false);
                            if removed {
                                ui.update(|u| {
                                    u.toast_info("User deleted.".to_owned());
                                });
                            }
                        }
                        pending_delete.set(None);
                    })
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                />
            </Show>
        </section>
    }
}
