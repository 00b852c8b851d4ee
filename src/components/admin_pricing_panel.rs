//! Admin pricing editor for the marketing page tiers.
//!
//! Edits apply to the shared in-memory plan list only and are lost on reload.

use leptos::prelude::*;

use crate::state::plans::{Plan, PlansState};

#[component]
pub fn AdminPricingPanel() -> impl IntoView {
    let plans = expect_context::<RwSignal<PlansState>>();

    let on_add = move |_| {
        plans.update(|p| {
            p.add_plan(Plan {
                name: "New tier".to_owned(),
                price: 0,
                features: Vec::new(),
                highlight: false,
            });
        });
    };

    view! {
        <section class="admin-pricing">
            <p class="admin-pricing__note">
                "Changes apply to the live pricing grid for this session only."
            </p>
            {move || {
                plans
                    .get()
                    .plans
                    .into_iter()
                    .enumerate()
                    .map(|(index, plan)| view! { <PlanEditor index=index plan=plan /> })
                    .collect::<Vec<_>>()
            }}
            <button class="btn" on:click=on_add>
                "Add tier"
            </button>
        </section>
    }
}

#[component]
fn PlanEditor(index: usize, plan: Plan) -> impl IntoView {
    let plans = expect_context::<RwSignal<PlansState>>();

    // Replace the indexed tier with `edited` applied to its current value.
    let apply = move |edited: Box<dyn FnOnce(&mut Plan)>| {
        plans.update(|p| {
            if let Some(current) = p.plans.get(index) {
                let mut next = current.clone();
                edited(&mut next);
                p.update_plan(index, next);
            }
        });
    };

    let features_text = plan.features.join("\n");

    view! {
        <div class="admin-pricing__tier" class=("admin-pricing__tier--highlight", plan.highlight)>
            <label>
                "Name"
                <input
                    class="input"
                    type="text"
                    prop:value=plan.name.clone()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        apply(Box::new(move |p| p.name = value));
                    }
                />
            </label>
            <label>
                "Price ($/month)"
                <input
                    class="input"
                    type="number"
                    min="0"
                    prop:value=plan.price.to_string()
                    on:input=move |ev| {
                        if let Ok(price) = event_target_value(&ev).parse::<u32>() {
                            apply(Box::new(move |p| p.price = price));
                        }
                    }
                />
            </label>
            <label>
                "Features (one per line)"
                <textarea
                    class="input"
                    prop:value=features_text
                    on:input=move |ev| {
                        let features = event_target_value(&ev)
                            .lines()
                            .map(str::trim)
                            .filter(|line| !line.is_empty())
                            .map(str::to_owned)
                            .collect::<Vec<_>>();
                        apply(Box::new(move |p| p.features = features));
                    }
                ></textarea>
            </label>
            <label class="admin-pricing__highlight">
                <input
                    type="checkbox"
                    prop:checked=plan.highlight
                    on:change=move |_| apply(Box::new(|p| p.highlight = !p.highlight))
                />
                "Highlight this tier"
            </label>
            <button
                class="btn btn--small btn--danger"
                on:click=move |_| plans.update(|p| p.remove_plan(index))
            >
                "Remove tier"
            </button>
        </div>
    }
}
