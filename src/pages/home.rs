//! Marketing landing page: hero, features, pricing, FAQ.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::plans::PlansState;
use crate::util::scroll::scroll_to_anchor;

const FEATURES: &[(&str, &str)] = &[
    (
        "One link for everything",
        "Collect every profile, store, and video channel behind a single short URL.",
    ),
    (
        "Themes that feel like you",
        "Six presets plus a fully custom background, with button shapes, fills, and shadows to match.",
    ),
    (
        "Know what gets clicked",
        "Per-link click counts out of the box, no tracking script to install.",
    ),
    (
        "Instant edits",
        "Changes save as you type and go live immediately, with a real-time preview beside the editor.",
    ),
];

const FAQ: &[(&str, &str)] = &[
    (
        "Is the free tier really free?",
        "Yes. Unlimited links, every theme preset, and click counts cost nothing, forever.",
    ),
    (
        "Can I use my own domain?",
        "Not yet. Your page lives at linkleaf.app/yourname for now.",
    ),
    (
        "What happens if I cancel a paid plan?",
        "Your page stays up on the free tier; paid-only styling falls back to the nearest preset.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let plans = expect_context::<RwSignal<PlansState>>();

    view! {
        <Navbar />
        <main class="home">
            <section class="home__hero" id="top">
                <h1>"Everything you are. One simple link."</h1>
                <p>
                    "Linkleaf turns your bio link into a fast, beautiful page for all of your "
                    "content, socials, and shops."
                </p>
                <div class="home__cta">
                    <a class="btn btn--primary" href="/signup">
                        "Claim your Linkleaf"
                    </a>
                    <button class="btn" on:click=move |_| scroll_to_anchor("pricing")>
                        "See pricing"
                    </button>
                </div>
            </section>

            <section class="home__features" id="features">
                <h2>"Why Linkleaf"</h2>
                <div class="home__feature-grid">
                    {FEATURES
                        .iter()
                        .map(|&(title, body)| {
                            view! {
                                <div class="feature-card">
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="home__pricing" id="pricing">
                <h2>"Pricing"</h2>
                <div class="home__pricing-grid">
                    {move || {
                        plans
                            .get()
                            .plans
                            .into_iter()
                            .map(|plan| {
                                let price = if plan.price == 0 {
                                    "Free".to_owned()
                                } else {
                                    format!("${}/mo", plan.price)
                                };
                                view! {
                                    <div
                                        class="pricing-card"
                                        class=("pricing-card--highlight", plan.highlight)
                                    >
                                        <h3>{plan.name.clone()}</h3>
                                        <p class="pricing-card__price">{price}</p>
                                        <ul>
                                            {plan
                                                .features
                                                .iter()
                                                .map(|f| view! { <li>{f.clone()}</li> })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                        <a class="btn btn--primary" href="/signup">
                                            "Get started"
                                        </a>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>

            <section class="home__faq" id="faq">
                <h2>"Questions"</h2>
                {FAQ
                    .iter()
                    .map(|&(q, a)| {
                        view! {
                            <details class="faq-item">
                                <summary>{q}</summary>
                                <p>{a}</p>
                            </details>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <footer class="home__footer">
                <span>"Linkleaf"</span>
                <button class="link-button" on:click=move |_| scroll_to_anchor("top")>
                    "Back to top"
                </button>
            </footer>
        </main>
    }
}
