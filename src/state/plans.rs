//! Pricing-plan state shared by the marketing page and the admin editor.
//!
//! Plans live in memory only. Admin edits mutate this list for the current
//! session and are lost on reload; that gap is acknowledged in the product
//! design rather than papered over here.

#[cfg(test)]
#[path = "plans_test.rs"]
mod plans_test;

/// One pricing tier as rendered on the marketing page.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    pub name: String,
    /// Monthly price in whole dollars; 0 renders as "Free".
    pub price: u32,
    pub features: Vec<String>,
    /// Visually emphasized tier on the pricing grid.
    pub highlight: bool,
}

/// Ordered tier list with its mutation API.
#[derive(Clone, Debug)]
pub struct PlansState {
    pub plans: Vec<Plan>,
}

impl Default for PlansState {
    fn default() -> Self {
        Self {
            plans: vec![
                Plan {
                    name: "Free".to_owned(),
                    price: 0,
                    features: vec![
                        "Unlimited links".to_owned(),
                        "All theme presets".to_owned(),
                        "Click counts".to_owned(),
                    ],
                    highlight: false,
                },
                Plan {
                    name: "Pro".to_owned(),
                    price: 9,
                    features: vec![
                        "Everything in Free".to_owned(),
                        "Custom background image".to_owned(),
                        "Hide branding".to_owned(),
                        "SEO overrides".to_owned(),
                    ],
                    highlight: true,
                },
                Plan {
                    name: "Team".to_owned(),
                    price: 29,
                    features: vec![
                        "Everything in Pro".to_owned(),
                        "Five profiles".to_owned(),
                        "Priority support".to_owned(),
                    ],
                    highlight: false,
                },
            ],
        }
    }
}

impl PlansState {
    /// Replace one tier by index; out-of-range edits are ignored.
    pub fn update_plan(&mut self, index: usize, plan: Plan) {
        if let Some(slot) = self.plans.get_mut(index) {
            *slot = plan;
        }
    }

    /// Append a new tier at the end of the grid.
    pub fn add_plan(&mut self, plan: Plan) {
        self.plans.push(plan);
    }

    /// Remove one tier by index; out-of-range removals are ignored.
    pub fn remove_plan(&mut self, index: usize) {
        if index < self.plans.len() {
            self.plans.remove(index);
        }
    }
}
