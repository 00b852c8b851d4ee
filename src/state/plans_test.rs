use super::*;

#[test]
fn default_grid_has_three_tiers_with_one_highlight() {
    let state = PlansState::default();
    assert_eq!(state.plans.len(), 3);
    assert_eq!(state.plans.iter().filter(|p| p.highlight).count(), 1);
    assert_eq!(state.plans[0].price, 0);
}

#[test]
fn update_plan_replaces_matching_index_only() {
    let mut state = PlansState::default();
    let edited = Plan {
        name: "Pro".to_owned(),
        price: 12,
        features: vec!["Everything".to_owned()],
        highlight: true,
    };
    state.update_plan(1, edited.clone());
    assert_eq!(state.plans[1], edited);

    state.update_plan(99, edited);
    assert_eq!(state.plans.len(), 3);
}

#[test]
fn add_and_remove_adjust_the_grid() {
    let mut state = PlansState::default();
    state.add_plan(Plan {
        name: "Enterprise".to_owned(),
        price: 99,
        features: Vec::new(),
        highlight: false,
    });
    assert_eq!(state.plans.len(), 4);
    state.remove_plan(3);
    assert_eq!(state.plans.len(), 3);
    state.remove_plan(99);
    assert_eq!(state.plans.len(), 3);
}
