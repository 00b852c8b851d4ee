use super::*;

fn link(id: &str, position: i32) -> Link {
    Link {
        id: id.to_owned(),
        user_id: "u1".to_owned(),
        title: format!("Link {id}"),
        url: "https://example.com/".to_owned(),
        is_active: true,
        position,
        clicks: 0,
        thumbnail_url: None,
    }
}

fn seeded() -> LinksState {
    let mut state = LinksState::default();
    state.set_all(vec![link("a", 0), link("b", 1), link("c", 2), link("d", 3)]);
    state
}

fn order(state: &LinksState) -> Vec<&str> {
    state.items.iter().map(|l| l.id.as_str()).collect()
}

fn positions(state: &LinksState) -> Vec<i32> {
    state.items.iter().map(|l| l.position).collect()
}

// =============================================================
// set_all / append
// =============================================================

#[test]
fn set_all_sorts_by_position() {
    let mut state = LinksState::default();
    state.set_all(vec![link("c", 2), link("a", 0), link("b", 1)]);
    assert_eq!(order(&state), vec!["a", "b", "c"]);
}

#[test]
fn append_assigns_next_dense_position() {
    let mut state = seeded();
    let appended = state.append(link("e", 0));
    assert_eq!(appended.position, 4);
    assert_eq!(state.items.last().map(|l| l.id.as_str()), Some("e"));
}

#[test]
fn append_after_delete_does_not_reuse_a_live_position() {
    let mut state = seeded();
    state.remove("c").expect("c exists");
    // Positions are now [0, 1, 3]; the next append must go past the tail.
    let appended = state.append(link("e", 0));
    assert_eq!(appended.position, 4);

    let mut seen = positions(&state);
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), state.items.len());
}

#[test]
fn append_to_empty_list_starts_at_zero() {
    let mut state = LinksState::default();
    let appended = state.append(link("a", 7));
    assert_eq!(appended.position, 0);
}

// =============================================================
// reorder — positions dense from 0, changed rows reported
// =============================================================

#[test]
fn reorder_moves_item_and_renumbers_contiguously() {
    let mut state = seeded();
    let changed = state.reorder(3, 0);
    assert_eq!(order(&state), vec!["d", "a", "b", "c"]);
    assert_eq!(positions(&state), vec![0, 1, 2, 3]);
    // Every row shifted, so every row is reported.
    assert_eq!(
        changed,
        vec![
            ("d".to_owned(), 0),
            ("a".to_owned(), 1),
            ("b".to_owned(), 2),
            ("c".to_owned(), 3),
        ]
    );
}

#[test]
fn reorder_reports_only_rows_whose_position_changed() {
    let mut state = seeded();
    let changed = state.reorder(2, 3);
    assert_eq!(order(&state), vec!["a", "b", "d", "c"]);
    assert_eq!(positions(&state), vec![0, 1, 2, 3]);
    assert_eq!(changed, vec![("d".to_owned(), 2), ("c".to_owned(), 3)]);
}

#[test]
fn reorder_noop_and_out_of_bounds_change_nothing() {
    let mut state = seeded();
    assert!(state.reorder(1, 1).is_empty());
    assert!(state.reorder(9, 0).is_empty());
    assert!(state.reorder(0, 9).is_empty());
    assert_eq!(order(&state), vec!["a", "b", "c", "d"]);
}

#[test]
fn positions_stay_contiguous_after_repeated_reorders() {
    let mut state = seeded();
    state.reorder(0, 3);
    state.reorder(2, 0);
    state.reorder(1, 2);
    assert_eq!(positions(&state), vec![0, 1, 2, 3]);
    assert_eq!(order(&state), vec!["d", "c", "b", "a"]);
}

// =============================================================
// delete rollback vs reorder no-rollback (pinned asymmetry)
// =============================================================

#[test]
fn failed_delete_restores_link_in_original_slot() {
    let mut state = seeded();
    let removed = state.remove("b").expect("b exists");
    assert_eq!(order(&state), vec!["a", "c", "d"]);

    // Simulated remote failure: roll back from the snapshot.
    state.restore(removed);
    assert_eq!(order(&state), vec!["a", "b", "c", "d"]);
    assert_eq!(positions(&state), vec![0, 1, 2, 3]);
}

#[test]
fn failed_reorder_keeps_new_client_order() {
    let mut state = seeded();
    let changed = state.reorder(0, 2);
    assert!(!changed.is_empty());

    // Simulated remote failure: the caller only records the error; the new
    // order stands.
    state.error = Some("link update failed: 500".to_owned());
    assert_eq!(order(&state), vec!["b", "c", "a", "d"]);
    assert_eq!(positions(&state), vec![0, 1, 2, 3]);
}

#[test]
fn remove_unknown_id_is_none() {
    let mut state = seeded();
    assert!(state.remove("zz").is_none());
    assert_eq!(state.items.len(), 4);
}

#[test]
fn restore_clamps_index_when_list_shrank() {
    let mut state = seeded();
    let removed = state.remove("d").expect("d exists");
    state.items.clear();
    state.restore(removed);
    assert_eq!(order(&state), vec!["d"]);
}

// =============================================================
// patch
// =============================================================

#[test]
fn patch_edits_matching_row_only() {
    let mut state = seeded();
    assert!(state.patch("c", |l| l.title = "Portfolio".to_owned()));
    assert_eq!(state.items[2].title, "Portfolio");
    assert!(!state.patch("zz", |l| l.title = "Nope".to_owned()));
}
