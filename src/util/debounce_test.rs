use super::*;

#[test]
fn arm_invalidates_previous_tokens() {
    let gate = DebounceGate::new();
    let first = gate.arm();
    assert!(gate.is_current(first));
    let second = gate.arm();
    assert!(!gate.is_current(first));
    assert!(gate.is_current(second));
}

#[test]
fn burst_of_five_edits_flushes_once_with_final_value() {
    let gate = DebounceGate::new();
    let edits = ["l", "li", "lin", "link", "links"];

    // Each keystroke re-arms the gate before the previous flush fires.
    let scheduled: Vec<(u64, &str)> = edits.iter().map(|v| (gate.arm(), *v)).collect();

    // All five timers eventually wake; only the latest token may flush.
    let mut persisted: Vec<&str> = Vec::new();
    for (token, value) in scheduled {
        gate.fire_if_current(token, || persisted.push(value));
    }

    assert_eq!(persisted, vec!["links"]);
}

#[test]
fn flush_runs_when_no_later_edit_arrives() {
    let gate = DebounceGate::new();
    let token = gate.arm();
    let mut ran = false;
    assert!(gate.fire_if_current(token, || ran = true));
    assert!(ran);
}

#[test]
fn clones_share_one_generation_counter() {
    let gate = DebounceGate::new();
    let clone = gate.clone();
    let token = gate.arm();
    assert!(clone.is_current(token));
    clone.arm();
    assert!(!gate.is_current(token));
}
