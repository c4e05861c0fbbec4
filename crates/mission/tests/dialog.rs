mod common;

use common::arena;
use mission::ActionStatus;

#[test]
fn dialog_pauses_until_acknowledged() {
    let (mut mission, _) = arena();
    let dialog = mission.create_dialog("Hint", "Press 'q' to continue");
    let timer = mission.create_timer("Background", 1.0);
    mission.begin(timer);
    mission.begin(dialog);

    assert!(mission.clock().is_paused());
    assert_eq!(mission.pending_dialog(), Some("Press 'q' to continue"));

    for _ in 0..5 {
        mission.tick(1.0);
    }
    assert_eq!(mission.status(timer), ActionStatus::Pending);
    assert_eq!(mission.clock().ticks(), 0);

    assert!(mission.acknowledge_dialog());
    assert_eq!(mission.status(dialog), ActionStatus::Success);
    assert!(!mission.clock().is_paused());
    assert_eq!(mission.pending_dialog(), None);

    mission.tick(1.0);
    assert_eq!(mission.status(timer), ActionStatus::Success);
}

#[test]
fn acknowledging_without_a_dialog_is_a_no_op() {
    let (mut mission, _) = arena();
    assert!(!mission.acknowledge_dialog());
}

#[test]
fn dialog_acknowledgment_begins_its_continuation() {
    let (mut mission, _) = arena();
    let dialog = mission.create_dialog("Ready", "Get ready!");
    let next = mission.create_timer("Next", 2.0);
    mission.set_success_action(dialog, Some(next)).unwrap();

    mission.begin(dialog);
    mission.acknowledge_dialog();

    assert_eq!(mission.status(next), ActionStatus::Pending);
}

#[test]
fn newer_dialog_takes_the_slot() {
    let (mut mission, _) = arena();
    let first = mission.create_dialog("First", "one");
    let second = mission.create_dialog("Second", "two");

    mission.begin(first);
    mission.begin(second);
    assert_eq!(mission.pending_dialog(), Some("two"));

    assert!(mission.acknowledge_dialog());
    assert_eq!(mission.status(second), ActionStatus::Success);
    assert_eq!(mission.status(first), ActionStatus::Pending);
    assert!(!mission.acknowledge_dialog());
}

#[test]
fn resetting_a_dialog_releases_the_pause() {
    let (mut mission, _) = arena();
    let dialog = mission.create_dialog("Hint", "");
    mission.begin(dialog);
    assert_eq!(mission.pending_dialog(), Some("Press 'q'"));

    mission.reset(dialog);

    assert!(!mission.clock().is_paused());
    assert_eq!(mission.pending_dialog(), None);
    assert_eq!(mission.status(dialog), ActionStatus::None);
}

#[test]
fn destroying_a_dialog_releases_the_pause() {
    let (mut mission, _) = arena();
    let dialog = mission.create_dialog("Hint", "wait");
    mission.begin(dialog);

    assert!(mission.destroy_action(dialog));

    assert!(!mission.clock().is_paused());
    assert!(!mission.acknowledge_dialog());
}

#[cfg(feature = "serde")]
#[test]
fn snapshot_serializes_to_json() {
    let (mut mission, _) = arena();
    let tree = mission.create_sequential("Linear");
    let timer = mission.create_timer("Countdown", 3.0);
    mission.add_child(tree, timer).unwrap();
    mission.begin(tree);
    mission.tick(1.0);

    let snapshot = mission.snapshot();
    assert_eq!(snapshot.ticks, 1);
    assert_eq!(snapshot.elapsed_ms, 1000);
    assert_eq!(snapshot.actions.len(), 2);
    assert_eq!(snapshot.actions[1].parent, Some(tree.index()));

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["actions"][0]["name"], "Linear");
    assert_eq!(json["actions"][0]["kind"], "Sequential");
    assert_eq!(json["actions"][1]["status"], "Pending");
    assert_eq!(json["paused"], false);
}
