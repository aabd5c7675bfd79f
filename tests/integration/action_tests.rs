//! Command validation: precondition order, rejections and effects.

use crate::harness::Harness;

use pocketpet::app::commands::PetCommand;
use pocketpet::app::service::ActionOutcome;
use pocketpet::error::ActionError;
use pocketpet::need::{Appearance, NeedKind};

#[test]
fn care_commands_reset_their_need() {
    for (cmd, need) in [
        (PetCommand::Feed, NeedKind::Hungry),
        (PetCommand::Clean, NeedKind::Dirty),
        (PetCommand::Play, NeedKind::Bored),
    ] {
        let mut h = Harness::new();
        h.set_need(need, 7);
        assert_eq!(h.command(cmd), Ok(ActionOutcome::Cared(need)));
        assert_eq!(h.score(need), 0);
        assert_eq!(
            h.sink.notices().last().copied(),
            Some(format!("Performed {}", cmd).as_str())
        );
    }
}

#[test]
fn unneeded_care_is_rejected_during_cooldown() {
    let mut h = Harness::new();
    h.run_for(1_000);
    let err = h.command(PetCommand::Clean).unwrap_err();
    assert_eq!(err, ActionError::NotNeeded(NeedKind::Dirty));
    assert_eq!(err.to_string(), "Your pet doesn't need to clean now!");
}

#[test]
fn cooldown_counts_from_last_success() {
    let mut h = Harness::new();
    h.run_for(5_000);
    h.command(PetCommand::Feed).unwrap();

    h.run_for(29_000);
    h.set_need(NeedKind::Bored, 0);
    assert_eq!(
        h.command(PetCommand::Play),
        Err(ActionError::NotNeeded(NeedKind::Bored))
    );

    h.run_for(1_000);
    assert!(h.command(PetCommand::Play).is_ok());
}

#[test]
fn rejection_leaves_the_pet_untouched() {
    let mut h = Harness::new();
    h.set_need(NeedKind::Hungry, 10);
    h.set_need(NeedKind::Tired, 4);
    let before = h.snapshot();
    let events = h.sink.events.len();

    assert!(h.command(PetCommand::Rest).is_err());
    assert!(h.command(PetCommand::Play).is_err());
    assert!(h.command(PetCommand::NewPet).is_err());

    assert_eq!(h.snapshot(), before);
    assert_eq!(h.sink.events.len(), events);
}

#[test]
fn rest_requires_tiredness() {
    let mut h = Harness::new();
    let err = h.command(PetCommand::Rest).unwrap_err();
    assert_eq!(err, ActionError::NotTired);
    assert_eq!(err.to_string(), "Your pet is not tired!");
}

#[test]
fn rest_blocked_by_other_critical_need_names_its_action() {
    let mut h = Harness::new();
    h.set_need(NeedKind::Tired, 10);
    h.set_need(NeedKind::Hungry, 10);
    let err = h.command(PetCommand::Rest).unwrap_err();
    assert_eq!(err, ActionError::OtherNeedCritical(NeedKind::Hungry));
    assert!(err.to_string().contains("feed"));
    assert!(!h.snapshot().sleeping);
}

#[test]
fn rest_blocked_by_highest_priority_other_need() {
    let mut h = Harness::new();
    h.set_need(NeedKind::Tired, 2);
    h.set_need(NeedKind::Bored, 10);
    h.set_need(NeedKind::Dirty, 10);
    assert_eq!(
        h.command(PetCommand::Rest),
        Err(ActionError::OtherNeedCritical(NeedKind::Dirty))
    );
}

#[test]
fn rest_puts_pet_to_sleep_and_again_wakes_it() {
    let mut h = Harness::new();
    h.set_need(NeedKind::Tired, 10);

    assert_eq!(h.command(PetCommand::Rest), Ok(ActionOutcome::Slept));
    let snap = h.snapshot();
    assert!(snap.sleeping);
    assert_eq!(snap.scores.get(NeedKind::Tired), 0);
    assert_eq!(snap.appearance, Appearance::Sleeping);
    assert_eq!(h.sink.notices().last().copied(), Some("Your pet is sleeping."));

    h.run_for(5_000);
    assert_eq!(h.command(PetCommand::Rest), Ok(ActionOutcome::Woke));
    assert!(!h.snapshot().sleeping);
    assert_eq!(h.sink.notices().last().copied(), Some("Your pet woke up!"));
}

#[test]
fn sleeping_pet_rejects_care() {
    let mut h = Harness::new();
    h.set_need(NeedKind::Tired, 10);
    h.set_need(NeedKind::Hungry, 6);
    h.command(PetCommand::Rest).unwrap();

    let err = h.command(PetCommand::Feed).unwrap_err();
    assert_eq!(err, ActionError::Sleeping);
    assert_eq!(err.to_string(), "Your pet is sleeping. Wake it up first!");
    assert_eq!(h.score(NeedKind::Hungry), 6);
}

#[test]
fn dead_rejection_wins_over_everything() {
    let mut h = Harness::new();
    h.set_health(0);
    let err = h.command(PetCommand::Feed).unwrap_err();
    assert_eq!(err.to_string(), "Your pet has died. Please create a new pet.");
}

#[test]
fn raw_writes_clamp() {
    let mut h = Harness::new();
    h.set_need(NeedKind::Bored, 42);
    assert_eq!(h.score(NeedKind::Bored), 10);
    h.set_need(NeedKind::Bored, -3);
    assert_eq!(h.score(NeedKind::Bored), 0);
    h.set_health(400);
    assert_eq!(h.snapshot().health, 100);
}
