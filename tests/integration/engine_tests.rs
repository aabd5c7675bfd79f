//! Timer-driven scenarios: need growth, health drift, sleep and death.

use crate::harness::Harness;

use pocketpet::app::commands::PetCommand;
use pocketpet::error::ActionError;
use pocketpet::fsm::StateId;
use pocketpet::need::{Appearance, NeedKind};

// ── Need growth ───────────────────────────────────────────────

#[test]
fn no_tick_before_first_interval() {
    let mut h = Harness::new();
    h.run_for(4_900);
    assert!(NeedKind::ALL.iter().all(|&k| h.score(k) == 0));

    h.run_for(100);
    assert_eq!(h.score(NeedKind::Hungry), 3);
}

#[test]
fn needs_grow_by_weight_on_their_own_intervals() {
    let mut h = Harness::new();
    h.run_for(15_000);
    assert_eq!(h.score(NeedKind::Hungry), 9);
    assert_eq!(h.score(NeedKind::Dirty), 5);
    assert_eq!(h.score(NeedKind::Tired), 4);
    assert_eq!(h.score(NeedKind::Bored), 2);
}

#[test]
fn hungry_becomes_critical_and_alerts_once() {
    let mut h = Harness::new();
    h.run_for(20_000);
    assert_eq!(h.score(NeedKind::Hungry), 10);
    assert_eq!(h.snapshot().current_need, Some(NeedKind::Hungry));
    assert_eq!(h.snapshot().appearance, Appearance::Need(NeedKind::Hungry));

    h.run_for(5_000);
    assert_eq!(
        h.sink.count_notices_containing("Your pet is hungry! Please feed it."),
        1
    );
}

#[test]
fn every_tick_signals_state_changed() {
    let mut h = Harness::new();
    h.sink.clear();
    h.run_for(1_000);
    // The health tick signals; an idle wake check stays quiet.
    assert_eq!(h.sink.state_changes(), 1);
}

// ── Health drift ──────────────────────────────────────────────

#[test]
fn calm_pet_recovers_health() {
    let mut h = Harness::new();
    h.set_health(50);
    h.run_for(3_000);
    assert_eq!(h.snapshot().health, 65);
}

#[test]
fn health_decay_is_flat_for_any_number_of_critical_needs() {
    for critical in 1..=3 {
        let mut h = Harness::new();
        for &kind in &NeedKind::ALL[..critical] {
            h.set_need(kind, 10);
        }
        h.run_for(1_000);
        assert_eq!(h.snapshot().health, 98, "{} critical needs", critical);
    }
}

#[test]
fn starving_pet_dies_and_timers_stop() {
    let mut h = Harness::new();
    h.run_for(69_000);
    assert_eq!(h.engine.service().state(), StateId::Awake);
    assert_eq!(h.snapshot().health, 2);

    h.run_for(1_000);
    let snap = h.snapshot();
    assert!(snap.dead);
    assert_eq!(snap.health, 0);
    assert_eq!(snap.appearance, Appearance::Dead);
    assert!(NeedKind::ALL.iter().all(|&k| snap.scores.get(k) == 0));
    assert!(!h.engine.scheduler().is_running());
}

#[test]
fn death_emits_exactly_one_notice_and_then_silence() {
    let mut h = Harness::new();
    h.set_need(NeedKind::Hungry, 10);
    h.set_health(2);
    h.run_for(1_000);
    assert!(h.snapshot().dead);

    let after_death = h.sink.events.len();
    h.run_for(60_000);
    assert_eq!(h.sink.events.len(), after_death);
    assert_eq!(h.sink.count_notices_containing("Your pet has died."), 1);
    assert_eq!(
        h.sink.notices().last().copied(),
        Some("Your pet has died. Please create a new pet.")
    );
}

#[test]
fn new_pet_after_death_restarts_the_clock() {
    let mut h = Harness::new();
    h.set_health(0);
    assert!(h.snapshot().dead);
    h.run_for(10_000);

    h.command(PetCommand::NewPet).unwrap();
    let snap = h.snapshot();
    assert_eq!(snap.health, 100);
    assert_eq!(snap.appearance, Appearance::Normal);
    assert!(!snap.dead && !snap.sleeping);
    assert_eq!(h.sink.count_notices_containing("Created a new pet!"), 1);

    // Fresh phase: the first hungry tick is a full interval away.
    h.run_for(4_900);
    assert_eq!(h.score(NeedKind::Hungry), 0);
    h.run_for(100);
    assert_eq!(h.score(NeedKind::Hungry), 3);
}

// ── Sleep ─────────────────────────────────────────────────────

#[test]
fn sleeping_freezes_needs_and_recovers_health() {
    let mut h = Harness::new();
    h.set_health(20);
    h.set_need(NeedKind::Tired, 5);
    h.command(PetCommand::Rest).unwrap();

    h.run_for(15_000);
    let snap = h.snapshot();
    assert!(snap.sleeping);
    assert!(NeedKind::ALL.iter().all(|&k| snap.scores.get(k) == 0));
    assert_eq!(snap.health, 95);
    assert_eq!(snap.current_need, Some(NeedKind::Tired));
}

#[test]
fn pet_wakes_by_itself_after_sixty_seconds() {
    let mut h = Harness::new();
    h.set_need(NeedKind::Tired, 10);
    h.command(PetCommand::Rest).unwrap();
    assert_eq!(h.snapshot().appearance, Appearance::Sleeping);

    h.run_for(59_900);
    assert!(h.snapshot().sleeping);

    h.run_for(1_100);
    let snap = h.snapshot();
    assert!(!snap.sleeping);
    assert_eq!(snap.current_need, None);
    assert_eq!(snap.appearance, Appearance::Normal);
    assert_eq!(h.sink.count_notices_containing("Your pet woke up!"), 1);
}

#[test]
fn critical_need_that_survived_sleep_alerts_again_on_waking() {
    let mut h = Harness::new();
    h.set_need(NeedKind::Tired, 3);
    h.set_need(NeedKind::Dirty, 9);
    h.command(PetCommand::Rest).unwrap();
    h.set_need(NeedKind::Dirty, 10);

    h.command(PetCommand::Rest).unwrap();
    assert_eq!(h.snapshot().current_need, Some(NeedKind::Dirty));
    assert_eq!(
        h.sink.count_notices_containing("Your pet needs cleaning! Please clean it."),
        1
    );
}

// ── Happy display ─────────────────────────────────────────────

#[test]
fn happy_display_lasts_two_seconds() {
    let mut h = Harness::new();
    h.set_need(NeedKind::Hungry, 15);
    assert_eq!(h.score(NeedKind::Hungry), 10);

    h.command(PetCommand::Feed).unwrap();
    assert_eq!(h.snapshot().appearance, Appearance::Happy);
    assert_eq!(h.score(NeedKind::Hungry), 0);

    h.run_for(1_900);
    assert_eq!(h.snapshot().appearance, Appearance::Happy);
    h.run_for(100);
    assert_eq!(h.snapshot().appearance, Appearance::Normal);
}

#[test]
fn happy_reverts_to_remaining_critical_need() {
    let mut h = Harness::new();
    h.set_need(NeedKind::Hungry, 10);
    h.set_need(NeedKind::Bored, 10);
    h.command(PetCommand::Feed).unwrap();

    assert_eq!(h.snapshot().current_need, Some(NeedKind::Bored));
    // Bored was masked by Hungry until the feed cleared it.
    assert_eq!(
        h.sink.count_notices_containing("Your pet is bored! Please play it."),
        1
    );

    h.run_for(2_000);
    assert_eq!(h.snapshot().appearance, Appearance::Need(NeedKind::Bored));
}

#[test]
fn second_care_extends_happy_window() {
    let mut h = Harness::new();
    h.set_need(NeedKind::Hungry, 5);
    h.set_need(NeedKind::Bored, 5);
    h.command(PetCommand::Feed).unwrap();
    h.run_for(1_500);
    h.command(PetCommand::Play).unwrap();

    h.run_for(1_000);
    assert_eq!(h.snapshot().appearance, Appearance::Happy);
    h.run_for(1_000);
    assert_eq!(h.snapshot().appearance, Appearance::Normal);
}

#[test]
fn falling_asleep_during_happy_window_keeps_sleep_display() {
    let mut h = Harness::new();
    h.set_need(NeedKind::Hungry, 4);
    h.set_need(NeedKind::Tired, 4);
    h.command(PetCommand::Feed).unwrap();
    h.run_for(500);
    h.command(PetCommand::Rest).unwrap();

    h.run_for(3_000);
    assert_eq!(h.snapshot().appearance, Appearance::Sleeping);
}

#[test]
fn dead_pet_rejects_care_until_recreated() {
    let mut h = Harness::new();
    h.set_health(0);
    for cmd in [PetCommand::Feed, PetCommand::Clean, PetCommand::Play, PetCommand::Rest] {
        assert_eq!(h.command(cmd), Err(ActionError::Dead));
    }
    assert!(h.command(PetCommand::NewPet).is_ok());
    assert_eq!(h.command(PetCommand::NewPet), Err(ActionError::StillAlive));
}

// ── Step size ─────────────────────────────────────────────────

#[test]
fn one_long_step_matches_many_ticks() {
    let mut stepped = Harness::new();
    let mut jumped = Harness::new();

    stepped.run_for(80_000);
    jumped.jump(80_000);

    assert!(jumped.snapshot().dead);
    assert_eq!(jumped.snapshot(), stepped.snapshot());
    assert_eq!(jumped.sink.notices(), stepped.sink.notices());
}

#[test]
fn long_step_while_asleep_wakes_on_time() {
    let config = pocketpet::config::PetConfig {
        sleep_duration_ms: 5_000,
        ..pocketpet::config::PetConfig::default()
    };
    let mut stepped = Harness::with_config(config.clone());
    let mut jumped = Harness::with_config(config);
    for h in [&mut stepped, &mut jumped] {
        h.set_need(NeedKind::Tired, 10);
        h.command(PetCommand::Rest).unwrap();
    }

    stepped.run_for(12_000);
    jumped.jump(12_000);

    assert!(!jumped.snapshot().sleeping);
    assert_eq!(jumped.snapshot(), stepped.snapshot());
    assert_eq!(jumped.score(NeedKind::Hungry), 3);
}
