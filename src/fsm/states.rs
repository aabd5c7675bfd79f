//! Concrete state handler functions and table builder.
//!
//! Each state is defined by plain `fn` pointers — no closures, no
//! dynamic dispatch.
//!
//! ```text
//!            [Rest, Tired > 0, nothing else critical]
//!  AWAKE ─────────────────────────────────────────────▶ ASLEEP
//!    ▲  ◀──────────[Rest again | asleep ≥ 60 s]────────────┘
//!    │
//!  [health == 0]
//!    ▼
//!  DEAD ──[NewPet]──▶ AWAKE
//! ```

use super::context::PetContext;
use super::{StateDescriptor, StateId};
use crate::need::{Appearance, MAX_HEALTH, NeedKind};
use log::{info, warn};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the state table.  Called once per pet service.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0 — Awake
        StateDescriptor {
            id: StateId::Awake,
            name: "Awake",
            on_enter: Some(awake_enter),
            on_exit: None,
            on_update: awake_update,
        },
        // Index 1 — Asleep
        StateDescriptor {
            id: StateId::Asleep,
            name: "Asleep",
            on_enter: Some(asleep_enter),
            on_exit: Some(asleep_exit),
            on_update: asleep_update,
        },
        // Index 2 — Dead
        StateDescriptor {
            id: StateId::Dead,
            name: "Dead",
            on_enter: Some(dead_enter),
            on_exit: Some(dead_exit),
            on_update: dead_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  AWAKE state
// ═══════════════════════════════════════════════════════════════════════════

fn awake_enter(ctx: &mut PetContext) {
    ctx.sleeping = false;
    // Forget the last alert so a need that is already critical notifies again.
    ctx.alerted = None;
    ctx.appearance = Appearance::Normal;
    ctx.recompute();
    info!("AWAKE: health={} appearance={:?}", ctx.health, ctx.appearance);
}

fn awake_update(ctx: &mut PetContext) -> Option<StateId> {
    if ctx.health == 0 {
        return Some(StateId::Dead);
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  ASLEEP state — needs frozen, health recovering
// ═══════════════════════════════════════════════════════════════════════════

fn asleep_enter(ctx: &mut PetContext) {
    ctx.scores.reset(NeedKind::Tired);
    ctx.sleeping = true;
    ctx.sleep_started_ms = ctx.now_ms;
    ctx.appearance = Appearance::Sleeping;
    ctx.notify(Appearance::Sleeping.message());
    info!(
        "ASLEEP: sleeping for up to {}s",
        ctx.config.sleep_duration_ms / 1000
    );
}

fn asleep_update(ctx: &mut PetContext) -> Option<StateId> {
    if ctx.ms_asleep() >= u64::from(ctx.config.sleep_duration_ms) {
        info!("ASLEEP: slept {}ms, waking up", ctx.ms_asleep());
        return Some(StateId::Awake);
    }
    None
}

fn asleep_exit(ctx: &mut PetContext) {
    ctx.sleeping = false;
    ctx.notify("Your pet woke up!");
}

// ═══════════════════════════════════════════════════════════════════════════
//  DEAD state — terminal until a new pet is created
// ═══════════════════════════════════════════════════════════════════════════

fn dead_enter(ctx: &mut PetContext) {
    ctx.health = 0;
    ctx.scores.clear();
    ctx.sleeping = false;
    ctx.alerted = None;
    ctx.appearance = Appearance::Dead;
    // Death supersedes anything queued in the same operation.
    ctx.notices.clear();
    ctx.notify("Your pet has died. Please create a new pet.");
    warn!("DEAD: health reached zero");
}

fn dead_update(_ctx: &mut PetContext) -> Option<StateId> {
    None
}

fn dead_exit(ctx: &mut PetContext) {
    ctx.health = MAX_HEALTH;
    ctx.scores.clear();
    ctx.last_action_ms = ctx.now_ms;
    ctx.notify("Created a new pet!");
    info!("DEAD: new pet created");
}
