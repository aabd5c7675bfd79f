//! Pet service — the hexagonal core.
//!
//! [`PetService`] owns the lifecycle FSM and the pet context.  It exposes
//! the state-model operations driven by timers (need ticks, health drift,
//! auto-wake, happy revert) and the action processor driven by the user.
//! Every entry point takes the current time and an [`EventSink`], so the
//! whole service is testable without real clocks or output.
//!
//! ```text
//!  timers ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!             │        PetService        │
//! commands ──▶│  FSM · needs · health    │
//!             └──────────────────────────┘
//! ```

use log::{debug, info};

use crate::config::PetConfig;
use crate::error::ActionError;
use crate::fsm::context::PetContext;
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};
use crate::need::{Appearance, NeedKind};

use super::commands::PetCommand;
use super::events::{PetEvent, PetSnapshot};
use super::ports::EventSink;

/// What a successful command did, so timer owners can follow up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A need was satisfied; the happy display is showing.
    Cared(NeedKind),
    /// The pet fell asleep.
    Slept,
    /// The pet was woken up.
    Woke,
    /// A dead pet was replaced by a fresh one.
    Reborn,
}

// ───────────────────────────────────────────────────────────────
// PetService
// ───────────────────────────────────────────────────────────────

pub struct PetService {
    fsm: Fsm,
    ctx: PetContext,
}

impl PetService {
    /// A fresh pet born at `now_ms`.
    ///
    /// Does **not** start the FSM — call [`start`](Self::start) next.
    pub fn new(config: PetConfig, now_ms: u64) -> Self {
        Self {
            fsm: Fsm::new(build_state_table(), StateId::Awake),
            ctx: PetContext::new(config, now_ms),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        self.fsm.start(&mut self.ctx);
        info!("PetService started in {:?}", self.fsm.current_state());
        self.flush(sink);
    }

    // ── Timer-driven state model ──────────────────────────────

    /// Grow one need by its weight.  Frozen while asleep or dead.
    pub fn apply_need_tick(&mut self, kind: NeedKind, now_ms: u64, sink: &mut impl EventSink) {
        self.ctx.now_ms = now_ms;
        if self.ctx.is_dead() {
            return;
        }
        if !self.ctx.sleeping {
            self.ctx.scores.increment(kind, kind.weight());
            debug!("need tick: {} -> {}", kind, self.ctx.scores.get(kind));
            self.ctx.recompute();
        }
        self.flush(sink);
    }

    /// Drift health by one step.
    ///
    /// Asleep or calm: recover.  Awake with any critical need: lose a flat
    /// `health_decay`, however many needs are critical.  Reaching zero kills.
    pub fn apply_health_tick(&mut self, now_ms: u64, sink: &mut impl EventSink) {
        self.ctx.now_ms = now_ms;
        if self.ctx.is_dead() {
            return;
        }

        let health = i32::from(self.ctx.health);
        let recovery = i32::from(self.ctx.config.health_recovery);
        let decay = i32::from(self.ctx.config.health_decay);

        if self.ctx.sleeping || !self.ctx.scores.any_critical() {
            self.ctx.set_health(health + recovery);
        } else {
            self.ctx.set_health(health - decay);
            debug!("health tick: critical need, health -> {}", self.ctx.health);
            if self.ctx.health == 0 {
                self.fsm.force_transition(StateId::Dead, &mut self.ctx);
            }
        }
        self.flush(sink);
    }

    /// Wake the pet if it has slept long enough.
    pub fn check_auto_wake(&mut self, now_ms: u64, sink: &mut impl EventSink) {
        self.ctx.now_ms = now_ms;
        let before = self.fsm.current_state();
        self.fsm.tick(&mut self.ctx);
        if self.fsm.current_state() != before {
            self.flush(sink);
        }
    }

    /// End the happy display.  Stale fires (pet asleep, dead, or
    /// the display already replaced) do nothing.
    pub fn revert_happy(&mut self, now_ms: u64, sink: &mut impl EventSink) {
        self.ctx.now_ms = now_ms;
        if self.fsm.current_state() != StateId::Awake || self.ctx.appearance != Appearance::Happy {
            debug!("happy revert skipped: state={:?}", self.fsm.current_state());
            return;
        }
        self.ctx.appearance = Appearance::from_need(self.ctx.scores.most_pressing());
        self.flush(sink);
    }

    /// Re-derive the current need, notifying on a newly critical one.
    pub fn recompute_current_need(&mut self, sink: &mut impl EventSink) -> Option<NeedKind> {
        self.ctx.recompute();
        self.flush(sink);
        self.ctx.current_need()
    }

    // ── Raw writes (clamped) ──────────────────────────────────

    pub fn set_need_score(&mut self, kind: NeedKind, value: i32, sink: &mut impl EventSink) {
        if self.ctx.is_dead() {
            return;
        }
        self.ctx.scores.set(kind, value);
        self.ctx.recompute();
        self.flush(sink);
    }

    pub fn set_health(&mut self, value: i32, now_ms: u64, sink: &mut impl EventSink) {
        self.ctx.now_ms = now_ms;
        if self.ctx.is_dead() {
            return;
        }
        self.ctx.set_health(value);
        if self.ctx.health == 0 {
            self.fsm.force_transition(StateId::Dead, &mut self.ctx);
        }
        self.flush(sink);
    }

    // ── Action processor ──────────────────────────────────────

    /// Validate and apply a user command.
    ///
    /// Preconditions are checked in order: death, sleep, cooldown, then
    /// the Rest-specific rules.  A rejection leaves the pet untouched.
    pub fn handle_command(
        &mut self,
        cmd: PetCommand,
        now_ms: u64,
        sink: &mut impl EventSink,
    ) -> Result<ActionOutcome, ActionError> {
        self.ctx.now_ms = now_ms;
        let state = self.fsm.current_state();

        let outcome = match (cmd, state) {
            (PetCommand::NewPet, StateId::Dead) => {
                self.fsm.force_transition(StateId::Awake, &mut self.ctx);
                ActionOutcome::Reborn
            }
            (PetCommand::NewPet, _) => return Err(ActionError::StillAlive),
            (_, StateId::Dead) => return Err(ActionError::Dead),

            (PetCommand::Rest, StateId::Asleep) => {
                self.fsm.force_transition(StateId::Awake, &mut self.ctx);
                ActionOutcome::Woke
            }
            (_, StateId::Asleep) => return Err(ActionError::Sleeping),

            (PetCommand::Rest, StateId::Awake) => {
                self.check_can_sleep()?;
                self.fsm.force_transition(StateId::Asleep, &mut self.ctx);
                ActionOutcome::Slept
            }
            (care, StateId::Awake) => {
                // Every command but NewPet has a target need.
                let Some(need) = care.target_need() else {
                    return Err(ActionError::StillAlive);
                };
                self.check_cooldown(need)?;
                self.apply_care(care, need);
                ActionOutcome::Cared(need)
            }
        };

        self.ctx.last_action_ms = now_ms;
        info!("command {} accepted: {:?}", cmd, outcome);
        self.flush(sink);
        Ok(outcome)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn snapshot(&self) -> PetSnapshot {
        PetSnapshot {
            state: self.fsm.current_state(),
            health: self.ctx.health,
            scores: self.ctx.scores,
            current_need: self.ctx.current_need(),
            appearance: self.ctx.appearance,
            sleeping: self.ctx.sleeping,
            dead: self.ctx.is_dead(),
        }
    }

    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    pub fn health(&self) -> u8 {
        self.ctx.health
    }

    pub fn score(&self, kind: NeedKind) -> u8 {
        self.ctx.scores.get(kind)
    }

    pub fn current_need(&self) -> Option<NeedKind> {
        self.ctx.current_need()
    }

    pub fn appearance(&self) -> Appearance {
        self.ctx.appearance
    }

    pub fn is_sleeping(&self) -> bool {
        self.ctx.sleeping
    }

    pub fn is_dead(&self) -> bool {
        self.ctx.is_dead()
    }

    pub fn last_action_ms(&self) -> u64 {
        self.ctx.last_action_ms
    }

    pub fn config(&self) -> &PetConfig {
        &self.ctx.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn check_cooldown(&self, need: NeedKind) -> Result<(), ActionError> {
        let cooling = self.ctx.ms_since_last_action() < u64::from(self.ctx.config.action_cooldown_ms);
        if self.ctx.scores.get(need) == 0 && cooling {
            return Err(ActionError::NotNeeded(need));
        }
        Ok(())
    }

    fn check_can_sleep(&self) -> Result<(), ActionError> {
        if self.ctx.scores.get(NeedKind::Tired) == 0 {
            return Err(ActionError::NotTired);
        }
        if let Some(other) = self.ctx.scores.critical_other_than(NeedKind::Tired) {
            return Err(ActionError::OtherNeedCritical(other));
        }
        Ok(())
    }

    fn apply_care(&mut self, cmd: PetCommand, need: NeedKind) {
        self.ctx.scores.reset(need);
        self.ctx.notify(format!("Performed {}", cmd));
        // Forget the alert so a second need that is still critical notifies again.
        self.ctx.alerted = None;
        self.ctx.appearance = Appearance::Happy;
        self.ctx.recompute();
    }

    /// Emit queued notices, then a state-changed signal.
    fn flush(&mut self, sink: &mut impl EventSink) {
        for text in self.ctx.take_notices() {
            sink.emit(&PetEvent::Notice(text));
        }
        sink.emit(&PetEvent::StateChanged);
    }
}
