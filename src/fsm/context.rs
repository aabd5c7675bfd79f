//! Shared mutable context threaded through every FSM handler.
//!
//! `PetContext` is the pet itself: scores, health, sleep bookkeeping,
//! the current appearance and an outbox of user-facing notices.  State
//! handlers and the service both read and write it; the service drains
//! the outbox into the event sink after each operation.

use crate::config::PetConfig;
use crate::need::{Appearance, MAX_HEALTH, NeedKind, NeedScores};

use super::StateId;

pub struct PetContext {
    // -- Configuration --
    pub config: PetConfig,

    // -- Timing --
    /// Time of the operation currently being applied (ms).
    pub now_ms: u64,
    /// Time of the last successful care action (ms).
    pub last_action_ms: u64,
    /// Time the current sleep began (ms).  Meaningless while awake.
    pub sleep_started_ms: u64,

    // -- Pet state --
    /// Mirror of the FSM's current state, kept in sync on every transition.
    pub state: StateId,
    pub health: u8,
    pub scores: NeedScores,
    pub sleeping: bool,
    pub appearance: Appearance,
    /// Last critical need a notice was emitted for.
    pub alerted: Option<NeedKind>,

    // -- Outbox --
    /// Notices produced since the last drain.
    pub notices: Vec<String>,
}

impl PetContext {
    /// A fresh pet born at `now_ms`.
    pub fn new(config: PetConfig, now_ms: u64) -> Self {
        Self {
            config,
            now_ms,
            last_action_ms: now_ms,
            sleep_started_ms: 0,
            state: StateId::Awake,
            health: MAX_HEALTH,
            scores: NeedScores::default(),
            sleeping: false,
            appearance: Appearance::Normal,
            alerted: None,
            notices: Vec::new(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.state == StateId::Dead
    }

    /// Write health, clamping into `0..=MAX_HEALTH`.
    pub fn set_health(&mut self, value: i32) {
        self.health = value.clamp(0, i32::from(MAX_HEALTH)) as u8;
    }

    /// Highest-priority critical need.  Sleep reads as Tired.
    pub fn current_need(&self) -> Option<NeedKind> {
        if self.sleeping {
            Some(NeedKind::Tired)
        } else {
            self.scores.most_pressing()
        }
    }

    /// Milliseconds since the current sleep began.
    pub fn ms_asleep(&self) -> u64 {
        self.now_ms.saturating_sub(self.sleep_started_ms)
    }

    pub fn ms_since_last_action(&self) -> u64 {
        self.now_ms.saturating_sub(self.last_action_ms)
    }

    /// Re-derive the current need and refresh the appearance.
    ///
    /// Emits a notice when the pet enters a critical need it has not been
    /// alerted about yet.  Dead and sleeping pets keep their appearance and
    /// never alert.  The happy override is left alone; its timer restores
    /// the real appearance.
    pub fn recompute(&mut self) {
        if self.is_dead() || self.sleeping {
            return;
        }

        let need = self.scores.most_pressing();
        if need != self.alerted {
            if let Some(kind) = need {
                let info = kind.info();
                self.notices
                    .push(format!("{} Please {} it.", info.message, info.action));
            }
            self.alerted = need;
        }

        if self.appearance != Appearance::Happy {
            self.appearance = Appearance::from_need(need);
        }
    }

    pub fn notify(&mut self, text: impl Into<String>) {
        self.notices.push(text.into());
    }

    pub fn take_notices(&mut self) -> Vec<String> {
        core::mem::take(&mut self.notices)
    }
}
