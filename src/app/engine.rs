//! Pet engine — service plus its timers.
//!
//! [`PetEngine`] pairs a [`PetService`] with the [`Scheduler`] that drives
//! it.  The real-time driver only has to call [`advance`](PetEngine::advance)
//! with the elapsed time; fired timers are routed to the matching service
//! operation.  The engine also owns the timer side effects of commands:
//! arming the happy revert, and restarting the timer set for a new pet.

use log::{info, warn};

use crate::config::PetConfig;
use crate::error::ActionError;
use crate::need::NeedKind;
use crate::scheduler::{Scheduler, TimerId};

use super::commands::PetCommand;
use super::events::PetSnapshot;
use super::ports::{EventSink, ScheduleFiredKind, SchedulerDelegate};
use super::service::{ActionOutcome, PetService};

pub struct PetEngine {
    service: PetService,
    scheduler: Scheduler,
}

impl PetEngine {
    /// A fresh pet born at `now_ms` with the default timer set armed.
    /// Fails if `config` does not validate.
    pub fn new(config: PetConfig, now_ms: u64) -> crate::Result<Self> {
        config.validate()?;
        let scheduler = Scheduler::with_defaults(&config);
        Ok(Self {
            service: PetService::new(config, now_ms),
            scheduler,
        })
    }

    pub fn start(&mut self, sink: &mut impl EventSink) {
        self.service.start(sink);
        info!(
            "PetEngine started with {} timers",
            self.scheduler.active_count()
        );
    }

    /// Advance the timers by `elapsed_ms`, ending at `now_ms`.  Each fire
    /// is applied at the moment it came due within the step.
    pub fn advance(&mut self, elapsed_ms: u64, now_ms: u64, sink: &mut impl EventSink) {
        let mut dispatch = Dispatch {
            service: &mut self.service,
            sink,
            step_start_ms: now_ms.saturating_sub(elapsed_ms),
        };
        self.scheduler.tick(elapsed_ms, &mut dispatch);
        self.stop_timers_if_dead();
    }

    pub fn handle_command(
        &mut self,
        cmd: PetCommand,
        now_ms: u64,
        sink: &mut impl EventSink,
    ) -> Result<ActionOutcome, ActionError> {
        let outcome = self.service.handle_command(cmd, now_ms, sink)?;
        match outcome {
            ActionOutcome::Cared(_) => {
                let delay = self.service.config().happy_duration_ms;
                if self.scheduler.arm_one_shot(TimerId::HappyRevert, delay).is_none() {
                    warn!("PetEngine: no timer slot for happy revert");
                }
            }
            ActionOutcome::Reborn => {
                let config = self.service.config().clone();
                self.scheduler.restart(&config);
            }
            ActionOutcome::Slept => {
                self.scheduler.remove(TimerId::HappyRevert);
            }
            ActionOutcome::Woke => {}
        }
        Ok(outcome)
    }

    pub fn set_need_score(&mut self, kind: NeedKind, value: i32, sink: &mut impl EventSink) {
        self.service.set_need_score(kind, value, sink);
    }

    pub fn set_health(&mut self, value: i32, now_ms: u64, sink: &mut impl EventSink) {
        self.service.set_health(value, now_ms, sink);
        self.stop_timers_if_dead();
    }

    pub fn snapshot(&self) -> PetSnapshot {
        self.service.snapshot()
    }

    pub fn service(&self) -> &PetService {
        &self.service
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn config(&self) -> &PetConfig {
        self.service.config()
    }

    /// Cancel every timer, e.g. on shutdown.
    pub fn stop_timers(&mut self) {
        self.scheduler.stop();
    }

    fn stop_timers_if_dead(&mut self) {
        if self.service.is_dead() && self.scheduler.is_running() {
            self.scheduler.stop();
        }
    }
}

/// Routes timer fires to service operations.
struct Dispatch<'a, S: EventSink> {
    service: &'a mut PetService,
    sink: &'a mut S,
    step_start_ms: u64,
}

impl<S: EventSink> SchedulerDelegate for Dispatch<'_, S> {
    fn on_timer_fired(&mut self, timer: TimerId, _kind: ScheduleFiredKind, offset_ms: u64) {
        let at = self.step_start_ms + offset_ms;
        match timer {
            TimerId::Health => self.service.apply_health_tick(at, &mut *self.sink),
            TimerId::Need(kind) => self.service.apply_need_tick(kind, at, &mut *self.sink),
            TimerId::WakeCheck => self.service.check_auto_wake(at, &mut *self.sink),
            TimerId::HappyRevert => self.service.revert_happy(at, &mut *self.sink),
        }
    }
}
