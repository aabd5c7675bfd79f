//! Timer/scheduler engine.
//!
//! Pure, tick-driven timers.  The real-time driver feeds elapsed
//! milliseconds into [`Scheduler::tick`]; timers that come due are
//! reported to a [`SchedulerDelegate`], which decides what each fire
//! means for the pet.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Timer slots                           │
//! │                                                             │
//! │  Health 1s │ Hungry 5s │ Dirty 15s │ Tired 15s │ Bored 10s  │
//! │  WakeCheck 1s          │ HappyRevert (one-shot, 2s)         │
//! │        │                          │                         │
//! │        ▼                          ▼                         │
//! │  ┌───────────────────────────────────────────────────────┐  │
//! │  │                 SchedulerDelegate                     │  │
//! │  └──────────────────────────┬────────────────────────────┘  │
//! │                             ▼                               │
//! │                PetService need / health ticks               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use crate::app::ports::{ScheduleFiredKind, SchedulerDelegate};
use crate::config::PetConfig;
use crate::need::NeedKind;
use log::{debug, info, warn};

// ═══════════════════════════════════════════════════════════════
//  Schedule types
// ═══════════════════════════════════════════════════════════════

/// Identity of a timer.  At most one live schedule per id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    Health,
    Need(NeedKind),
    WakeCheck,
    HappyRevert,
}

/// A single schedule entry.
#[derive(Debug, Clone)]
pub struct Schedule {
    pub timer: TimerId,
    pub kind: ScheduleKind,
}

/// The type of schedule determines how and when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleKind {
    /// Fire every `interval_ms`, first fire one interval after arming.
    Periodic { interval_ms: u32 },
    /// Fire once after `delay_ms`, then remove itself.
    OneShot { delay_ms: u32 },
}

impl ScheduleKind {
    /// Interval or delay, whichever applies.
    pub fn period_ms(self) -> u32 {
        match self {
            Self::Periodic { interval_ms } => interval_ms,
            Self::OneShot { delay_ms } => delay_ms,
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  Scheduler engine
// ═══════════════════════════════════════════════════════════════

/// Maximum number of concurrent schedules (stack-allocated).
const MAX_SCHEDULES: usize = 8;

/// The scheduler engine.
///
/// Decoupled from the pet model: when a timer fires it invokes the
/// [`SchedulerDelegate`] callback rather than touching game state.
pub struct Scheduler {
    schedules: heapless::Vec<ScheduleEntry, MAX_SCHEDULES>,
    /// Cleared by [`stop`](Self::stop), set again by [`restart`](Self::restart).
    running: bool,
}

#[derive(Debug, Clone)]
struct ScheduleEntry {
    schedule: Schedule,
    /// Milliseconds accumulated since the last fire (or since arming).
    elapsed_ms: u64,
}

impl Scheduler {
    /// An empty, running scheduler.
    pub fn new() -> Self {
        Self {
            schedules: heapless::Vec::new(),
            running: true,
        }
    }

    /// A scheduler with the default periodic timer set installed.
    pub fn with_defaults(config: &PetConfig) -> Self {
        let mut sched = Self::new();
        sched.install_defaults(config);
        sched
    }

    /// Add a schedule, replacing any live schedule with the same id.
    /// Returns the slot index, or `None` if full or zero-length.
    pub fn add(&mut self, schedule: Schedule) -> Option<usize> {
        if schedule.kind.period_ms() == 0 {
            warn!("Scheduler: refused zero-length {:?}", schedule.timer);
            return None;
        }
        let entry = ScheduleEntry {
            schedule,
            elapsed_ms: 0,
        };
        let timer = entry.schedule.timer;

        if let Some(i) = self.position(timer) {
            debug!("Scheduler: re-armed {:?} at slot {}", timer, i);
            self.schedules[i] = entry;
            return Some(i);
        }

        match self.schedules.push(entry) {
            Ok(()) => {
                let i = self.schedules.len() - 1;
                debug!("Scheduler: added {:?} at slot {}", timer, i);
                Some(i)
            }
            Err(_) => None,
        }
    }

    /// Arm (or re-arm) a one-shot timer.
    pub fn arm_one_shot(&mut self, timer: TimerId, delay_ms: u32) -> Option<usize> {
        self.add(Schedule {
            timer,
            kind: ScheduleKind::OneShot { delay_ms },
        })
    }

    /// Remove a schedule by id.  Removing an absent id is a no-op.
    pub fn remove(&mut self, timer: TimerId) {
        if let Some(i) = self.position(timer) {
            self.schedules.remove(i);
            debug!("Scheduler: removed {:?}", timer);
        }
    }

    pub fn is_armed(&self, timer: TimerId) -> bool {
        self.position(timer).is_some()
    }

    /// Cancel every timer.  Ticks are ignored until [`restart`](Self::restart).
    pub fn stop(&mut self) {
        self.schedules.clear();
        self.running = false;
        info!("Scheduler: stopped, all timers cancelled");
    }

    /// Stop, then reinstall the default timer set from scratch.
    pub fn restart(&mut self, config: &PetConfig) {
        self.stop();
        self.install_defaults(config);
        self.running = true;
        info!("Scheduler: restarted with {} timers", self.schedules.len());
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance every timer by `elapsed_ms`.
    ///
    /// Fires are replayed in time order.  Timers due at the same moment
    /// fire in slot order.  A long step yields the same fire sequence as
    /// many short ones, and each fire reports its offset into the step.
    pub fn tick(&mut self, elapsed_ms: u64, delegate: &mut dyn SchedulerDelegate) {
        if !self.running {
            return;
        }

        let mut offset_ms = 0;
        while let Some(wait) = self.next_due_in() {
            if offset_ms + wait > elapsed_ms {
                break;
            }
            offset_ms += wait;
            self.advance_all(wait);
            self.fire_due(offset_ms, delegate);
        }
        self.advance_all(elapsed_ms - offset_ms);
    }

    /// Number of live schedules.
    pub fn active_count(&self) -> usize {
        self.schedules.len()
    }

    // ── Internal ──────────────────────────────────────────────

    /// Time until the earliest live schedule comes due.
    fn next_due_in(&self) -> Option<u64> {
        self.schedules
            .iter()
            .map(|e| u64::from(e.schedule.kind.period_ms()).saturating_sub(e.elapsed_ms))
            .min()
    }

    fn advance_all(&mut self, ms: u64) {
        for entry in self.schedules.iter_mut() {
            entry.elapsed_ms += ms;
        }
    }

    /// Fire every schedule whose period has elapsed, in slot order.
    fn fire_due(&mut self, offset_ms: u64, delegate: &mut dyn SchedulerDelegate) {
        let mut finished: heapless::Vec<TimerId, MAX_SCHEDULES> = heapless::Vec::new();

        for entry in self.schedules.iter_mut() {
            let period = u64::from(entry.schedule.kind.period_ms());
            if entry.elapsed_ms < period {
                continue;
            }
            let timer = entry.schedule.timer;
            match entry.schedule.kind {
                ScheduleKind::Periodic { .. } => {
                    entry.elapsed_ms -= period;
                    delegate.on_timer_fired(timer, ScheduleFiredKind::Periodic, offset_ms);
                }
                ScheduleKind::OneShot { .. } => {
                    debug!("Scheduler: {:?} one-shot fired", timer);
                    delegate.on_timer_fired(timer, ScheduleFiredKind::OneShot, offset_ms);
                    // Capacity equals the slot count, so this cannot overflow.
                    let _ = finished.push(timer);
                }
            }
        }

        if !finished.is_empty() {
            self.schedules
                .retain(|e| !finished.contains(&e.schedule.timer));
        }
    }

    fn position(&self, timer: TimerId) -> Option<usize> {
        self.schedules
            .iter()
            .position(|e| e.schedule.timer == timer)
    }

    fn install_defaults(&mut self, config: &PetConfig) {
        let periodic = |timer, interval_ms| Schedule {
            timer,
            kind: ScheduleKind::Periodic { interval_ms },
        };

        self.add(periodic(TimerId::Health, config.health_interval_ms));
        for kind in NeedKind::ALL {
            self.add(periodic(TimerId::Need(kind), config.need_interval_ms(kind)));
        }
        self.add(periodic(TimerId::WakeCheck, config.wake_check_interval_ms));
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
