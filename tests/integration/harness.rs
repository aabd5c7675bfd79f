//! Test harness: a recording event sink and a simulated clock.
//!
//! Records every event so tests can assert on the full notice history
//! without a terminal, and drives the engine in fixed ticks the way the
//! real ticker does.

use pocketpet::app::commands::PetCommand;
use pocketpet::app::engine::PetEngine;
use pocketpet::app::events::{PetEvent, PetSnapshot};
use pocketpet::app::ports::EventSink;
use pocketpet::app::service::ActionOutcome;
use pocketpet::config::PetConfig;
use pocketpet::error::ActionError;
use pocketpet::need::NeedKind;

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<PetEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PetEvent::Notice(text) => Some(text.as_str()),
                PetEvent::StateChanged => None,
            })
            .collect()
    }

    pub fn count_notices_containing(&self, needle: &str) -> usize {
        self.notices().iter().filter(|n| n.contains(needle)).count()
    }

    pub fn state_changes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PetEvent::StateChanged))
            .count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &PetEvent) {
        self.events.push(event.clone());
    }
}

// ── Harness ───────────────────────────────────────────────────

/// An engine on a simulated clock, stepped in `tick_ms` increments.
pub struct Harness {
    pub engine: PetEngine,
    pub sink: RecordingSink,
    pub now_ms: u64,
}

#[allow(dead_code)]
impl Harness {
    pub fn new() -> Self {
        Self::with_config(PetConfig::default())
    }

    pub fn with_config(config: PetConfig) -> Self {
        let mut sink = RecordingSink::new();
        let mut engine = PetEngine::new(config, 0).unwrap();
        engine.start(&mut sink);
        Self {
            engine,
            sink,
            now_ms: 0,
        }
    }

    /// Advance simulated time by `ms`, one tick at a time.
    pub fn run_for(&mut self, ms: u64) {
        let tick = u64::from(self.engine.config().tick_ms);
        let end = self.now_ms + ms;
        while self.now_ms < end {
            let step = tick.min(end - self.now_ms);
            self.now_ms += step;
            self.engine.advance(step, self.now_ms, &mut self.sink);
        }
    }

    /// Advance simulated time by `ms` in a single step.
    pub fn jump(&mut self, ms: u64) {
        self.now_ms += ms;
        self.engine.advance(ms, self.now_ms, &mut self.sink);
    }

    pub fn command(&mut self, cmd: PetCommand) -> Result<ActionOutcome, ActionError> {
        self.engine.handle_command(cmd, self.now_ms, &mut self.sink)
    }

    pub fn set_need(&mut self, kind: NeedKind, value: i32) {
        self.engine.set_need_score(kind, value, &mut self.sink);
    }

    pub fn set_health(&mut self, value: i32) {
        self.engine.set_health(value, self.now_ms, &mut self.sink);
    }

    pub fn snapshot(&self) -> PetSnapshot {
        self.engine.snapshot()
    }

    pub fn score(&self, kind: NeedKind) -> u8 {
        self.engine.service().score(kind)
    }
}
