//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing game events to the `log` facade
//! (rendered by `tracing-subscriber` in the binary).  Paired with the
//! console view so every notice also lands in the log stream.

use log::{debug, info};

use crate::app::events::PetEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`PetEvent`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &PetEvent) {
        match event {
            PetEvent::Notice(text) => {
                info!("NOTICE | {}", text);
            }
            PetEvent::StateChanged => {
                debug!("STATE | changed");
            }
        }
    }
}
