//! Outbound game events.
//!
//! The [`PetService`](super::service::PetService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them: print, log, refresh a view.

use serde::Serialize;

use crate::fsm::StateId;
use crate::need::{Appearance, NeedKind, NeedScores};

/// Structured events emitted by the game core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetEvent {
    /// Something observable changed; re-read the snapshot.
    StateChanged,

    /// A user-facing log line.
    Notice(String),
}

/// A point-in-time view of the pet for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PetSnapshot {
    pub state: StateId,
    pub health: u8,
    pub scores: NeedScores,
    /// Highest-priority critical need (Tired while asleep).
    pub current_need: Option<NeedKind>,
    pub appearance: Appearance,
    pub sleeping: bool,
    pub dead: bool,
}
