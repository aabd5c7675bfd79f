//! Port traits — the hexagonal boundary between game logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ PetEngine (domain)
//! ```
//!
//! Driven adapters (presentation, clock, configuration) implement these
//! traits.  The [`PetEngine`](super::engine::PetEngine) consumes them via
//! generics, so the domain core never touches stdout, files or wall time.

use crate::config::PetConfig;
use crate::scheduler::TimerId;

use super::events::PetEvent;

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → presentation / logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits [`PetEvent`]s through this port.  Adapters decide
/// where they go (console, log, a GUI event queue, ...).
pub trait EventSink {
    fn emit(&mut self, event: &PetEvent);
}

/// Fan an event out to two sinks, left first.
impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn emit(&mut self, event: &PetEvent) {
        self.0.emit(event);
        self.1.emit(event);
    }
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic time source, in milliseconds since an arbitrary origin.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

// ───────────────────────────────────────────────────────────────
// Configuration port
// ───────────────────────────────────────────────────────────────

/// Loads game configuration.
///
/// Implementations MUST run [`PetConfig::validate`] before returning a
/// config.  Invalid values are rejected, not clamped.
pub trait ConfigPort {
    /// Returns [`ConfigError::NotFound`] when no stored config exists.
    fn load(&self) -> Result<PetConfig, ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Scheduler delegate (decouples scheduler from the pet model)
// ───────────────────────────────────────────────────────────────

/// Callback trait that the scheduler invokes when a timer fires.
///
/// The [`Scheduler`](crate::scheduler::Scheduler) knows only timer ids
/// and intervals; whoever implements this decides what a fire means.
/// `offset_ms` is how far into the current step the fire came due.
pub trait SchedulerDelegate {
    fn on_timer_fired(&mut self, timer: TimerId, kind: ScheduleFiredKind, offset_ms: u64);
}

/// Discriminant passed to [`SchedulerDelegate::on_timer_fired`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleFiredKind {
    /// A recurring periodic timer fired.
    Periodic,
    /// A one-shot timer fired (removed after).
    OneShot,
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No config source present.
    NotFound,
    /// Stored config could not be parsed.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error reading the source.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}
