//! Error types for the pet simulation.
//!
//! Every refused care action is an [`ActionError`]: an advisory, non-fatal
//! outcome carrying the sentence shown to the user and returned on its own.
//! Anything that can fail outside the game rules (configuration, runtime
//! start-up) funnels into [`Error`].  All game-rule variants are `Copy`.

use core::fmt;

use crate::app::ports::ConfigError;
use crate::need::NeedKind;

// ---------------------------------------------------------------------------
// Action rejections
// ---------------------------------------------------------------------------

/// Why a command was refused.  State is never modified on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    /// The pet is dead; only a new pet can be created.
    Dead,
    /// The pet is asleep; only Rest (wake up) is accepted.
    Sleeping,
    /// The target need is at zero and the cooldown window is still open.
    NotNeeded(NeedKind),
    /// Rest requested with a Tired score of zero.
    NotTired,
    /// Rest requested while another need is critical.
    OtherNeedCritical(NeedKind),
    /// New pet requested while the current one is alive.
    StillAlive,
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dead => write!(f, "Your pet has died. Please create a new pet."),
            Self::Sleeping => write!(f, "Your pet is sleeping. Wake it up first!"),
            Self::NotNeeded(need) => {
                write!(f, "Your pet doesn't need to {} now!", need.action())
            }
            Self::NotTired => write!(f, "Your pet is not tired!"),
            Self::OtherNeedCritical(need) => {
                write!(f, "Please {} your pet first!", need.action())
            }
            Self::StillAlive => write!(f, "Your pet is still alive!"),
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum Error {
    /// Configuration is invalid or could not be loaded.
    Config(ConfigError),
    /// The ticker thread could not be started.
    Runtime(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Runtime(msg) => write!(f, "runtime: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
impl std::error::Error for ActionError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
