//! Inbound commands to the pet engine.
//!
//! These represent care actions requested by the user through whatever
//! front end is attached.  The [`PetService`](super::service::PetService)
//! validates and applies them.

use core::fmt;
use core::str::FromStr;

use crate::need::NeedKind;

/// Commands the presentation layer can send into the game core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PetCommand {
    Feed,
    Clean,
    Play,
    /// Go to sleep, or wake up when already asleep.
    Rest,
    /// Replace a dead pet with a fresh one.
    NewPet,
}

impl PetCommand {
    /// The need this command satisfies.  `NewPet` has none.
    pub fn target_need(self) -> Option<NeedKind> {
        match self {
            Self::Feed => Some(NeedKind::Hungry),
            Self::Clean => Some(NeedKind::Dirty),
            Self::Play => Some(NeedKind::Bored),
            Self::Rest => Some(NeedKind::Tired),
            Self::NewPet => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Clean => "clean",
            Self::Play => "play",
            Self::Rest => "rest",
            Self::NewPet => "new",
        }
    }
}

impl fmt::Display for PetCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a word does not name a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown command '{}'", self.0)
    }
}

impl FromStr for PetCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "feed" => Ok(Self::Feed),
            "clean" => Ok(Self::Clean),
            "play" => Ok(Self::Play),
            "rest" | "sleep" | "wake" => Ok(Self::Rest),
            "new" | "newpet" | "new-pet" => Ok(Self::NewPet),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}
