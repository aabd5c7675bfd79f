//! Need kinds and the appearance lookup table.
//!
//! Every need is pure data: a weight, an icon, a message and the action
//! that satisfies it.  The weight doubles as the per-tick increment and
//! as the display priority when several needs are critical at once.
//!
//! ```text
//!  Need    weight  action   priority
//!  Dirty     5     clean    ████████  highest
//!  Tired     4     rest     ██████
//!  Hungry    3     feed     ████
//!  Bored     2     play     ██        lowest
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

/// Maximum need score.  A need at this score is *critical*.
pub const MAX_SCORE: u8 = 10;

/// Maximum pet health.
pub const MAX_HEALTH: u8 = 100;

// ---------------------------------------------------------------------------
// Need identity
// ---------------------------------------------------------------------------

/// The closed set of care needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NeedKind {
    Hungry = 0,
    Dirty = 1,
    Tired = 2,
    Bored = 3,
}

/// Static row of the need table.
#[derive(Debug)]
pub struct NeedInfo {
    pub weight: u8,
    pub name: &'static str,
    pub icon: &'static str,
    pub message: &'static str,
    /// Verb of the corrective action ("feed", "clean", ...).
    pub action: &'static str,
}

/// Indexed by `NeedKind as usize`.
static NEED_TABLE: [NeedInfo; NeedKind::COUNT] = [
    NeedInfo {
        weight: 3,
        name: "Hungry",
        icon: "hungry.png",
        message: "Your pet is hungry!",
        action: "feed",
    },
    NeedInfo {
        weight: 5,
        name: "Dirty",
        icon: "dirty.png",
        message: "Your pet needs cleaning!",
        action: "clean",
    },
    NeedInfo {
        weight: 4,
        name: "Tired",
        icon: "tired.png",
        message: "Your pet is tired!",
        action: "rest",
    },
    NeedInfo {
        weight: 2,
        name: "Bored",
        icon: "bored.png",
        message: "Your pet is bored!",
        action: "play",
    },
];

impl NeedKind {
    pub const COUNT: usize = 4;

    /// All needs in table order.
    pub const ALL: [NeedKind; NeedKind::COUNT] =
        [Self::Hungry, Self::Dirty, Self::Tired, Self::Bored];

    pub fn info(self) -> &'static NeedInfo {
        &NEED_TABLE[self as usize]
    }

    pub fn weight(self) -> u8 {
        self.info().weight
    }

    pub fn action(self) -> &'static str {
        self.info().action
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for NeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

// ---------------------------------------------------------------------------
// Need scores
// ---------------------------------------------------------------------------

/// One clamped score per need.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeedScores([u8; NeedKind::COUNT]);

impl NeedScores {
    pub fn get(&self, kind: NeedKind) -> u8 {
        self.0[kind.index()]
    }

    /// Write a score, clamping into `0..=MAX_SCORE`.
    pub fn set(&mut self, kind: NeedKind, value: i32) {
        self.0[kind.index()] = value.clamp(0, i32::from(MAX_SCORE)) as u8;
    }

    pub fn increment(&mut self, kind: NeedKind, by: u8) {
        self.set(kind, i32::from(self.get(kind)) + i32::from(by));
    }

    pub fn reset(&mut self, kind: NeedKind) {
        self.0[kind.index()] = 0;
    }

    pub fn clear(&mut self) {
        self.0 = [0; NeedKind::COUNT];
    }

    pub fn is_critical(&self, kind: NeedKind) -> bool {
        self.get(kind) >= MAX_SCORE
    }

    pub fn any_critical(&self) -> bool {
        NeedKind::ALL.iter().any(|&k| self.is_critical(k))
    }

    /// The critical need with the highest weight, if any.
    pub fn most_pressing(&self) -> Option<NeedKind> {
        NeedKind::ALL
            .into_iter()
            .filter(|&k| self.is_critical(k))
            .max_by_key(|k| k.weight())
    }

    /// First critical need other than `except`, in priority order.
    pub fn critical_other_than(&self, except: NeedKind) -> Option<NeedKind> {
        NeedKind::ALL
            .into_iter()
            .filter(|&k| k != except && self.is_critical(k))
            .max_by_key(|k| k.weight())
    }

    pub fn iter(&self) -> impl Iterator<Item = (NeedKind, u8)> + '_ {
        NeedKind::ALL.into_iter().map(|k| (k, self.get(k)))
    }
}

// ---------------------------------------------------------------------------
// Appearance
// ---------------------------------------------------------------------------

/// What the presentation layer should show right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Appearance {
    Normal,
    Need(NeedKind),
    /// Cosmetic override after a successful care action.
    Happy,
    Sleeping,
    Dead,
}

impl Appearance {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Normal => "normal.png",
            Self::Need(kind) => kind.info().icon,
            Self::Happy => "happy.png",
            Self::Sleeping => "sleeping.png",
            Self::Dead => "dead.png",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Normal => "Your pet is feeling normal.",
            Self::Need(kind) => kind.info().message,
            Self::Happy => "Your pet is happy!",
            Self::Sleeping => "Your pet is sleeping.",
            Self::Dead => "Your pet has died.",
        }
    }

    pub fn from_need(need: Option<NeedKind>) -> Self {
        need.map_or(Self::Normal, Self::Need)
    }
}
