//! Game pacing parameters
//!
//! All tunable timing and rate parameters for the pet simulation.
//! Values can be overridden from a JSON file through the
//! [`ConfigPort`](crate::app::ports::ConfigPort).

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;
use crate::need::NeedKind;

/// Core game configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetConfig {
    // --- Driver ---
    /// Real-time resolution of the ticker thread (milliseconds)
    pub tick_ms: u32,

    // --- Periodic timers ---
    /// Health drift interval (milliseconds)
    pub health_interval_ms: u32,
    pub hungry_interval_ms: u32,
    pub dirty_interval_ms: u32,
    pub tired_interval_ms: u32,
    pub bored_interval_ms: u32,
    /// How often the auto-wake condition is checked (milliseconds)
    pub wake_check_interval_ms: u32,

    // --- Health ---
    /// Health lost per health tick while any need is critical
    pub health_decay: u8,
    /// Health regained per health tick while calm or sleeping
    pub health_recovery: u8,

    // --- Durations ---
    /// Length of the cosmetic happy display after a care action
    pub happy_duration_ms: u32,
    /// Continuous sleep after which the pet wakes by itself
    pub sleep_duration_ms: u32,
    /// Window after an action during which an unneeded action is refused
    pub action_cooldown_ms: u32,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            // Driver
            tick_ms: 100, // 10 Hz

            // Periodic timers
            health_interval_ms: 1_000,
            hungry_interval_ms: 5_000,
            dirty_interval_ms: 15_000,
            tired_interval_ms: 15_000,
            bored_interval_ms: 10_000,
            wake_check_interval_ms: 1_000,

            // Health
            health_decay: 2,
            health_recovery: 5,

            // Durations
            happy_duration_ms: 2_000,
            sleep_duration_ms: 60_000,
            action_cooldown_ms: 30_000,
        }
    }
}

impl PetConfig {
    /// Interval of the periodic timer that grows `kind`.
    pub fn need_interval_ms(&self, kind: NeedKind) -> u32 {
        match kind {
            NeedKind::Hungry => self.hungry_interval_ms,
            NeedKind::Dirty => self.dirty_interval_ms,
            NeedKind::Tired => self.tired_interval_ms,
            NeedKind::Bored => self.bored_interval_ms,
        }
    }

    /// Reject values that would stall or break the simulation.
    /// Out-of-range values are refused, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ValidationFailed("tick_ms must be > 0"));
        }
        let intervals = [
            self.health_interval_ms,
            self.hungry_interval_ms,
            self.dirty_interval_ms,
            self.tired_interval_ms,
            self.bored_interval_ms,
            self.wake_check_interval_ms,
        ];
        if intervals.contains(&0) {
            return Err(ConfigError::ValidationFailed("timer intervals must be > 0"));
        }
        if intervals.iter().any(|&i| i < self.tick_ms) {
            return Err(ConfigError::ValidationFailed(
                "timer intervals must not be shorter than tick_ms",
            ));
        }
        if self.health_decay == 0 || self.health_recovery == 0 {
            return Err(ConfigError::ValidationFailed("health rates must be > 0"));
        }
        if self.happy_duration_ms == 0 {
            return Err(ConfigError::ValidationFailed("happy_duration_ms must be > 0"));
        }
        if self.sleep_duration_ms == 0 {
            return Err(ConfigError::ValidationFailed("sleep_duration_ms must be > 0"));
        }
        Ok(())
    }
}
