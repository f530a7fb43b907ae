//! Application configuration
//!
//! Board-agnostic tuning values for the main loop. The firmware fills
//! these from its compile-time board configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of RUNNING cycles between heartbeat toggles
pub const DEFAULT_HEARTBEAT_PERIOD: u32 = 1000;

/// Default delay between main loop iterations (ms)
pub const DEFAULT_CYCLE_DELAY_MS: u32 = 1;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Heartbeat period must be at least one cycle
    ZeroHeartbeatPeriod,
    /// Cycle delay must be at least one millisecond
    ZeroCycleDelay,
}

/// Main loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AppConfig {
    /// Toggle the heartbeat every this many RUNNING cycles
    pub heartbeat_period: u32,
    /// Delay between main loop iterations in milliseconds
    pub cycle_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            heartbeat_period: DEFAULT_HEARTBEAT_PERIOD,
            cycle_delay_ms: DEFAULT_CYCLE_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Check the configuration for values the main loop cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.heartbeat_period == 0 {
            return Err(ConfigError::ZeroHeartbeatPeriod);
        }
        if self.cycle_delay_ms == 0 {
            return Err(ConfigError::ZeroCycleDelay);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.heartbeat_period, 1000);
        assert_eq!(config.cycle_delay_ms, 1);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_values_rejected() {
        let config = AppConfig {
            heartbeat_period: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroHeartbeatPeriod));

        let config = AppConfig {
            cycle_delay_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroCycleDelay));
    }
}
