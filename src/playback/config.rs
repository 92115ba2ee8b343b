//! Playback configuration

use thiserror::Error;

/// Slowest accepted default delay between steps
pub const MAX_SPEED_MS: u64 = 1600;

/// Fastest accepted default delay between steps
pub const MIN_SPEED_MS: u64 = 180;

/// Default delay between steps
pub const DEFAULT_SPEED_MS: u64 = 700;

/// Errors raised while configuring playback
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Speed outside the accepted range
    #[error("playback speed {speed_ms}ms outside {min}..={max}ms")]
    SpeedOutOfRange {
        /// Requested delay
        speed_ms: u64,
        /// Fastest accepted delay
        min: u64,
        /// Slowest accepted delay
        max: u64,
    },
}

/// Parameters for timer-driven playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Delay between steps unless a step carries its own hold (ms)
    pub speed_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed_ms: DEFAULT_SPEED_MS,
        }
    }
}

impl PlaybackConfig {
    /// Configuration with a validated speed.
    pub fn with_speed_ms(speed_ms: u64) -> Result<Self, ConfigError> {
        validate_speed(speed_ms)?;
        Ok(Self { speed_ms })
    }
}

pub(crate) fn validate_speed(speed_ms: u64) -> Result<(), ConfigError> {
    if !(MIN_SPEED_MS..=MAX_SPEED_MS).contains(&speed_ms) {
        return Err(ConfigError::SpeedOutOfRange {
            speed_ms,
            min: MIN_SPEED_MS,
            max: MAX_SPEED_MS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_speed() {
        assert_eq!(PlaybackConfig::default().speed_ms, 700);
    }

    #[test]
    fn test_speed_bounds() {
        assert!(PlaybackConfig::with_speed_ms(MIN_SPEED_MS).is_ok());
        assert!(PlaybackConfig::with_speed_ms(MAX_SPEED_MS).is_ok());

        let err = PlaybackConfig::with_speed_ms(50).unwrap_err();
        assert_eq!(err.to_string(), "playback speed 50ms outside 180..=1600ms");
        assert!(PlaybackConfig::with_speed_ms(2000).is_err());
    }
}
