use serde::{Deserialize, Serialize};

use crate::core::Direction;
use crate::error::{MarqueeError, MarqueeResult};

use super::validation::{validate_speed, validate_speed_factor_magnitude};

fn default_true() -> bool {
    true
}

fn default_speed() -> f64 {
    10.0
}

fn default_speed_factor() -> f64 {
    1.0
}

/// Public controller bootstrap configuration.
///
/// Serializable so hosts can keep marquee presets next to the rest of their
/// UI configuration. The ready callback is not part of the config; register
/// it with `MarqueeController::set_on_ready`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarqueeConfig {
    /// Travel in px per second at speed factor 1.
    #[serde(default = "default_speed")]
    pub speed: f64,
    /// Playback-rate magnitude, `>= 0`.
    #[serde(default = "default_speed_factor")]
    pub speed_factor: f64,
    #[serde(default)]
    pub direction: Direction,
    /// Disable when the host duplicates the content itself.
    #[serde(default = "default_true")]
    pub auto_clone: bool,
    /// Start paused when `false`; `play` resumes.
    #[serde(default = "default_true")]
    pub autoplay: bool,
    /// Gates diagnostic output only; never changes behavior.
    #[serde(default = "default_true")]
    pub warnings_enabled: bool,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            speed_factor: default_speed_factor(),
            direction: Direction::Forward,
            auto_clone: true,
            autoplay: true,
            warnings_enabled: true,
        }
    }
}

impl MarqueeConfig {
    #[must_use]
    pub fn new(speed: f64) -> Self {
        Self {
            speed,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub fn with_speed_factor(mut self, speed_factor: f64) -> Self {
        self.speed_factor = speed_factor;
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_auto_clone(mut self, auto_clone: bool) -> Self {
        self.auto_clone = auto_clone;
        self
    }

    #[must_use]
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    #[must_use]
    pub fn with_warnings_enabled(mut self, enabled: bool) -> Self {
        self.warnings_enabled = enabled;
        self
    }

    pub fn validate(self) -> MarqueeResult<Self> {
        validate_speed(self.speed)?;
        validate_speed_factor_magnitude(self.speed_factor)?;
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> MarqueeResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| MarqueeError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> MarqueeResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| MarqueeError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}
