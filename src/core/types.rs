use serde::{Deserialize, Serialize};

use crate::error::MarqueeError;

/// Logical scroll direction of the strip.
///
/// Serialized as `1` / `-1` so configs read the same as the sign they encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "i8", into = "i8")]
pub enum Direction {
    /// Content travels towards the start edge (translate `0% → -50%`).
    #[default]
    Forward,
    /// Content travels towards the end edge (translate `-50% → 0%`).
    Backward,
}

impl Direction {
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }

    /// Direction encoded by the sign of `value`; `None` for zero and NaN.
    #[must_use]
    pub fn from_sign(value: f64) -> Option<Self> {
        if value > 0.0 {
            Some(Self::Forward)
        } else if value < 0.0 {
            Some(Self::Backward)
        } else {
            None
        }
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    /// Keyframe pair that scrolls one content copy in this direction.
    #[must_use]
    pub fn keyframes(self) -> TranslateKeyframes {
        match self {
            Self::Forward => TranslateKeyframes::new(0.0, -LOOP_OFFSET_PERCENT),
            Self::Backward => TranslateKeyframes::new(-LOOP_OFFSET_PERCENT, 0.0),
        }
    }
}

impl TryFrom<i8> for Direction {
    type Error = MarqueeError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Forward),
            -1 => Ok(Self::Backward),
            other => Err(MarqueeError::InvalidConfig(format!(
                "direction must be 1 or -1, got {other}"
            ))),
        }
    }
}

impl From<Direction> for i8 {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Track offset at which the cloned copy lines up with the original.
///
/// The track holds two equal-width copies, so half of it is one copy.
pub const LOOP_OFFSET_PERCENT: f64 = 50.0;

/// Two-keyframe horizontal translation, in percent of the track width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TranslateKeyframes {
    pub from_percent: f64,
    pub to_percent: f64,
}

impl TranslateKeyframes {
    #[must_use]
    pub fn new(from_percent: f64, to_percent: f64) -> Self {
        Self {
            from_percent,
            to_percent,
        }
    }

    /// Linear interpolation at `progress` in `[0, 1]`.
    #[must_use]
    pub fn offset_at(self, progress: f64) -> f64 {
        self.from_percent + (self.to_percent - self.from_percent) * progress
    }
}

/// Everything a host needs to create one timeline animation.
///
/// Hosts run it with linear easing and infinite iterations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationRequest {
    pub keyframes: TranslateKeyframes,
    pub duration_ms: f64,
}

impl AnimationRequest {
    /// Linear, infinitely looping translation for one content copy.
    #[must_use]
    pub fn looping(direction: Direction, duration_ms: f64) -> Self {
        Self {
            keyframes: direction.keyframes(),
            duration_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, TranslateKeyframes};

    #[test]
    fn reversed_keyframes_mirror_positions() {
        let forward = Direction::Forward.keyframes();
        let backward = Direction::Backward.keyframes();
        for progress in [0.0, 0.25, 0.3, 0.5, 0.9] {
            let a = forward.offset_at(progress);
            let b = backward.offset_at(1.0 - progress);
            assert!((a - b).abs() <= 1e-9);
        }
    }

    #[test]
    fn direction_sign_round_trips() {
        assert_eq!(Direction::from_sign(2.5), Some(Direction::Forward));
        assert_eq!(Direction::from_sign(-0.1), Some(Direction::Backward));
        assert_eq!(Direction::from_sign(0.0), None);
        assert_eq!(Direction::from_sign(Direction::Backward.sign()), Some(Direction::Backward));
    }

    #[test]
    fn direction_parses_only_unit_signs() {
        assert_eq!(Direction::try_from(-1_i8).expect("backward"), Direction::Backward);
        assert!(Direction::try_from(0_i8).is_err());
        assert!(Direction::try_from(2_i8).is_err());
    }

    #[test]
    fn keyframes_interpolate_linearly() {
        let keyframes = TranslateKeyframes::new(0.0, -50.0);
        assert!((keyframes.offset_at(0.4) + 20.0).abs() <= 1e-9);
    }
}
