use crate::core::duration_millis;
use crate::error::{MarqueeError, MarqueeResult};

pub(super) fn validate_speed(speed: f64) -> MarqueeResult<f64> {
    if !speed.is_finite() || speed <= 0.0 {
        return Err(MarqueeError::InvalidSpeed { speed });
    }
    Ok(speed)
}

/// Signed factors are accepted; the sign selects the direction.
pub(super) fn validate_signed_speed_factor(factor: f64) -> MarqueeResult<f64> {
    if !factor.is_finite() {
        return Err(MarqueeError::InvalidSpeedFactor { factor });
    }
    Ok(factor)
}

pub(super) fn validate_speed_factor_magnitude(factor: f64) -> MarqueeResult<f64> {
    if !factor.is_finite() || factor < 0.0 {
        return Err(MarqueeError::InvalidSpeedFactor { factor });
    }
    Ok(factor)
}

/// Loop duration in ms for `width` at `speed`, or `None` when it would
/// overflow or collapse.
pub(super) fn usable_duration(width: f64, speed: f64) -> Option<f64> {
    Some(duration_millis(width, speed)).filter(|duration| duration.is_finite() && *duration > 0.0)
}

/// Usable layout width, or `None` for unmeasured or collapsed content.
pub(super) fn usable_width(width: Option<f64>) -> Option<f64> {
    width.filter(|width| width.is_finite() && *width > 0.0)
}
