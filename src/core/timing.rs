/// Milliseconds needed to travel `travel_px` at `speed_px_per_sec`.
///
/// A zero speed yields an infinite duration; callers must validate speed
/// before starting an animation with the result.
#[must_use]
pub fn duration_millis(travel_px: f64, speed_px_per_sec: f64) -> f64 {
    (travel_px / speed_px_per_sec) * 1000.0
}

/// Divisor applied to scroll velocity when binding it to a speed factor.
pub const SCROLL_VELOCITY_DIVISOR: f64 = 5.0;

/// Converts a smooth-scroll velocity into a signed speed factor.
///
/// Scrolling keeps the marquee moving at its base rate in the scroll
/// direction and adds a velocity-proportional boost on top. `inverted`
/// mirrors the result for strips that run against the page.
///
/// Returns `None` for a zero or non-finite velocity so callers keep the last
/// applied factor instead of stopping the strip.
#[must_use]
pub fn scroll_bound_speed_factor(velocity: f64, inverted: bool) -> Option<f64> {
    if !velocity.is_finite() || velocity == 0.0 {
        return None;
    }
    let factor = velocity.signum() + velocity / SCROLL_VELOCITY_DIVISOR;
    Some(if inverted { -factor } else { factor })
}

#[cfg(test)]
mod tests {
    use super::{duration_millis, scroll_bound_speed_factor};

    #[test]
    fn duration_matches_width_over_speed() {
        assert!((duration_millis(600.0, 300.0) - 2_000.0).abs() <= 1e-9);
        assert!((duration_millis(600.0, 600.0) - 1_000.0).abs() <= 1e-9);
    }

    #[test]
    fn zero_speed_is_infinite() {
        assert!(duration_millis(600.0, 0.0).is_infinite());
    }

    #[test]
    fn scroll_factor_keeps_base_rate_and_adds_boost() {
        let forward = scroll_bound_speed_factor(10.0, false).expect("forward");
        assert!((forward - 3.0).abs() <= 1e-9);

        let backward = scroll_bound_speed_factor(-10.0, false).expect("backward");
        assert!((backward + 3.0).abs() <= 1e-9);

        let inverted = scroll_bound_speed_factor(10.0, true).expect("inverted");
        assert!((inverted + 3.0).abs() <= 1e-9);
    }

    #[test]
    fn scroll_factor_ignores_idle_velocity() {
        assert_eq!(scroll_bound_speed_factor(0.0, false), None);
        assert_eq!(scroll_bound_speed_factor(f64::NAN, true), None);
    }
}
