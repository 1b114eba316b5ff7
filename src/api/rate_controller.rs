use tracing::{debug, trace};

use crate::core::{AnimationRequest, Direction, duration_millis};
use crate::error::{MarqueeError, MarqueeResult};
use crate::extensions::MarqueeEvent;
use crate::platform::{MarqueeHost, ResizeObserver, TimelineAnimation};

use super::validation::{usable_duration, validate_signed_speed_factor, validate_speed};
use super::{MarqueeController, MarqueeWarning};

impl<H, O> MarqueeController<H, O>
where
    H: MarqueeHost,
    O: ResizeObserver<H::Node>,
{
    /// Reverses or restores the scroll direction, keeping the strip in place.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction == self.direction {
            return;
        }
        if !self.ensure_initialized("set_direction") {
            return;
        }
        self.apply_signed_rate(direction, self.speed_factor);
    }

    /// Changes travel speed in px/s without moving the content.
    ///
    /// Only the rate of future travel changes: the animation restarts at the
    /// progress it had reached. A speed whose loop duration would overflow for
    /// the current width is rejected and leaves the running animation alone.
    pub fn set_speed(&mut self, speed: f64) -> MarqueeResult<()> {
        validate_speed(speed)?;
        if speed == self.speed || !self.ensure_initialized("set_speed") {
            return Ok(());
        }
        if self
            .child_width
            .is_some_and(|width| usable_duration(width, speed).is_none())
        {
            return Err(MarqueeError::InvalidSpeed { speed });
        }

        let progress = self.progress();
        self.speed = speed;
        self.start(progress);
        Ok(())
    }

    /// Sets the signed playback rate.
    ///
    /// The magnitude becomes the speed factor and a non-zero sign selects the
    /// direction; zero stops motion and keeps the current direction.
    pub fn set_speed_factor(&mut self, factor: f64) -> MarqueeResult<()> {
        validate_signed_speed_factor(factor)?;
        if factor == self.signed_rate() || !self.ensure_initialized("set_speed_factor") {
            return Ok(());
        }

        let direction = Direction::from_sign(factor).unwrap_or(self.direction);
        self.apply_signed_rate(direction, factor.abs());
        Ok(())
    }

    fn apply_signed_rate(&mut self, direction: Direction, magnitude: f64) {
        if direction == self.direction && magnitude == self.speed_factor {
            return;
        }

        if direction == self.direction {
            self.speed_factor = magnitude;
            if let Some(animation) = self.animation.as_mut() {
                animation.set_playback_rate(magnitude);
            }
            let signed_rate = self.signed_rate();
            trace!(signed_rate, "marquee playback rate updated");
            self.emit_marquee_event(MarqueeEvent::RateChanged { signed_rate });
            return;
        }

        // Reversal swaps the keyframe pair, so mirror the progress to keep
        // the visible offset where it is.
        let Some(progress) = self.progress() else {
            self.diagnostics.report(MarqueeWarning::ProgressUnavailable);
            return;
        };
        self.direction = direction;
        self.speed_factor = magnitude;
        self.start(Some(1.0 - progress));
    }

    /// Replaces the live animation with one built from the current state.
    ///
    /// Returns `false` when there is nothing to animate or the duration would
    /// be degenerate; the previous animation is cancelled either way.
    pub(super) fn start(&mut self, start_progress: Option<f64>) -> bool {
        if let Some(mut previous) = self.animation.take() {
            previous.cancel();
        }
        let (Some(root), Some(width)) = (self.root.clone(), self.child_width) else {
            return false;
        };

        let Some(duration_ms) = usable_duration(width, self.speed) else {
            self.diagnostics.report(MarqueeWarning::DegenerateDuration {
                duration_ms: duration_millis(width, self.speed),
            });
            return false;
        };

        let mut animation = self
            .host
            .animate(&root, AnimationRequest::looping(self.direction, duration_ms));
        animation.set_playback_rate(self.speed_factor);
        if !self.playing {
            animation.pause();
        }
        if let Some(progress) = start_progress {
            animation.seek(duration_ms * progress);
        }
        self.animation = Some(animation);

        debug!(
            duration_ms,
            direction = ?self.direction,
            speed_factor = self.speed_factor,
            start_progress,
            "marquee animation started"
        );
        self.emit_marquee_event(MarqueeEvent::Restarted {
            direction: self.direction,
            progress: start_progress,
        });
        true
    }
}
