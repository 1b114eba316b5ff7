use std::time::Duration;

use crate::extensions::MarqueeEvent;
use crate::platform::{MarqueeHost, ResizeObserver, TimelineAnimation};

use super::{MarqueeController, MarqueeLifecycle, MarqueeWarning};

impl<H, O> MarqueeController<H, O>
where
    H: MarqueeHost,
    O: ResizeObserver<H::Node>,
{
    pub fn play(&mut self) {
        if !self.ensure_initialized("play") {
            return;
        }
        let Some(animation) = self.animation.as_mut() else {
            return;
        };
        animation.play();
        self.playing = true;
        self.emit_marquee_event(MarqueeEvent::Played);
    }

    /// Idempotent. Later restarts keep the strip paused until `play`.
    pub fn pause(&mut self) {
        if !self.ensure_initialized("pause") {
            return;
        }
        if let Some(animation) = self.animation.as_mut() {
            animation.pause();
        }
        self.playing = false;
        self.emit_marquee_event(MarqueeEvent::Paused);
    }

    /// Forwards one frame tick to the live animation.
    pub fn advance(&mut self, elapsed: Duration) {
        if let Some(animation) = self.animation.as_mut() {
            animation.advance(elapsed);
        }
    }

    /// Reports a warning and returns `false` unless the controller is initialized.
    pub(super) fn ensure_initialized(&mut self, operation: &'static str) -> bool {
        match self.lifecycle {
            MarqueeLifecycle::Initialized => true,
            MarqueeLifecycle::Uninitialized => {
                self.diagnostics
                    .report(MarqueeWarning::NotInitialized { operation });
                false
            }
            MarqueeLifecycle::Destroyed => {
                self.diagnostics.report(MarqueeWarning::Destroyed { operation });
                false
            }
        }
    }
}
