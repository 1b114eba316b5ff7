use tracing::debug;

use crate::core::duration_millis;
use crate::error::MarqueeResult;
use crate::extensions::MarqueeEvent;
use crate::platform::{MarqueeHost, ResizeObserver, TimelineAnimation};

use super::validation::{usable_duration, usable_width};
use super::{MarqueeConfig, MarqueeController, MarqueeLifecycle, MarqueeWarning};

impl<H, O> MarqueeController<H, O>
where
    H: MarqueeHost,
    O: ResizeObserver<H::Node>,
{
    /// Takes `content` as the repeating element and starts scrolling.
    ///
    /// `content` must be the only child of the root. With auto-clone enabled a
    /// deep copy is inserted right after it so the strip can loop after one
    /// copy's width. Calling this twice, after destroy, or while the content
    /// has no measurable width only reports a warning.
    pub fn initialize(&mut self, content: H::Node) -> MarqueeResult<()> {
        match self.lifecycle {
            MarqueeLifecycle::Initialized => {
                self.diagnostics.report(MarqueeWarning::AlreadyInitialized {
                    operation: "initialize",
                });
                return Ok(());
            }
            MarqueeLifecycle::Destroyed => {
                self.diagnostics.report(MarqueeWarning::Destroyed {
                    operation: "initialize",
                });
                return Ok(());
            }
            MarqueeLifecycle::Uninitialized => {}
        }

        let Some(width) = usable_width(self.host.measure_width(&content)) else {
            self.diagnostics.report(MarqueeWarning::WidthUnavailable);
            return Ok(());
        };
        if usable_duration(width, self.speed).is_none() {
            self.diagnostics.report(MarqueeWarning::DegenerateDuration {
                duration_ms: duration_millis(width, self.speed),
            });
            return Ok(());
        }

        if self.auto_clone {
            self.cloned_child = Some(self.host.clone_after(&content)?);
        }
        self.original_child = Some(content);
        self.child_width = Some(width);
        self.playing = self.autoplay;

        if !self.start(None) {
            self.release_nodes();
            self.playing = false;
            return Ok(());
        }

        if let Some(content) = self.original_child.as_ref() {
            self.observer.observe(content);
        }
        self.lifecycle = MarqueeLifecycle::Initialized;
        debug!(
            width,
            speed = self.speed,
            signed_rate = self.signed_rate(),
            auto_clone = self.auto_clone,
            "marquee initialized"
        );

        if let Some(on_ready) = self.on_ready.take() {
            on_ready();
        }
        self.emit_marquee_event(MarqueeEvent::Ready);
        Ok(())
    }

    /// Replaces the startup configuration of a controller that has not been
    /// initialized yet.
    ///
    /// Once the strip is running, use the individual setters instead; calling
    /// this afterwards only reports a warning.
    pub fn reconfigure(&mut self, config: MarqueeConfig) -> MarqueeResult<()> {
        let config = config.validate()?;
        match self.lifecycle {
            MarqueeLifecycle::Uninitialized => {}
            MarqueeLifecycle::Initialized => {
                self.diagnostics.report(MarqueeWarning::AlreadyInitialized {
                    operation: "reconfigure",
                });
                return Ok(());
            }
            MarqueeLifecycle::Destroyed => {
                self.diagnostics.report(MarqueeWarning::Destroyed {
                    operation: "reconfigure",
                });
                return Ok(());
            }
        }

        self.speed = config.speed;
        self.speed_factor = config.speed_factor;
        self.direction = config.direction;
        self.auto_clone = config.auto_clone;
        self.autoplay = config.autoplay;
        self.diagnostics.set_enabled(config.warnings_enabled);
        Ok(())
    }

    /// Cancels the animation, stops observing layout and removes the clone.
    ///
    /// Terminal and idempotent. Safe before `initialize`. Also runs on drop.
    pub fn destroy(&mut self) {
        if self.lifecycle == MarqueeLifecycle::Destroyed {
            return;
        }

        if let Some(mut animation) = self.animation.take() {
            animation.cancel();
        }
        if self.lifecycle == MarqueeLifecycle::Initialized {
            self.observer.disconnect();
        }
        self.release_nodes();
        self.root = None;
        self.playing = false;
        self.on_ready = None;
        self.lifecycle = MarqueeLifecycle::Destroyed;
        debug!("marquee destroyed");

        self.emit_marquee_event(MarqueeEvent::Destroyed);
    }

    fn release_nodes(&mut self) {
        if let Some(clone) = self.cloned_child.take() {
            self.host.remove(&clone);
        }
        self.original_child = None;
        self.child_width = None;
    }
}
