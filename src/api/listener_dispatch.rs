use crate::extensions::{MarqueeContext, MarqueeEvent, MarqueeListener};
use crate::platform::{MarqueeHost, ResizeObserver};

use super::MarqueeController;

impl<H, O> MarqueeController<H, O>
where
    H: MarqueeHost,
    O: ResizeObserver<H::Node>,
{
    /// Registers a callback invoked once, after the first successful `initialize`.
    ///
    /// Replaces any previously registered callback that has not fired yet.
    pub fn set_on_ready(&mut self, on_ready: impl FnOnce() + 'static) {
        self.on_ready = Some(Box::new(on_ready));
    }

    pub fn add_listener(&mut self, listener: Box<dyn MarqueeListener>) {
        self.listeners.push(listener);
    }

    /// Removes a listener by id. Returns `true` when one was removed.
    pub fn remove_listener(&mut self, id: &str) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.id() != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn marquee_context(&self) -> MarqueeContext {
        MarqueeContext {
            initialized: self.is_initialized(),
            playing: self.playing,
            direction: self.direction,
            speed: self.speed,
            speed_factor: self.speed_factor,
            child_width: self.child_width,
            progress: self.progress(),
        }
    }

    pub(super) fn emit_marquee_event(&mut self, event: MarqueeEvent) {
        if self.listeners.is_empty() {
            return;
        }
        let context = self.marquee_context();
        for listener in &mut self.listeners {
            listener.on_event(event, context);
        }
    }
}
