use serde::{Deserialize, Serialize};

use crate::core::Direction;

/// Read-only controller snapshot passed to listener hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarqueeContext {
    pub initialized: bool,
    pub playing: bool,
    pub direction: Direction,
    pub speed: f64,
    pub speed_factor: f64,
    pub child_width: Option<f64>,
    pub progress: Option<f64>,
}

/// Lifecycle and motion events emitted by a controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MarqueeEvent {
    Ready,
    Played,
    Paused,
    /// A new animation replaced the previous one.
    Restarted {
        direction: Direction,
        progress: Option<f64>,
    },
    /// Playback rate changed in place without a restart.
    RateChanged { signed_rate: f64 },
    Resized { width: f64 },
    Destroyed,
}

/// Observer hook for embedding code.
///
/// Listeners see events and a context snapshot but cannot mutate the
/// controller from inside a hook.
pub trait MarqueeListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: MarqueeEvent, context: MarqueeContext);
}
