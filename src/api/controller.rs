use crate::core::Direction;
use crate::error::MarqueeResult;
use crate::extensions::MarqueeListener;
use crate::platform::{MarqueeHost, ResizeObserver, TimelineAnimation};

use super::{Diagnostics, MarqueeConfig};

/// Lifecycle of a controller. `Destroyed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarqueeLifecycle {
    Uninitialized,
    Initialized,
    Destroyed,
}

/// Drives one infinitely scrolling strip on a host timeline.
///
/// The controller owns the animation and the cloned content copy. It holds
/// the caller's content node by handle only. Speed, direction and speed-factor
/// changes are applied without visible jumps: rate-only changes adjust the
/// live animation in place, everything else restarts it at the equivalent
/// progress.
pub struct MarqueeController<H, O>
where
    H: MarqueeHost,
    O: ResizeObserver<H::Node>,
{
    pub(super) host: H,
    pub(super) observer: O,
    pub(super) root: Option<H::Node>,
    pub(super) original_child: Option<H::Node>,
    pub(super) cloned_child: Option<H::Node>,
    pub(super) animation: Option<H::Animation>,
    pub(super) speed: f64,
    pub(super) speed_factor: f64,
    pub(super) direction: Direction,
    pub(super) auto_clone: bool,
    pub(super) autoplay: bool,
    pub(super) child_width: Option<f64>,
    pub(super) lifecycle: MarqueeLifecycle,
    pub(super) playing: bool,
    pub(super) diagnostics: Diagnostics,
    pub(super) on_ready: Option<Box<dyn FnOnce()>>,
    pub(super) listeners: Vec<Box<dyn MarqueeListener>>,
}

impl<H, O> MarqueeController<H, O>
where
    H: MarqueeHost,
    O: ResizeObserver<H::Node>,
{
    /// Creates an uninitialized controller for `root`.
    ///
    /// Nothing is cloned, measured or animated until [`initialize`](Self::initialize).
    pub fn new(host: H, observer: O, root: H::Node, config: MarqueeConfig) -> MarqueeResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            host,
            observer,
            root: Some(root),
            original_child: None,
            cloned_child: None,
            animation: None,
            speed: config.speed,
            speed_factor: config.speed_factor,
            direction: config.direction,
            auto_clone: config.auto_clone,
            autoplay: config.autoplay,
            child_width: None,
            lifecycle: MarqueeLifecycle::Uninitialized,
            playing: false,
            diagnostics: Diagnostics::new(config.warnings_enabled),
            on_ready: None,
            listeners: Vec::new(),
        })
    }

    #[must_use]
    pub fn lifecycle(&self) -> MarqueeLifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.lifecycle == MarqueeLifecycle::Initialized
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.lifecycle == MarqueeLifecycle::Destroyed
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Playback-rate magnitude; the sign lives in [`direction`](Self::direction).
    #[must_use]
    pub fn speed_factor(&self) -> f64 {
        self.speed_factor
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// `speed_factor * direction`.
    #[must_use]
    pub fn signed_rate(&self) -> f64 {
        self.speed_factor * self.direction.sign()
    }

    #[must_use]
    pub fn auto_clone(&self) -> bool {
        self.auto_clone
    }

    /// Whether `initialize` starts the strip running or paused.
    #[must_use]
    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    /// Width the running animation's duration was computed from.
    #[must_use]
    pub fn child_width(&self) -> Option<f64> {
        self.child_width
    }

    /// Live animation handle, for inspection only.
    #[must_use]
    pub fn animation(&self) -> Option<&H::Animation> {
        self.animation.as_ref()
    }

    /// Progress of the live animation within its current cycle.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        self.animation
            .as_ref()
            .and_then(|animation| animation.progress())
    }

    #[must_use]
    pub fn root(&self) -> Option<&H::Node> {
        self.root.as_ref()
    }

    #[must_use]
    pub fn original_child(&self) -> Option<&H::Node> {
        self.original_child.as_ref()
    }

    #[must_use]
    pub fn cloned_child(&self) -> Option<&H::Node> {
        self.cloned_child.as_ref()
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access for layout drivers.
    ///
    /// Nodes owned by the controller (the clone) must not be touched here;
    /// after changing layout, call [`update_size`](Self::update_size).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn set_warnings_enabled(&mut self, enabled: bool) {
        self.diagnostics.set_enabled(enabled);
    }
}

impl<H, O> Drop for MarqueeController<H, O>
where
    H: MarqueeHost,
    O: ResizeObserver<H::Node>,
{
    fn drop(&mut self) {
        self.destroy();
    }
}
