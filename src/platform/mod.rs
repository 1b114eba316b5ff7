//! Capabilities the controller needs from its host platform.
//!
//! A browser host maps these onto DOM nodes, `Element.animate` and
//! `ResizeObserver`; the `headless` module provides deterministic in-memory
//! implementations for tests and non-DOM hosts.

use std::fmt::Debug;
use std::time::Duration;

use crate::core::AnimationRequest;
use crate::error::MarqueeResult;

/// Play state of a timeline animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    /// Created or resumed but no frame has resolved its current time yet.
    Pending,
    Running,
    Paused,
    /// Cancelled; the animation no longer affects the target.
    Idle,
}

/// Handle to one live keyframe animation on the host timeline.
pub trait TimelineAnimation {
    fn play(&mut self);
    fn pause(&mut self);
    fn cancel(&mut self);

    fn playback_rate(&self) -> f64;
    fn set_playback_rate(&mut self, rate: f64);

    /// Moves the local time to `time_ms`, resolving it if still pending.
    fn seek(&mut self, time_ms: f64);

    /// Position within the current iteration in `[0, 1)`.
    ///
    /// `None` while the current time is unresolved or after cancellation.
    fn progress(&self) -> Option<f64>;

    fn play_state(&self) -> PlayState;

    /// Frame tick from the host render loop.
    ///
    /// Platforms that drive their own timeline implement this as a no-op.
    fn advance(&mut self, elapsed: Duration);
}

/// Node tree and animation factory backing one marquee.
pub trait MarqueeHost {
    type Node: Clone + PartialEq + Debug;
    type Animation: TimelineAnimation;

    /// Rendered width of `node` in px; `None` when it is not laid out.
    fn measure_width(&self, node: &Self::Node) -> Option<f64>;

    /// Deep-clones `node` and inserts the copy as its next sibling.
    fn clone_after(&mut self, node: &Self::Node) -> MarqueeResult<Self::Node>;

    /// Removes `node` from its parent. Returns `false` if it was not attached.
    fn remove(&mut self, node: &Self::Node) -> bool;

    /// Starts a new animation on `target`.
    fn animate(&mut self, target: &Self::Node, request: AnimationRequest) -> Self::Animation;
}

/// Layout-change notification source watching the content node.
///
/// Notifications are delivered by the host calling
/// [`MarqueeController::update_size`](crate::api::MarqueeController::update_size).
pub trait ResizeObserver<N> {
    fn observe(&mut self, node: &N);
    fn disconnect(&mut self);
}
