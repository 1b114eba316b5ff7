//! Deterministic in-memory platform used by tests and non-DOM hosts.

mod animation;
mod host;
mod resize;

pub use animation::KeyframeAnimation;
pub use host::{HeadlessHost, NodeId};
pub use resize::RecordingResizeObserver;
