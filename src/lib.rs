//! marquee-rs: infinite horizontal marquee controller.
//!
//! The controller drives a single looping timeline animation over two
//! back-to-back copies of the content. Platform primitives (node tree,
//! keyframe animations, resize notifications) are reached through the traits
//! in [`platform`]; [`headless`] implements them in memory.

pub mod api;
pub mod binding;
pub mod core;
pub mod error;
pub mod extensions;
pub mod headless;
pub mod platform;
pub mod telemetry;

pub use api::{MarqueeConfig, MarqueeController};
pub use crate::core::Direction;
pub use error::{MarqueeError, MarqueeResult};
