//! Optional hooks for code embedding a controller.

pub mod listeners;

pub use listeners::{MarqueeContext, MarqueeEvent, MarqueeListener};
