mod config;
mod controller;
mod diagnostics;
mod lifecycle_controller;
mod listener_dispatch;
mod playback_controller;
mod rate_controller;
mod resize_controller;
mod validation;

pub use config::MarqueeConfig;
pub use controller::{MarqueeController, MarqueeLifecycle};
pub use diagnostics::{Diagnostics, MarqueeWarning};
