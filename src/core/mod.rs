pub mod timing;
pub mod types;

pub use timing::{duration_millis, scroll_bound_speed_factor};
pub use types::{AnimationRequest, Direction, LOOP_OFFSET_PERCENT, TranslateKeyframes};
