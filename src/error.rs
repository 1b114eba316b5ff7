use thiserror::Error;

pub type MarqueeResult<T> = Result<T, MarqueeError>;

#[derive(Debug, Error)]
pub enum MarqueeError {
    #[error("invalid speed: {speed} (must be finite and > 0 px/s)")]
    InvalidSpeed { speed: f64 },

    #[error("invalid speed factor: {factor} (must be finite)")]
    InvalidSpeedFactor { factor: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("marquee does not support multiple children (got {count}); wrap them in a single element")]
    MultipleChildren { count: usize },

    #[error("host error: {0}")]
    Host(String),
}
