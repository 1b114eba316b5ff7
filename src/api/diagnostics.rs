use thiserror::Error;
use tracing::warn;

/// Non-fatal misuse reported by a controller instead of failing the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarqueeWarning {
    #[error("`{operation}` called before initialize")]
    NotInitialized { operation: &'static str },

    #[error("`{operation}` called after destroy")]
    Destroyed { operation: &'static str },

    #[error("`{operation}` called after initialize")]
    AlreadyInitialized { operation: &'static str },

    #[error("could not read animation progress; direction change aborted")]
    ProgressUnavailable,

    #[error("content width is not measurable")]
    WidthUnavailable,

    #[error("refusing to start an animation with duration {duration_ms}ms")]
    DegenerateDuration { duration_ms: f64 },
}

/// Suppressible diagnostic channel owned by one controller.
///
/// Warnings are always counted; `enabled` only gates the `tracing` output.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    enabled: bool,
    count: usize,
    last: Option<MarqueeWarning>,
}

impl Diagnostics {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            count: 0,
            last: None,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn last(&self) -> Option<&MarqueeWarning> {
        self.last.as_ref()
    }

    pub(crate) fn report(&mut self, warning: MarqueeWarning) {
        if self.enabled {
            warn!(warning = %warning, "marquee diagnostic");
        }
        self.count += 1;
        self.last = Some(warning);
    }
}
