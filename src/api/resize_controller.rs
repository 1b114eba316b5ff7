use tracing::debug;

use crate::error::MarqueeResult;
use crate::extensions::MarqueeEvent;
use crate::platform::{MarqueeHost, ResizeObserver};

use crate::core::duration_millis;

use super::validation::{usable_duration, usable_width};
use super::{MarqueeController, MarqueeWarning};

impl<H, O> MarqueeController<H, O>
where
    H: MarqueeHost,
    O: ResizeObserver<H::Node>,
{
    /// Resize-notification entry point.
    ///
    /// Re-measures the content; on a change the clone is rebuilt at the new
    /// width and the animation restarts at the progress it had reached, so
    /// the loop seam always matches one copy's width.
    pub fn update_size(&mut self) -> MarqueeResult<()> {
        if !self.ensure_initialized("update_size") {
            return Ok(());
        }
        let Some(content) = self.original_child.clone() else {
            return Ok(());
        };
        let Some(width) = usable_width(self.host.measure_width(&content)) else {
            self.diagnostics.report(MarqueeWarning::WidthUnavailable);
            return Ok(());
        };
        if self.child_width == Some(width) {
            return Ok(());
        }
        if usable_duration(width, self.speed).is_none() {
            self.diagnostics.report(MarqueeWarning::DegenerateDuration {
                duration_ms: duration_millis(width, self.speed),
            });
            return Ok(());
        }

        let progress = self.progress();
        debug!(
            previous_width = self.child_width,
            width, "marquee content resized"
        );
        self.child_width = Some(width);

        if let Some(clone) = self.cloned_child.take() {
            self.host.remove(&clone);
        }
        if self.auto_clone {
            self.cloned_child = Some(self.host.clone_after(&content)?);
        }

        self.start(progress);
        self.emit_marquee_event(MarqueeEvent::Resized { width });
        Ok(())
    }
}
