//! Framework-agnostic declarative wrapper around [`MarqueeController`].
//!
//! UI layers keep one `MarqueeBinding` per mounted marquee, feed it the
//! latest props on every render and unmount it when the component goes away.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::api::{MarqueeConfig, MarqueeController};
use crate::core::Direction;
use crate::error::{MarqueeError, MarqueeResult};
use crate::platform::{MarqueeHost, ResizeObserver};

/// Declarative marquee inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarqueeProps {
    pub speed: f64,
    /// Magnitude; the direction is carried by `direction`.
    pub speed_factor: f64,
    pub direction: Direction,
    #[serde(default = "default_play")]
    pub play: bool,
}

fn default_play() -> bool {
    true
}

impl Default for MarqueeProps {
    fn default() -> Self {
        let config = MarqueeConfig::default();
        Self {
            speed: config.speed,
            speed_factor: config.speed_factor,
            direction: config.direction,
            play: true,
        }
    }
}

impl MarqueeProps {
    #[must_use]
    pub fn config(self) -> MarqueeConfig {
        self.apply_to(MarqueeConfig::default())
    }

    /// Overlays these props on `base`, keeping its non-prop settings.
    #[must_use]
    pub fn apply_to(self, base: MarqueeConfig) -> MarqueeConfig {
        base.with_speed(self.speed)
            .with_speed_factor(self.speed_factor)
            .with_direction(self.direction)
            .with_autoplay(self.play)
    }
}

pub struct MarqueeBinding<H, O>
where
    H: MarqueeHost,
    O: ResizeObserver<H::Node>,
{
    controller: MarqueeController<H, O>,
    props: MarqueeProps,
}

impl<H, O> MarqueeBinding<H, O>
where
    H: MarqueeHost,
    O: ResizeObserver<H::Node>,
{
    /// Builds and initializes a controller for a freshly mounted container.
    ///
    /// `children` are the container's current child nodes. With no children
    /// the controller is created but stays uninitialized; more than one child
    /// is rejected because the loop can only repeat a single element.
    pub fn mount(
        host: H,
        observer: O,
        root: H::Node,
        children: &[H::Node],
        props: MarqueeProps,
    ) -> MarqueeResult<Self> {
        if children.len() > 1 {
            error!(
                count = children.len(),
                "marquee does not support multiple children; wrap them in a single element"
            );
            return Err(MarqueeError::MultipleChildren {
                count: children.len(),
            });
        }

        let mut controller = MarqueeController::new(host, observer, root, props.config())?;
        if let Some(content) = children.first() {
            controller.initialize(content.clone())?;
        }

        Ok(Self { controller, props })
    }

    /// Forwards changed props to the controller.
    ///
    /// Before the controller is initialized the props replace its startup
    /// configuration. Afterwards speed factor and direction travel together
    /// as one signed rate so a simultaneous change restarts the animation at
    /// most once.
    pub fn update(&mut self, props: MarqueeProps) -> MarqueeResult<()> {
        if !self.controller.is_initialized() {
            if !self.controller.is_destroyed() {
                let base = MarqueeConfig::default()
                    .with_auto_clone(self.controller.auto_clone())
                    .with_warnings_enabled(self.controller.diagnostics().enabled());
                self.controller.reconfigure(props.apply_to(base))?;
            }
            self.props = props;
            return Ok(());
        }

        if props.speed != self.props.speed {
            self.controller.set_speed(props.speed)?;
        }
        if props.speed_factor != self.props.speed_factor || props.direction != self.props.direction
        {
            if props.speed_factor == 0.0 {
                self.controller.set_speed_factor(0.0)?;
                self.controller.set_direction(props.direction);
            } else {
                self.controller
                    .set_speed_factor(props.speed_factor.abs() * props.direction.sign())?;
            }
        }
        if props.play != self.props.play {
            if props.play {
                self.controller.play();
            } else {
                self.controller.pause();
            }
        }

        self.props = props;
        Ok(())
    }

    /// Tears the controller down. Further updates are ignored.
    pub fn unmount(&mut self) {
        self.controller.destroy();
    }

    #[must_use]
    pub fn props(&self) -> MarqueeProps {
        self.props
    }

    #[must_use]
    pub fn controller(&self) -> &MarqueeController<H, O> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut MarqueeController<H, O> {
        &mut self.controller
    }
}
