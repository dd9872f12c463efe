//! Carousel lifecycle - construction and initialization.

use super::{Carousel, CarouselState, Stage};
use crate::animation::{AnimationDriver, Clock, SystemClock};
use crate::config::CarouselConfig;
use crate::error::{CarouselError, CarouselResult};
use crate::surface::Surface;
use tracing::{debug, info};

impl<S: Surface + 'static> Carousel<S, SystemClock> {
    /// Build a carousel on `surface` driven by the system clock.
    pub fn new(surface: S, config: &CarouselConfig) -> CarouselResult<Self> {
        Self::with_clock(surface, config, SystemClock)
    }
}

impl<S: Surface + 'static, K: Clock> Carousel<S, K> {
    /// Build a carousel with an explicit clock.
    ///
    /// Fails when the surface has no container or the config has no slides.
    pub fn with_clock(surface: S, config: &CarouselConfig, clock: K) -> CarouselResult<Self> {
        if !surface.is_attached() {
            return Err(CarouselError::ContainerUnavailable);
        }
        config.validate()?;

        let state = CarouselState::new(config.slides.len())?;
        Ok(Self {
            stage: Stage {
                slides: config.slides.clone(),
                state,
                surface,
                peek_opacity: config.gestures.drag_peek_opacity,
            },
            driver: AnimationDriver::new(),
            clock,
            transition: config.transition.clone(),
            gestures: config.gestures.clone(),
            style: config.style.clone(),
            style_applied: false,
        })
    }

    /// Apply styles, mount every slide and place them at rest.
    ///
    /// The stylesheet is applied on the first call only.
    pub fn initialize(&mut self) {
        if !self.style_applied {
            self.stage.surface.apply_stylesheet(&self.style);
            self.style_applied = true;
        } else {
            debug!("Stylesheet already applied, remounting slides only");
        }

        self.stage.surface.mount_slides(&self.stage.slides);
        self.stage.settle_positions();
        info!(slides = self.stage.slides.len(), "Carousel rendered");
    }
}
