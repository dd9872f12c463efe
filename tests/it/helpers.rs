//! Test helpers and builders for reducing boilerplate in tests.
//!
//! - `TestCarouselBuilder` - Builder for initialized carousels on a
//!   `RecordingSurface` driven by a `ManualClock`
//! - `settle` - Run the current transition to completion
//! - `CountingScheduler` - Frame scheduler that counts requests

use adcarousel::Carousel;
use adcarousel::animation::{Easing, FrameScheduler, ManualClock};
use adcarousel::config::{CarouselConfig, OverlapPolicy};
use adcarousel::surface::RecordingSurface;
use adcarousel::types::{HexColor, Slide};

pub type TestCarousel = Carousel<RecordingSurface, ManualClock>;

/// Builder for test carousels.
///
/// # Example
/// ```ignore
/// let (mut carousel, clock) = TestCarouselBuilder::new()
///     .with_slides(4)
///     .with_width(800.0)
///     .build();
/// ```
pub struct TestCarouselBuilder {
    config: CarouselConfig,
    width: f32,
}

impl Default for TestCarouselBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCarouselBuilder {
    /// Three stock slides, 400px wide, default timing.
    pub fn new() -> Self {
        Self {
            config: CarouselConfig::default(),
            width: 400.0,
        }
    }

    /// Replace the slides with `count` generated ones.
    pub fn with_slides(mut self, count: usize) -> Self {
        self.config.slides = (0..count)
            .map(|i| {
                Slide::new(
                    format!("Slide {i}"),
                    format!("Subtitle {i}"),
                    format!("Go {i}"),
                    HexColor::from_rgb(0x101010 * (i as u32 % 15 + 1)),
                )
            })
            .collect();
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_policy(mut self, policy: OverlapPolicy) -> Self {
        self.config.transition.overlap = policy;
        self
    }

    pub fn with_duration_ms(mut self, ms: u64) -> Self {
        self.config.transition.duration_ms = ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.config.transition.easing = easing;
        self
    }

    pub fn with_threshold(mut self, px: f32) -> Self {
        self.config.gestures.swipe_threshold_px = px;
        self
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Build and initialize the carousel.
    pub fn build(self) -> (TestCarousel, ManualClock) {
        let clock = ManualClock::new();
        let mut carousel = Carousel::with_clock(
            RecordingSurface::new(self.width),
            &self.config,
            clock.clone(),
        )
        .expect("test config should be valid");
        carousel.initialize();
        (carousel, clock)
    }
}

/// Advance the clock past the transition duration and tick once.
pub fn settle(carousel: &mut TestCarousel, clock: &ManualClock) {
    clock.advance(carousel.transition_config().duration());
    carousel.tick();
}

/// Frame scheduler that only counts how often a frame was asked for.
#[derive(Debug, Default)]
pub struct CountingScheduler {
    pub requests: usize,
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&mut self) {
        self.requests += 1;
    }
}
