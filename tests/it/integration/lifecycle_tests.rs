//! Construction and initialization scenarios.

use crate::helpers::TestCarouselBuilder;
use adcarousel::animation::ManualClock;
use adcarousel::config::CarouselConfig;
use adcarousel::surface::RecordingSurface;
use adcarousel::{Carousel, CarouselError};

#[test]
fn test_detached_surface_rejected() {
    let result = Carousel::with_clock(
        RecordingSurface::detached(),
        &CarouselConfig::default(),
        ManualClock::new(),
    );
    assert!(matches!(result, Err(CarouselError::ContainerUnavailable)));
}

#[test]
fn test_empty_slides_rejected() {
    let mut config = CarouselConfig::default();
    config.slides.clear();
    let result = Carousel::new(RecordingSurface::new(400.0), &config);
    assert!(matches!(result, Err(CarouselError::NoSlides)));
}

#[test]
fn test_initialize_mounts_every_slide() {
    let (carousel, _clock) = TestCarouselBuilder::new().build();

    assert_eq!(
        carousel.surface().mounted_titles(),
        ["Summer Sale!", "New Arrivals", "Limited Time"]
    );
    assert_eq!(carousel.surface().placements().len(), 3);
    assert_eq!(carousel.current_index(), 0);
    assert!(!carousel.is_animating());
}

#[test]
fn test_stylesheet_applied_once() {
    let (mut carousel, _clock) = TestCarouselBuilder::new().build();
    carousel.initialize();
    carousel.initialize();

    let surface = carousel.surface();
    assert_eq!(surface.stylesheet_applications(), 1);
    assert_eq!(surface.stylesheet(), Some(carousel.style()));
    assert_eq!(surface.mounted_titles().len(), 3);
}

#[test]
fn test_resize_is_picked_up_on_next_placement() {
    let (mut carousel, _clock) = TestCarouselBuilder::new().build();

    carousel.surface_mut().set_width(640.0);
    carousel.settle_positions();

    assert_eq!(carousel.surface().placement(1).unwrap().offset_x, 640.0);
}
