//! Unit tests for config loading.

use adcarousel::CarouselError;
use adcarousel::animation::Easing;
use adcarousel::config::{CarouselConfig, OverlapPolicy};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r##"{
            "slides": [
                { "title": "Solo", "subtitle": "Only one", "cta_label": "Buy", "background": "#abc" }
            ],
            "transition": { "duration_ms": 250, "easing": "linear", "overlap": "ignore" },
            "gestures": { "swipe_threshold_px": 80 }
        }"##,
    )
    .unwrap();

    let config = CarouselConfig::load_from(&path).unwrap();
    assert_eq!(config.slides.len(), 1);
    assert_eq!(config.slides[0].background.to_rgb(), 0xaabbcc);
    assert_eq!(config.transition.easing, Easing::Linear);
    assert_eq!(config.transition.overlap, OverlapPolicy::Ignore);
    assert_eq!(config.gestures.swipe_threshold_px, 80.0);
    assert_eq!(config.gestures.drag_peek_opacity, 0.7);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = CarouselConfig::load_from(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, CarouselError::Io(_)));
}

#[test]
fn test_malformed_file_is_json_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        CarouselConfig::load_from(&path),
        Err(CarouselError::Json(_))
    ));
}

#[test]
fn test_serialized_defaults_load_back() {
    let json = serde_json::to_string_pretty(&CarouselConfig::default()).unwrap();
    let config = CarouselConfig::from_json(&json).unwrap();
    assert_eq!(config, CarouselConfig::default());
}
