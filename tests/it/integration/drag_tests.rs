//! Drag and swipe scenarios.

use crate::helpers::{TestCarouselBuilder, settle};
use adcarousel::config::OverlapPolicy;
use adcarousel::input::{InputEvent, InputOutcome, SwipeOutcome};

#[test]
fn test_left_swipe_advances() {
    let (mut carousel, clock) = TestCarouselBuilder::new().build();

    carousel.handle_input(&InputEvent::PointerDown { x: 100.0 });
    carousel.handle_input(&InputEvent::PointerMove { x: 60.0 });
    let outcome = carousel.handle_input(&InputEvent::PointerUp { x: 40.0 });

    assert_eq!(outcome, InputOutcome::Released(SwipeOutcome::Advance));
    assert!(!carousel.is_dragging());
    settle(&mut carousel, &clock);
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_short_swipe_snaps_back() {
    let (mut carousel, _clock) = TestCarouselBuilder::new().build();

    carousel.handle_input(&InputEvent::PointerDown { x: 100.0 });
    carousel.handle_input(&InputEvent::PointerMove { x: 80.0 });
    let outcome = carousel.handle_input(&InputEvent::PointerUp { x: 70.0 });

    assert_eq!(outcome, InputOutcome::Released(SwipeOutcome::SnapBack));
    assert!(!carousel.is_animating());
    assert_eq!(carousel.current_index(), 0);

    let resting = carousel.surface().placement(0).unwrap();
    assert_eq!(resting.offset_x, 0.0);
    assert_eq!(resting.opacity, 1.0);
    assert!(resting.animated);
}

#[test]
fn test_threshold_is_exclusive() {
    let (mut carousel, _clock) = TestCarouselBuilder::new().build();

    carousel.begin_drag(100.0);
    assert_eq!(carousel.end_drag(50.0), Some(SwipeOutcome::SnapBack));

    carousel.begin_drag(100.0);
    assert_eq!(carousel.end_drag(150.0), Some(SwipeOutcome::SnapBack));

    carousel.begin_drag(100.0);
    assert_eq!(carousel.end_drag(150.5), Some(SwipeOutcome::Retreat));
}

#[test]
fn test_custom_threshold() {
    let builder = TestCarouselBuilder::new().with_threshold(120.0);
    assert_eq!(builder.config().gestures.swipe_threshold_px, 120.0);
    let (mut carousel, _clock) = builder.build();

    carousel.begin_drag(300.0);
    assert_eq!(carousel.end_drag(200.0), Some(SwipeOutcome::SnapBack));

    carousel.begin_drag(300.0);
    assert_eq!(carousel.end_drag(170.0), Some(SwipeOutcome::Advance));
}

#[test]
fn test_release_without_press_is_ignored() {
    let (mut carousel, _clock) = TestCarouselBuilder::new().build();
    assert_eq!(carousel.end_drag(10.0), None);
    assert_eq!(
        carousel.handle_input(&InputEvent::touch_end(10.0)),
        InputOutcome::Ignored
    );
}

#[test]
fn test_touch_swipe_advances() {
    let (mut carousel, clock) = TestCarouselBuilder::new().build();

    carousel.handle_input(&InputEvent::touch_start(200.0));
    carousel.handle_input(&InputEvent::touch_move(150.0));
    carousel.handle_input(&InputEvent::touch_end(120.0));

    settle(&mut carousel, &clock);
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_keyboard_during_drag_ends_drag() {
    let (mut carousel, _clock) = TestCarouselBuilder::new().build();

    carousel.begin_drag(100.0);
    carousel.update_drag(90.0);
    carousel.handle_input(&InputEvent::key("right"));

    assert!(!carousel.is_dragging());
    assert!(carousel.is_animating());
    assert_eq!(carousel.end_drag(0.0), None);
}

#[test]
fn test_press_during_transition_depends_on_policy() {
    let (mut replace, _clock) = TestCarouselBuilder::new()
        .with_policy(OverlapPolicy::Replace)
        .build();
    replace.advance();
    assert!(replace.begin_drag(100.0));
    assert!(!replace.is_animating());
    assert_eq!(replace.current_index(), 1);

    let (mut ignore, _clock) = TestCarouselBuilder::new()
        .with_policy(OverlapPolicy::Ignore)
        .build();
    ignore.advance();
    assert!(!ignore.begin_drag(100.0));
    assert!(ignore.is_animating());
}

#[test]
fn test_swipe_transition_rests_bystander_slides() {
    let (mut carousel, clock) = TestCarouselBuilder::new().build();

    carousel.begin_drag(100.0);
    carousel.update_drag(40.0);
    assert_eq!(carousel.surface().placement(2).unwrap().opacity, 0.7);
    carousel.end_drag(40.0);

    // slide 2 takes no part in 0 -> 1, so it must not stay dragged
    let bystander = carousel.surface().placement(2).unwrap();
    assert_eq!(bystander.offset_x, 400.0);
    assert_eq!(bystander.opacity, 0.0);
    assert!(bystander.animated);

    clock.advance_ms(250);
    carousel.tick();
    assert_eq!(carousel.surface().placement(2), Some(bystander));
}
