//! Unit tests for the animation driver.

use adcarousel::animation::{
    AnimationDriver, Clock, Easing, ManualClock, TickStatus, ease_out_quad,
};
use std::time::Duration;

#[derive(Default)]
struct Recorder {
    values: Vec<f32>,
    done: usize,
}

#[test]
fn test_ease_out_quad_properties() {
    assert_eq!(ease_out_quad(0.0), 0.0);
    assert_eq!(ease_out_quad(1.0), 1.0);

    let mut last = 0.0;
    for i in 0..=1000 {
        let v = ease_out_quad(i as f32 / 1000.0);
        assert!(v >= last);
        last = v;
    }
}

#[test]
fn test_run_samples_and_completes_once() {
    let clock = ManualClock::new();
    let mut driver = AnimationDriver::new();
    let mut recorder = Recorder::default();

    driver.run_animation(
        0.0,
        1.0,
        Duration::from_millis(500),
        Easing::EaseOutQuad,
        &clock,
        |r: &mut Recorder, v| r.values.push(v),
        |r: &mut Recorder| r.done += 1,
    );

    for _ in 0..2 {
        assert_eq!(driver.tick(&mut recorder, clock.now()), TickStatus::Running);
        assert_eq!(recorder.done, 0);
        clock.advance_ms(250);
    }
    assert_eq!(driver.tick(&mut recorder, clock.now()), TickStatus::Completed);
    assert_eq!(driver.tick(&mut recorder, clock.now()), TickStatus::Idle);

    assert_eq!(recorder.values[0], 0.0);
    assert!((recorder.values[1] - ease_out_quad(0.5)).abs() < 1e-6);
    assert_eq!(recorder.values[2], 1.0);
    assert_eq!(recorder.done, 1);
}

#[test]
fn test_independent_drivers_do_not_interfere() {
    let clock = ManualClock::new();
    let mut a = AnimationDriver::new();
    let mut b = AnimationDriver::new();
    let mut ra = Recorder::default();
    let mut rb = Recorder::default();

    a.run_animation(
        0.0,
        10.0,
        Duration::from_millis(100),
        Easing::Linear,
        &clock,
        |r: &mut Recorder, v| r.values.push(v),
        |r: &mut Recorder| r.done += 1,
    );
    clock.advance_ms(50);
    b.run_animation(
        0.0,
        10.0,
        Duration::from_millis(100),
        Easing::Linear,
        &clock,
        |r: &mut Recorder, v| r.values.push(v),
        |r: &mut Recorder| r.done += 1,
    );

    clock.advance_ms(50);
    assert_eq!(a.tick(&mut ra, clock.now()), TickStatus::Completed);
    assert_eq!(b.tick(&mut rb, clock.now()), TickStatus::Running);
    assert_eq!(ra.values, vec![10.0]);
    assert!((rb.values[0] - 5.0).abs() < 1e-4);
    assert_eq!((ra.done, rb.done), (1, 0));
}

#[test]
fn test_decreasing_range() {
    let clock = ManualClock::new();
    let mut driver = AnimationDriver::new();
    let mut recorder = Recorder::default();

    driver.run_animation(
        1.0,
        0.0,
        Duration::from_millis(200),
        Easing::EaseOutQuad,
        &clock,
        |r: &mut Recorder, v| r.values.push(v),
        |r: &mut Recorder| r.done += 1,
    );
    clock.advance_ms(100);
    driver.tick(&mut recorder, clock.now());
    assert!((recorder.values[0] - 0.25).abs() < 1e-6);
}
