//! Unit tests for perf module.

use adcarousel::perf::FrameMonitor;
use std::time::{Duration, Instant};

#[test]
fn test_first_frame_starts_sequence() {
    let mut monitor = FrameMonitor::new();
    let start = Instant::now();

    monitor.frame_at(start);
    assert_eq!(monitor.total_frames(), 0);

    monitor.frame_at(start + Duration::from_millis(16));
    assert_eq!(monitor.total_frames(), 1);
    assert!((monitor.average_frame_time() - 16.0).abs() < 1e-9);
}

#[test]
fn test_recorded_frames_average() {
    let mut monitor = FrameMonitor::new();
    monitor.record_frame(10.0);
    monitor.record_frame(20.0);
    monitor.record_frame(30.0);

    assert!((monitor.average_frame_time() - 20.0).abs() < 1e-9);
    assert_eq!(monitor.max_frame_time(), 30.0);
    assert!((monitor.estimated_fps() - 50.0).abs() < 1e-9);
}

#[test]
fn test_slow_frames_counted() {
    let mut monitor = FrameMonitor::new();
    monitor.record_frame(16.0);
    monitor.record_frame(100.0);

    assert_eq!(monitor.slow_frames(), 1);
    assert_eq!(monitor.total_frames(), 2);
}

#[test]
fn test_finish_transition_starts_over() {
    let mut monitor = FrameMonitor::new();
    let start = Instant::now();
    monitor.frame_at(start);
    monitor.frame_at(start + Duration::from_millis(16));
    monitor.finish_transition();

    assert_eq!(monitor.average_frame_time(), 0.0);
    assert_eq!(monitor.estimated_fps(), 0.0);
    assert_eq!(monitor.total_frames(), 1);

    // the next frame opens a new sequence instead of spanning the gap
    monitor.frame_at(start + Duration::from_secs(3));
    assert_eq!(monitor.total_frames(), 1);
    assert_eq!(monitor.slow_frames(), 0);
}

#[test]
fn test_finish_without_frames_is_noop() {
    let mut monitor = FrameMonitor::new();
    monitor.finish_transition();
    assert_eq!(monitor.total_frames(), 0);
}
