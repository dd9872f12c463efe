//! Performance monitoring for the animation loop.
//!
//! - **Frame timing**: `FrameMonitor` keeps rolling frame times while a
//!   transition runs and warns about slow frames
//! - **Scoped timers**: RAII timing for hot paths (`tick`, `update_drag`)
//! - **Conditional compilation**: `profile_scope!` costs nothing unless the
//!   `profiling` feature is on
//!
//! ```ignore
//! use adcarousel::profile_scope;
//!
//! fn tick() {
//!     profile_scope!("carousel_tick");
//!     // ...
//! }
//! ```

use crate::constants::TARGET_FRAME_MS;
use std::collections::VecDeque;
use std::time::Instant;
use tracing::{debug, warn};

/// Number of frames kept for rolling averages
const SAMPLE_COUNT: usize = 60;

/// A frame slower than `TARGET_FRAME_MS * WARN_THRESHOLD` is reported
const WARN_THRESHOLD: f64 = 2.0;

// ============================================================================
// Profiling Macros
// ============================================================================

/// Time the enclosing scope. Zero-cost when the `profiling` feature is off.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

// ============================================================================
// Frame Monitor
// ============================================================================

/// Rolling frame statistics for animated frames.
#[derive(Debug, Clone)]
pub struct FrameMonitor {
    frame_times: VecDeque<f64>,
    last_frame: Option<Instant>,
    slow_frame_count: u64,
    total_frames: u64,
}

impl Default for FrameMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameMonitor {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(SAMPLE_COUNT),
            last_frame: None,
            slow_frame_count: 0,
            total_frames: 0,
        }
    }

    /// Note a rendered frame at `now`. The interval since the previous
    /// frame of the same transition is recorded; the first frame only
    /// starts the sequence.
    pub fn frame_at(&mut self, now: Instant) {
        if let Some(previous) = self.last_frame.replace(now) {
            let ms = now.saturating_duration_since(previous).as_secs_f64() * 1000.0;
            self.record_frame(ms);
        }
    }

    /// Record a frame time measured elsewhere.
    pub fn record_frame(&mut self, ms: f64) {
        if self.frame_times.len() >= SAMPLE_COUNT {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(ms);
        self.total_frames += 1;

        if ms > TARGET_FRAME_MS * WARN_THRESHOLD {
            self.slow_frame_count += 1;
            warn!(
                frame_time_ms = format!("{:.2}", ms),
                target_ms = format!("{:.2}", TARGET_FRAME_MS),
                "Slow animation frame"
            );
        }
    }

    /// Average over the rolling window
    pub fn average_frame_time(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f64>() / self.frame_times.len() as f64
    }

    pub fn max_frame_time(&self) -> f64 {
        self.frame_times.iter().copied().fold(0.0, f64::max)
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    pub fn slow_frames(&self) -> u64 {
        self.slow_frame_count
    }

    pub fn estimated_fps(&self) -> f64 {
        let avg = self.average_frame_time();
        if avg <= 0.0 {
            return 0.0;
        }
        1000.0 / avg
    }

    /// Log a summary of the transition that just finished, then start over.
    ///
    /// Safe to call when no transition was recorded.
    pub fn finish_transition(&mut self) {
        self.last_frame = None;
        if self.frame_times.is_empty() {
            return;
        }
        debug!(
            frames = self.frame_times.len(),
            slow_frames = self.slow_frame_count,
            total_frames = self.total_frames,
            avg_frame_ms = format!("{:.2}", self.average_frame_time()),
            max_frame_ms = format!("{:.2}", self.max_frame_time()),
            estimated_fps = format!("{:.1}", self.estimated_fps()),
            "Transition frames"
        );
        self.frame_times.clear();
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// Warns on drop when the scope took longer than its threshold.
#[derive(Debug)]
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with a 1ms threshold, used by `profile_scope!`
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}
