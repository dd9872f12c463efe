//! Per-frame animation driver.
//!
//! A driver owns at most one in-flight run. Each run is tagged with a
//! generation `RunToken`; starting a new run retires the previous token, so
//! the old run's callbacks never fire again.
//!
//! Callbacks receive `&mut C`, a context supplied on every tick. The owner
//! keeps its mutable state beside the driver and lends it in, which avoids
//! shared ownership between the driver and the state it animates.

use super::clock::Clock;
use super::easing::Easing;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::trace;

/// Per-frame value callback
pub type UpdateFn<C> = Box<dyn FnMut(&mut C, f32)>;

/// Called once when a run reaches progress 1
pub type CompleteFn<C> = Box<dyn FnOnce(&mut C)>;

// ============================================================================
// Tween
// ============================================================================

/// A numeric range interpolated over a duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress in [0, 1]. A zero duration is complete immediately.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased value after `elapsed`
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        self.value_for_progress(self.progress(elapsed))
    }

    fn value_for_progress(&self, progress: f32) -> f32 {
        if progress >= 1.0 {
            // land exactly on the end value
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }
}

// ============================================================================
// Run tokens
// ============================================================================

/// Identifies one run of a driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RunToken(u64);

impl RunToken {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Outcome of a single tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickStatus {
    /// Nothing was running
    Idle,
    /// Progress < 1, another frame is needed
    Running,
    /// The run reached progress 1 and its completion fired
    Completed,
}

impl TickStatus {
    pub fn needs_frame(self) -> bool {
        matches!(self, Self::Running)
    }
}

// ============================================================================
// Driver
// ============================================================================

struct ActiveRun<C> {
    token: RunToken,
    tween: Tween,
    started_at: Instant,
    on_update: UpdateFn<C>,
    on_complete: Option<CompleteFn<C>>,
}

/// Drives one run at a time from frame ticks.
pub struct AnimationDriver<C> {
    generation: u64,
    active: Option<ActiveRun<C>>,
}

impl<C> Default for AnimationDriver<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for AnimationDriver<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationDriver")
            .field("generation", &self.generation)
            .field("active", &self.active.as_ref().map(|run| (run.token, run.tween)))
            .finish()
    }
}

impl<C> AnimationDriver<C> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            active: None,
        }
    }

    /// Start a run from `from` to `to`, timed from `clock.now()`.
    ///
    /// Nothing is called until the first `tick`.
    pub fn run_animation(
        &mut self,
        from: f32,
        to: f32,
        duration: Duration,
        easing: Easing,
        clock: &impl Clock,
        on_update: impl FnMut(&mut C, f32) + 'static,
        on_complete: impl FnOnce(&mut C) + 'static,
    ) -> RunToken {
        self.run(
            Tween::new(from, to, duration).with_easing(easing),
            clock.now(),
            Box::new(on_update),
            Box::new(on_complete),
        )
    }

    /// Start a run, replacing any run in flight.
    ///
    /// The replaced run is dropped without its completion firing.
    pub fn run(
        &mut self,
        tween: Tween,
        started_at: Instant,
        on_update: UpdateFn<C>,
        on_complete: CompleteFn<C>,
    ) -> RunToken {
        if let Some(previous) = self.active.take() {
            trace!(generation = previous.token.generation(), "animation run superseded");
        }

        self.generation += 1;
        let token = RunToken(self.generation);
        self.active = Some(ActiveRun {
            token,
            tween,
            started_at,
            on_update,
            on_complete: Some(on_complete),
        });
        token
    }

    /// Advance the active run to `now`.
    pub fn tick(&mut self, ctx: &mut C, now: Instant) -> TickStatus {
        let Some(run) = self.active.as_mut() else {
            return TickStatus::Idle;
        };

        let elapsed = now.saturating_duration_since(run.started_at);
        let progress = run.tween.progress(elapsed);
        let value = run.tween.value_for_progress(progress);
        (run.on_update)(ctx, value);

        if progress < 1.0 {
            return TickStatus::Running;
        }

        if let Some(mut finished) = self.active.take() {
            if let Some(on_complete) = finished.on_complete.take() {
                on_complete(ctx);
            }
        }
        TickStatus::Completed
    }

    /// Jump the active run to its end value and complete it.
    ///
    /// Returns false when nothing was running.
    pub fn finish(&mut self, ctx: &mut C) -> bool {
        let Some(mut run) = self.active.take() else {
            return false;
        };
        (run.on_update)(ctx, run.tween.to);
        if let Some(on_complete) = run.on_complete.take() {
            on_complete(ctx);
        }
        true
    }

    /// Drop the run identified by `token` without completing it.
    ///
    /// A stale token is ignored.
    pub fn cancel(&mut self, token: RunToken) -> bool {
        if self.is_current(token) {
            self.active = None;
            true
        } else {
            false
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_token(&self) -> Option<RunToken> {
        self.active.as_ref().map(|run| run.token)
    }

    pub fn is_current(&self, token: RunToken) -> bool {
        self.active_token() == Some(token)
    }
}
