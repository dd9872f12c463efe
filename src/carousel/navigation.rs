//! Slide navigation - transitions between slides and the frame loop.
//!
//! Only one transition is in flight at a time. What happens to a request
//! that arrives mid-transition is decided by `OverlapPolicy`:
//! - `Replace` snaps the running transition to its end (committing its
//!   target) and then starts the new one
//! - `Ignore` drops the request

use super::{Carousel, Stage, TransitionPhase, layout};
use crate::animation::{Clock, FrameScheduler, TickStatus, Tween};
use crate::config::OverlapPolicy;
use crate::error::{CarouselError, CarouselResult};
use crate::profile_scope;
use crate::surface::Surface;
use crate::types::Direction;
use tracing::debug;

impl<S: Surface + 'static, K: Clock> Carousel<S, K> {
    /// Animate to `target`.
    ///
    /// Returns `Ok(true)` when a transition started and `Ok(false)` when the
    /// request was a no-op (already there, or dropped by the overlap policy).
    pub fn go_to_slide(&mut self, target: usize) -> CarouselResult<bool> {
        let len = self.slide_count();
        if target >= len {
            return Err(CarouselError::SlideOutOfRange { index: target, len });
        }
        if !self.make_way() {
            return Ok(false);
        }

        let current = self.current_index();
        let Some(direction) = Direction::between(current, target) else {
            return Ok(false);
        };

        // a keyboard transition ends any drag in progress
        self.stage.state.drag.reset();

        // slides left where a drag put them go back to rest
        self.stage.settle_positions();
        let width = self.stage.width();
        self.stage
            .surface
            .place_slide(target, layout::offscreen(direction, width));

        let tween = Tween::new(0.0, 1.0, self.transition.duration())
            .with_easing(self.transition.easing);
        let (on_update, on_complete) =
            Stage::<S>::transition_callbacks(current, target, direction);
        let token = self
            .driver
            .run(tween, self.clock.now(), on_update, on_complete);
        self.stage.state.start_transition(target, direction, token);

        debug!(from = current, to = target, ?direction, "Transition started");
        Ok(true)
    }

    /// Move to the next slide, wrapping after the last.
    pub fn advance(&mut self) -> bool {
        if !self.make_way() {
            return false;
        }
        let target = self.stage.state.next_index();
        self.go_to_slide(target).unwrap_or(false)
    }

    /// Move to the previous slide, wrapping before the first.
    pub fn retreat(&mut self) -> bool {
        if !self.make_way() {
            return false;
        }
        let target = self.stage.state.previous_index();
        self.go_to_slide(target).unwrap_or(false)
    }

    /// Snap every slide to its resting position.
    pub fn settle_positions(&mut self) {
        self.stage.settle_positions();
    }

    /// Advance the running transition to the clock's current time.
    pub fn tick(&mut self) -> TickStatus {
        profile_scope!("carousel_tick");
        let now = self.clock.now();
        self.driver.tick(&mut self.stage, now)
    }

    /// Tick, and ask `scheduler` for another frame while still animating.
    pub fn pump(&mut self, scheduler: &mut dyn FrameScheduler) -> TickStatus {
        let status = self.tick();
        if status.needs_frame() {
            scheduler.request_frame();
        }
        status
    }

    /// Complete the running transition immediately.
    pub fn finish_transition(&mut self) -> bool {
        self.driver.finish(&mut self.stage)
    }

    /// Clear the way for a new transition according to the overlap policy.
    ///
    /// Returns false when the caller must drop its request.
    pub(super) fn make_way(&mut self) -> bool {
        if !self.is_animating() {
            return true;
        }
        match self.transition.overlap {
            OverlapPolicy::Ignore => {
                debug!(
                    pending = ?self.stage.state.transition_target(),
                    "Transition in flight, request ignored"
                );
                false
            }
            OverlapPolicy::Replace => {
                if let TransitionPhase::Animating { to, token, .. } = self.stage.state.phase() {
                    debug!(
                        pending = to,
                        generation = token.generation(),
                        "Fast-forwarding transition"
                    );
                }
                self.driver.finish(&mut self.stage);
                true
            }
        }
    }
}
