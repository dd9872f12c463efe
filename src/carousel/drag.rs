//! Drag operations - pointer and touch swipes between slides.
//!
//! ## Performance Notes
//!
//! `update_drag` runs on every pointer move while a button is held, so it
//! does nothing beyond re-placing the slides.

use super::Carousel;
use crate::animation::Clock;
use crate::input::SwipeOutcome;
use crate::profile_scope;
use crate::surface::Surface;
use tracing::debug;

impl<S: Surface + 'static, K: Clock> Carousel<S, K> {
    /// Press at `x`. Returns false when a drag is already running or the
    /// overlap policy refuses to interrupt a transition.
    pub fn begin_drag(&mut self, x: f32) -> bool {
        if self.is_dragging() || !self.make_way() {
            return false;
        }
        let started = self.stage.state.drag.begin(x);
        if started {
            debug!(x, "Drag started");
        }
        started
    }

    /// Move to `x`, dragging every slide along. No-op unless dragging.
    pub fn update_drag(&mut self, x: f32) {
        profile_scope!("update_drag");

        if let Some(delta) = self.stage.state.drag.update(x) {
            self.stage.apply_drag(delta);
        }
    }

    /// Release at `x`. A release beyond the swipe threshold changes slides,
    /// anything shorter snaps back. Returns `None` when no drag was running.
    pub fn end_drag(&mut self, x: f32) -> Option<SwipeOutcome> {
        let delta = self.stage.state.drag.end(x)?;
        let outcome = SwipeOutcome::from_delta(delta, self.gestures.swipe_threshold_px);
        debug!(delta, ?outcome, "Drag ended");

        match outcome {
            SwipeOutcome::Advance => {
                self.advance();
            }
            SwipeOutcome::Retreat => {
                self.retreat();
            }
            SwipeOutcome::SnapBack => self.settle_positions(),
        }
        Some(outcome)
    }
}
