//! Event routing - maps input events to carousel operations.

use super::events::{InputEvent, Key};
use super::state::SwipeOutcome;
use crate::animation::Clock;
use crate::carousel::{Carousel, CtaActivation};
use crate::profile_scope;
use crate::surface::Surface;
use tracing::{trace, warn};

/// What an input event did to the carousel
#[derive(Clone, Debug, PartialEq)]
pub enum InputOutcome {
    /// Nothing changed
    Ignored,
    /// A transition started
    Navigated,
    /// A drag started or moved
    Dragged,
    /// A drag was released
    Released(SwipeOutcome),
    /// A call-to-action was clicked
    Cta(CtaActivation),
}

impl InputOutcome {
    /// Whether the host should redraw
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Self::Ignored | Self::Cta(_))
    }
}

impl<S: Surface + 'static, K: Clock> Carousel<S, K> {
    /// Route one input event.
    ///
    /// Touch gestures only count with a single finger; a touch start with
    /// more than one finger is ignored.
    pub fn handle_input(&mut self, event: &InputEvent) -> InputOutcome {
        profile_scope!("handle_input");
        trace!(?event, "Input");

        match event {
            InputEvent::KeyDown(Key::ArrowRight) => navigated(self.advance()),
            InputEvent::KeyDown(Key::ArrowLeft) => navigated(self.retreat()),
            InputEvent::KeyDown(Key::Other(_)) => InputOutcome::Ignored,

            InputEvent::PointerDown { x } => self.press(*x),
            InputEvent::PointerMove { x } => self.drag_to(*x),
            InputEvent::PointerUp { x } => self.release(*x),

            InputEvent::TouchStart { touches } => match touches.as_slice() {
                [x] => self.press(*x),
                _ => InputOutcome::Ignored,
            },
            InputEvent::TouchMove { touches } => match touches.first() {
                Some(x) => self.drag_to(*x),
                None => InputOutcome::Ignored,
            },
            InputEvent::TouchEnd { changed } => match changed.first() {
                Some(x) => self.release(*x),
                None => InputOutcome::Ignored,
            },

            InputEvent::CtaClick { slide } => match self.activate_cta(*slide) {
                Ok(activation) => InputOutcome::Cta(activation),
                Err(e) => {
                    warn!("CTA click ignored: {}", e);
                    InputOutcome::Ignored
                }
            },
        }
    }

    fn press(&mut self, x: f32) -> InputOutcome {
        if self.begin_drag(x) {
            InputOutcome::Dragged
        } else {
            InputOutcome::Ignored
        }
    }

    fn drag_to(&mut self, x: f32) -> InputOutcome {
        if !self.is_dragging() {
            return InputOutcome::Ignored;
        }
        self.update_drag(x);
        InputOutcome::Dragged
    }

    fn release(&mut self, x: f32) -> InputOutcome {
        match self.end_drag(x) {
            Some(outcome) => InputOutcome::Released(outcome),
            None => InputOutcome::Ignored,
        }
    }
}

fn navigated(started: bool) -> InputOutcome {
    if started {
        InputOutcome::Navigated
    } else {
        InputOutcome::Ignored
    }
}
