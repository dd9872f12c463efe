//! Carousel state - current slide, drag and transition phase.

use crate::animation::RunToken;
use crate::error::{CarouselError, CarouselResult};
use crate::input::DragState;
use crate::types::Direction;

/// Where the carousel is in its `Idle -> Animating -> Idle` cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionPhase {
    #[default]
    Idle,

    /// A transition is in flight
    Animating {
        from: usize,
        to: usize,
        direction: Direction,
        /// Token of the driver run moving the slides
        token: RunToken,
    },
}

/// Mutable state of one carousel.
///
/// `current_index` is always a valid slide index; it only changes when a
/// transition completes.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    current_index: usize,
    slide_count: usize,
    pub drag: DragState,
    phase: TransitionPhase,
}

impl CarouselState {
    pub fn new(slide_count: usize) -> CarouselResult<Self> {
        if slide_count == 0 {
            return Err(CarouselError::NoSlides);
        }
        Ok(Self {
            current_index: 0,
            slide_count,
            drag: DragState::Idle,
            phase: TransitionPhase::Idle,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Index after the current one, wrapping to 0
    pub fn next_index(&self) -> usize {
        (self.current_index + 1) % self.slide_count
    }

    /// Index before the current one, wrapping to the last slide
    pub fn previous_index(&self) -> usize {
        (self.current_index + self.slide_count - 1) % self.slide_count
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, TransitionPhase::Animating { .. })
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Slide a running transition is heading to
    pub fn transition_target(&self) -> Option<usize> {
        match self.phase {
            TransitionPhase::Animating { to, .. } => Some(to),
            TransitionPhase::Idle => None,
        }
    }

    pub(crate) fn start_transition(&mut self, to: usize, direction: Direction, token: RunToken) {
        self.phase = TransitionPhase::Animating {
            from: self.current_index,
            to,
            direction,
            token,
        };
    }

    /// Make `index` current and return to Idle
    pub(crate) fn commit(&mut self, index: usize) {
        debug_assert!(index < self.slide_count);
        self.current_index = index;
        self.phase = TransitionPhase::Idle;
    }
}
