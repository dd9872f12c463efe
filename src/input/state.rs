//! Drag state machine - explicit state for pointer and touch drags.
//!
//! The press position and the latest pointer position live inside the
//! `Dragging` variant, so "moving while not dragging" has nowhere to write.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging        (pointer down / single-finger touch start)
//! Dragging -> Dragging    (pointer move, updates current_x)
//! Dragging -> Idle        (pointer up / touch end, yields the final delta)
//! ```

/// Drag state for one carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No pointer is held down
    #[default]
    Idle,

    /// A pointer is held down and may be moving
    Dragging {
        /// Pointer x at press
        start_x: f32,
        /// Latest pointer x
        current_x: f32,
    },
}

/// What a finished drag asks the carousel to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Finger moved left past the threshold
    Advance,
    /// Finger moved right past the threshold
    Retreat,
    /// Not far enough, return to rest
    SnapBack,
}

impl SwipeOutcome {
    /// Classify a drag distance. Only travel strictly beyond `threshold` counts.
    pub fn from_delta(delta: f32, threshold: f32) -> Self {
        if delta.abs() <= threshold {
            Self::SnapBack
        } else if delta < 0.0 {
            Self::Advance
        } else {
            Self::Retreat
        }
    }
}

impl DragState {
    /// Returns true while a pointer is held down
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Get the press position, if dragging
    pub fn start_x(&self) -> Option<f32> {
        match self {
            Self::Dragging { start_x, .. } => Some(*start_x),
            Self::Idle => None,
        }
    }

    /// Get the latest pointer position, if dragging
    pub fn current_x(&self) -> Option<f32> {
        match self {
            Self::Dragging { current_x, .. } => Some(*current_x),
            Self::Idle => None,
        }
    }

    /// Distance travelled since the press, if dragging
    pub fn delta(&self) -> Option<f32> {
        match self {
            Self::Dragging { start_x, current_x } => Some(current_x - start_x),
            Self::Idle => None,
        }
    }

    /// Start a drag at `x`. Returns false if one is already running.
    pub fn begin(&mut self, x: f32) -> bool {
        if self.is_dragging() {
            return false;
        }
        *self = Self::Dragging {
            start_x: x,
            current_x: x,
        };
        true
    }

    /// Record a new pointer position and return the delta from the press.
    pub fn update(&mut self, x: f32) -> Option<f32> {
        match self {
            Self::Dragging { start_x, current_x } => {
                *current_x = x;
                Some(x - *start_x)
            }
            Self::Idle => None,
        }
    }

    /// Finish the drag at `x` and return the final delta.
    pub fn end(&mut self, x: f32) -> Option<f32> {
        let start_x = self.start_x()?;
        *self = Self::Idle;
        Some(x - start_x)
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
