//! Slide placement math.
//!
//! Pure functions from carousel state to `SlidePlacement`s. Offsets are in
//! pixels relative to the container's left edge.

use crate::surface::SlidePlacement;
use crate::types::Direction;

/// Resting placement: the active slide fills the container, slides before
/// it wait one width to the left, slides after it one width to the right.
pub fn resting(index: usize, current: usize, width: f32) -> SlidePlacement {
    if index == current {
        SlidePlacement::new(0.0, 1.0)
    } else if index < current {
        SlidePlacement::new(-width, 0.0)
    } else {
        SlidePlacement::new(width, 0.0)
    }
}

/// Where the incoming slide waits before a transition starts
pub fn offscreen(direction: Direction, width: f32) -> SlidePlacement {
    SlidePlacement::new(direction.sign() * width, 0.0).direct()
}

/// The slide leaving, `t` in [0, 1]
pub fn outgoing(direction: Direction, width: f32, t: f32) -> SlidePlacement {
    SlidePlacement::new(-direction.sign() * width * t, 1.0 - t).direct()
}

/// The slide arriving, `t` in [0, 1]
pub fn incoming(direction: Direction, width: f32, t: f32) -> SlidePlacement {
    SlidePlacement::new(direction.sign() * width * (1.0 - t), t).direct()
}

/// Placement while the pointer drags all slides by `delta`
pub fn dragged(
    index: usize,
    current: usize,
    width: f32,
    delta: f32,
    peek_opacity: f32,
) -> SlidePlacement {
    let relative = index as f32 - current as f32;
    let opacity = if index == current { 1.0 } else { peek_opacity };
    SlidePlacement::new(relative * width + delta, opacity).direct()
}
