//! Time-based animation driver.
//!
//! Interpolates a number from a start value to an end value over wall-clock
//! time, invoking an update callback once per frame and a completion callback
//! once at the end. Knows nothing about carousels or rendering.
//!
//! ## Modules
//!
//! - `easing` - Easing curves mapping progress in [0, 1] to [0, 1]
//! - `clock` - Monotonic clock and frame scheduling seams
//! - `driver` - Tweens, run tokens and the per-frame driver

mod clock;
mod driver;
mod easing;

pub use clock::{Clock, FrameScheduler, ManualClock, SystemClock};
pub use driver::{AnimationDriver, CompleteFn, RunToken, TickStatus, Tween, UpdateFn};
pub use easing::{Easing, ease_out_quad};
