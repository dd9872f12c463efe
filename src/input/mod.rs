//! Keyboard, pointer and touch input for the carousel.
//!
//! ## Architecture
//!
//! Hosts convert native events into `InputEvent`s and hand them to
//! `Carousel::handle_input`. Drags are tracked by an explicit state machine
//! (`DragState`) rather than loose fields, so a move or release without a
//! press is a no-op by construction.
//!
//! ## Modules
//!
//! - `state` - Drag state machine and swipe classification
//! - `events` - Host-neutral input events
//! - `dispatch` - Routing events to carousel operations

mod dispatch;
mod events;
mod state;

pub use dispatch::InputOutcome;
pub use events::{InputEvent, Key};
pub use state::{DragState, SwipeOutcome};
