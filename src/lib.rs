//! adcarousel - an advertisement slide carousel.
//!
//! The crate is split into a host-neutral core and a gpui front-end:
//! - `animation` - time-based animation driver and easing curves
//! - `carousel` - slide navigation state machine and transitions
//! - `input` - keyboard, pointer and touch events, drag state
//! - `surface` - the presentation surface the carousel draws on
//! - `config` - JSON configuration with defaults
//! - `view` - gpui window view and surface

pub mod animation;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod perf;
pub mod surface;
pub mod types;
pub mod view;

pub use carousel::Carousel;
pub use config::CarouselConfig;
pub use error::{CarouselError, CarouselResult};
