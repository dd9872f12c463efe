//! Input events delivered to the carousel.
//!
//! Hosts translate their native events into these. Only the horizontal
//! coordinate matters to the carousel, so that is all they carry.

/// Keys the carousel reacts to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other(String),
}

impl Key {
    /// Map a key name as reported by gpui ("left") or a browser
    /// ("ArrowLeft") to a `Key`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "left" | "ArrowLeft" => Self::ArrowLeft,
            "right" | "ArrowRight" => Self::ArrowRight,
            other => Self::Other(other.to_string()),
        }
    }
}

/// One input event in container coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    PointerDown { x: f32 },
    PointerMove { x: f32 },
    PointerUp { x: f32 },
    /// `touches` lists the x of every finger currently on the surface
    TouchStart { touches: Vec<f32> },
    TouchMove { touches: Vec<f32> },
    /// `changed` lists the x of the fingers that lifted
    TouchEnd { changed: Vec<f32> },
    /// The call-to-action of a slide was clicked
    CtaClick { slide: usize },
}

impl InputEvent {
    pub fn key(name: &str) -> Self {
        Self::KeyDown(Key::from_name(name))
    }

    /// Single-finger touch start, the only kind that starts a drag
    pub fn touch_start(x: f32) -> Self {
        Self::TouchStart { touches: vec![x] }
    }

    pub fn touch_move(x: f32) -> Self {
        Self::TouchMove { touches: vec![x] }
    }

    pub fn touch_end(x: f32) -> Self {
        Self::TouchEnd { changed: vec![x] }
    }
}
