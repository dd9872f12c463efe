//! Error types for the carousel
//!
//! Construction and configuration failures. Input that arrives in the wrong
//! state (a drag move with no drag) is not an error and never reaches here.

use thiserror::Error;

/// Errors that can occur while building or configuring a carousel
#[derive(Error, Debug)]
pub enum CarouselError {
    /// The presentation surface is not attached to a container
    #[error("Carousel container is not available")]
    ContainerUnavailable,

    /// The slide collection is empty
    #[error("Carousel needs at least one slide")]
    NoSlides,

    /// A slide index outside the collection
    #[error("Slide index {index} out of range (have {len} slides)")]
    SlideOutOfRange { index: usize, len: usize },

    /// A color string that is not `#rgb` or `#rrggbb`
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// A config value outside its valid range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for carousel operations
pub type CarouselResult<T> = Result<T, CarouselError>;
