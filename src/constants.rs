//! Application-wide constants.
//!
//! Centralizes the tuning values of the carousel so the config defaults,
//! the controller and the view agree on them.

// ============================================================================
// Transition Timing
// ============================================================================

/// Duration of a slide-to-slide transition in milliseconds
pub const TRANSITION_DURATION_MS: u64 = 500;

/// Target frame time for 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

// ============================================================================
// Gestures
// ============================================================================

/// Horizontal travel a drag must exceed to change slides
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Opacity of neighbouring slides while a drag is in progress
pub const DRAG_PEEK_OPACITY: f32 = 0.7;

// ============================================================================
// Window
// ============================================================================

/// Default host window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 600.0;

/// Default host window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 250.0;

// ============================================================================
// Slide Styling (default hex values and sizes)
// ============================================================================

/// Title font size
pub const DEFAULT_TITLE_SIZE: f32 = 32.0;

/// Subtitle font size
pub const DEFAULT_SUBTITLE_SIZE: f32 = 18.0;

/// Call-to-action label font size
pub const DEFAULT_CTA_SIZE: f32 = 16.0;

/// Slide text color
pub const DEFAULT_TEXT_COLOR: &str = "#222222";

/// Call-to-action button background
pub const DEFAULT_CTA_BACKGROUND: &str = "#222222";

/// Call-to-action button text color
pub const DEFAULT_CTA_TEXT_COLOR: &str = "#ffffff";

/// Slide corner radius
pub const DEFAULT_CORNER_RADIUS: f32 = 10.0;

/// Inner slide padding
pub const DEFAULT_SLIDE_PADDING: f32 = 24.0;

// ============================================================================
// Config Location
// ============================================================================

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "adcarousel";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.json";
