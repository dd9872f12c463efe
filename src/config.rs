//! Carousel configuration.
//!
//! Loaded once at startup from `<config dir>/adcarousel/config.json`. Every
//! section is optional and falls back to the defaults in `constants`.
//!
//! ```json
//! {
//!   "slides": [
//!     { "title": "Summer Sale!", "subtitle": "Up to 50% off.",
//!       "cta_label": "Shop Now", "background": "#ffcc00" }
//!   ],
//!   "transition": { "duration_ms": 500, "easing": "ease_out_quad", "overlap": "replace" },
//!   "gestures": { "swipe_threshold_px": 50.0, "drag_peek_opacity": 0.7 }
//! }
//! ```

use crate::animation::Easing;
use crate::constants::*;
use crate::error::{CarouselError, CarouselResult};
use crate::types::{HexColor, Slide, default_slides};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// What to do with a transition request while another is still animating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Snap the running transition to its end, then start the new one
    #[default]
    Replace,
    /// Drop requests until the running transition completes
    Ignore,
}

/// Slide transition timing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub duration_ms: u64,
    pub easing: Easing,
    pub overlap: OverlapPolicy,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: TRANSITION_DURATION_MS,
            easing: Easing::default(),
            overlap: OverlapPolicy::default(),
        }
    }
}

impl TransitionConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Drag and swipe tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// A release further than this from the press changes slides
    pub swipe_threshold_px: f32,
    /// Opacity of the inactive slides while dragging
    pub drag_peek_opacity: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            drag_peek_opacity: DRAG_PEEK_OPACITY,
        }
    }
}

/// Declarative slide styling, applied once when the carousel initializes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    pub title_size: f32,
    pub subtitle_size: f32,
    pub cta_size: f32,
    pub text_color: HexColor,
    pub cta_background: HexColor,
    pub cta_text_color: HexColor,
    pub corner_radius: f32,
    pub padding: f32,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            title_size: DEFAULT_TITLE_SIZE,
            subtitle_size: DEFAULT_SUBTITLE_SIZE,
            cta_size: DEFAULT_CTA_SIZE,
            text_color: default_color(DEFAULT_TEXT_COLOR, 0x222222),
            cta_background: default_color(DEFAULT_CTA_BACKGROUND, 0x222222),
            cta_text_color: default_color(DEFAULT_CTA_TEXT_COLOR, 0xffffff),
            corner_radius: DEFAULT_CORNER_RADIUS,
            padding: DEFAULT_SLIDE_PADDING,
        }
    }
}

fn default_color(hex: &str, fallback: u32) -> HexColor {
    HexColor::parse(hex).unwrap_or(HexColor::from_rgb(fallback))
}

/// Desktop host window size
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Top-level configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub slides: Vec<Slide>,
    pub transition: TransitionConfig,
    pub gestures: GestureConfig,
    pub style: StyleSheet,
    pub window: WindowConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slides: default_slides(),
            transition: TransitionConfig::default(),
            gestures: GestureConfig::default(),
            style: StyleSheet::default(),
            window: WindowConfig::default(),
        }
    }
}

/// Path of the user config file, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl CarouselConfig {
    /// Load the user config, or the defaults when there is none.
    pub fn load() -> CarouselResult<Self> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> CarouselResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        info!(path = %path.display(), slides = config.slides.len(), "Loaded carousel config");
        Ok(config)
    }

    pub fn from_json(json: &str) -> CarouselResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CarouselResult<()> {
        if self.slides.is_empty() {
            return Err(CarouselError::NoSlides);
        }

        let threshold = self.gestures.swipe_threshold_px;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(CarouselError::InvalidConfig(format!(
                "swipe_threshold_px must be a non-negative number, got {threshold}"
            )));
        }

        let peek = self.gestures.drag_peek_opacity;
        if !(0.0..=1.0).contains(&peek) {
            return Err(CarouselError::InvalidConfig(format!(
                "drag_peek_opacity must be within 0..=1, got {peek}"
            )));
        }

        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(CarouselError::InvalidConfig(
                "window size must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
