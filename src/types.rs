//! Core types for the carousel.
//!
//! Slide content, validated colors and transition direction. Everything here
//! is plain data with no knowledge of rendering or timing.

use crate::error::CarouselError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Colors
// ============================================================================

/// An opaque RGB color parsed from `#rgb` or `#rrggbb`.
///
/// Stored as `0xRRGGBB` so it can be handed to `gpui::rgb` directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(u32);

impl HexColor {
    pub const fn from_rgb(rgb: u32) -> Self {
        Self(rgb & 0x00ff_ffff)
    }

    /// Packed `0xRRGGBB` value
    pub fn to_rgb(self) -> u32 {
        self.0
    }

    pub fn parse(input: &str) -> Result<Self, CarouselError> {
        let invalid = || CarouselError::InvalidColor(input.to_string());
        let hex = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex.len() {
            6 => u32::from_str_radix(hex, 16).map(Self).map_err(|_| invalid()),
            3 => {
                // #abc -> #aabbcc
                let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
                u32::from_str_radix(&expanded, 16)
                    .map(Self)
                    .map_err(|_| invalid())
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for HexColor {
    type Error = CarouselError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

// ============================================================================
// Slides
// ============================================================================

/// One advertisement slide. Immutable once the carousel is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub subtitle: String,
    /// Call-to-action button label
    pub cta_label: String,
    pub background: HexColor,
}

impl Slide {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        cta_label: impl Into<String>,
        background: HexColor,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            cta_label: cta_label.into(),
            background,
        }
    }
}

/// The stock slide set shown when no config file provides one
pub fn default_slides() -> Vec<Slide> {
    vec![
        Slide::new(
            "Summer Sale!",
            "Up to 50% off.",
            "Shop Now",
            HexColor::from_rgb(0xffcc00),
        ),
        Slide::new(
            "New Arrivals",
            "See what\u{2019}s new.",
            "Explore",
            HexColor::from_rgb(0x66ccff),
        ),
        Slide::new(
            "Limited Time",
            "Only this weekend.",
            "Grab Deal",
            HexColor::from_rgb(0x99e699),
        ),
    ]
}

// ============================================================================
// Direction
// ============================================================================

/// Side a transition moves toward.
///
/// `Forward` brings the incoming slide in from the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Direction from `current` toward `target`, `None` when they are equal
    pub fn between(current: usize, target: usize) -> Option<Self> {
        match target.cmp(&current) {
            std::cmp::Ordering::Greater => Some(Self::Forward),
            std::cmp::Ordering::Less => Some(Self::Backward),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// +1.0 or -1.0
    pub fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}
