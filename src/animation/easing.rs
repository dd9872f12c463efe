//! Easing curves.

use serde::{Deserialize, Serialize};

/// Quadratic ease-out: starts fast, slows toward the end.
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Named easing curves selectable from config.
///
/// Every curve maps 0 to 0 and 1 to 1 and is non-decreasing in between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    EaseOutQuad,
    EaseInQuad,
    EaseInOutQuad,
    EaseOutCubic,
}

impl Easing {
    /// Apply the curve. Input is clamped to [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutQuad => ease_out_quad(t),
            Self::EaseInQuad => t * t,
            Self::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}
