//! Call-to-action activation.

use super::Carousel;
use crate::animation::Clock;
use crate::error::{CarouselError, CarouselResult};
use crate::surface::Surface;
use std::time::SystemTime;
use tracing::info;

/// A click on a slide's call-to-action button
#[derive(Clone, Debug, PartialEq)]
pub struct CtaActivation {
    pub slide_index: usize,
    pub label: String,
    pub at: SystemTime,
}

impl<S: Surface + 'static, K: Clock> Carousel<S, K> {
    /// Record a click on the call-to-action of slide `index`.
    pub fn activate_cta(&self, index: usize) -> CarouselResult<CtaActivation> {
        let slide = self
            .stage
            .slides
            .get(index)
            .ok_or(CarouselError::SlideOutOfRange {
                index,
                len: self.stage.slides.len(),
            })?;

        let activation = CtaActivation {
            slide_index: index,
            label: slide.cta_label.clone(),
            at: SystemTime::now(),
        };
        info!(slide = index, label = %activation.label, "CTA clicked");
        Ok(activation)
    }
}
