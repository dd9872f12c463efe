//! Presentation surface - where slides are drawn.
//!
//! The controller never touches a renderer directly. It asks a `Surface` for
//! the container width and tells it where each slide sits. The gpui view
//! implements this in `view::SlideLayer`; `RecordingSurface` is a headless
//! implementation that keeps every call for inspection.

use crate::config::StyleSheet;
use crate::types::Slide;

/// Where one slide sits relative to the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlidePlacement {
    /// Horizontal offset in pixels, 0 = fully visible
    pub offset_x: f32,
    /// 0.0 (hidden) to 1.0 (opaque)
    pub opacity: f32,
    /// False while the pointer drives the slide directly; the surface must
    /// not smooth these moves with its own transition.
    pub animated: bool,
}

impl SlidePlacement {
    pub fn new(offset_x: f32, opacity: f32) -> Self {
        Self {
            offset_x,
            opacity,
            animated: true,
        }
    }

    /// Same placement with the surface's own transition disabled
    pub fn direct(mut self) -> Self {
        self.animated = false;
        self
    }
}

impl Default for SlidePlacement {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// Capability the carousel needs from whatever displays it.
pub trait Surface {
    /// Whether the surface is connected to a container
    fn is_attached(&self) -> bool {
        true
    }

    /// Container width in pixels
    fn container_width(&self) -> f32;

    /// Apply the stylesheet. Called once, before slides are mounted.
    fn apply_stylesheet(&mut self, style: &StyleSheet);

    /// Replace any existing slide nodes with one per slide
    fn mount_slides(&mut self, slides: &[Slide]);

    fn place_slide(&mut self, index: usize, placement: SlidePlacement);
}

/// Headless surface that records what the carousel asked for.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: f32,
    attached: bool,
    stylesheet: Option<StyleSheet>,
    stylesheet_applications: usize,
    mounted: Vec<String>,
    placements: Vec<SlidePlacement>,
    placement_calls: usize,
}

impl RecordingSurface {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            attached: true,
            stylesheet: None,
            stylesheet_applications: 0,
            mounted: Vec::new(),
            placements: Vec::new(),
            placement_calls: 0,
        }
    }

    /// A surface with no container behind it
    pub fn detached() -> Self {
        Self {
            attached: false,
            ..Self::new(0.0)
        }
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn placement(&self, index: usize) -> Option<SlidePlacement> {
        self.placements.get(index).copied()
    }

    pub fn placements(&self) -> &[SlidePlacement] {
        &self.placements
    }

    /// Titles of the mounted slides, in order
    pub fn mounted_titles(&self) -> &[String] {
        &self.mounted
    }

    pub fn stylesheet(&self) -> Option<&StyleSheet> {
        self.stylesheet.as_ref()
    }

    pub fn stylesheet_applications(&self) -> usize {
        self.stylesheet_applications
    }

    pub fn placement_calls(&self) -> usize {
        self.placement_calls
    }

    /// One line per slide: `index offset opacity [direct]`
    pub fn layout_dump(&self) -> String {
        self.placements
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let mode = if p.animated { "" } else { " direct" };
                format!("{i}: x={:.1} a={:.2}{mode}", p.offset_x, p.opacity)
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl Surface for RecordingSurface {
    fn is_attached(&self) -> bool {
        self.attached
    }

    fn container_width(&self) -> f32 {
        self.width
    }

    fn apply_stylesheet(&mut self, style: &StyleSheet) {
        self.stylesheet = Some(style.clone());
        self.stylesheet_applications += 1;
    }

    fn mount_slides(&mut self, slides: &[Slide]) {
        self.mounted = slides.iter().map(|s| s.title.clone()).collect();
        self.placements = vec![SlidePlacement::default(); slides.len()];
    }

    fn place_slide(&mut self, index: usize, placement: SlidePlacement) {
        self.placement_calls += 1;
        if let Some(slot) = self.placements.get_mut(index) {
            *slot = placement;
        }
    }
}
