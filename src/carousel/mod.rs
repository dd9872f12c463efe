//! Carousel controller - slide data, navigation state and transitions.
//!
//! This module is organized into several submodules:
//! - `state` - Current index, drag state and transition phase
//! - `layout` - Slide placement math
//! - `lifecycle` - Construction, initialization and accessors
//! - `navigation` - go_to_slide, advance/retreat, frame ticks
//! - `drag` - Pointer and touch drag handling
//! - `cta` - Call-to-action activation

mod cta;
mod drag;
pub mod layout;
mod lifecycle;
mod navigation;
mod state;

pub use cta::CtaActivation;
pub use state::{CarouselState, TransitionPhase};

use crate::animation::{AnimationDriver, Clock, CompleteFn, SystemClock, UpdateFn};
use crate::config::{GestureConfig, StyleSheet, TransitionConfig};
use crate::surface::Surface;
use crate::types::{Direction, Slide};
use tracing::info;

/// The part of the carousel the animation driver mutates.
///
/// Kept apart from the driver so a tick can borrow both at once.
#[derive(Debug)]
pub(crate) struct Stage<S> {
    slides: Vec<Slide>,
    state: CarouselState,
    surface: S,
    peek_opacity: f32,
}

impl<S: Surface + 'static> Stage<S> {
    fn width(&self) -> f32 {
        self.surface.container_width()
    }

    fn settle_positions(&mut self) {
        let width = self.width();
        let current = self.state.current_index();
        for index in 0..self.slides.len() {
            self.surface
                .place_slide(index, layout::resting(index, current, width));
        }
    }

    fn apply_transition_frame(&mut self, from: usize, to: usize, direction: Direction, t: f32) {
        let width = self.width();
        self.surface
            .place_slide(from, layout::outgoing(direction, width, t));
        self.surface
            .place_slide(to, layout::incoming(direction, width, t));
    }

    fn apply_drag(&mut self, delta: f32) {
        let width = self.width();
        let current = self.state.current_index();
        for index in 0..self.slides.len() {
            let placement = layout::dragged(index, current, width, delta, self.peek_opacity);
            self.surface.place_slide(index, placement);
        }
    }

    fn commit(&mut self, index: usize) {
        self.state.commit(index);
        self.settle_positions();
        info!(index, "Slide changed");
    }

    /// Driver callbacks for one `from -> to` transition
    fn transition_callbacks(
        from: usize,
        to: usize,
        direction: Direction,
    ) -> (UpdateFn<Self>, CompleteFn<Self>) {
        (
            Box::new(move |stage: &mut Self, t: f32| {
                stage.apply_transition_frame(from, to, direction, t)
            }),
            Box::new(move |stage: &mut Self| stage.commit(to)),
        )
    }
}

/// An advertisement carousel bound to a presentation surface.
///
/// Built explicitly by the host with [`Carousel::new`] and started with
/// [`Carousel::initialize`].
#[derive(Debug)]
pub struct Carousel<S, K = SystemClock> {
    stage: Stage<S>,
    driver: AnimationDriver<Stage<S>>,
    clock: K,
    transition: TransitionConfig,
    gestures: GestureConfig,
    style: StyleSheet,
    style_applied: bool,
}

impl<S: Surface + 'static, K: Clock> Carousel<S, K> {
    pub fn current_index(&self) -> usize {
        self.stage.state.current_index()
    }

    pub fn slide_count(&self) -> usize {
        self.stage.slides.len()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.stage.slides
    }

    pub fn state(&self) -> &CarouselState {
        &self.stage.state
    }

    pub fn is_animating(&self) -> bool {
        self.stage.state.is_animating()
    }

    pub fn is_dragging(&self) -> bool {
        self.stage.state.is_dragging()
    }

    pub fn surface(&self) -> &S {
        &self.stage.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.stage.surface
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    pub fn transition_config(&self) -> &TransitionConfig {
        &self.transition
    }

    pub fn style(&self) -> &StyleSheet {
        &self.style
    }
}
