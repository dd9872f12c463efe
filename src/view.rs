//! gpui front-end - the carousel as a window view.
//!
//! `SlideLayer` is the presentation surface: it stores the placements the
//! carousel hands it, and `CarouselView::render` turns them into absolutely
//! positioned slides. gpui has no style transitions, so the `animated` flag
//! of a placement has no visual effect here; motion comes entirely from the
//! animation driver ticking once per frame.
//!
//! ## Performance Notes
//!
//! Render runs every frame while a transition is in flight. Frame intervals
//! are fed to a `FrameMonitor`, which warns about slow frames and logs a
//! summary when the transition ends.

use crate::animation::{Clock, FrameScheduler, TickStatus};
use crate::carousel::Carousel;
use crate::config::StyleSheet;
use crate::input::InputEvent;
use crate::perf::FrameMonitor;
use crate::profile_scope;
use crate::surface::{SlidePlacement, Surface};
use crate::types::Slide;
use gpui::*;

impl FrameScheduler for Window {
    fn request_frame(&mut self) {
        self.request_animation_frame();
    }
}

/// One render's worth of animation: tick the running transition and time
/// the frame.
///
/// A transition can also end between frames, when a press fast-forwards it,
/// so the frame sequence is closed on any render with nothing animating.
pub fn drive_frame<S: Surface + 'static, K: Clock>(
    carousel: &mut Carousel<S, K>,
    frames: &mut FrameMonitor,
    scheduler: &mut dyn FrameScheduler,
) -> TickStatus {
    profile_scope!("drive_frame");

    if !carousel.is_animating() {
        frames.finish_transition();
        return TickStatus::Idle;
    }

    frames.frame_at(carousel.clock().now());
    let status = carousel.pump(scheduler);
    if status == TickStatus::Completed {
        frames.finish_transition();
    }
    status
}

// ============================================================================
// Slide Layer
// ============================================================================

/// Surface backing the gpui view.
#[derive(Clone, Debug, Default)]
pub struct SlideLayer {
    width: f32,
    slides: Vec<Slide>,
    placements: Vec<SlidePlacement>,
    style: StyleSheet,
}

impl SlideLayer {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Track the container width; called before each render
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn placements(&self) -> &[SlidePlacement] {
        &self.placements
    }

    pub fn style(&self) -> &StyleSheet {
        &self.style
    }
}

impl Surface for SlideLayer {
    fn container_width(&self) -> f32 {
        self.width
    }

    fn apply_stylesheet(&mut self, style: &StyleSheet) {
        self.style = style.clone();
    }

    fn mount_slides(&mut self, slides: &[Slide]) {
        self.slides = slides.to_vec();
        self.placements = vec![SlidePlacement::default(); slides.len()];
    }

    fn place_slide(&mut self, index: usize, placement: SlidePlacement) {
        if let Some(slot) = self.placements.get_mut(index) {
            *slot = placement;
        }
    }
}

// ============================================================================
// View
// ============================================================================

/// Window view hosting one carousel.
pub struct CarouselView {
    carousel: Carousel<SlideLayer>,
    focus_handle: FocusHandle,
    frames: FrameMonitor,
}

impl CarouselView {
    /// Wrap an already initialized carousel and take keyboard focus.
    pub fn new(
        carousel: Carousel<SlideLayer>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = cx.focus_handle();
        focus_handle.focus(window);

        Self {
            carousel,
            focus_handle,
            frames: FrameMonitor::new(),
        }
    }

    fn dispatch(&mut self, event: InputEvent, cx: &mut Context<Self>) {
        if self.carousel.handle_input(&event).needs_redraw() {
            cx.notify();
        }
    }
}

impl Render for CarouselView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let width = f32::from(window.viewport_size().width);
        self.carousel.surface_mut().set_width(width);

        drive_frame(&mut self.carousel, &mut self.frames, window);

        let layer = self.carousel.surface();
        let slides: Vec<Stateful<Div>> = layer
            .slides()
            .iter()
            .zip(layer.placements())
            .enumerate()
            .map(|(index, (slide, placement))| {
                render_slide(index, slide, *placement, layer.style(), cx)
            })
            .collect();

        div()
            .id("ad-container")
            .track_focus(&self.focus_handle)
            .relative()
            .size_full()
            .overflow_hidden()
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                this.dispatch(InputEvent::key(&event.keystroke.key), cx);
            }))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, event: &MouseDownEvent, window, cx| {
                    this.focus_handle.focus(window);
                    let x = f32::from(event.position.x);
                    this.dispatch(InputEvent::PointerDown { x }, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, event: &MouseMoveEvent, _window, cx| {
                let x = f32::from(event.position.x);
                this.dispatch(InputEvent::PointerMove { x }, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, event: &MouseUpEvent, _window, cx| {
                    let x = f32::from(event.position.x);
                    this.dispatch(InputEvent::PointerUp { x }, cx);
                }),
            )
            // releases outside the container still end the drag
            .on_mouse_up_out(
                MouseButton::Left,
                cx.listener(|this, event: &MouseUpEvent, _window, cx| {
                    let x = f32::from(event.position.x);
                    this.dispatch(InputEvent::PointerUp { x }, cx);
                }),
            )
            .children(slides)
    }
}

/// Render one slide at its placement
fn render_slide(
    index: usize,
    slide: &Slide,
    placement: SlidePlacement,
    style: &StyleSheet,
    cx: &mut Context<CarouselView>,
) -> Stateful<Div> {
    div()
        .id(ElementId::Name(format!("slide-{index}").into()))
        .absolute()
        .top_0()
        .left(px(placement.offset_x))
        .w_full()
        .h_full()
        .opacity(placement.opacity)
        .bg(rgb(slide.background.to_rgb()))
        .rounded(px(style.corner_radius))
        .p(px(style.padding))
        .flex()
        .flex_col()
        .justify_center()
        .items_start()
        .gap(px(8.0))
        .text_color(rgb(style.text_color.to_rgb()))
        .child(
            div()
                .text_size(px(style.title_size))
                .font_weight(FontWeight::BOLD)
                .child(slide.title.clone()),
        )
        .child(
            div()
                .text_size(px(style.subtitle_size))
                .child(slide.subtitle.clone()),
        )
        .child(
            div()
                .id(ElementId::Name(format!("cta-{index}").into()))
                .mt(px(12.0))
                .px(px(16.0))
                .py(px(8.0))
                .rounded(px(style.corner_radius / 2.0))
                .bg(rgb(style.cta_background.to_rgb()))
                .text_color(rgb(style.cta_text_color.to_rgb()))
                .text_size(px(style.cta_size))
                .font_weight(FontWeight::MEDIUM)
                .cursor_pointer()
                .child(slide.cta_label.clone())
                .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                    this.dispatch(InputEvent::CtaClick { slide: index }, cx);
                })),
        )
}
