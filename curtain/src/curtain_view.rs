// Copyright 2025 the Curtain Authors
// SPDX-License-Identifier: Apache-2.0

//! The curtain control.

use std::fmt;
use std::time::Duration;

use bitflags::bitflags;
use kurbo::{RoundedRect, Size};
use peniko::Color;
use tracing::{Span, debug, trace, trace_span};
use ui_events::pointer::{PointerButton, PointerEvent};

use crate::geometry::{self, CurtainRects, TrackLayout, Viewport};
use crate::progress::ProgressController;
use crate::touch::{TouchOutcome, TouchTracker, TrackSnapshot};
use crate::{
    CurtainError, CurtainOptions, CurtainPart, CurtainScene, ImageAsset, ProgressAnimator,
    ProgressListener, TouchInput, TouchState, theme,
};

bitflags! {
    /// Work a [`CurtainView`] asks its host to schedule.
    ///
    /// Requests accumulate until drained with [`CurtainView::take_requests`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Requests: u8 {
        /// The curtain looks different; call [`CurtainView::paint`] again.
        const PAINT = 1;
        /// A transition is running; call [`CurtainView::on_anim_frame`] on the next frame.
        const ANIM_FRAME = 1 << 1;
    }
}

/// Whether an event was consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handled {
    /// The curtain consumed the event; it shouldn't be propagated further.
    Yes,
    /// The curtain ignored the event.
    No,
}

impl Handled {
    /// Has the event been handled?
    pub fn is_handled(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Handled {
    /// Returns `Handled::Yes` if `handled` is true, and `Handled::No` otherwise.
    fn from(handled: bool) -> Self {
        if handled { Self::Yes } else { Self::No }
    }
}

/// A slider drawn as a curtain.
///
/// One leaf (single mode) or two leaves meeting at the midline (doubled mode) hang below
/// a rod. The progress, an integer in `[min, max]`, sets how far the left leaf reaches
/// towards the midline (or the far end of the track in single mode); the right leaf
/// mirrors it. A thumb sits on the inner edge of the left leaf and can be dragged.
///
/// Out of range settings never fail: bounds that would break `0 <= min < max <= 100`
/// are ignored and progress values are clamped.
///
/// See the [crate documentation](crate) for how a host drives the view.
pub struct CurtainView {
    progress: ProgressController,
    min_margin: f64,
    rod_height: f64,
    doubled: bool,
    thumb_half: f64,
    viewport: Viewport,
    rects: CurtainRects,
    rod: RoundedRect,
    leaf_color: Option<Color>,
    rod_color: Option<Color>,
    thumb_image: Option<ImageAsset>,
    left_leaf_image: Option<ImageAsset>,
    right_leaf_image: Option<ImageAsset>,
    enabled: bool,
    touch: TouchTracker,
    listener: Option<Box<dyn ProgressListener>>,
    requests: Requests,
}

// --- MARK: BUILDERS
impl CurtainView {
    /// Creates a curtain with the default settings from [`theme`].
    pub fn new() -> Self {
        let progress = ProgressController::new();
        let layout = TrackLayout::default();
        let viewport = Viewport::default();
        Self {
            rects: geometry::compute_rects(progress.committed(), &layout, &viewport),
            rod: geometry::rod_shape(&viewport, layout.rod_height),
            progress,
            min_margin: layout.min_margin,
            rod_height: layout.rod_height,
            doubled: layout.doubled,
            thumb_half: layout.thumb_half,
            viewport,
            leaf_color: None,
            rod_color: None,
            thumb_image: None,
            left_leaf_image: None,
            right_leaf_image: None,
            enabled: true,
            touch: TouchTracker::default(),
            listener: None,
            requests: Requests::PAINT,
        }
    }

    /// Creates a curtain from declarative options.
    ///
    /// Fails only if a color string can't be parsed.
    pub fn from_options(options: &CurtainOptions) -> Result<Self, CurtainError> {
        let leaf_color = options.parsed_leaf_color()?;
        let rod_color = options.parsed_rod_color()?;

        let mut curtain = Self::new()
            .with_min(options.min)
            .with_max(options.max)
            .with_duration(options.duration_ms)
            .with_progress(options.progress)
            .with_min_progress(options.min_progress)
            .with_rod_height(options.rod_height)
            .with_doubled(options.doubled);
        curtain.leaf_color = leaf_color.filter(is_visible);
        curtain.rod_color = rod_color.filter(is_visible);
        Ok(curtain)
    }

    /// Builder-style method for setting the lowest progress value.
    pub fn with_min(mut self, min: i32) -> Self {
        self.set_min(min);
        self
    }

    /// Builder-style method for setting the highest progress value.
    pub fn with_max(mut self, max: i32) -> Self {
        self.set_max(max);
        self
    }

    /// Builder-style method for setting the initial progress.
    ///
    /// Unlike [`set_progress`](Self::set_progress), this doesn't animate.
    pub fn with_progress(mut self, progress: i32) -> Self {
        self.progress.commit(progress);
        self.relayout();
        self
    }

    /// Builder-style method for setting the animation length, in milliseconds.
    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.set_duration(duration_ms);
        self
    }

    /// Builder-style method for setting the distance leaves keep from their outer edge.
    pub fn with_min_progress(mut self, min_margin: f64) -> Self {
        self.set_min_progress(min_margin);
        self
    }

    /// Builder-style method for setting the rod's height.
    pub fn with_rod_height(mut self, rod_height: f64) -> Self {
        self.set_rod_height(rod_height);
        self
    }

    /// Builder-style method for choosing doubled (two leaves) or single mode.
    pub fn with_doubled(mut self, doubled: bool) -> Self {
        self.set_curtain_type(doubled);
        self
    }

    /// Builder-style method for setting the leaves' fill color.
    pub fn with_leaf_color(mut self, color: impl Into<Color>) -> Self {
        self.set_progress_color(color);
        self
    }

    /// Builder-style method for setting the rod's fill color.
    pub fn with_rod_color(mut self, color: impl Into<Color>) -> Self {
        self.set_rod_color(color);
        self
    }

    /// Builder-style method for setting the thumb's image.
    pub fn with_thumb_image(mut self, image: ImageAsset) -> Self {
        self.set_thumb_image(Some(image));
        self
    }

    /// Builder-style method for setting images drawn over the leaves.
    pub fn with_leaf_images(mut self, left: Option<ImageAsset>, right: Option<ImageAsset>) -> Self {
        self.set_leaf_images(left, right);
        self
    }

    /// Builder-style method for replacing the default [`TweenAnimator`](crate::TweenAnimator).
    pub fn with_animator(mut self, animator: impl ProgressAnimator + 'static) -> Self {
        self.progress.set_animator(Box::new(animator));
        self
    }

    /// Builder-style method for registering a [`ProgressListener`].
    pub fn with_listener(mut self, listener: impl ProgressListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }
}

// --- MARK: ACCESSORS
impl CurtainView {
    /// The lowest progress value.
    pub fn min(&self) -> i32 {
        self.progress.min()
    }

    /// The highest progress value.
    pub fn max(&self) -> i32 {
        self.progress.max()
    }

    /// The current progress.
    ///
    /// After [`set_progress`](Self::set_progress) this is the requested value until the
    /// first animation frame, then follows the animation.
    pub fn progress(&self) -> i32 {
        self.progress.progress()
    }

    /// The length of progress animations.
    pub fn duration(&self) -> Duration {
        self.progress.duration()
    }

    /// The rectangles the curtain is currently drawn with.
    pub fn rects(&self) -> &CurtainRects {
        &self.rects
    }

    /// The area the curtain is drawn in.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Whether the curtain has two leaves.
    pub fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Whether the curtain reacts to pointer input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The drag state.
    pub fn touch_state(&self) -> TouchState {
        self.touch.state()
    }

    /// Whether the thumb is being dragged.
    pub fn is_tracking(&self) -> bool {
        matches!(self.touch.state(), TouchState::Tracking { .. })
    }

    /// Whether a progress transition is running.
    pub fn is_animating(&self) -> bool {
        self.progress.is_animating()
    }

    /// Drains the work requested since the last call.
    pub fn take_requests(&mut self) -> Requests {
        std::mem::take(&mut self.requests)
    }
}

// --- MARK: MUTATORS
impl CurtainView {
    /// Sets the lowest progress value.
    ///
    /// Ignored unless `0 <= min < max`. The progress is clamped into the new range.
    pub fn set_min(&mut self, min: i32) {
        if self.progress.set_min(min) {
            self.relayout();
        }
    }

    /// Sets the highest progress value.
    ///
    /// Ignored unless `min < max <= 100`. The progress is clamped into the new range.
    pub fn set_max(&mut self, max: i32) {
        if self.progress.set_max(max) {
            self.relayout();
        }
    }

    /// Sets the length of progress animations, in milliseconds.
    ///
    /// A transition already running keeps its length.
    pub fn set_duration(&mut self, duration_ms: u32) {
        self.progress.set_duration(Duration::from_millis(duration_ms.into()));
    }

    /// Animates the curtain towards `progress`, clamped to `[min, max]`.
    ///
    /// Does nothing if the clamped value is already the current progress. A transition
    /// already running is replaced, starting from the value last drawn.
    /// The listener is not notified.
    pub fn set_progress(&mut self, progress: i32) {
        if self.progress.set_progress(progress) {
            trace!(target = self.progress.progress(), "Curtain transition started");
            self.requests |= Requests::ANIM_FRAME;
        }
    }

    /// Cancels the running transition, leaving the curtain where it was last drawn.
    pub fn stop_animation(&mut self) {
        self.progress.stop_animation();
    }

    /// Sets the leaves' fill color. A fully transparent color disables the fill.
    pub fn set_progress_color(&mut self, color: impl Into<Color>) {
        self.leaf_color = Some(color.into()).filter(is_visible);
        self.requests |= Requests::PAINT;
    }

    /// Sets the rod's fill color. A fully transparent color hides the rod.
    pub fn set_rod_color(&mut self, color: impl Into<Color>) {
        self.rod_color = Some(color.into()).filter(is_visible);
        self.requests |= Requests::PAINT;
    }

    /// Sets the rod's height; the leaves hang below it.
    ///
    /// Negative or non-finite heights are ignored.
    pub fn set_rod_height(&mut self, rod_height: f64) {
        if !rod_height.is_finite() || rod_height < 0. {
            debug!(rod_height, "Rejected curtain rod height");
            return;
        }
        self.rod_height = rod_height;
        self.rod = geometry::rod_shape(&self.viewport, rod_height);
        self.relayout();
    }

    /// Sets the distance leaves always keep from their outer edge.
    ///
    /// Negative or non-finite distances are ignored.
    pub fn set_min_progress(&mut self, min_margin: f64) {
        if !min_margin.is_finite() || min_margin < 0. {
            debug!(min_margin, "Rejected curtain minimum margin");
            return;
        }
        self.min_margin = min_margin;
        self.relayout();
    }

    /// Sets the thumb's image. Its intrinsic height sets the thumb's size.
    ///
    /// Without an image the thumb is neither drawn nor draggable.
    pub fn set_thumb_image(&mut self, image: Option<ImageAsset>) {
        self.thumb_image = image;
        self.thumb_half = thumb_half(self.thumb_image.as_ref());
        self.relayout();
    }

    /// Sets the images drawn over the leaves.
    ///
    /// The right image is only drawn in doubled mode.
    pub fn set_leaf_images(&mut self, left: Option<ImageAsset>, right: Option<ImageAsset>) {
        self.left_leaf_image = left;
        self.right_leaf_image = right;
        self.requests |= Requests::PAINT;
    }

    /// Chooses between two leaves meeting at the midline (`true`) and a single leaf.
    ///
    /// Takes effect immediately, without animation.
    pub fn set_curtain_type(&mut self, doubled: bool) {
        self.doubled = doubled;
        self.relayout();
    }

    /// Enables or disables pointer input.
    ///
    /// Disabling the curtain abandons a drag in progress without notifying the listener.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.touch = TouchTracker::default();
        }
    }

    /// Registers the listener notified of drags, replacing the previous one.
    pub fn set_on_progress_change_listener(
        &mut self,
        listener: Option<Box<dyn ProgressListener>>,
    ) {
        self.listener = listener;
    }
}

// --- MARK: HOST HOOKS
impl CurtainView {
    /// Must be called whenever the drawable area changes size.
    pub fn on_resize(&mut self, size: Size) {
        let _span = self.make_trace_span().entered();
        self.viewport = Viewport::new(size);
        self.thumb_half = thumb_half(self.thumb_image.as_ref());
        self.rod = geometry::rod_shape(&self.viewport, self.rod_height);
        self.relayout();
    }

    /// Advances the running transition by `interval` nanoseconds.
    ///
    /// Call this on each frame while [`Requests::ANIM_FRAME`] is being requested.
    pub fn on_anim_frame(&mut self, interval: u64) {
        let Some(sample) = self.progress.advance(Duration::from_nanos(interval)) else {
            return;
        };
        self.relayout();
        if !sample.finished {
            self.requests |= Requests::ANIM_FRAME;
        }
    }

    /// Handles a pointer event from [`ui_events`].
    ///
    /// Positions are read in logical pixels. Buttons other than the primary one don't
    /// start a drag. Every event is handled while the curtain is enabled.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Handled {
        if !self.enabled {
            return Handled::No;
        }
        let input = match event {
            PointerEvent::Down(pbe) if pbe.button.is_none_or(|b| b == PointerButton::Primary) => {
                Some(TouchInput::Down(pbe.state.logical_point()))
            }
            PointerEvent::Move(pu) => Some(TouchInput::Move(pu.current.logical_point())),
            PointerEvent::Up(..) => Some(TouchInput::Up),
            PointerEvent::Cancel(..) => Some(TouchInput::Cancel),
            _ => None,
        };
        match input {
            Some(input) => self.on_touch(input),
            None => Handled::Yes,
        }
    }

    /// Handles pointer input.
    pub fn on_touch(&mut self, input: TouchInput) -> Handled {
        if !self.enabled {
            return Handled::No;
        }
        let _span = self.make_trace_span().entered();

        let layout = self.layout();
        let outcome = self.touch.handle(
            input,
            TrackSnapshot {
                layout: &layout,
                viewport: &self.viewport,
                rects: &self.rects,
                progress: self.progress.progress(),
                has_thumb: self.thumb_image.is_some(),
            },
        );

        match outcome {
            TouchOutcome::Ignored => {}
            TouchOutcome::Started => {
                self.progress.stop_animation();
                if let Some(listener) = &mut self.listener {
                    listener.on_start_tracking_touch();
                }
            }
            TouchOutcome::Progress(progress) => {
                if let Some(listener) = &mut self.listener {
                    listener.on_progress_changed(progress, true);
                }
                self.progress.commit(progress);
                self.relayout();
            }
            TouchOutcome::Released { has_moved } => {
                if has_moved && let Some(listener) = &mut self.listener {
                    listener.on_stop_tracking_touch();
                }
            }
        }
        Handled::Yes
    }

    /// Records the drawing steps for the curtain's current state into `scene`.
    ///
    /// Steps are recorded in painter's order: rod, leaf fills, leaf images, thumb.
    /// Parts without a color or image are skipped.
    pub fn paint(&self, scene: &mut CurtainScene) {
        if let Some(color) = self.rod_color {
            scene.fill(CurtainPart::Rod, self.rod, color);
        }
        if let Some(color) = self.leaf_color {
            scene.fill(CurtainPart::LeftLeaf, geometry::leaf_shape(self.rects.left), color);
            if let Some(right) = self.rects.right {
                scene.fill(CurtainPart::RightLeaf, geometry::leaf_shape(right), color);
            }
        }
        if let Some(image) = &self.left_leaf_image {
            scene.draw_image(CurtainPart::LeftLeafImage, image, self.rects.left.expand());
        }
        if let (Some(image), Some(right)) = (&self.right_leaf_image, self.rects.right) {
            scene.draw_image(CurtainPart::RightLeafImage, image, right.expand());
        }
        if let Some(image) = &self.thumb_image {
            scene.draw_image(CurtainPart::Thumb, image, self.rects.thumb);
        }
    }
}

// --- MARK: INTERNALS
impl CurtainView {
    fn layout(&self) -> TrackLayout {
        TrackLayout {
            min: self.progress.min(),
            max: self.progress.max(),
            min_margin: self.min_margin,
            rod_height: self.rod_height,
            thumb_half: self.thumb_half,
            doubled: self.doubled,
        }
    }

    /// Recomputes every rectangle from the committed progress.
    fn relayout(&mut self) {
        self.rects =
            geometry::compute_rects(self.progress.committed(), &self.layout(), &self.viewport);
        self.requests |= Requests::PAINT;
    }

    fn make_trace_span(&self) -> Span {
        trace_span!("CurtainView", progress = self.progress.progress())
    }
}

fn is_visible(color: &Color) -> bool {
    color.components[3] > 0.
}

fn thumb_half(image: Option<&ImageAsset>) -> f64 {
    image.map_or(theme::DEFAULT_THUMB_HALF, |image| {
        (image.intrinsic_size().height / 2.).floor()
    })
}

impl Default for CurtainView {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CurtainView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurtainView")
            .field("progress", &self.progress)
            .field("doubled", &self.doubled)
            .field("viewport", &self.viewport)
            .field("rects", &self.rects)
            .field("enabled", &self.enabled)
            .field("touch", &self.touch.state())
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}
