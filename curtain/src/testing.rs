// Copyright 2025 the Curtain Authors
// SPDX-License-Identifier: Apache-2.0

//! Helpers for writing tests against a [`CurtainView`](crate::CurtainView).
//!
//! Note: These are meant to help maintainers and hosts test curtains, not to be used in
//! production code.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use dpi::PhysicalPosition;
use kurbo::Point;
use ui_events::pointer::{
    PointerButton, PointerButtonEvent, PointerEvent, PointerId, PointerInfo, PointerState,
    PointerType, PointerUpdate,
};

use crate::{AnimationSample, ProgressAnimator, ProgressListener, TweenAnimator};

/// A [`PointerInfo`] for a primary touch contact, for testing.
pub const PRIMARY_TOUCH: PointerInfo = PointerInfo {
    pointer_id: Some(PointerId::PRIMARY),
    persistent_device_id: None,
    pointer_type: PointerType::Touch,
};

/// A recording of [`ProgressListener`] calls.
///
/// Clones share the same queue, so one clone can be registered as the listener while
/// the test keeps another.
///
/// ```
/// use curtain::image::RgbaImage;
/// use curtain::testing::{Record, Recording};
/// use curtain::{CurtainView, ImageAsset};
///
/// let recording = Recording::default();
/// let mut curtain = CurtainView::new()
///     .with_thumb_image(ImageAsset::new(RgbaImage::new(64, 64)))
///     .with_listener(recording.clone());
/// let thumb = curtain.rects().thumb.center();
/// curtain.on_touch(curtain::TouchInput::Down(thumb));
/// assert_eq!(recording.next(), Some(Record::StartTracking));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recording(Rc<RefCell<VecDeque<Record>>>);

/// A recorded listener call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    /// [`ProgressListener::on_progress_changed`].
    ProgressChanged {
        /// The reported progress.
        progress: i32,
        /// Whether the change was reported as user-driven.
        is_user: bool,
    },
    /// [`ProgressListener::on_start_tracking_touch`].
    StartTracking,
    /// [`ProgressListener::on_stop_tracking_touch`].
    StopTracking,
}

impl Recording {
    /// True if no calls have been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// The number of calls in the recording.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Clear recorded calls.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Returns the next call in the recording, if one exists.
    ///
    /// This consumes the call.
    pub fn next(&self) -> Option<Record> {
        self.0.borrow_mut().pop_front()
    }

    /// Returns a vec of calls drained from the recording.
    pub fn drain(&self) -> Vec<Record> {
        self.0.borrow_mut().drain(..).collect::<Vec<_>>()
    }

    fn push(&self, record: Record) {
        self.0.borrow_mut().push_back(record);
    }
}

impl ProgressListener for Recording {
    fn on_progress_changed(&mut self, progress: i32, is_user: bool) {
        self.push(Record::ProgressChanged { progress, is_user });
    }

    fn on_start_tracking_touch(&mut self) {
        self.push(Record::StartTracking);
    }

    fn on_stop_tracking_touch(&mut self) {
        self.push(Record::StopTracking);
    }
}

/// A [`TweenAnimator`] that counts how many transitions it was asked to start.
#[derive(Debug, Default)]
pub struct CountingAnimator {
    inner: TweenAnimator,
    starts: Rc<Cell<usize>>,
}

impl CountingAnimator {
    /// Creates the animator and the counter it increments.
    pub fn new() -> (Self, Rc<Cell<usize>>) {
        let animator = Self::default();
        let starts = animator.starts.clone();
        (animator, starts)
    }
}

impl ProgressAnimator for CountingAnimator {
    fn start(&mut self, from: i32, to: i32, duration: Duration) {
        self.starts.set(self.starts.get() + 1);
        self.inner.start(from, to, duration);
    }

    fn cancel(&mut self) {
        self.inner.cancel();
    }

    fn is_running(&self) -> bool {
        self.inner.is_running()
    }

    fn advance(&mut self, interval: Duration) -> Option<AnimationSample> {
        self.inner.advance(interval)
    }
}

// --- MARK: EVENT HELPERS

fn touch_state(pos: Point) -> PointerState {
    let Point { x, y } = pos;
    PointerState {
        position: PhysicalPosition { x, y },
        scale_factor: 1.0,
        ..Default::default()
    }
}

/// A primary touch [`Down`](PointerEvent::Down) at `pos`, in logical pixels.
pub fn pointer_down(pos: Point) -> PointerEvent {
    PointerEvent::Down(PointerButtonEvent {
        button: Some(PointerButton::Primary),
        pointer: PRIMARY_TOUCH,
        state: touch_state(pos),
    })
}

/// A primary touch [`Move`](PointerEvent::Move) to `pos`, in logical pixels.
pub fn pointer_move(pos: Point) -> PointerEvent {
    PointerEvent::Move(PointerUpdate {
        pointer: PRIMARY_TOUCH,
        current: touch_state(pos),
        coalesced: vec![],
        predicted: vec![],
    })
}

/// A primary touch [`Up`](PointerEvent::Up) at `pos`, in logical pixels.
pub fn pointer_up(pos: Point) -> PointerEvent {
    PointerEvent::Up(PointerButtonEvent {
        button: Some(PointerButton::Primary),
        pointer: PRIMARY_TOUCH,
        state: touch_state(pos),
    })
}

/// A [`Cancel`](PointerEvent::Cancel) of the primary touch.
pub fn pointer_cancel() -> PointerEvent {
    PointerEvent::Cancel(PRIMARY_TOUCH)
}
