// Copyright 2025 the Curtain Authors
// SPDX-License-Identifier: Apache-2.0

//! The state machine turning pointer input into thumb drags.

use kurbo::Point;
use tracing::trace;

use crate::geometry::{self, CurtainRects, TrackLayout, Viewport};

/// Pointer input, in the curtain's coordinate space.
///
/// Only one pointer is tracked; hosts with several should forward the primary one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchInput {
    /// The pointer was pressed.
    Down(Point),
    /// The pointer moved.
    Move(Point),
    /// The pointer was released.
    Up,
    /// The gesture was interrupted by the platform.
    Cancel,
}

/// Whether the thumb is being dragged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TouchState {
    /// No drag in progress.
    #[default]
    Idle,
    /// The pointer went down on the thumb and has not been released.
    Tracking {
        /// Whether the drag has changed the progress yet.
        has_moved: bool,
    },
}

/// What the view needs to do in response to a [`TouchInput`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TouchOutcome {
    Ignored,
    Started,
    /// The drag designates a new progress value.
    Progress(i32),
    Released {
        has_moved: bool,
    },
}

/// Everything the state machine reads about the curtain.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TrackSnapshot<'a> {
    pub(crate) layout: &'a TrackLayout,
    pub(crate) viewport: &'a Viewport,
    pub(crate) rects: &'a CurtainRects,
    pub(crate) progress: i32,
    /// Whether a thumb image is set. Without one there is nothing to grab.
    pub(crate) has_thumb: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct TouchTracker {
    state: TouchState,
}

impl TouchTracker {
    pub(crate) fn state(&self) -> TouchState {
        self.state
    }

    pub(crate) fn handle(&mut self, input: TouchInput, track: TrackSnapshot<'_>) -> TouchOutcome {
        match input {
            TouchInput::Down(pos) => {
                if !track.has_thumb || !track.rects.thumb.contains(pos) {
                    self.state = TouchState::Idle;
                    return TouchOutcome::Ignored;
                }
                trace!(x = pos.x, y = pos.y, "Curtain thumb pressed");
                self.state = TouchState::Tracking { has_moved: false };
                TouchOutcome::Started
            }
            TouchInput::Move(pos) => {
                let TouchState::Tracking { has_moved } = &mut self.state else {
                    return TouchOutcome::Ignored;
                };
                if pos.x <= track.layout.min_margin {
                    return TouchOutcome::Ignored;
                }
                let Some(candidate) = geometry::progress_at(pos.x, track.layout, track.viewport)
                else {
                    return TouchOutcome::Ignored;
                };
                let candidate = candidate.clamp(track.layout.min, track.layout.max);
                if candidate == track.progress {
                    return TouchOutcome::Ignored;
                }
                *has_moved = true;
                TouchOutcome::Progress(candidate)
            }
            TouchInput::Up | TouchInput::Cancel => match std::mem::take(&mut self.state) {
                TouchState::Idle => TouchOutcome::Ignored,
                TouchState::Tracking { has_moved } => {
                    trace!(has_moved, "Curtain thumb released");
                    TouchOutcome::Released { has_moved }
                }
            },
        }
    }
}
