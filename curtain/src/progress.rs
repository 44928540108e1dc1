// Copyright 2025 the Curtain Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::animation::{AnimationSample, ProgressAnimator, TweenAnimator};
use crate::theme;

/// Owns a curtain's progress, its bounds and the transition animating it.
///
/// `min < max` and `min <= progress <= max` hold after every method call.
pub(crate) struct ProgressController {
    min: i32,
    max: i32,
    /// The value reported to callers. During a transition this runs ahead of
    /// `committed` until the first sample arrives.
    progress: i32,
    /// The value the geometry was last computed from.
    committed: i32,
    duration: Duration,
    animator: Box<dyn ProgressAnimator>,
}

impl ProgressController {
    pub(crate) fn new() -> Self {
        Self {
            min: theme::DEFAULT_MIN,
            max: theme::DEFAULT_MAX,
            progress: theme::DEFAULT_PROGRESS,
            committed: theme::DEFAULT_PROGRESS,
            duration: Duration::from_millis(theme::DEFAULT_DURATION_MS.into()),
            animator: Box::new(TweenAnimator::new()),
        }
    }

    pub(crate) fn set_animator(&mut self, animator: Box<dyn ProgressAnimator>) {
        self.animator.cancel();
        self.progress = self.committed;
        self.animator = animator;
    }

    pub(crate) fn min(&self) -> i32 {
        self.min
    }

    pub(crate) fn max(&self) -> i32 {
        self.max
    }

    pub(crate) fn progress(&self) -> i32 {
        self.progress
    }

    pub(crate) fn committed(&self) -> i32 {
        self.committed
    }

    pub(crate) fn duration(&self) -> Duration {
        self.duration
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Returns whether the bound was accepted.
    pub(crate) fn set_min(&mut self, min: i32) -> bool {
        if min < 0 || min >= self.max {
            debug!(min, max = self.max, "Rejected curtain minimum");
            return false;
        }
        self.min = min;
        self.reclamp();
        true
    }

    /// Returns whether the bound was accepted.
    pub(crate) fn set_max(&mut self, max: i32) -> bool {
        if max <= 0 || max > theme::MAX_UPPER_BOUND || max <= self.min {
            debug!(max, min = self.min, "Rejected curtain maximum");
            return false;
        }
        self.max = max;
        self.reclamp();
        true
    }

    pub(crate) fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Sets the progress without animating, e.g. for the initial value or a drag.
    pub(crate) fn commit(&mut self, progress: i32) {
        let progress = progress.clamp(self.min, self.max);
        self.progress = progress;
        self.committed = progress;
    }

    /// Requests an animated change of progress.
    ///
    /// Returns whether a transition was started.
    pub(crate) fn set_progress(&mut self, progress: i32) -> bool {
        let target = progress.clamp(self.min, self.max);
        if target == self.progress {
            return false;
        }
        self.stop_animation();
        let from = self.committed;
        self.progress = target;
        self.animator.start(from, target, self.duration);
        true
    }

    /// Cancels the transition in flight, keeping the last committed value.
    pub(crate) fn stop_animation(&mut self) {
        if self.animator.is_running() {
            self.animator.cancel();
            self.progress = self.committed;
        }
    }

    /// Moves the transition in flight forward and commits the sample it produces.
    pub(crate) fn advance(&mut self, interval: Duration) -> Option<AnimationSample> {
        let mut sample = self.animator.advance(interval)?;
        sample.value = sample.value.clamp(self.min, self.max);
        self.progress = sample.value;
        self.committed = sample.value;
        Some(sample)
    }

    fn reclamp(&mut self) {
        self.progress = self.progress.clamp(self.min, self.max);
        self.committed = self.committed.clamp(self.min, self.max);
    }
}

impl fmt::Debug for ProgressController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressController")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("progress", &self.progress)
            .field("committed", &self.committed)
            .field("duration", &self.duration)
            .field("animating", &self.animator.is_running())
            .finish_non_exhaustive()
    }
}
