// Copyright 2025 the Curtain Authors
// SPDX-License-Identifier: Apache-2.0

//! Animated transitions between progress values.

use std::f64::consts::PI;
use std::time::Duration;

/// A value produced by a [`ProgressAnimator`] for one animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationSample {
    /// The interpolated progress.
    pub value: i32,
    /// Whether this is the last sample of the transition.
    pub finished: bool,
}

/// Produces intermediate progress values for a transition.
///
/// The animator does not schedule anything itself. Whoever owns it calls
/// [`advance`](Self::advance) once per animation frame with the time elapsed since the
/// previous frame, until a sample reports `finished` or the transition is cancelled.
pub trait ProgressAnimator {
    /// Starts a transition from `from` to `to`, replacing any transition in flight.
    fn start(&mut self, from: i32, to: i32, duration: Duration);

    /// Stops the transition in flight, if any. No further samples are produced.
    fn cancel(&mut self);

    /// Whether a transition is in flight.
    fn is_running(&self) -> bool;

    /// Moves the transition forward by `interval`.
    ///
    /// Returns `None` when no transition is in flight.
    fn advance(&mut self, interval: Duration) -> Option<AnimationSample>;
}

/// The pacing of a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Starts slowly, speeds up through the middle and slows down at the end.
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    /// Maps elapsed time `t` in `[0, 1]` to the fraction of the distance covered.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::AccelerateDecelerate => ((t + 1.) * PI).cos() / 2. + 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: i32,
    to: i32,
    duration: Duration,
    elapsed: Duration,
}

/// The default [`ProgressAnimator`]: an integer tween following an [`Easing`] curve.
///
/// Intermediate values are truncated toward zero. The last sample is always exactly the
/// target, whatever the frame timing.
#[derive(Clone, Debug, Default)]
pub struct TweenAnimator {
    easing: Easing,
    tween: Option<Tween>,
}

impl TweenAnimator {
    /// Creates an idle animator with the default easing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method for setting the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl ProgressAnimator for TweenAnimator {
    fn start(&mut self, from: i32, to: i32, duration: Duration) {
        self.tween = Some(Tween {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        });
    }

    fn cancel(&mut self) {
        self.tween = None;
    }

    fn is_running(&self) -> bool {
        self.tween.is_some()
    }

    fn advance(&mut self, interval: Duration) -> Option<AnimationSample> {
        let tween = self.tween.as_mut()?;
        tween.elapsed = tween.elapsed.saturating_add(interval);

        let t = if tween.duration.is_zero() {
            1.
        } else {
            (tween.elapsed.as_secs_f64() / tween.duration.as_secs_f64()).min(1.)
        };
        if t >= 1. {
            let value = tween.to;
            self.tween = None;
            return Some(AnimationSample {
                value,
                finished: true,
            });
        }

        // In f64, the distance between any two i32 values is exact.
        let distance = f64::from(tween.to) - f64::from(tween.from);
        let offset = (self.easing.apply(t) * distance).trunc();
        #[expect(
            clippy::cast_possible_truncation,
            reason = "The sample lies between `from` and `to`"
        )]
        let value = (f64::from(tween.from) + offset) as i32;
        Some(AnimationSample {
            value,
            finished: false,
        })
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use float_cmp::approx_eq;

    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::AccelerateDecelerate] {
            assert!(approx_eq!(f64, easing.apply(0.), 0., epsilon = 1e-12));
            assert!(approx_eq!(f64, easing.apply(1.), 1., epsilon = 1e-12));
        }
        assert!(approx_eq!(
            f64,
            Easing::AccelerateDecelerate.apply(0.5),
            0.5,
            epsilon = 1e-12
        ));
    }

    #[test]
    fn idle_animator_yields_nothing() {
        let mut animator = TweenAnimator::new();
        assert!(!animator.is_running());
        assert_matches!(animator.advance(FRAME), None);
    }

    #[test]
    fn linear_tween_truncates() {
        let mut animator = TweenAnimator::new().with_easing(Easing::Linear);
        animator.start(0, 10, Duration::from_millis(300));

        // 100 / 300 * 10 = 3.33...
        let sample = animator.advance(Duration::from_millis(100));
        assert_eq!(
            sample,
            Some(AnimationSample {
                value: 3,
                finished: false
            })
        );

        let sample = animator.advance(Duration::from_millis(100));
        assert_eq!(sample.map(|s| s.value), Some(6));
    }

    #[test]
    fn downward_tween_truncates_toward_zero() {
        let mut animator = TweenAnimator::new().with_easing(Easing::Linear);
        animator.start(10, 0, Duration::from_millis(300));

        // 10 - 3.33... truncates the offset to -3.
        let sample = animator.advance(Duration::from_millis(100));
        assert_eq!(sample.map(|s| s.value), Some(7));
    }

    #[test]
    fn tween_spans_whole_i32_range() {
        let mut animator = TweenAnimator::new().with_easing(Easing::Linear);
        animator.start(i32::MIN, i32::MAX, Duration::from_secs(1));

        // Half of 2^32 - 1 truncates to 2^31 - 1.
        let sample = animator.advance(Duration::from_millis(500));
        assert_eq!(sample.map(|s| s.value), Some(-1));

        let sample = animator.advance(Duration::from_millis(500));
        assert_eq!(
            sample,
            Some(AnimationSample {
                value: i32::MAX,
                finished: true
            })
        );
    }

    #[test]
    fn tween_finishes_on_target() {
        let mut animator = TweenAnimator::new();
        animator.start(100, 37, Duration::from_millis(250));

        let mut samples = Vec::new();
        while let Some(sample) = animator.advance(FRAME) {
            samples.push(sample);
        }

        let last = samples.last().copied();
        assert_eq!(
            last,
            Some(AnimationSample {
                value: 37,
                finished: true
            })
        );
        assert!(
            samples.windows(2).all(|w| w[1].value <= w[0].value),
            "a downward tween must never move up"
        );
        assert!(!animator.is_running());
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut animator = TweenAnimator::new();
        animator.start(5, 60, Duration::ZERO);
        assert_eq!(
            animator.advance(Duration::ZERO),
            Some(AnimationSample {
                value: 60,
                finished: true
            })
        );
    }

    #[test]
    fn cancel_stops_samples() {
        let mut animator = TweenAnimator::new();
        animator.start(0, 100, Duration::from_secs(1));
        animator.advance(FRAME);
        animator.cancel();

        assert!(!animator.is_running());
        assert_matches!(animator.advance(FRAME), None);
    }
}
