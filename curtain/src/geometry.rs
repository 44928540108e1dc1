// Copyright 2025 the Curtain Authors
// SPDX-License-Identifier: Apache-2.0

//! Mapping between progress values and the rectangles a curtain is drawn with.

use kurbo::{Rect, RoundedRect, RoundedRectRadii, Size};

use crate::theme;

/// The area a curtain is drawn in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Width of the drawable area.
    pub width: f64,
    /// Height of the drawable area.
    pub height: f64,
    /// Horizontal centre of the drawable area.
    ///
    /// In doubled mode neither leaf may cross it.
    pub midline: f64,
}

impl Viewport {
    /// Creates the viewport for a drawable area of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            midline: size.width / 2.,
        }
    }

    /// The size of the drawable area.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(theme::DEFAULT_VIEWPORT_SIZE)
    }
}

/// The settings that shape a curtain's track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackLayout {
    /// Lowest progress value.
    pub min: i32,
    /// Highest progress value. Always greater than `min`.
    pub max: i32,
    /// Distance a leaf always keeps from the outer edge of the track.
    pub min_margin: f64,
    /// Height of the rod; leaves hang directly below it.
    pub rod_height: f64,
    /// Half the side of the thumb's square.
    pub thumb_half: f64,
    /// Whether two leaves meet at the midline, rather than one leaf spanning the track.
    pub doubled: bool,
}

impl TrackLayout {
    fn range(&self) -> f64 {
        f64::from(self.max - self.min)
    }

    /// The x coordinate the left leaf's inner edge may not go past.
    fn track_end(&self, viewport: &Viewport) -> f64 {
        if self.doubled {
            viewport.midline
        } else {
            viewport.width
        }
    }
}

impl Default for TrackLayout {
    fn default() -> Self {
        Self {
            min: theme::DEFAULT_MIN,
            max: theme::DEFAULT_MAX,
            min_margin: theme::DEFAULT_MIN_MARGIN,
            rod_height: theme::DEFAULT_ROD_HEIGHT,
            thumb_half: theme::DEFAULT_THUMB_HALF,
            doubled: theme::DEFAULT_DOUBLED,
        }
    }
}

/// The rectangles a curtain is drawn with at a given progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurtainRects {
    /// The left leaf. In single mode this is the only leaf.
    pub left: Rect,
    /// The right leaf, present only in doubled mode.
    pub right: Option<Rect>,
    /// The thumb, in whole pixels.
    pub thumb: Rect,
}

/// Computes the leaf and thumb rectangles for `progress`.
pub fn compute_rects(progress: i32, layout: &TrackLayout, viewport: &Viewport) -> CurtainRects {
    debug_assert!(
        layout.max > layout.min,
        "TrackLayout max must be greater than min"
    );
    let progress = f64::from(progress);
    let range = layout.range();
    let end = layout.track_end(viewport);

    let left_margin =
        ((end - layout.min_margin) * progress / range + layout.min_margin).min(end);
    let left = Rect::new(0., layout.rod_height, left_margin, viewport.height);

    let right = layout.doubled.then(|| {
        let outer = viewport.width - layout.min_margin;
        let right_margin = (outer - (outer - viewport.midline) * progress / range).max(viewport.midline);
        Rect::new(right_margin, layout.rod_height, viewport.width, viewport.height)
    });

    CurtainRects {
        left,
        right,
        thumb: thumb_rect(left.x1, layout, viewport),
    }
}

fn thumb_rect(edge: f64, layout: &TrackLayout, viewport: &Viewport) -> Rect {
    let half = layout.thumb_half;
    let center_y = (viewport.height - layout.rod_height) / 2. + layout.rod_height;
    let y0 = (center_y - half).trunc();
    let y1 = (center_y + half).trunc();

    // A single leaf can reach the far end of the track; keep the thumb inside it.
    if !layout.doubled && edge > viewport.width - half {
        Rect::new(
            (viewport.width - half * 2.).round(),
            y0,
            viewport.width.round(),
            y1,
        )
    } else {
        Rect::new((edge - half).round(), y0, (edge + half).round(), y1)
    }
}

/// Maps a pointer's x coordinate to the progress it designates.
///
/// `x` is clamped to the end of the track first. The result is truncated toward zero
/// and is not clamped to `[min, max]`.
///
/// Returns `None` when the track has no length to map onto.
pub fn progress_at(x: f64, layout: &TrackLayout, viewport: &Viewport) -> Option<i32> {
    let end = layout.track_end(viewport);
    let span = end - layout.min_margin;
    let range = layout.range();
    if span <= 0. || range <= 0. {
        return None;
    }
    let x = x.min(end);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Progress is bounded by the track range, which fits in an i32"
    )]
    let progress = ((x - layout.min_margin) * range / span) as i32;
    Some(progress)
}

/// The outline of a leaf: its bottom corners are rounded.
pub fn leaf_shape(rect: Rect) -> RoundedRect {
    let r = theme::CORNER_RADIUS;
    RoundedRect::from_rect(rect, RoundedRectRadii::new(0., 0., r, r))
}

/// The outline of the rod spanning the top of the viewport: its top corners are rounded.
pub fn rod_shape(viewport: &Viewport, rod_height: f64) -> RoundedRect {
    let r = theme::CORNER_RADIUS;
    RoundedRect::from_rect(
        Rect::new(0., 0., viewport.width, rod_height),
        RoundedRectRadii::new(r, r, 0., 0.),
    )
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    fn viewport(width: f64) -> Viewport {
        Viewport::new(Size::new(width, 500.))
    }

    #[test]
    fn doubled_full_progress_meets_at_midline() {
        let layout = TrackLayout::default();
        let rects = compute_rects(100, &layout, &viewport(1000.));

        assert_eq!(rects.left.x1, 500.);
        assert_eq!(rects.right.map(|r| r.x0), Some(500.));
        assert_eq!(rects.left.y0, layout.rod_height);
        assert_eq!(rects.left.y1, 500.);
    }

    #[test]
    fn zero_progress_keeps_min_margin() {
        let layout = TrackLayout::default();
        let rects = compute_rects(0, &layout, &viewport(1000.));

        assert_eq!(rects.left.x1, 83.);
        assert_eq!(rects.right.map(|r| r.x0), Some(1000. - 83.));
    }

    #[test]
    fn single_mode_has_no_right_leaf() {
        let layout = TrackLayout {
            doubled: false,
            ..TrackLayout::default()
        };
        let rects = compute_rects(50, &layout, &viewport(1000.));

        assert!(rects.right.is_none());
        assert!(approx_eq!(f64, rects.left.x1, 541.5, ulps = 2));
    }

    #[test]
    fn margins_are_bounded_and_monotonic() {
        for doubled in [true, false] {
            for (min, width) in [(0, 1000.), (10, 640.), (0, 333.)] {
                let layout = TrackLayout {
                    min,
                    doubled,
                    ..TrackLayout::default()
                };
                let viewport = viewport(width);
                let end = if doubled { viewport.midline } else { width };

                let mut last = f64::NEG_INFINITY;
                for progress in layout.min..=layout.max {
                    let rects = compute_rects(progress, &layout, &viewport);
                    let edge = rects.left.x1;
                    assert!(
                        edge >= layout.min_margin && edge <= end,
                        "edge {edge} out of bounds at progress {progress}"
                    );
                    assert!(edge >= last, "edge moved backwards at progress {progress}");
                    if let Some(right) = rects.right {
                        assert!(right.x0 >= viewport.midline, "right leaf crossed the midline");
                    }
                    last = edge;
                }
            }
        }
    }

    #[test]
    fn thumb_is_centred_on_leaf_edge() {
        let layout = TrackLayout {
            thumb_half: 40.,
            ..TrackLayout::default()
        };
        let rects = compute_rects(100, &layout, &viewport(1000.));

        // Band from 80 to 500 is centred on 290.
        assert_eq!(rects.thumb, Rect::new(460., 250., 540., 330.));
    }

    #[test]
    fn single_thumb_is_pinned_at_track_end() {
        let layout = TrackLayout {
            thumb_half: 40.,
            doubled: false,
            ..TrackLayout::default()
        };
        let rects = compute_rects(100, &layout, &viewport(1000.));

        assert_eq!(rects.left.x1, 1000.);
        assert_eq!(rects.thumb.x1, 1000.);
        assert_eq!(rects.thumb.x0, 920.);
    }

    #[test]
    fn inverse_mapping_truncates_and_clamps() {
        let layout = TrackLayout::default();
        let viewport = viewport(1000.);

        // (300 - 83) * 100 / 417 = 52.03...
        assert_eq!(progress_at(300., &layout, &viewport), Some(52));
        assert_eq!(progress_at(550., &layout, &viewport), Some(100));

        let single = TrackLayout {
            doubled: false,
            ..layout
        };
        assert_eq!(progress_at(1200., &single, &viewport), Some(100));
    }

    #[test]
    fn degenerate_track_has_no_progress() {
        let layout = TrackLayout::default();
        assert_eq!(progress_at(100., &layout, &viewport(150.)), None);
    }

    #[test]
    fn rod_spans_the_top() {
        let rod = rod_shape(&viewport(1000.), 80.);
        assert_eq!(rod.rect(), Rect::new(0., 0., 1000., 80.));
        assert_eq!(rod.radii(), RoundedRectRadii::new(20., 20., 0., 0.));
    }
}
