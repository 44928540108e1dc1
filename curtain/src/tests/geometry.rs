// Copyright 2025 the Curtain Authors
// SPDX-License-Identifier: Apache-2.0

// LAYOUT OF LEAVES AND THUMB

use super::laid_out;
use crate::{CurtainView, Requests};

#[test]
fn fully_open_leaves_meet_at_midline() {
    let curtain = laid_out(CurtainView::new().with_doubled(true).with_progress(100));

    assert_eq!(curtain.viewport().midline, 500.);
    assert_eq!(curtain.rects().left.x1, 500.);
    assert_eq!(curtain.rects().right.map(|r| r.x0), Some(500.));
}

#[test]
fn closed_leaves_keep_their_margin() {
    let curtain = laid_out(CurtainView::new().with_progress(0));

    assert_eq!(curtain.rects().left.x1, 83.);
    assert_eq!(curtain.rects().right.map(|r| r.x0), Some(917.));
}

#[test]
fn leaf_edge_tracks_progress() {
    for doubled in [true, false] {
        let mut curtain = laid_out(CurtainView::new().with_doubled(doubled).with_min(5));
        let end = if doubled { 500. } else { 1000. };

        let mut last = f64::NEG_INFINITY;
        for progress in curtain.min()..=curtain.max() {
            curtain = curtain.with_progress(progress);
            let edge = curtain.rects().left.x1;
            assert!(
                (83. ..=end).contains(&edge),
                "edge {edge} outside the track at progress {progress}"
            );
            assert!(edge >= last, "edge moved backwards at progress {progress}");
            last = edge;
        }
    }
}

#[test]
fn thumb_stays_inside_single_track() {
    let curtain = laid_out(CurtainView::new().with_doubled(false).with_progress(99));

    // The leaf edge sits at 990.83, too close to the end for a centred thumb.
    assert!(curtain.rects().left.x1 > 1000. - 82.);
    assert_eq!(curtain.rects().thumb.x1, 1000.);
    assert_eq!(curtain.rects().thumb.width(), 164.);
}

#[test]
fn rejected_max_keeps_bounds() {
    let mut curtain = laid_out(CurtainView::new());

    curtain.set_max(0);
    assert_eq!(curtain.max(), 100);
    curtain.set_max(150);
    assert_eq!(curtain.max(), 100);
    assert_eq!(curtain.take_requests(), Requests::empty());
}

#[test]
fn bounds_never_cross() {
    let mut curtain = laid_out(CurtainView::new());

    curtain.set_min(40);
    curtain.set_max(40);
    assert_eq!((curtain.min(), curtain.max()), (40, 100));

    curtain.set_max(50);
    curtain.set_min(50);
    assert_eq!((curtain.min(), curtain.max()), (40, 50));
    assert_eq!(curtain.progress(), 50);
}
