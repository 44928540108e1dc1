// Copyright 2025 the Curtain Authors
// SPDX-License-Identifier: Apache-2.0

//! Default values used by [`CurtainView`](crate::CurtainView) and [`CurtainOptions`](crate::CurtainOptions).

#![allow(missing_docs, reason = "Names are self-explanatory.")]

use kurbo::Size;

pub const DEFAULT_MIN: i32 = 0;
pub const DEFAULT_MAX: i32 = 100;
pub const DEFAULT_PROGRESS: i32 = 100;
pub const DEFAULT_DURATION_MS: u32 = 2500;

/// Upper bound accepted by [`CurtainView::set_max`](crate::CurtainView::set_max).
pub const MAX_UPPER_BOUND: i32 = 100;

/// Distance a leaf always keeps from its outer edge, in pixels.
pub const DEFAULT_MIN_MARGIN: f64 = 83.;
pub const DEFAULT_ROD_HEIGHT: f64 = 80.;
pub const DEFAULT_DOUBLED: bool = true;

/// Thumb half-size used until a thumb image provides its intrinsic size.
pub const DEFAULT_THUMB_HALF: f64 = 82.;

/// Radius of the rounded corners on the rod (top) and leaves (bottom).
pub const CORNER_RADIUS: f64 = 20.;

/// Size assumed before the host reports the real one.
pub const DEFAULT_VIEWPORT_SIZE: Size = Size::new(988., 506.);
