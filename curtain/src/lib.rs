// Copyright 2025 the Curtain Authors
// SPDX-License-Identifier: Apache-2.0

//! Curtain is a slider control shaped like a pair of curtains.
//!
//! A [`CurtainView`] draws one or two rectangular "leaves" hanging below a rod.
//! Its progress, an integer in `[min, max]`, describes how far the leaves are drawn
//! open. Users change it by dragging the thumb that sits on the inner edge of the left
//! leaf; code changes it with [`CurtainView::set_progress`], which animates the leaves
//! towards the new value.
//!
//! The view does not own a window, a renderer or a timer. A host drives it:
//!
//! - Call [`CurtainView::on_resize`] whenever the drawable area changes size.
//! - Forward pointer input with [`CurtainView::on_pointer_event`]
//!   (using [`ui_events`] types) or [`CurtainView::on_touch`].
//! - Drain [`CurtainView::take_requests`] after each event.
//!   [`Requests::ANIM_FRAME`] asks for [`CurtainView::on_anim_frame`] to be called on
//!   the next frame, and [`Requests::PAINT`] asks for [`CurtainView::paint`] to be
//!   replayed into the host's renderer.
//!
//! ```
//! use curtain::CurtainView;
//! use curtain::kurbo::Size;
//!
//! let mut curtain = CurtainView::new().with_doubled(true);
//! curtain.on_resize(Size::new(1000.0, 500.0));
//! assert_eq!(curtain.rects().left.x1, 500.0);
//!
//! curtain.set_progress(0);
//! // Two and a half seconds later...
//! curtain.on_anim_frame(2_500_000_000);
//! assert_eq!(curtain.progress(), 0);
//! assert_eq!(curtain.rects().left.x1, 83.0);
//! ```
//!
//! Changes of progress caused by the user are reported through a
//! [`ProgressListener`] registered with
//! [`CurtainView::set_on_progress_change_listener`].

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use peniko::color::palette;
pub use {dpi, image, kurbo, peniko, ui_events};

mod animation;
mod curtain_view;
mod error;
mod geometry;
mod image_asset;
mod listener;
mod options;
mod paint;
mod progress;
mod touch;

pub mod testing;
pub mod theme;
pub mod tracing_backend;

#[cfg(test)]
mod tests;

pub use animation::{AnimationSample, Easing, ProgressAnimator, TweenAnimator};
pub use curtain_view::{CurtainView, Handled, Requests};
pub use error::CurtainError;
pub use geometry::{CurtainRects, TrackLayout, Viewport};
pub use image_asset::ImageAsset;
pub use listener::ProgressListener;
pub use options::CurtainOptions;
pub use paint::{CurtainPart, CurtainScene, PaintKind, PaintOp};
pub use touch::{TouchInput, TouchState};
