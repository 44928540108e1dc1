// Copyright 2025 the Curtain Authors
// SPDX-License-Identifier: Apache-2.0

/// Receives notifications about the user dragging a curtain's thumb.
///
/// Register one with [`CurtainView::set_on_progress_change_listener`](crate::CurtainView::set_on_progress_change_listener).
/// Progress changes requested by code (including the animation they start) are not reported.
pub trait ProgressListener {
    /// The progress changed to `progress`.
    ///
    /// `is_user` is true when the change comes from the user dragging the thumb.
    fn on_progress_changed(&mut self, progress: i32, is_user: bool);

    /// The user pressed the thumb.
    fn on_start_tracking_touch(&mut self) {}

    /// The user released the thumb after dragging it.
    fn on_stop_tracking_touch(&mut self) {}
}
