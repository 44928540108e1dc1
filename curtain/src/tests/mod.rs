// Copyright 2025 the Curtain Authors
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests driving a [`CurtainView`](crate::CurtainView) the way a host would.

mod geometry;

use image::RgbaImage;
use kurbo::Size;

use crate::testing::Recording;
use crate::{CurtainView, ImageAsset};

const WINDOW_SIZE: Size = Size::new(1000., 500.);

/// A curtain laid out in [`WINDOW_SIZE`] with its requests drained.
fn laid_out(curtain: CurtainView) -> CurtainView {
    let mut curtain = curtain;
    curtain.on_resize(WINDOW_SIZE);
    curtain.take_requests();
    curtain
}

/// A thumb image of the default thumb size, 164 pixels square.
fn thumb_image() -> ImageAsset {
    ImageAsset::new(RgbaImage::new(164, 164))
}

/// A laid out curtain with a thumb to drag and a recording listener.
fn with_recording(curtain: CurtainView) -> (CurtainView, Recording) {
    let recording = Recording::default();
    let curtain = laid_out(
        curtain
            .with_thumb_image(thumb_image())
            .with_listener(recording.clone()),
    );
    (curtain, recording)
}
