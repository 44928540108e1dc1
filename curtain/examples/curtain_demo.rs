// Copyright 2025 the Curtain Authors
// SPDX-License-Identifier: Apache-2.0

//! A headless host for a curtain.
//!
//! The curtain is configured from JSON options, dragged by a simulated finger and then
//! animated shut, while a listener logs what the user did.
//! Run with `RUST_LOG=trace` to also see the curtain's own logs.

use curtain::image::{Rgba, RgbaImage};
use curtain::kurbo::{Point, Size};
use curtain::testing::{pointer_down, pointer_move, pointer_up};
use curtain::tracing_backend::install_logging;
use curtain::{
    CurtainError, CurtainOptions, CurtainScene, CurtainView, ImageAsset, ProgressListener,
    Requests,
};
use tracing::info;
use tracing::level_filters::LevelFilter;

const OPTIONS: &str = r##"{
    "min": 0,
    "max": 100,
    "progress": 20,
    "duration_ms": 800,
    "leaf_color": "#8b1a1a",
    "rod_color": "saddlebrown",
    "doubled": true
}"##;

/// Roughly one frame at 60Hz, in nanoseconds.
const FRAME_INTERVAL: u64 = 16_666_667;

struct LoggingListener;

impl ProgressListener for LoggingListener {
    fn on_progress_changed(&mut self, progress: i32, is_user: bool) {
        info!(progress, is_user, "Progress changed");
    }

    fn on_start_tracking_touch(&mut self) {
        info!("Started dragging the curtain");
    }

    fn on_stop_tracking_touch(&mut self) {
        info!("Stopped dragging the curtain");
    }
}

fn make_curtain() -> Result<CurtainView, CurtainError> {
    let options = CurtainOptions::from_json_str(OPTIONS)?;
    // A plain square stands in for the host's thumb artwork.
    let thumb = RgbaImage::from_pixel(120, 120, Rgba([240, 220, 170, 255]));
    let mut curtain = CurtainView::from_options(&options)?
        .with_thumb_image(ImageAsset::new(thumb))
        .with_listener(LoggingListener);
    curtain.on_resize(Size::new(1000., 500.));
    Ok(curtain)
}

/// Replays the curtain into a fresh scene if it asked to be repainted.
///
/// Returns whether the curtain wants another animation frame.
fn service_requests(curtain: &mut CurtainView, scene: &mut CurtainScene) -> bool {
    let requests = curtain.take_requests();
    if requests.contains(Requests::PAINT) {
        scene.reset();
        curtain.paint(scene);
        info!(
            progress = curtain.progress(),
            ops = scene.ops().len(),
            left_edge = curtain.rects().left.x1,
            "Painted"
        );
    }
    requests.contains(Requests::ANIM_FRAME)
}

fn drag(curtain: &mut CurtainView, scene: &mut CurtainScene, to: Point) {
    let from = curtain.rects().thumb.center();
    curtain.on_pointer_event(&pointer_down(from));
    let steps = 10;
    for step in 1..=steps {
        let t = f64::from(step) / f64::from(steps);
        curtain.on_pointer_event(&pointer_move(from.lerp(to, t)));
        service_requests(curtain, scene);
    }
    curtain.on_pointer_event(&pointer_up(to));
    service_requests(curtain, scene);
}

fn animate(curtain: &mut CurtainView, scene: &mut CurtainScene) -> usize {
    let mut frames = 0;
    while service_requests(curtain, scene) {
        curtain.on_anim_frame(FRAME_INTERVAL);
        frames += 1;
    }
    frames
}

fn main() -> Result<(), CurtainError> {
    let _ = install_logging(LevelFilter::INFO);

    let mut curtain = make_curtain()?;
    let mut scene = CurtainScene::new();
    service_requests(&mut curtain, &mut scene);

    drag(&mut curtain, &mut scene, Point::new(400., 290.));

    curtain.set_progress(0);
    let frames = animate(&mut curtain, &mut scene);
    info!(frames, progress = curtain.progress(), "Curtain closed");

    Ok(())
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use curtain::CurtainPart;

    use super::*;

    #[test]
    fn demo_drag_and_close() {
        let mut curtain = make_curtain().unwrap();
        let mut scene = CurtainScene::new();
        assert!(!service_requests(&mut curtain, &mut scene));
        assert_eq!(
            scene.parts().collect::<Vec<_>>(),
            [
                CurtainPart::Rod,
                CurtainPart::LeftLeaf,
                CurtainPart::RightLeaf,
                CurtainPart::Thumb
            ]
        );

        drag(&mut curtain, &mut scene, Point::new(400., 290.));
        assert_eq!(curtain.progress(), 76);

        curtain.set_progress(0);
        let frames = animate(&mut curtain, &mut scene);
        assert!(frames > 1, "closing should take several frames");
        assert_eq!(curtain.progress(), 0);
        assert_eq!(curtain.rects().left.x1, 83.);
    }
}
