// Copyright 2025 the Curtain Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::{Rect, RoundedRect};
use peniko::Color;
use smallvec::SmallVec;

use crate::ImageAsset;

/// The part of a curtain a [`PaintOp`] draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurtainPart {
    /// The strip along the top of the track.
    Rod,
    /// The fill of the left leaf.
    LeftLeaf,
    /// The fill of the right leaf.
    RightLeaf,
    /// The texture drawn over the left leaf.
    LeftLeafImage,
    /// The texture drawn over the right leaf.
    RightLeafImage,
    /// The draggable handle.
    Thumb,
}

/// How a [`PaintOp`] is drawn.
#[derive(Clone, Debug)]
pub enum PaintKind {
    /// Fill a shape with a solid color.
    Fill {
        /// The outline to fill.
        shape: RoundedRect,
        /// The fill color.
        color: Color,
    },
    /// Draw an image stretched over a rectangle.
    Image {
        /// The image.
        image: ImageAsset,
        /// Where to draw it, in whole pixels.
        bounds: Rect,
    },
}

/// One drawing step.
#[derive(Clone, Debug)]
pub struct PaintOp {
    /// Which part of the curtain this draws.
    pub part: CurtainPart,
    /// What to draw.
    pub kind: PaintKind,
}

/// The drawing steps recorded by [`CurtainView::paint`](crate::CurtainView::paint), in painter's order.
#[derive(Clone, Debug, Default)]
pub struct CurtainScene {
    ops: SmallVec<[PaintOp; 6]>,
}

impl CurtainScene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all recorded steps, keeping the allocation.
    pub fn reset(&mut self) {
        self.ops.clear();
    }

    /// Records a solid fill.
    pub fn fill(&mut self, part: CurtainPart, shape: RoundedRect, color: Color) {
        self.ops.push(PaintOp {
            part,
            kind: PaintKind::Fill { shape, color },
        });
    }

    /// Records an image.
    pub fn draw_image(&mut self, part: CurtainPart, image: &ImageAsset, bounds: Rect) {
        self.ops.push(PaintOp {
            part,
            kind: PaintKind::Image {
                image: image.clone(),
                bounds,
            },
        });
    }

    /// The recorded steps, in the order they must be drawn.
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// The parts drawn, in order.
    pub fn parts(&self) -> impl Iterator<Item = CurtainPart> + '_ {
        self.ops.iter().map(|op| op.part)
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
