// Copyright 2025 the Curtain Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::sync::Arc;

use image::RgbaImage;
use kurbo::Size;

use crate::CurtainError;

/// An image drawn as part of a curtain: the thumb or a leaf's texture.
///
/// Cloning is cheap; the pixels are shared.
#[derive(Clone)]
pub struct ImageAsset {
    pixels: Arc<RgbaImage>,
}

impl ImageAsset {
    /// Wraps decoded RGBA pixels.
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// Decodes an encoded image, such as a PNG file's contents.
    pub fn from_encoded_bytes(bytes: &[u8]) -> Result<Self, CurtainError> {
        let decoded = image::load_from_memory(bytes)?;
        Ok(Self::new(decoded.into_rgba8()))
    }

    /// The size the image has when drawn unscaled.
    pub fn intrinsic_size(&self) -> Size {
        let (width, height) = self.pixels.dimensions();
        Size::new(f64::from(width), f64::from(height))
    }

    /// The image's pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Whether both handles share the same pixels.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl fmt::Debug for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.pixels.dimensions();
        f.debug_struct("ImageAsset")
            .field("width", &width)
            .field("height", &height)
            .finish_non_exhaustive()
    }
}

impl From<RgbaImage> for ImageAsset {
    fn from(pixels: RgbaImage) -> Self {
        Self::new(pixels)
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use assert_matches::assert_matches;
    use image::{ImageFormat, Rgba};

    use super::*;

    #[test]
    fn intrinsic_size_matches_pixels() {
        let asset = ImageAsset::new(RgbaImage::new(64, 30));
        assert_eq!(asset.intrinsic_size(), Size::new(64., 30.));
    }

    #[test]
    fn decodes_png() {
        let mut bytes = Vec::new();
        RgbaImage::from_pixel(12, 8, Rgba([255, 0, 0, 255]))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let asset = ImageAsset::from_encoded_bytes(&bytes).unwrap();
        assert_eq!(asset.intrinsic_size(), Size::new(12., 8.));
        assert_eq!(asset.pixels().get_pixel(3, 3), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn garbage_is_an_error() {
        assert_matches!(
            ImageAsset::from_encoded_bytes(b"not an image"),
            Err(CurtainError::Image(_))
        );
    }

    #[test]
    fn clones_share_pixels() {
        let asset = ImageAsset::new(RgbaImage::new(1, 1));
        assert!(asset.ptr_eq(&asset.clone()));
        assert!(!asset.ptr_eq(&ImageAsset::new(RgbaImage::new(1, 1))));
    }
}
