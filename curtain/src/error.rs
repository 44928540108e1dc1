// Copyright 2025 the Curtain Authors
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;

/// An error raised while turning external configuration into a [`CurtainView`](crate::CurtainView).
///
/// Numeric settings never produce errors: out of range values are clamped or ignored.
/// Only inputs that cannot be interpreted at all end up here.
#[derive(Debug)]
pub enum CurtainError {
    /// The options document is not valid JSON or has fields of the wrong type.
    Options(serde_json::Error),
    /// A color string could not be parsed.
    InvalidColor {
        /// Name of the option holding the color.
        option: &'static str,
        /// The rejected value.
        value: String,
        /// Why the color parser rejected it.
        reason: String,
    },
    /// Encoded image bytes could not be decoded.
    Image(image::ImageError),
}

impl fmt::Display for CurtainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Options(_) => f.pad("invalid curtain options"),
            Self::InvalidColor {
                option,
                value,
                reason,
            } => write!(f, "invalid color {value:?} for `{option}`: {reason}"),
            Self::Image(_) => f.pad("failed to decode curtain image"),
        }
    }
}

impl Error for CurtainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Options(err) => Some(err),
            Self::InvalidColor { .. } => None,
            Self::Image(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for CurtainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Options(err)
    }
}

impl From<image::ImageError> for CurtainError {
    fn from(err: image::ImageError) -> Self {
        Self::Image(err)
    }
}
