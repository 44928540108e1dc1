// Copyright 2025 the Curtain Authors
// SPDX-License-Identifier: Apache-2.0

use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::{Deserialize, Serialize};

use crate::{CurtainError, theme};

/// Declarative configuration for a [`CurtainView`](crate::CurtainView).
///
/// Every field is optional when deserializing; missing fields take the defaults from
/// [`theme`]. Colors are CSS color strings (`"#3b7ee4"`, `"rgb(10 20 30)"`, `"tomato"`)
/// and an absent color leaves that part undrawn.
///
/// Images cannot be described here; use the view's builder methods for them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurtainOptions {
    /// Lowest progress value.
    pub min: i32,
    /// Highest progress value.
    pub max: i32,
    /// Initial progress.
    pub progress: i32,
    /// Length of progress animations, in milliseconds.
    pub duration_ms: u32,
    /// Distance a leaf always keeps from its outer edge.
    pub min_progress: f64,
    /// Height of the rod along the top of the track.
    pub rod_height: f64,
    /// Fill color of the leaves.
    pub leaf_color: Option<String>,
    /// Fill color of the rod.
    pub rod_color: Option<String>,
    /// Whether the curtain has two leaves meeting in the middle.
    pub doubled: bool,
}

impl Default for CurtainOptions {
    fn default() -> Self {
        Self {
            min: theme::DEFAULT_MIN,
            max: theme::DEFAULT_MAX,
            progress: theme::DEFAULT_PROGRESS,
            duration_ms: theme::DEFAULT_DURATION_MS,
            min_progress: theme::DEFAULT_MIN_MARGIN,
            rod_height: theme::DEFAULT_ROD_HEIGHT,
            leaf_color: None,
            rod_color: None,
            doubled: theme::DEFAULT_DOUBLED,
        }
    }
}

impl CurtainOptions {
    /// Reads options from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, CurtainError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The parsed leaf color, if one is set.
    pub fn parsed_leaf_color(&self) -> Result<Option<Color>, CurtainError> {
        parse_option("leaf_color", self.leaf_color.as_deref())
    }

    /// The parsed rod color, if one is set.
    pub fn parsed_rod_color(&self) -> Result<Option<Color>, CurtainError> {
        parse_option("rod_color", self.rod_color.as_deref())
    }
}

fn parse_option(option: &'static str, value: Option<&str>) -> Result<Option<Color>, CurtainError> {
    value
        .map(|value| {
            parse_color(value)
                .map(|color| color.to_alpha_color::<Srgb>())
                .map_err(|err| CurtainError::InvalidColor {
                    option,
                    value: value.to_owned(),
                    reason: err.to_string(),
                })
        })
        .transpose()
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let options = CurtainOptions::from_json_str("{}").unwrap();
        assert_eq!(options, CurtainOptions::default());
        assert_eq!(options.progress, 100);
        assert_eq!(options.duration_ms, 2500);
        assert!(options.doubled);
    }

    #[test]
    fn partial_object_overrides_some_fields() {
        let options = CurtainOptions::from_json_str(
            r##"{ "max": 80, "doubled": false, "leaf_color": "#ff0000" }"##,
        )
        .unwrap();

        assert_eq!(options.max, 80);
        assert!(!options.doubled);
        assert_eq!(options.rod_height, 80.);
        assert_eq!(
            options.parsed_leaf_color().unwrap().map(|c| c.to_rgba8()),
            Some(Color::from_rgb8(0xff, 0, 0).to_rgba8())
        );
        assert_eq!(options.parsed_rod_color().unwrap(), None);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert_matches!(
            CurtainOptions::from_json_str(r#"{ "maximum": 80 }"#),
            Err(CurtainError::Options(_))
        );
    }

    #[test]
    fn bad_color_names_the_option() {
        let options = CurtainOptions {
            rod_color: Some("not-a-color".into()),
            ..CurtainOptions::default()
        };
        assert_matches!(
            options.parsed_rod_color(),
            Err(CurtainError::InvalidColor {
                option: "rod_color",
                ..
            })
        );
    }
}
