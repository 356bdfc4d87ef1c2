//! Per-feature styling
//!
//! The single three-way branch that turns a county's raw attribute value
//! into a fill color: no-data, no-rating, or scaled. Every call site that
//! colors a county goes through [`fill_color`], so the map and the legend
//! sentinels cannot diverge.

use serde::Serialize;
use serde_json::Value;

use crate::scale::ColorScale;
use crate::{NEUTRAL_FILL, NOT_APPLICABLE, NO_RATING, NO_RATING_FILL};

const BORDER_COLOR: &str = "gray";
const BORDER_WEIGHT: f64 = 1.0;
const BORDER_OPACITY: f64 = 0.7;
const FILL_OPACITY: f64 = 0.7;
const FILL_OPACITY_HOVERED: f64 = 0.9;

/// Leaflet-shaped path style for one county polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStyle {
    pub fill_color: String,
    pub weight: f64,
    pub opacity: f64,
    pub color: String,
    pub fill_opacity: f64,
}

impl FeatureStyle {
    pub fn new(fill_color: String, hovered: bool) -> Self {
        Self {
            fill_color,
            weight: BORDER_WEIGHT,
            opacity: BORDER_OPACITY,
            color: BORDER_COLOR.to_string(),
            fill_opacity: if hovered {
                FILL_OPACITY_HOVERED
            } else {
                FILL_OPACITY
            },
        }
    }

    /// Style for a feature with no resolvable value at all.
    pub fn no_data() -> Self {
        Self::new(NEUTRAL_FILL.to_string(), false)
    }
}

/// Numeric reading of a raw county attribute, with the sentinel strings
/// folded in. Zero is grouped with the no-data branch: FEMA emits zero for
/// counties the hazard model does not cover.
fn numeric(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse::<f64>().ok(),
        _ => None,
    }
}

/// Fill color for a county's raw value under the given scale.
///
/// - `"Not Applicable"`, absent, null, or zero: neutral no-data gray
/// - `"No Rating"`: fixed white, regardless of scale
/// - anything numeric: passed through the scale (a multiplier of 4.0 is a
///   legitimate low-ish value, not missing data)
pub fn fill_color(raw: Option<&Value>, scale: &ColorScale) -> String {
    let Some(raw) = raw else {
        return NEUTRAL_FILL.to_string();
    };

    if let Value::String(s) = raw {
        if s == NOT_APPLICABLE {
            return NEUTRAL_FILL.to_string();
        }
        if s == NO_RATING {
            return NO_RATING_FILL.to_string();
        }
    }

    match numeric(raw) {
        Some(v) if v != 0.0 => scale.color_for(v),
        _ => NEUTRAL_FILL.to_string(),
    }
}

/// Full feature style, including hover emphasis.
pub fn feature_style(raw: Option<&Value>, scale: &ColorScale, hovered: bool) -> FeatureStyle {
    FeatureStyle::new(fill_color(raw, scale), hovered)
}
