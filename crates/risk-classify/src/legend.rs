//! Legend composition
//!
//! Produces the ordered (label, color) list for the current scale. The two
//! sentinel rows always come first and are fixed constants, never derived
//! from the scale, mirroring the sentinel short-circuit in feature styling.

use serde::Serialize;

use crate::buckets::TIER_LABELS;
use crate::scale::ColorScale;
use crate::{NEUTRAL_FILL, NOT_APPLICABLE, NO_RATING, NO_RATING_FILL};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

impl LegendEntry {
    fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// Compose the legend for a scale.
///
/// Ordinal scales list their bucket labels with the bound colors; sequential
/// scales sample five evenly spaced domain points and label them with the
/// generic severity tiers, since the numeric extent varies per hazard and
/// dataset.
pub fn compose(scale: &ColorScale) -> Vec<LegendEntry> {
    let mut entries = vec![
        LegendEntry::new(NOT_APPLICABLE, NEUTRAL_FILL),
        LegendEntry::new(NO_RATING, NO_RATING_FILL),
    ];

    match scale {
        ColorScale::Ordinal { buckets, colors, .. } => {
            for (bucket, color) in buckets.iter().zip(colors) {
                entries.push(LegendEntry::new(bucket.label, color.clone()));
            }
        }
        ColorScale::Sequential { domain, .. } => {
            let (min, max) = *domain;
            let steps = TIER_LABELS.len();
            for (i, label) in TIER_LABELS.iter().enumerate() {
                let sample = min + (max - min) * i as f64 / (steps - 1) as f64;
                entries.push(LegendEntry::new(*label, scale.color_for(sample)));
            }
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buckets::BUCKETS_PER_HAZARD;
    use crate::ramp::Ramp;
    use crate::{Hazard, Rating};

    #[test]
    fn test_sentinels_always_lead() {
        for scale in [
            ColorScale::placeholder(Ramp::or_rd()),
            ColorScale::build(Rating::AnnualLoss, Hazard::Wildfire, &[], Ramp::or_rd()),
        ] {
            let entries = compose(&scale);
            assert_eq!(entries[0], LegendEntry::new(NOT_APPLICABLE, NEUTRAL_FILL));
            assert_eq!(entries[1], LegendEntry::new(NO_RATING, NO_RATING_FILL));
        }
    }

    #[test]
    fn test_ordinal_legend_size_every_hazard() {
        for hazard in Hazard::ALL {
            let scale = ColorScale::build(Rating::AnnualLoss, hazard, &[], Ramp::or_rd());
            let entries = compose(&scale);
            assert_eq!(entries.len(), 2 + BUCKETS_PER_HAZARD, "{hazard:?}");
        }
    }

    #[test]
    fn test_ordinal_legend_matches_scale_colors() {
        let scale = ColorScale::build(Rating::AnnualLoss, Hazard::Drought, &[], Ramp::or_rd());
        let entries = compose(&scale);
        assert_eq!(entries[2].label, "Very Low (<21.9K)");
        assert_eq!(entries[4].label, "Relatively Moderate (292K - 2.74M)");
        // Legend color and styling color come from the same scale.
        assert_eq!(entries[4].color, scale.color_for(1_500_000.0));
    }

    #[test]
    fn test_sequential_legend_uses_tier_labels() {
        let scale = ColorScale::build(
            Rating::Multiplier,
            Hazard::Hurricane,
            &[1.0, 9.0],
            Ramp::or_rd(),
        );
        let entries = compose(&scale);
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[2].label, "Very Low");
        assert_eq!(entries[6].label, "Very High");
        assert_eq!(entries[2].color, scale.color_for(1.0));
        assert_eq!(entries[6].color, scale.color_for(9.0));
        // No literal numbers leak into continuous labels.
        for entry in &entries[2..] {
            assert!(!entry.label.contains(|c: char| c.is_ascii_digit()));
        }
    }
}
