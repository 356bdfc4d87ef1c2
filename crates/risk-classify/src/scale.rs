//! Color scale construction
//!
//! A scale is built fresh whenever the filter selection or the dataset
//! changes and is queried by both the legend composer and the per-feature
//! styling, so it carries everything those call sites need: the ramp, the
//! bucket table or domain, and the sampled bucket colors.

use crate::buckets::{bucket_index, loss_buckets, CategoryBucket, BUCKETS_PER_HAZARD};
use crate::ramp::Ramp;
use crate::{Hazard, Rating};

/// Placeholder domain used before the dataset arrives, so the map renders
/// immediately with a degraded but valid scale.
pub const PLACEHOLDER_DOMAIN: (f64, f64) = (0.0, 10_000.0);

#[derive(Debug, Clone, PartialEq)]
pub enum ColorScale {
    /// Linear interpolation over the dataset extent (risk rating,
    /// multiplier).
    Sequential { domain: (f64, f64), ramp: Ramp },
    /// Fixed dollar buckets bound to sampled ramp colors (annual loss).
    Ordinal {
        hazard: Hazard,
        buckets: &'static [CategoryBucket; BUCKETS_PER_HAZARD],
        colors: Vec<String>,
    },
}

impl ColorScale {
    /// Build the scale for a selection from the values present in the
    /// loaded dataset.
    pub fn build(rating: Rating, hazard: Hazard, values: &[f64], ramp: Ramp) -> Self {
        if rating.is_discrete() {
            let colors = ramp.discrete(BUCKETS_PER_HAZARD);
            return ColorScale::Ordinal {
                hazard,
                buckets: loss_buckets(hazard),
                colors,
            };
        }

        let domain = extent(values).unwrap_or(PLACEHOLDER_DOMAIN);
        ColorScale::Sequential { domain, ramp }
    }

    /// Placeholder scale for the not-yet-loaded dataset.
    pub fn placeholder(ramp: Ramp) -> Self {
        ColorScale::Sequential {
            domain: PLACEHOLDER_DOMAIN,
            ramp,
        }
    }

    /// Fill color for a numeric value. Total over all inputs: out-of-domain
    /// values clamp to the nearest endpoint color.
    pub fn color_for(&self, value: f64) -> String {
        match self {
            ColorScale::Sequential { domain, ramp } => {
                let (min, max) = *domain;
                let span = max - min;
                let t = if span > 0.0 { (value - min) / span } else { 0.0 };
                ramp.sample(t)
            }
            ColorScale::Ordinal { hazard, colors, .. } => {
                colors[bucket_index(*hazard, value)].clone()
            }
        }
    }

    /// Domain endpoints for a sequential scale; ordinal scales have a fixed
    /// categorical domain instead.
    pub fn domain(&self) -> Option<(f64, f64)> {
        match self {
            ColorScale::Sequential { domain, .. } => Some(*domain),
            ColorScale::Ordinal { .. } => None,
        }
    }
}

/// Numeric extent over the dataset values, `None` when empty. NaN entries
/// (failed extractions upstream) are skipped.
fn extent(values: &[f64]) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for &v in values {
        if v.is_nan() {
            continue;
        }
        bounds = Some(match bounds {
            None => (v, v),
            Some((min, max)) => (min.min(v), max.max(v)),
        });
    }
    bounds
}
