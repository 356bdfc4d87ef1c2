//! Fixed annual-loss category buckets
//!
//! FEMA clustered counties into five risk tiers per hazard when building the
//! base National Risk Index; the future projections reuse the same bins so
//! base-year and projected values stay comparable. The thresholds below are
//! those original bins and are never recomputed from data.
//!
//! This table is the single source of truth for bucket labels: both the
//! scale domain and the legend read it, so they cannot disagree.
//!
//! The upstream wildfire table carried a stray sixth "No Rating" entry mixed
//! into the severity labels; that was a data-entry defect and is not
//! reproduced here. Wildfire gets the same five canonical tiers as every
//! other hazard.

use crate::Hazard;

/// One severity tier with its inclusive-upper dollar bound. The final tier
/// of each hazard is unbounded (`upper` is infinity).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryBucket {
    pub label: &'static str,
    pub upper: f64,
}

pub const BUCKETS_PER_HAZARD: usize = 5;

/// Generic severity tier labels for continuous legends, where literal
/// dollar boundaries would be misleading.
pub const TIER_LABELS: [&str; BUCKETS_PER_HAZARD] = [
    "Very Low",
    "Relatively Low",
    "Relatively Moderate",
    "Relatively High",
    "Very High",
];

const DROUGHT: [CategoryBucket; BUCKETS_PER_HAZARD] = [
    CategoryBucket { label: "Very Low (<21.9K)", upper: 21_900.0 },
    CategoryBucket { label: "Relatively Low (21.9K - 292K)", upper: 292_000.0 },
    CategoryBucket { label: "Relatively Moderate (292K - 2.74M)", upper: 2_740_000.0 },
    CategoryBucket { label: "Relatively High (2.74M - 25.1M)", upper: 25_100_000.0 },
    CategoryBucket { label: "Very High (>25.1M)", upper: f64::INFINITY },
];

const COASTAL_FLOODING: [CategoryBucket; BUCKETS_PER_HAZARD] = [
    CategoryBucket { label: "Very Low (<55K)", upper: 55_000.0 },
    CategoryBucket { label: "Relatively Low (55K - 932K)", upper: 932_000.0 },
    CategoryBucket { label: "Relatively Moderate (932K - 5.96M)", upper: 5_960_000.0 },
    CategoryBucket { label: "Relatively High (5.96M - 29.4M)", upper: 29_400_000.0 },
    CategoryBucket { label: "Very High (>29.4M)", upper: f64::INFINITY },
];

const EXTREME_HEAT: [CategoryBucket; BUCKETS_PER_HAZARD] = [
    CategoryBucket { label: "Very Low (<10.9K)", upper: 10_900.0 },
    CategoryBucket { label: "Relatively Low (10.9K - 241K)", upper: 241_000.0 },
    CategoryBucket { label: "Relatively Moderate (241K - 1.87M)", upper: 1_870_000.0 },
    CategoryBucket { label: "Relatively High (1.87M - 17.3M)", upper: 17_300_000.0 },
    CategoryBucket { label: "Very High (>17.3M)", upper: f64::INFINITY },
];

const HURRICANE: [CategoryBucket; BUCKETS_PER_HAZARD] = [
    CategoryBucket { label: "Very Low (<625K)", upper: 625_000.0 },
    CategoryBucket { label: "Relatively Low (625K - 7.36M)", upper: 7_360_000.0 },
    CategoryBucket { label: "Relatively Moderate (7.36M - 43M)", upper: 43_000_000.0 },
    CategoryBucket { label: "Relatively High (43M - 191M)", upper: 191_000_000.0 },
    CategoryBucket { label: "Very High (>191M)", upper: f64::INFINITY },
];

const WILDFIRE: [CategoryBucket; BUCKETS_PER_HAZARD] = [
    CategoryBucket { label: "Very Low (<85.9K)", upper: 85_900.0 },
    CategoryBucket { label: "Relatively Low (85.9K - 842K)", upper: 842_000.0 },
    CategoryBucket { label: "Relatively Moderate (842K - 5.88M)", upper: 5_880_000.0 },
    CategoryBucket { label: "Relatively High (5.88M - 49.5M)", upper: 49_500_000.0 },
    CategoryBucket { label: "Very High (>49.5M)", upper: f64::INFINITY },
];

/// Annual-loss buckets for a hazard, ordered least to most severe.
pub fn loss_buckets(hazard: Hazard) -> &'static [CategoryBucket; BUCKETS_PER_HAZARD] {
    match hazard {
        Hazard::CoastalFlooding => &COASTAL_FLOODING,
        Hazard::Drought => &DROUGHT,
        Hazard::ExtremeHeat => &EXTREME_HEAT,
        Hazard::Hurricane => &HURRICANE,
        Hazard::Wildfire => &WILDFIRE,
    }
}

/// Index of the bucket a dollar value falls into.
pub fn bucket_index(hazard: Hazard, value: f64) -> usize {
    let buckets = loss_buckets(hazard);
    buckets
        .iter()
        .position(|b| value < b.upper)
        .unwrap_or(BUCKETS_PER_HAZARD - 1)
}
