//! Future Risk Index Classification Core
//!
//! Resolves which county attribute backs the current filter selection and
//! turns raw attribute values into fill colors and legend entries.
//!
//! Three pieces, consumed by the gateway shell:
//! - [`resolver`] maps (hazard, scenario, rating, datasource) to a field key
//! - [`scale`] builds a continuous or discrete [`scale::ColorScale`]
//! - [`legend`] composes the ordered (label, color) legend list
//!
//! The whole crate is synchronous and allocation-light; scales are rebuilt
//! from scratch on every filter or dataset change, never mutated in place.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod buckets;
pub mod legend;
pub mod ramp;
pub mod resolver;
pub mod scale;
pub mod style;

pub use resolver::{resolve, FieldKey};

/// Counties with no data for the selected field.
pub const NOT_APPLICABLE: &str = "Not Applicable";
/// Counties with data but a null assigned rating.
pub const NO_RATING: &str = "No Rating";

/// Fill for the no-data case. The legend and the per-feature styling both
/// read this constant, so they cannot drift apart.
pub const NEUTRAL_FILL: &str = "#bdbdbd";
/// Fill for the "No Rating" sentinel.
pub const NO_RATING_FILL: &str = "#ffffff";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// A multiplier compares a future scenario against today, so there is
    /// no multiplier field for the baseline itself.
    #[error("hazard multiplier is undefined for the baseline scenario")]
    MultiplierBaseline,
}

pub type Result<T> = std::result::Result<T, ResolveError>;

/// Natural hazard tracked by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hazard {
    CoastalFlooding,
    Drought,
    ExtremeHeat,
    Hurricane,
    Wildfire,
}

impl Hazard {
    pub const ALL: [Hazard; 5] = [
        Hazard::CoastalFlooding,
        Hazard::Drought,
        Hazard::ExtremeHeat,
        Hazard::Hurricane,
        Hazard::Wildfire,
    ];

    /// FEMA field-name prefix for this hazard.
    pub fn code(&self) -> &'static str {
        match self {
            Hazard::CoastalFlooding => "CFLD",
            Hazard::Drought => "DRGT",
            Hazard::ExtremeHeat => "EXHT",
            Hazard::Hurricane => "HRCN",
            Hazard::Wildfire => "WFIR",
        }
    }
}

/// Time horizon + emissions pathway, or the present-day baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Base,
    MidLower,
    MidHigher,
    LateLower,
    LateHigher,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::Base,
        Scenario::MidLower,
        Scenario::MidHigher,
        Scenario::LateLower,
        Scenario::LateHigher,
    ];

    /// Field-name suffix; the baseline contributes nothing.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            Scenario::Base => None,
            Scenario::MidLower => Some("_MID_LOWER"),
            Scenario::MidHigher => Some("_MID_HIGHER"),
            Scenario::LateLower => Some("_LATE_LOWER"),
            Scenario::LateHigher => Some("_LATE_HIGHER"),
        }
    }

    pub fn is_base(&self) -> bool {
        matches!(self, Scenario::Base)
    }
}

/// Output metric requested by the user.
///
/// The rating drives both the field-name suffix and the scale shape:
/// annual loss classifies into fixed dollar buckets, the other two
/// interpolate over the dataset extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// Comparative risk rating (continuous).
    RiskRating,
    /// Projected annual loss in dollars (discrete FEMA buckets).
    AnnualLoss,
    /// Loss multiplier versus today (continuous).
    Multiplier,
}

impl Rating {
    pub const ALL: [Rating; 3] = [Rating::RiskRating, Rating::AnnualLoss, Rating::Multiplier];

    /// Whether this rating classifies into the fixed dollar buckets.
    pub fn is_discrete(&self) -> bool {
        matches!(self, Rating::AnnualLoss)
    }
}

/// Extreme-heat sub-datasource: percentile (95th/99th) crossed with the
/// linear/nonlinear baseline variant. Ignored for every other hazard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Datasource {
    L95,
    L99,
    N95,
    N99,
}

impl Datasource {
    pub const ALL: [Datasource; 4] = [
        Datasource::L95,
        Datasource::L99,
        Datasource::N95,
        Datasource::N99,
    ];

    pub fn suffix(&self) -> &'static str {
        match self {
            Datasource::L95 => "_L95",
            Datasource::L99 => "_L99",
            Datasource::N95 => "_N95",
            Datasource::N99 => "_N99",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hazard_codes_are_four_letters() {
        for hazard in Hazard::ALL {
            assert_eq!(hazard.code().len(), 4);
        }
    }

    #[test]
    fn test_base_scenario_has_no_suffix() {
        assert_eq!(Scenario::Base.suffix(), None);
        for scenario in Scenario::ALL.into_iter().filter(|s| !s.is_base()) {
            assert!(scenario.suffix().is_some());
        }
    }

    #[test]
    fn test_filter_enums_bind_snake_case() {
        let hazard: Hazard = serde_json::from_str("\"extreme_heat\"").unwrap();
        assert_eq!(hazard, Hazard::ExtremeHeat);
        let rating: Rating = serde_json::from_str("\"annual_loss\"").unwrap();
        assert_eq!(rating, Rating::AnnualLoss);
        let scenario: Scenario = serde_json::from_str("\"mid_higher\"").unwrap();
        assert_eq!(scenario, Scenario::MidHigher);
        let datasource: Datasource = serde_json::from_str("\"l95\"").unwrap();
        assert_eq!(datasource, Datasource::L95);
    }

    #[test]
    fn test_only_annual_loss_is_discrete() {
        assert!(Rating::AnnualLoss.is_discrete());
        assert!(!Rating::RiskRating.is_discrete());
        assert!(!Rating::Multiplier.is_discrete());
    }
}
