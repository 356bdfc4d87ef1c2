//! Field resolution
//!
//! Maps a filter selection to the county attribute holding its value. The
//! dataset stores one column per valid combination, named by concatenating
//! hazard code, extreme-heat datasource, scenario, and a rating suffix,
//! e.g. `EXHT_L95_MID_HIGHER_PALR` or `DRGT_EALR`.
//!
//! Every branch is an exhaustive `match`, so adding a hazard, scenario, or
//! rating variant is a compile-time exercise rather than a silent
//! fallthrough.

use std::fmt;

use serde::Serialize;

use crate::{Datasource, Hazard, Rating, ResolveError, Result, Scenario};

/// Resolved attribute name for one (hazard, scenario, rating, datasource)
/// selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FieldKey(String);

impl FieldKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve the field key for a filter selection.
///
/// `datasource` only participates for [`Hazard::ExtremeHeat`], whose data is
/// split by percentile/baseline variant; it is ignored for every other
/// hazard. The only rejected combination is [`Rating::Multiplier`] with
/// [`Scenario::Base`]: a multiplier against itself has no field, and
/// returning a well-formed key for it would silently color the map from a
/// nonexistent attribute.
pub fn resolve(
    hazard: Hazard,
    scenario: Scenario,
    rating: Rating,
    datasource: Datasource,
) -> Result<FieldKey> {
    if rating == Rating::Multiplier && scenario.is_base() {
        return Err(ResolveError::MultiplierBaseline);
    }

    let mut key = String::from(hazard.code());

    if hazard == Hazard::ExtremeHeat {
        key.push_str(datasource.suffix());
    }

    if let Some(suffix) = scenario.suffix() {
        key.push_str(suffix);
    }

    key.push_str(match rating {
        Rating::RiskRating if scenario.is_base() => "_RISKS",
        Rating::RiskRating => "_PRISKS",
        Rating::AnnualLoss if scenario.is_base() => "_EALR",
        Rating::AnnualLoss => "_PALR",
        Rating::Multiplier => "_HM",
    });

    Ok(FieldKey(key))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    fn all_combinations() -> impl Iterator<Item = (Hazard, Scenario, Rating, Datasource)> {
        Hazard::ALL.into_iter().flat_map(|h| {
            Scenario::ALL.into_iter().flat_map(move |s| {
                Rating::ALL.into_iter().flat_map(move |r| {
                    Datasource::ALL.into_iter().map(move |d| (h, s, r, d))
                })
            })
        })
    }

    #[test]
    fn test_known_keys() {
        let key = resolve(
            Hazard::Drought,
            Scenario::Base,
            Rating::AnnualLoss,
            Datasource::L95,
        )
        .unwrap();
        assert_eq!(key.as_str(), "DRGT_EALR");

        let key = resolve(
            Hazard::ExtremeHeat,
            Scenario::MidHigher,
            Rating::AnnualLoss,
            Datasource::N99,
        )
        .unwrap();
        assert_eq!(key.as_str(), "EXHT_N99_MID_HIGHER_PALR");

        let key = resolve(
            Hazard::CoastalFlooding,
            Scenario::Base,
            Rating::RiskRating,
            Datasource::L95,
        )
        .unwrap();
        assert_eq!(key.as_str(), "CFLD_RISKS");

        let key = resolve(
            Hazard::Hurricane,
            Scenario::LateLower,
            Rating::Multiplier,
            Datasource::L95,
        )
        .unwrap();
        assert_eq!(key.as_str(), "HRCN_LATE_LOWER_HM");
    }

    #[test]
    fn test_multiplier_baseline_is_rejected() {
        for hazard in Hazard::ALL {
            let err = resolve(hazard, Scenario::Base, Rating::Multiplier, Datasource::L95)
                .unwrap_err();
            assert_eq!(err, ResolveError::MultiplierBaseline);
        }
    }

    #[test]
    fn test_keys_unique_per_combination() {
        // Datasource collapses for non-heat hazards by design, so uniqueness
        // is checked over the effective selection.
        let mut seen: HashSet<String> = HashSet::new();
        let mut effective = 0;
        for (h, s, r, d) in all_combinations() {
            if r == Rating::Multiplier && s.is_base() {
                continue;
            }
            if h != Hazard::ExtremeHeat && d != Datasource::L95 {
                continue; // same key as the L95 row, skip the duplicates
            }
            effective += 1;
            let key = resolve(h, s, r, d).unwrap();
            assert!(!key.as_str().is_empty());
            assert!(seen.insert(key.as_str().to_string()), "collision on {key}");
        }
        // 5 hazards x 5 scenarios x 3 ratings, minus 5 multiplier/base rows,
        // plus the 3 extra datasource variants for each extreme-heat row.
        assert_eq!(effective, 70 + 14 * 3);
    }

    #[test]
    fn test_datasource_distinguishes_heat_only() {
        for scenario in Scenario::ALL {
            for rating in Rating::ALL {
                if rating == Rating::Multiplier && scenario.is_base() {
                    continue;
                }
                let l95 = resolve(Hazard::ExtremeHeat, scenario, rating, Datasource::L95).unwrap();
                let n99 = resolve(Hazard::ExtremeHeat, scenario, rating, Datasource::N99).unwrap();
                assert_ne!(l95, n99);

                let a = resolve(Hazard::Wildfire, scenario, rating, Datasource::L95).unwrap();
                let b = resolve(Hazard::Wildfire, scenario, rating, Datasource::N99).unwrap();
                assert_eq!(a, b);
            }
        }
    }

    fn hazard_strategy() -> impl Strategy<Value = Hazard> {
        prop::sample::select(Hazard::ALL.to_vec())
    }

    fn scenario_strategy() -> impl Strategy<Value = Scenario> {
        prop::sample::select(Scenario::ALL.to_vec())
    }

    fn datasource_strategy() -> impl Strategy<Value = Datasource> {
        prop::sample::select(Datasource::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_key_starts_with_hazard_code(
            hazard in hazard_strategy(),
            scenario in scenario_strategy(),
            rating in prop::sample::select(Rating::ALL.to_vec()),
            datasource in datasource_strategy(),
        ) {
            match resolve(hazard, scenario, rating, datasource) {
                Ok(key) => {
                    prop_assert!(key.as_str().starts_with(hazard.code()));
                    prop_assert!(!key.as_str().ends_with('_'));
                }
                Err(err) => {
                    prop_assert_eq!(err, ResolveError::MultiplierBaseline);
                    prop_assert_eq!(rating, Rating::Multiplier);
                    prop_assert!(scenario.is_base());
                }
            }
        }
    }
}
