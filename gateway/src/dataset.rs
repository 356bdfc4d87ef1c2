//! County dataset loading
//!
//! Reads the county feature collection from a local GeoJSON file and exposes
//! the per-county property bags the classification core consumes. The
//! collection is immutable once loaded; the gateway runs with no dataset at
//! all (placeholder scale) when the file is absent.

use std::fs;
use std::path::Path;

use geojson::{FeatureCollection, GeoJson, JsonObject};
use thiserror::Error;
use tracing::{info, warn};

use risk_classify::resolver::FieldKey;
use risk_classify::{NOT_APPLICABLE, NO_RATING};

/// Property holding the stable state+county FIPS identifier.
pub const FIPS_FIELD: &str = "STCOFIPS";

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid GeoJSON: {0}")]
    Geojson(#[from] geojson::Error),
    #[error("expected a FeatureCollection")]
    NotACollection,
}

/// Immutable county feature collection.
pub struct CountyDataset {
    collection: FeatureCollection,
}

impl CountyDataset {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let collection = match raw.parse::<GeoJson>()? {
            GeoJson::FeatureCollection(fc) => fc,
            _ => return Err(DatasetError::NotACollection),
        };

        let without_id = collection
            .features
            .iter()
            .filter(|f| fips_of(f.properties.as_ref()).is_none())
            .count();
        if without_id > 0 {
            warn!("{} county features have no {} identifier", without_id, FIPS_FIELD);
        }
        info!("Loaded {} county features from {:?}", collection.features.len(), path);

        Ok(Self { collection })
    }

    pub fn len(&self) -> usize {
        self.collection.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.features.is_empty()
    }

    /// (FIPS, property bag) for every identifiable county.
    pub fn counties(&self) -> impl Iterator<Item = (&str, &JsonObject)> {
        self.collection.features.iter().filter_map(|feature| {
            let properties = feature.properties.as_ref()?;
            let fips = fips_of(Some(properties))?;
            Some((fips, properties))
        })
    }

    /// Property bag for one county.
    pub fn county(&self, fips: &str) -> Option<&JsonObject> {
        self.counties()
            .find(|(id, _)| *id == fips)
            .map(|(_, props)| props)
    }

    /// Numeric values under a resolved field, for extent computation.
    /// Sentinel strings are excluded; an absent attribute reads as 0, the
    /// way the map treats counties the hazard model does not cover.
    pub fn values_for(&self, key: &FieldKey) -> Vec<f64> {
        self.counties()
            .filter_map(|(_, props)| match props.get(key.as_str()) {
                None => Some(0.0),
                Some(value) => {
                    if let Some(s) = value.as_str() {
                        if s == NOT_APPLICABLE || s == NO_RATING {
                            return None;
                        }
                        return s.parse::<f64>().ok();
                    }
                    value.as_f64().or(Some(0.0))
                }
            })
            .collect()
    }
}

fn fips_of(properties: Option<&JsonObject>) -> Option<&str> {
    properties?.get(FIPS_FIELD)?.as_str()
}
