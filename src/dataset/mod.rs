//! In-memory launch dataset.
//!
//! The dataset is loaded once at startup and never mutated afterwards.
//! Derived scalars (payload bounds, site catalog) are computed at
//! construction time so that every reader sees the same values.

pub mod loader;

use crate::models::{LaunchRecord, PayloadRange};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors raised while loading the dataset. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to open dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset contains no launch records")]
    Empty,

    #[error("Row {row} has a non-finite payload mass")]
    InvalidPayload { row: usize },
}

/// The full, immutable launch table plus its derived scalars.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    payload_bounds: PayloadRange,
    sites: Vec<String>,
}

impl Dataset {
    /// Load the dataset from a CSV file.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let records = loader::read_records(path)?;
        let dataset = Self::from_records(records)?;

        info!(
            "Loaded {} launch records from {} ({} sites, payload {})",
            dataset.len(),
            path.display(),
            dataset.sites.len(),
            dataset.payload_bounds
        );

        Ok(dataset)
    }

    /// Build a dataset from records already in memory.
    ///
    /// Fails on an empty table, which has no payload bounds to seed the
    /// range slider with.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DatasetError> {
        let first = records.first().ok_or(DatasetError::Empty)?;

        let mut bounds = PayloadRange::new(first.payload_mass_kg, first.payload_mass_kg);
        let mut sites = Vec::new();

        {
            let mut seen = HashSet::new();
            for record in &records {
                bounds.low = bounds.low.min(record.payload_mass_kg);
                bounds.high = bounds.high.max(record.payload_mass_kg);

                if seen.insert(record.launch_site.as_str()) {
                    sites.push(record.launch_site.clone());
                }
            }
        }

        Ok(Self {
            records,
            payload_bounds: bounds,
            sites,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Smallest and largest payload mass in the table.
    pub fn payload_bounds(&self) -> PayloadRange {
        self.payload_bounds
    }

    pub fn min_payload(&self) -> f64 {
        self.payload_bounds.low
    }

    pub fn max_payload(&self) -> f64 {
        self.payload_bounds.high
    }

    /// Distinct launch sites in order of first appearance.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn contains_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutcomeClass;

    fn sample_records() -> Vec<LaunchRecord> {
        vec![
            LaunchRecord::new("B", 900.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("A", 500.0, OutcomeClass::Success, "v1.1"),
            LaunchRecord::new("B", 7000.0, OutcomeClass::Failure, "B5"),
            LaunchRecord::new("A", 700.0, OutcomeClass::Failure, "v1.1"),
        ]
    }

    #[test]
    fn test_payload_bounds() {
        let dataset = Dataset::from_records(sample_records()).unwrap();

        assert_eq!(dataset.min_payload(), 500.0);
        assert_eq!(dataset.max_payload(), 7000.0);
        for record in dataset.records() {
            assert!(dataset.payload_bounds().contains(record.payload_mass_kg));
        }
    }

    #[test]
    fn test_site_catalog_first_appearance_order() {
        let dataset = Dataset::from_records(sample_records()).unwrap();

        assert_eq!(dataset.sites(), ["B".to_string(), "A".to_string()]);
        assert!(dataset.contains_site("A"));
        assert!(!dataset.contains_site("C"));
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        let err = Dataset::from_records(Vec::new()).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn test_single_record_bounds_collapse() {
        let dataset = Dataset::from_records(vec![LaunchRecord::new(
            "A",
            2500.0,
            OutcomeClass::Success,
            "FT",
        )])
        .unwrap();

        assert_eq!(dataset.payload_bounds(), PayloadRange::new(2500.0, 2500.0));
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_load_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/spacex_launch_dash.csv");
        let dataset = Dataset::load(&path).unwrap();

        assert_eq!(dataset.len(), 56);
        assert_eq!(
            dataset.sites(),
            [
                "CCAFS LC-40".to_string(),
                "VAFB SLC-4E".to_string(),
                "KSC LC-39A".to_string(),
                "CCAFS SLC-40".to_string(),
            ]
        );
        assert_eq!(dataset.min_payload(), 0.0);
        assert_eq!(dataset.max_payload(), 9600.0);
    }
}
