//! CSV reading for the launch dataset.
//!
//! Loading is all-or-nothing: the first unreadable or malformed row
//! aborts the whole load.

use super::DatasetError;
use crate::models::LaunchRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read every launch record from a CSV file on disk.
pub fn read_records(path: &Path) -> Result<Vec<LaunchRecord>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Reading launch records from {}", path.display());
    read_records_from(file)
}

/// Read every launch record from any CSV source.
///
/// Headers are matched by name, so column order does not matter and
/// unknown columns are skipped.
pub fn read_records_from<R: Read>(reader: R) -> Result<Vec<LaunchRecord>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<LaunchRecord>().enumerate() {
        let record = row?;

        if !record.payload_mass_kg.is_finite() {
            return Err(DatasetError::InvalidPayload { row: index + 1 });
        }

        records.push(record);
    }

    debug!("Parsed {} launch records", records.len());
    Ok(records)
}
