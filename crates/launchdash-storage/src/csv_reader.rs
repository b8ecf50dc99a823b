//! CSV ingestion. Rows are validated up front so that a malformed dataset
//! stops the process before any UI is served.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use launchdash_core::{DatasetError, LaunchRecord, Outcome};

use crate::dataset::Dataset;

const COL_SITE: &str = "Launch Site";
const COL_PAYLOAD: &str = "Payload Mass (kg)";
const COL_CLASS: &str = "class";
const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";

const REQUIRED_COLUMNS: [&str; 4] = [COL_SITE, COL_PAYLOAD, COL_CLASS, COL_BOOSTER_CATEGORY];

/// One CSV row as written on disk. Unknown columns are ignored.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Flight Number", default)]
    flight_number: Option<u32>,
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version", default)]
    booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

impl RawRow {
    /// `row` is the 1-based data row, used in error messages.
    fn into_record(self, row: usize) -> Result<LaunchRecord, DatasetError> {
        let site = self.site.trim();
        if site.is_empty() {
            return Err(DatasetError::EmptySite { row });
        }
        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(DatasetError::InvalidPayload {
                row,
                value: self.payload_mass_kg,
            });
        }
        let outcome = Outcome::from_class(self.class).ok_or(DatasetError::InvalidOutcome {
            row,
            value: self.class,
        })?;

        Ok(LaunchRecord {
            flight_number: self.flight_number,
            site: site.to_string(),
            payload_mass_kg: self.payload_mass_kg,
            outcome,
            booster_version: self.booster_version.filter(|v| !v.trim().is_empty()),
            booster_category: self.booster_category.trim().to_string(),
        })
    }
}

/// Load and validate the dataset at `path`.
pub fn load_csv(path: &Path) -> Result<Dataset, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let dataset = read_csv(file)?;

    info!(
        path = %path.display(),
        records = dataset.len(),
        sites = dataset.options().sites().len(),
        min_payload = dataset.options().payload_bounds().map(|b| b.low),
        max_payload = dataset.options().payload_bounds().map(|b| b.high),
        "Launch dataset loaded"
    );
    Ok(dataset)
}

/// Parse and validate CSV from any reader. An empty dataset is an error.
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| DatasetError::Csv {
            row: 0,
            message: e.to_string(),
        })?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    for (idx, result) in csv_reader.deserialize::<RawRow>().enumerate() {
        let row = idx + 1;
        let raw = result.map_err(|e| DatasetError::Csv {
            row,
            message: e.to_string(),
        })?;
        records.push(raw.into_record(row)?);
    }

    if records.is_empty() {
        return Err(DatasetError::Empty);
    }

    debug!(records = records.len(), "CSV rows validated");
    Ok(Dataset::from_records(records))
}
