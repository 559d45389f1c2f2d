//! Metrics Loader - reads per-database utilization samples from a CSV export.
//!
//! Only column presence is validated; row values must parse as their field
//! types. Source order is preserved all the way to presentation.

use crate::error::{DashboardError, Result};
use crate::model::UtilizationRecord;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Columns that must be present in the header row, with their exact
/// names as produced by the metrics export.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "DatabaseName",
    "databaseSkuName",
    "CurrentServiceObjectiveName",
    "DTU Used Average",
    "DTU Limit",
    "Percentage CPU",
];

// Raw CSV row. `sql_instance_memory_percent` may also be present in the
// export; it is dropped here and never reaches presentation.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "DatabaseName")]
    database_name: String,

    #[serde(rename = "databaseSkuName")]
    sku_name: String,

    #[serde(rename = "CurrentServiceObjectiveName")]
    service_objective: String,

    #[serde(rename = "DTU Used Average")]
    dtu_used_average: f64,

    #[serde(rename = "DTU Limit")]
    dtu_limit: f64,

    #[serde(rename = "Percentage CPU")]
    cpu_percentage: f64,
}

impl From<RawRow> for UtilizationRecord {
    fn from(row: RawRow) -> Self {
        UtilizationRecord {
            database_name: row.database_name,
            sku_name: row.sku_name,
            service_objective: row.service_objective,
            dtu_used_average: row.dtu_used_average,
            dtu_limit: row.dtu_limit,
            cpu_percentage: row.cpu_percentage,
        }
    }
}

/// Load utilization records from a CSV file.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<UtilizationRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        DashboardError::DataSource(format!("cannot open {}: {}", path.display(), e))
    })?;
    let records = load_from_reader(file)?;
    info!(rows = records.len(), "loaded metrics from {}", path.display());
    Ok(records)
}

/// Load utilization records from any reader. Fails with a data source
/// error when a required column is missing or a row does not parse.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<UtilizationRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| DashboardError::DataSource(format!("cannot read header row: {}", e)))?
        .clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DashboardError::DataSource(format!(
                "missing required column: {}",
                column
            )));
        }
    }

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<RawRow>().enumerate() {
        // Header is line 1, so the first data row is line 2
        let row = row.map_err(|e| {
            DashboardError::DataSource(format!("malformed row at line {}: {}", index + 2, e))
        })?;
        records.push(row.into());
    }

    Ok(records)
}
