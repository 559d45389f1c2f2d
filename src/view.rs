//! Presentation Adapter surface - assembles the dashboard views.
//!
//! The renderer (table/chart widgets) lives outside this crate; these
//! structures are what it consumes. NaN percentages must stay visible in
//! rendered tables, never collapsed to 0 (note that serde_json emits NaN
//! as null, which renderers should show as a marker).

use crate::aggregate::{count_by_sku, mean_cpu_percentage, summarize, AggregateSummary};
use crate::enrich::enrich;
use crate::error::Result;
use crate::filter::filter_by_prefix;
use crate::loader;
use crate::model::{EnrichedRecord, UtilizationRecord};
use crate::pricing::BuiltinCatalogs;
use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Column whose values drive the table color gradient.
pub const HIGHLIGHT_COLUMN: &str = "DTU Used Average";

/// SKU family shown in the DTU consumption view.
pub const DTU_FAMILY_PREFIX: &str = "Standard";

/// SKU family shown in the vCore consumption view.
pub const VCORE_FAMILY_PREFIX: &str = "GP";

/// Ordered rows plus per-row highlight intensities for the gradient
/// column, min-max normalized into [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableView {
    pub rows: Vec<EnrichedRecord>,
    pub highlight_column: String,
    pub highlight: Vec<f64>,
}

impl TableView {
    pub fn new(rows: Vec<EnrichedRecord>) -> Self {
        let values: Vec<f64> = rows.iter().map(|r| r.record.dtu_used_average).collect();
        let highlight = normalize(&values);
        Self {
            rows,
            highlight_column: HIGHLIGHT_COLUMN.to_string(),
            highlight,
        }
    }
}

// Min-max normalization. A degenerate range (empty, single value, all
// equal) maps everything to 0.0.
fn normalize(values: &[f64]) -> Vec<f64> {
    match values.iter().copied().filter(|v| !v.is_nan()).minmax() {
        MinMaxResult::MinMax(lo, hi) if hi > lo => values
            .iter()
            .map(|v| {
                if v.is_nan() {
                    0.0
                } else {
                    (v - lo) / (hi - lo)
                }
            })
            .collect(),
        _ => vec![0.0; values.len()],
    }
}

/// "Database DTU Consumption Overview": Standard-family databases with
/// their utilization summary and monthly price total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DtuConsumptionView {
    pub table: TableView,
    pub summary: AggregateSummary,
}

/// "Database vCore Consumption Overview": GP-family databases with mean
/// CPU and database count. No price total: vCore rates are hourly and
/// the view does not aggregate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VcoreConsumptionView {
    pub table: TableView,
    pub mean_cpu_percentage: f64,
    pub record_count: usize,
}

/// "Database SKU Overview": occurrence count per SKU over the whole
/// record set, for bar-chart rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuOverview {
    pub counts: Vec<(String, usize)>,
}

/// All three dashboard views, built from one pass over the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub dtu_consumption: DtuConsumptionView,
    pub vcore_consumption: VcoreConsumptionView,
    pub sku_overview: SkuOverview,
}

impl Dashboard {
    /// Build the views from loaded records using the default family
    /// prefixes.
    pub fn build(records: Vec<UtilizationRecord>) -> Self {
        Self::build_with_prefix(records, DTU_FAMILY_PREFIX)
    }

    /// Build the views with a caller-chosen family prefix for the DTU
    /// consumption view.
    pub fn build_with_prefix(records: Vec<UtilizationRecord>, dtu_prefix: &str) -> Self {
        let enriched = enrich(records, &BuiltinCatalogs);

        let dtu_family = filter_by_prefix(&enriched, dtu_prefix);
        let summary = summarize(&dtu_family);

        let vcore_family = filter_by_prefix(&enriched, VCORE_FAMILY_PREFIX);
        let mean_cpu = mean_cpu_percentage(&vcore_family);
        let vcore_count = vcore_family.len();

        let counts = count_by_sku(&enriched);

        info!(
            total = enriched.len(),
            dtu_family = dtu_family.len(),
            vcore_family = vcore_count,
            "dashboard views built"
        );

        Dashboard {
            dtu_consumption: DtuConsumptionView {
                table: TableView::new(dtu_family),
                summary,
            },
            vcore_consumption: VcoreConsumptionView {
                table: TableView::new(vcore_family),
                mean_cpu_percentage: mean_cpu,
                record_count: vcore_count,
            },
            sku_overview: SkuOverview { counts },
        }
    }

    /// Run the whole pipeline: load the CSV source and build the views.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        let records = loader::load(path)?;
        Ok(Self::build(records))
    }
}
