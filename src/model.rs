//! Record types flowing through the pipeline.

use serde::{Deserialize, Serialize};

/// One database's utilization snapshot as read from the metrics export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizationRecord {
    /// Database name
    pub database_name: String,

    /// SKU name, encodes the family prefix ("Standard", "GP_...", "BC_...")
    pub sku_name: String,

    /// Current service objective, keys into the pricing catalogs
    pub service_objective: String,

    /// Average DTU consumption observed over the sampling window
    pub dtu_used_average: f64,

    /// DTU limit of the provisioned tier
    pub dtu_limit: f64,

    /// Average CPU percentage observed over the sampling window
    pub cpu_percentage: f64,
}

/// A record after enrichment. Derived fields are computed once; the record
/// is not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub record: UtilizationRecord,

    /// `dtu_used_average / dtu_limit * 100`. NaN when `dtu_limit` is zero;
    /// renderers must keep NaN distinguishable from 0.
    pub utilization_percentage: f64,

    /// Price resolved from the catalog by `service_objective`.
    /// None when the tier is unknown; never an error.
    pub price: Option<f64>,
}
