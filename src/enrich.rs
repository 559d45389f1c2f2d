//! Enrichment Stage - computes derived fields per record.
//!
//! Pure and total: a zero DTU limit yields NaN and a catalog miss yields
//! None, neither aborts the batch. Records are independent of each other.

use crate::model::{EnrichedRecord, UtilizationRecord};
use crate::pricing::PriceCatalog;
use tracing::warn;

/// Enrich each record with its utilization percentage and catalog price.
pub fn enrich(
    records: Vec<UtilizationRecord>,
    catalog: &dyn PriceCatalog,
) -> Vec<EnrichedRecord> {
    let mut zero_limits = 0usize;
    let mut lookup_misses = 0usize;

    let enriched = records
        .into_iter()
        .map(|record| {
            let utilization_percentage = if record.dtu_limit == 0.0 {
                zero_limits += 1;
                f64::NAN
            } else {
                record.dtu_used_average / record.dtu_limit * 100.0
            };

            let price = catalog.lookup_price(&record.service_objective);
            if price.is_none() {
                lookup_misses += 1;
            }

            EnrichedRecord {
                record,
                utilization_percentage,
                price,
            }
        })
        .collect();

    if zero_limits > 0 {
        warn!(count = zero_limits, "records with zero DTU limit, utilization is undefined");
    }
    if lookup_misses > 0 {
        warn!(count = lookup_misses, "records whose service objective has no catalog price");
    }

    enriched
}
