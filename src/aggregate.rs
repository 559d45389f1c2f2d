//! Aggregation Stage - summary statistics over a filtered record set.

use crate::model::EnrichedRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Summary statistics over one record subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    /// Arithmetic mean of `utilization_percentage`; NaN over an empty set.
    /// NaN entries propagate into the mean.
    pub mean_utilization_percentage: f64,

    pub record_count: usize,

    /// Sum of resolved prices. Records without a price contribute zero,
    /// so a partial catalog cannot poison the total.
    pub total_price: f64,
}

/// Summarize a record subset.
pub fn summarize(records: &[EnrichedRecord]) -> AggregateSummary {
    let record_count = records.len();

    let mean_utilization_percentage = if record_count == 0 {
        f64::NAN
    } else {
        let sum: f64 = records.iter().map(|r| r.utilization_percentage).sum();
        sum / record_count as f64
    };

    let total_price: f64 = records.iter().filter_map(|r| r.price).sum();

    AggregateSummary {
        mean_utilization_percentage,
        record_count,
        total_price,
    }
}

/// Arithmetic mean of observed CPU percentage; NaN over an empty set.
pub fn mean_cpu_percentage(records: &[EnrichedRecord]) -> f64 {
    if records.is_empty() {
        return f64::NAN;
    }
    let sum: f64 = records.iter().map(|r| r.record.cpu_percentage).sum();
    sum / records.len() as f64
}

/// Occurrence count per SKU name, sorted by count descending. Ties keep
/// first-appearance order so repeated runs produce identical output.
pub fn count_by_sku(records: &[EnrichedRecord]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for record in records {
        let sku = record.record.sku_name.as_str();
        if !counts.contains_key(sku) {
            order.push(sku);
        }
        *counts.entry(sku).or_insert(0) += 1;
    }

    let mut result: Vec<(String, usize)> = order
        .into_iter()
        .map(|sku| (sku.to_string(), counts[sku]))
        .collect();
    // sort_by is stable, so equal counts stay in first-appearance order
    result.sort_by(|a, b| b.1.cmp(&a.1));
    result
}
