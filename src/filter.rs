//! Filter Stage - partitions records by SKU family.

use crate::model::EnrichedRecord;

/// Select the records whose `sku_name` starts with `prefix`.
/// Stable, order-preserving and case-sensitive; an empty result is not
/// an error.
pub fn filter_by_prefix(records: &[EnrichedRecord], prefix: &str) -> Vec<EnrichedRecord> {
    records
        .iter()
        .filter(|r| r.record.sku_name.starts_with(prefix))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::enrich;
    use crate::model::UtilizationRecord;
    use crate::pricing::BuiltinCatalogs;

    fn records() -> Vec<EnrichedRecord> {
        let raw = vec![
            ("a", "Standard_S1"),
            ("b", "GP_Gen5_2"),
            ("c", "Standard_S0"),
            ("d", "BC_Gen5_4"),
        ]
        .into_iter()
        .map(|(name, sku)| UtilizationRecord {
            database_name: name.to_string(),
            sku_name: sku.to_string(),
            service_objective: sku.to_string(),
            dtu_used_average: 1.0,
            dtu_limit: 10.0,
            cpu_percentage: 0.0,
        })
        .collect();
        enrich(raw, &BuiltinCatalogs)
    }

    #[test]
    fn test_prefix_filter_preserves_order() {
        let filtered = filter_by_prefix(&records(), "Standard");
        let names: Vec<&str> = filtered.iter().map(|r| r.record.database_name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = filter_by_prefix(&records(), "GP");
        let twice = filter_by_prefix(&once, "GP");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        assert!(filter_by_prefix(&records(), "standard").is_empty());
    }

    #[test]
    fn test_no_match_yields_empty_not_error() {
        assert!(filter_by_prefix(&records(), "Hyperscale").is_empty());
    }
}
