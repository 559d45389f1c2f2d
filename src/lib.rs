//! Database DTU/vCore utilization and cost overview pipeline.
//!
//! Ingest -> enrich -> filter -> aggregate -> present: loads per-database
//! utilization samples from a CSV export, joins them against the embedded
//! pricing catalogs and produces the dashboard view structures.

pub mod aggregate;
pub mod enrich;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod pricing;
pub mod view;

pub use error::{DashboardError, Result};
pub use model::{EnrichedRecord, UtilizationRecord};
pub use view::Dashboard;
