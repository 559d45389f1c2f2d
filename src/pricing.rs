//! Static pricing catalogs for Azure SQL database tiers.
//!
//! Two independent catalogs exist with disjoint key spaces and different
//! unit semantics: provisioned-compute tiers (GP_*/BC_*) carry a per-hour
//! rate, DTU-based tiers (S0..S12) are converted to a monthly rate at
//! construction. They are never merged into one table.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Hours used for hourly-to-monthly conversion. Fixed 31-day month
/// approximation, not calendar-accurate.
pub const HOURS_PER_MONTH: f64 = 24.0 * 31.0;

/// Convert an hourly rate to the approximated monthly rate.
pub fn monthly_price(hourly: f64) -> f64 {
    hourly * HOURS_PER_MONTH
}

/// Price lookup capability shared by both catalog variants.
/// A missing key yields None, never an error.
pub trait PriceCatalog {
    fn lookup_price(&self, tier_id: &str) -> Option<f64>;
}

/// One provisioned-compute (vCore) tier row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VcoreTier {
    pub sku_name: String,
    pub v_cores: u32,
    pub memory_gb: u32,
    pub dtus: u32,
    /// Per-hour rate
    pub hourly_price: f64,
}

/// One DTU-based tier row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DtuTier {
    pub tier_id: String,
    pub included_storage_gb: u32,
    pub max_storage: String,
    /// Per-month rate (hourly rate pre-multiplied by HOURS_PER_MONTH)
    pub monthly_price: f64,
}

// (vCores, memory GB, DTUs, hourly price) - the GP and BC Gen5 families
// share the same capacity ladder.
const VCORE_LADDER: [(u32, u32, u32, f64); 7] = [
    (2, 5, 5, 0.011),
    (4, 10, 10, 0.022),
    (8, 20, 20, 0.044),
    (16, 40, 40, 0.088),
    (32, 80, 80, 0.176),
    (48, 120, 120, 0.264),
    (80, 200, 200, 0.44),
];

// (tier id, included storage GB, max storage, hourly price)
const DTU_TIERS: [(&str, u32, &str, f64); 9] = [
    ("S0", 10, "250 GB", 0.0202),
    ("S1", 20, "250 GB", 0.0404),
    ("S2", 50, "250 GB", 0.1009),
    ("S3", 100, "1 TB", 0.2017),
    ("S4", 200, "1 TB", 0.4033),
    ("S6", 400, "1 TB", 0.8066),
    ("S7", 800, "1 TB", 1.6130),
    ("S9", 1600, "1 TB", 3.2260),
    ("S12", 3000, "1 TB", 6.0488),
];

/// Catalog of provisioned-compute tiers. Prices stay hourly.
#[derive(Debug, Clone)]
pub struct VcorePricing {
    tiers: Vec<VcoreTier>,
}

impl VcorePricing {
    fn builtin() -> Self {
        let mut tiers = Vec::with_capacity(VCORE_LADDER.len() * 2);
        for family in ["GP", "BC"] {
            for (v_cores, memory_gb, dtus, hourly_price) in VCORE_LADDER {
                tiers.push(VcoreTier {
                    sku_name: format!("{}_Gen5_{}", family, v_cores),
                    v_cores,
                    memory_gb,
                    dtus,
                    hourly_price,
                });
            }
        }
        Self { tiers }
    }

    pub fn get(&self, sku_name: &str) -> Option<&VcoreTier> {
        self.tiers.iter().find(|t| t.sku_name == sku_name)
    }

    pub fn tiers(&self) -> &[VcoreTier] {
        &self.tiers
    }
}

impl PriceCatalog for VcorePricing {
    fn lookup_price(&self, tier_id: &str) -> Option<f64> {
        self.get(tier_id).map(|t| t.hourly_price)
    }
}

/// Catalog of DTU-based tiers. Prices are monthly after construction.
#[derive(Debug, Clone)]
pub struct DtuPricing {
    tiers: Vec<DtuTier>,
}

impl DtuPricing {
    fn builtin() -> Self {
        let tiers = DTU_TIERS
            .iter()
            .map(|&(tier_id, included_storage_gb, max_storage, hourly)| DtuTier {
                tier_id: tier_id.to_string(),
                included_storage_gb,
                max_storage: max_storage.to_string(),
                monthly_price: monthly_price(hourly),
            })
            .collect();
        Self { tiers }
    }

    pub fn get(&self, tier_id: &str) -> Option<&DtuTier> {
        self.tiers.iter().find(|t| t.tier_id == tier_id)
    }

    pub fn tiers(&self) -> &[DtuTier] {
        &self.tiers
    }
}

impl PriceCatalog for DtuPricing {
    fn lookup_price(&self, tier_id: &str) -> Option<f64> {
        self.get(tier_id).map(|t| t.monthly_price)
    }
}

lazy_static! {
    pub static ref VCORE_PRICING: VcorePricing = VcorePricing::builtin();
    pub static ref DTU_PRICING: DtuPricing = DtuPricing::builtin();
}

/// Dispatches a lookup to the catalog owning the key space: GP_*/BC_* keys
/// go to the vCore catalog (hourly rate), everything else to the DTU
/// catalog (monthly rate). The tables themselves stay separate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogs;

impl PriceCatalog for BuiltinCatalogs {
    fn lookup_price(&self, tier_id: &str) -> Option<f64> {
        if tier_id.starts_with("GP_") || tier_id.starts_with("BC_") {
            VCORE_PRICING.lookup_price(tier_id)
        } else {
            DTU_PRICING.lookup_price(tier_id)
        }
    }
}
