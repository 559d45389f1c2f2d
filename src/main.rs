use anyhow::Result;
use clap::Parser;
use dtu_insight::pricing::{DTU_PRICING, VCORE_PRICING};
use dtu_insight::view::{Dashboard, TableView};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "dtu-insight")]
#[command(about = "Database DTU/vCore utilization and cost overview")]
struct Args {
    /// Path to the metrics CSV export
    #[arg(short, long, default_value = "data.csv")]
    data: PathBuf,

    /// SKU family prefix for the DTU consumption view
    #[arg(long, default_value = "Standard")]
    filter_prefix: String,

    /// Emit the dashboard as JSON instead of text tables
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    info!("loading metrics from {}", args.data.display());

    let records = dtu_insight::loader::load(&args.data)?;
    let dashboard = Dashboard::build_with_prefix(records, &args.filter_prefix);

    if args.json {
        // NaN has no JSON representation; serde_json emits null
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    println!("Database SKU Pricing Overview");
    println!();
    print_pricing_catalogs();

    println!("Database DTU Consumption Overview");
    println!();
    print_table(&dashboard.dtu_consumption.table);
    let summary = &dashboard.dtu_consumption.summary;
    println!(
        "Average DTU Used Percentage over all databases %: {}",
        summary.mean_utilization_percentage
    );
    println!("Number of databases: {}", summary.record_count);
    println!("Total Price for all databases: {}", summary.total_price);
    println!();

    println!("Database vCore Consumption Overview");
    println!();
    print_table(&dashboard.vcore_consumption.table);
    println!(
        "Average Percentage CPU over all databases %: {}",
        dashboard.vcore_consumption.mean_cpu_percentage
    );
    println!("Number of databases: {}", dashboard.vcore_consumption.record_count);
    println!();

    println!("Database SKU Overview");
    println!();
    for (sku, count) in &dashboard.sku_overview.counts {
        println!("{:<24} {}", sku, count);
    }

    Ok(())
}

fn print_pricing_catalogs() {
    println!(
        "{:<12} {:>6} {:>9} {:>5} {:>8}",
        "SKU", "vCores", "Memory GB", "DTUs", "Price/h"
    );
    for tier in VCORE_PRICING.tiers() {
        println!(
            "{:<12} {:>6} {:>9} {:>5} {:>8}",
            tier.sku_name, tier.v_cores, tier.memory_gb, tier.dtus, tier.hourly_price
        );
    }
    println!();
    println!(
        "{:<5} {:>10} {:>11} {:>11}",
        "Tier", "Storage GB", "Max storage", "Price/month"
    );
    for tier in DTU_PRICING.tiers() {
        println!(
            "{:<5} {:>10} {:>11} {:>11.4}",
            tier.tier_id, tier.included_storage_gb, tier.max_storage, tier.monthly_price
        );
    }
    println!();
}

// Fixed-width text rendering. NaN percentages print as "NaN" so an
// undefined value is never mistaken for 0.
fn print_table(table: &TableView) {
    println!(
        "{:<24} {:<14} {:<10} {:>10} {:>9} {:>8} {:>10} {:>10}",
        "DatabaseName",
        "SKU",
        "Objective",
        "DTU Used",
        "DTU Limit",
        "Used %",
        "Price",
        "Highlight"
    );
    for (row, highlight) in table.rows.iter().zip(&table.highlight) {
        let price = row
            .price
            .map(|p| format!("{:.4}", p))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<24} {:<14} {:<10} {:>10} {:>9} {:>8.2} {:>10} {:>10.2}",
            row.record.database_name,
            row.record.sku_name,
            row.record.service_objective,
            row.record.dtu_used_average,
            row.record.dtu_limit,
            row.utilization_percentage,
            price,
            highlight
        );
    }
    println!();
}
