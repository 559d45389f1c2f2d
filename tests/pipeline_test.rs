use dtu_insight::aggregate::summarize;
use dtu_insight::enrich::enrich;
use dtu_insight::filter::filter_by_prefix;
use dtu_insight::loader;
use dtu_insight::pricing::BuiltinCatalogs;
use dtu_insight::view::Dashboard;
use std::fs;

const METRICS_CSV: &str = "\
DatabaseName,databaseSkuName,CurrentServiceObjectiveName,DTU Used Average,DTU Limit,Percentage CPU,sql_instance_memory_percent
billing,Standard_S1,S1,50,100,41.2,70.1
analytics,GP_Gen5_2,GP_Gen5_2,20,40,63.0,55.9
sessions,Standard_S0,S0,10,50,12.7,30.4
";

#[test]
fn test_end_to_end_standard_family() {
    let records = loader::load_from_reader(METRICS_CSV.as_bytes()).unwrap();
    assert_eq!(records.len(), 3);

    let enriched = enrich(records, &BuiltinCatalogs);
    let standard = filter_by_prefix(&enriched, "Standard");

    assert_eq!(standard.len(), 2);
    assert_eq!(standard[0].utilization_percentage, 50.0);
    assert_eq!(standard[1].utilization_percentage, 20.0);

    let summary = summarize(&standard);
    assert_eq!(summary.record_count, 2);
    assert_eq!(summary.mean_utilization_percentage, 35.0);

    // S1 (0.0404/h) + S0 (0.0202/h), both monthly over a 31-day month
    let expected_total = (0.0404 + 0.0202) * 24.0 * 31.0;
    assert!((summary.total_price - expected_total).abs() < 1e-9);
}

#[test]
fn test_rerun_is_deterministic() {
    let load_and_build = || {
        let records = loader::load_from_reader(METRICS_CSV.as_bytes()).unwrap();
        Dashboard::build(records)
    };
    let first = load_and_build();
    let second = load_and_build();

    let first_summary = &first.dtu_consumption.summary;
    let second_summary = &second.dtu_consumption.summary;
    assert_eq!(
        first_summary.mean_utilization_percentage.to_bits(),
        second_summary.mean_utilization_percentage.to_bits()
    );
    assert_eq!(
        first_summary.total_price.to_bits(),
        second_summary.total_price.to_bits()
    );
    assert_eq!(first_summary.record_count, second_summary.record_count);
    assert_eq!(first.sku_overview.counts, second.sku_overview.counts);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_dashboard_from_csv_file() {
    let dir = std::env::temp_dir().join("dtu_insight_pipeline_test");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("metrics.csv");
    fs::write(&path, METRICS_CSV).unwrap();

    let dashboard = Dashboard::from_csv(&path).unwrap();
    assert_eq!(dashboard.dtu_consumption.summary.record_count, 2);
    assert_eq!(dashboard.vcore_consumption.record_count, 1);
    assert_eq!(dashboard.vcore_consumption.mean_cpu_percentage, 63.0);
    assert_eq!(dashboard.sku_overview.counts.len(), 3);

    fs::remove_file(&path).ok();
}

#[test]
fn test_from_csv_missing_file_is_fatal() {
    let err = Dashboard::from_csv("/definitely/not/here.csv").unwrap_err();
    assert!(err.to_string().contains("Data source error"));
}

#[test]
fn test_zero_limit_survives_the_whole_pipeline() {
    let csv = "\
DatabaseName,databaseSkuName,CurrentServiceObjectiveName,DTU Used Average,DTU Limit,Percentage CPU
stalled,Standard_S0,S0,5,0,2.0
healthy,Standard_S1,S1,50,100,40.0
";
    let records = loader::load_from_reader(csv.as_bytes()).unwrap();
    let dashboard = Dashboard::build(records);

    let rows = &dashboard.dtu_consumption.table.rows;
    assert_eq!(rows.len(), 2);
    assert!(rows[0].utilization_percentage.is_nan());
    assert_eq!(rows[1].utilization_percentage, 50.0);
    // the undefined value poisons the mean instead of hiding as zero
    assert!(dashboard
        .dtu_consumption
        .summary
        .mean_utilization_percentage
        .is_nan());
}
