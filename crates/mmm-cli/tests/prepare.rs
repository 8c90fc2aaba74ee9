//! End-to-end tests for the prepare flow.

use std::fs;
use std::path::{Path, PathBuf};

use mmm_cli::prepare::{PrepareOptions, run_prepare};
use polars::prelude::*;
use serde_json::Value;

fn write_input(dir: &Path) -> PathBuf {
    let path = dir.join("input.csv");
    fs::write(
        &path,
        "Date,Sales,TV Spend\n\
         2023-01-02,120.0,10.0\n\
         2023-01-01,100.0,0.0\n\
         2023-01-03,130.0,5.0\n",
    )
    .expect("write input csv");
    path
}

fn write_config(dir: &Path) -> PathBuf {
    let path = dir.join("prep.json");
    fs::write(
        &path,
        r#"{
            "freq": "D",
            "mapping": {
                "columns": {
                    "Date": "date",
                    "Sales": "target__sales",
                    "TV Spend": "media__tv"
                }
            },
            "features": [
                { "type": "events", "dates": ["2023-01-02"] },
                { "type": "trend", "normalize": false }
            ]
        }"#,
    )
    .expect("write config");
    path
}

fn column_values(df: &DataFrame, name: &str) -> Vec<f64> {
    let column = df.column(name).unwrap();
    let column = column.cast(&DataType::Float64).unwrap();
    column.f64().unwrap().into_iter().flatten().collect()
}

#[test]
fn prepare_writes_data_and_reports() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(dir.path());
    let config = write_config(dir.path());
    let output_dir = dir.path().join("out");

    let result = run_prepare(&PrepareOptions {
        input,
        config: Some(config),
        output_dir: Some(output_dir.clone()),
        dry_run: false,
    })
    .expect("prepare succeeds");

    assert_eq!(result.rows, 3);
    // date, target, media, event, trend
    assert_eq!(result.columns, 5);
    assert_eq!(result.written.len(), 3);

    let prepared = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(output_dir.join("prepared.csv")))
        .expect("open prepared.csv")
        .finish()
        .expect("read prepared.csv");

    let names: Vec<String> = prepared
        .get_column_names_owned()
        .into_iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "date",
            "target__sales",
            "media__tv",
            "event__event",
            "baseline__trend",
        ]
    );

    // Rows come out date-sorted even though the input was shuffled.
    let dates = prepared.column("date").unwrap();
    let dates = dates.str().unwrap();
    assert_eq!(dates.get(0), Some("2023-01-01"));
    assert_eq!(dates.get(2), Some("2023-01-03"));
    assert_eq!(
        column_values(&prepared, "event__event"),
        vec![0.0, 1.0, 0.0]
    );
    assert_eq!(
        column_values(&prepared, "baseline__trend"),
        vec![0.0, 1.0, 2.0]
    );

    let mapping: Value = serde_json::from_str(
        &fs::read_to_string(output_dir.join("mapping_report.json")).expect("read mapping report"),
    )
    .expect("parse mapping report");
    assert_eq!(mapping["applied_mapping"]["Sales"], "target__sales");

    let features: Value = serde_json::from_str(
        &fs::read_to_string(output_dir.join("feature_report.json")).expect("read feature report"),
    )
    .expect("parse feature report");
    assert_eq!(features["steps"].as_array().map(Vec::len), Some(2));
    assert_eq!(features["steps"][1]["added_features"][0], "baseline__trend");
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(dir.path());
    let config = write_config(dir.path());
    let output_dir = dir.path().join("out");

    let result = run_prepare(&PrepareOptions {
        input,
        config: Some(config),
        output_dir: Some(output_dir.clone()),
        dry_run: true,
    })
    .expect("prepare succeeds");

    assert!(result.dry_run);
    assert!(result.written.is_empty());
    assert!(!output_dir.exists());
    // The in-memory result is still fully computed.
    assert_eq!(result.rows, 3);
    assert_eq!(result.feature_report.steps.len(), 2);
}

#[test]
fn missing_config_defaults_to_identity_preparation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("input.csv");
    fs::write(
        &input,
        "date,target__sales\n2023-01-01,100.0\n2023-01-02,120.0\n",
    )
    .expect("write input csv");

    let result = run_prepare(&PrepareOptions {
        input: input.clone(),
        config: None,
        output_dir: None,
        dry_run: true,
    })
    .expect("prepare succeeds");

    assert_eq!(result.rows, 2);
    assert_eq!(result.columns, 2);
    assert!(result.feature_report.steps.is_empty());
    // Default output dir sits next to the input.
    assert_eq!(result.output_dir, dir.path().join("prepared"));
}

#[test]
fn contract_violations_fail_the_run() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("input.csv");
    // No date column at all.
    fs::write(&input, "target__sales\n100.0\n120.0\n").expect("write input csv");

    let error = run_prepare(&PrepareOptions {
        input,
        config: None,
        output_dir: None,
        dry_run: true,
    })
    .unwrap_err();
    assert!(error.to_string().contains("validate dataset contract"));
}
