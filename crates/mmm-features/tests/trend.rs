//! Tests for the trend transformer.

use chrono::NaiveDate;
use mmm_features::{FeatureError, FeatureTransformer, TrendTransformer};
use mmm_model::Dataset;
use polars::prelude::*;

fn make_dataset(n: usize) -> Dataset {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let dates: Vec<String> = (0..n)
        .map(|i| {
            (start + chrono::Days::new(i as u64))
                .format("%Y-%m-%d")
                .to_string()
        })
        .collect();
    let sales: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let df = df! {
        "date" => dates,
        "target__sales" => sales,
    }
    .unwrap();
    Dataset::from_frame(&df, Some("D".to_string())).expect("valid dataset")
}

fn trend_values(ds: &Dataset, name: &str) -> Vec<f64> {
    let column = ds.data().column(name).unwrap();
    column.f64().unwrap().into_iter().flatten().collect()
}

#[test]
fn normalized_trend_spans_the_unit_interval() {
    let ds = make_dataset(5);

    let mut transformer = TrendTransformer::new().with_normalize(true);
    let (out, report) = transformer.fit_transform(&ds).expect("transform succeeds");

    let values = trend_values(&out, "baseline__trend");
    assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(report.added_features(), vec!["baseline__trend"]);
}

#[test]
fn raw_trend_is_the_row_index() {
    let ds = make_dataset(4);

    let mut transformer = TrendTransformer::new().with_normalize(false);
    let (out, _) = transformer.fit_transform(&ds).expect("transform succeeds");

    assert_eq!(
        trend_values(&out, "baseline__trend"),
        vec![0.0, 1.0, 2.0, 3.0]
    );
}

#[test]
fn single_row_normalized_trend_is_zero() {
    let ds = make_dataset(1);

    let mut transformer = TrendTransformer::new().with_normalize(true);
    let (out, _) = transformer.fit_transform(&ds).expect("transform succeeds");

    assert_eq!(trend_values(&out, "baseline__trend"), vec![0.0]);
}

#[test]
fn custom_column_name_must_follow_the_convention() {
    let transformer = TrendTransformer::new().with_column_name("baseline__trend__log");
    assert!(transformer.is_ok());

    let err = TrendTransformer::new()
        .with_column_name("trend")
        .unwrap_err();
    assert!(matches!(err, FeatureError::InvalidTrendColumnName { .. }));

    let err = TrendTransformer::new().with_column_name("date").unwrap_err();
    assert!(matches!(err, FeatureError::InvalidTrendColumnName { .. }));
}

#[test]
fn existing_trend_column_collides() {
    let ds = make_dataset(3);

    let mut first = TrendTransformer::new();
    let (enriched, _) = first.fit_transform(&ds).expect("first transform");

    let mut second = TrendTransformer::new();
    let err = second.fit_transform(&enriched).unwrap_err();
    match err {
        FeatureError::DuplicateColumn { name } => assert_eq!(name, "baseline__trend"),
        other => panic!("unexpected error: {other}"),
    }
}
