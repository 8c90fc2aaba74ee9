//! Tests for the Fourier seasonality transformer.

use chrono::NaiveDate;
use mmm_features::{FeatureError, FeatureTransformer, SeasonalityTransformer};
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

#[test]
fn fourier_columns_are_created_in_harmonic_order() {
    let ds = make_dataset(10);

    let mut transformer = SeasonalityTransformer::new(7, 2).expect("valid config");
    let (out, report) = transformer.fit_transform(&ds).expect("transform succeeds");

    let expected = vec![
        "baseline__seasonality__fourier__p7__k1__sin",
        "baseline__seasonality__fourier__p7__k1__cos",
        "baseline__seasonality__fourier__p7__k2__sin",
        "baseline__seasonality__fourier__p7__k2__cos",
    ];
    for name in &expected {
        assert!(out.data().column(name).is_ok(), "missing column {name}");
    }
    assert_eq!(report.added_features(), expected);
}

#[test]
fn values_follow_the_row_index_angle() {
    let ds = make_dataset(8);

    let mut transformer = SeasonalityTransformer::new(7, 1).expect("valid config");
    let (out, _) = transformer.fit_transform(&ds).expect("transform succeeds");

    let sin = out
        .data()
        .column("baseline__seasonality__fourier__p7__k1__sin")
        .unwrap();
    let sin = sin.f64().unwrap();
    let cos = out
        .data()
        .column("baseline__seasonality__fourier__p7__k1__cos")
        .unwrap();
    let cos = cos.f64().unwrap();

    for t in 0..8usize {
        let angle = 2.0 * std::f64::consts::PI * (t as f64) / 7.0;
        assert!((sin.get(t).unwrap() - angle.sin()).abs() < 1e-12);
        assert!((cos.get(t).unwrap() - angle.cos()).abs() < 1e-12);
    }
}

#[test]
fn all_values_are_finite() {
    let ds = make_dataset(15);

    let mut transformer = SeasonalityTransformer::new(7, 3).expect("valid config");
    let (out, report) = transformer.fit_transform(&ds).expect("transform succeeds");

    assert_eq!(report.added_features().len(), 6);
    for name in report.added_features() {
        let column = out.data().column(&name).unwrap();
        let values = column.f64().unwrap();
        assert!(values.into_iter().flatten().all(f64::is_finite));
    }
}

#[test]
fn rerunning_on_own_output_collides() {
    let ds = make_dataset(8);

    let mut first = SeasonalityTransformer::new(7, 1).expect("valid config");
    let (enriched, _) = first.fit_transform(&ds).expect("first transform");

    let mut second = SeasonalityTransformer::new(7, 1).expect("valid config");
    let err = second.fit_transform(&enriched).unwrap_err();
    assert!(matches!(err, FeatureError::DuplicateColumn { .. }));
}

#[test]
fn invalid_period_and_order_are_rejected() {
    assert!(matches!(
        SeasonalityTransformer::new(1, 1).unwrap_err(),
        FeatureError::InvalidPeriod { period: 1 }
    ));
    assert!(matches!(
        SeasonalityTransformer::new(7, 0).unwrap_err(),
        FeatureError::InvalidOrder { order: 0 }
    ));
}
