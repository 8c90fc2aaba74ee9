//! The prepare flow: read CSV, map columns, validate, derive features,
//! write the prepared data and provenance reports.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::{CsvReadOptions, CsvWriter, DataFrame, SerReader, SerWriter};
use serde::Serialize;
use tracing::{info, info_span};

use mmm_features::FeatureReport;
use mmm_map::MappingReport;
use mmm_model::Dataset;

use crate::config::PrepareConfig;

/// Inputs of one prepare run.
pub struct PrepareOptions {
    /// Path to the input CSV file.
    pub input: PathBuf,
    /// Optional JSON config path; defaults apply when absent.
    pub config: Option<PathBuf>,
    /// Output directory; defaults to `<input dir>/prepared`.
    pub output_dir: Option<PathBuf>,
    /// Validate and report without writing output files.
    pub dry_run: bool,
}

/// Outcome of a prepare run.
#[derive(Debug)]
pub struct PrepareResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Rows in the prepared dataset.
    pub rows: usize,
    /// Columns in the prepared dataset.
    pub columns: usize,
    pub mapping_report: MappingReport,
    pub feature_report: FeatureReport,
    /// Files written, empty on a dry run.
    pub written: Vec<PathBuf>,
    pub dry_run: bool,
}

pub fn run_prepare(options: &PrepareOptions) -> Result<PrepareResult> {
    let span = info_span!("prepare", input = %options.input.display());
    let _guard = span.enter();

    let config = match &options.config {
        Some(path) => PrepareConfig::from_path(path)?,
        None => PrepareConfig::default(),
    };
    let output_dir = options
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&options.input));

    let read_start = Instant::now();
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(options.input.clone()))
        .with_context(|| format!("open {}", options.input.display()))?
        .finish()
        .with_context(|| format!("read {}", options.input.display()))?;
    info!(
        rows = df.height(),
        columns = df.width(),
        duration_ms = read_start.elapsed().as_millis(),
        "loaded input"
    );

    let (mapped, mapping_report) = config
        .build_mapper()
        .apply(&df)
        .context("apply column mapping")?;

    let dataset =
        Dataset::from_frame(&mapped, config.freq.clone()).context("validate dataset contract")?;
    info!(rows = dataset.n_rows(), "dataset contract satisfied");

    let mut pipeline = config.build_pipeline()?;
    let pipeline_start = Instant::now();
    let (prepared, feature_report) = pipeline.run(&dataset).context("run feature pipeline")?;
    info!(
        steps = feature_report.steps.len(),
        added = feature_report.added_features().len(),
        duration_ms = pipeline_start.elapsed().as_millis(),
        "feature pipeline complete"
    );

    let mut written = Vec::new();
    if !options.dry_run {
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("create output dir {}", output_dir.display()))?;
        written.push(write_csv(prepared.data(), &output_dir.join("prepared.csv"))?);
        written.push(write_json(
            &mapping_report,
            &output_dir.join("mapping_report.json"),
        )?);
        written.push(write_json(
            &feature_report,
            &output_dir.join("feature_report.json"),
        )?);
    }

    Ok(PrepareResult {
        input: options.input.clone(),
        output_dir,
        rows: prepared.n_rows(),
        columns: prepared.data().width(),
        mapping_report,
        feature_report,
        written,
        dry_run: options.dry_run,
    })
}

fn default_output_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) => parent.join("prepared"),
        None => PathBuf::from("prepared"),
    }
}

fn write_csv(df: &DataFrame, path: &Path) -> Result<PathBuf> {
    let mut out = df.clone();
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(&mut out)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(path.to_path_buf())
}

fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<PathBuf> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(file, value)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(path.to_path_buf())
}
