use std::fs::File;
use std::io::{BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::error::Category;
use thiserror::Error;

use crate::accounting::catalogue::{Catalogue, Product};
use crate::accounting::report::{format_amount, label_from_path, Report, SalesTotal};
use crate::accounting::sales::{compute_total, SaleEntry};
use crate::accounting::{PriceLookup, SalesError};
use crate::config::Config;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("invalid JSON file: {}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported value in {}", .path.display())]
    UnsupportedValue {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Sales(#[from] SalesError),
    #[error("failed to write report")]
    Report(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
pub struct ProductRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)] // Missing price counts as zero
    pub price: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct SaleRecord {
    #[serde(rename = "Product", default)]
    pub product: Option<String>,
    #[serde(rename = "Quantity", default)]
    pub quantity: Decimal,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Product {
            title: record.title,
            price: record.price,
        }
    }
}

impl From<SaleRecord> for SaleEntry {
    fn from(record: SaleRecord) -> Self {
        SaleEntry {
            product: record.product,
            quantity: record.quantity,
        }
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => DataError::NotFound(path.to_path_buf()),
        _ => DataError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    })?;

    // Well-formed documents whose values do not fit the records, such as
    // numbers outside `Decimal` range, are not reported as invalid JSON.
    serde_json::from_reader(BufReader::new(file)).map_err(|err| match err.classify() {
        Category::Io => DataError::Io {
            path: path.to_path_buf(),
            source: err.into(),
        },
        Category::Syntax | Category::Eof => DataError::InvalidJson {
            path: path.to_path_buf(),
            source: err,
        },
        Category::Data => DataError::UnsupportedValue {
            path: path.to_path_buf(),
            source: err,
        },
    })
}

/// Catalogue products in document order, untitled entries included.
pub fn load_catalogue(path: &Path) -> Result<Vec<Product>, DataError> {
    let records: Vec<ProductRecord> = load_json(path)?;
    Ok(records.into_iter().map(Product::from).collect())
}

pub fn load_sales(path: &Path) -> Result<Vec<SaleEntry>, DataError> {
    let records: Vec<SaleRecord> = load_json(path)?;
    Ok(records.into_iter().map(SaleEntry::from).collect())
}

/// Loads one sales file and prices it against `catalogue`, timing only the
/// matching step.
pub fn process_sales_file(catalogue: &Catalogue, path: &Path) -> Result<SalesTotal, DataError> {
    let sales = load_sales(path)?;

    let started = Instant::now();
    let computation = compute_total(&sales, catalogue)?;
    let elapsed = started.elapsed();

    if !computation.unmatched.is_empty() {
        debug!(
            "{} sale(s) without catalogue match in {}",
            computation.unmatched.len(),
            path.display()
        );
    }

    Ok(SalesTotal::new(label_from_path(path), computation.total, elapsed))
}

pub fn export_report<W: Write>(report: &Report, writer: W) -> Result<(), DataError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .flexible(true)
        .from_writer(writer);

    for record in report.records() {
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush().map_err(csv::Error::from)?;

    Ok(())
}

/// Replaces the file at `path` with the rendered report.
pub fn write_report(report: &Report, path: &Path) -> Result<(), DataError> {
    let file = File::create(path).map_err(|err| DataError::Io {
        path: path.to_path_buf(),
        source: err,
    })?;

    export_report(report, file)
}

/// Prices every sales file against the catalogue and writes the report.
/// Nothing is written unless every input was processed.
pub fn run(config: &Config) -> Result<Report, DataError> {
    let catalogue = Catalogue::new(load_catalogue(&config.catalogue_path)?);
    info!(
        "loaded {} product(s) from {}, indexed={}",
        catalogue.product_count(),
        config.catalogue_path.display(),
        catalogue.is_indexed()
    );

    let mut report = Report::new();
    for path in &config.sales_paths {
        println!("Processing {}...", path.display());

        let total = process_sales_file(&catalogue, path)?;
        println!("Total sales in {}: {}", total.label(), format_amount(total.total_cost()));
        println!("Elapsed time for {}: {:.4} s", total.label(), total.elapsed().as_secs_f64());

        report.push(total);
    }

    write_report(&report, &config.output_path)?;
    info!("report written to {}", config.output_path.display());

    Ok(report)
}
