use std::fs::File;
use std::path::PathBuf;

use async_trait::async_trait;
use polars::prelude::*;
use tracing::info;

use crate::error::SinkError;
use crate::models::ProductRecord;
use crate::sink::record_sink::{RecordSink, ensure_parent_dir};

/// Analytics dataset sink. Replaces the destination file on every run,
/// the warehouse-table equivalent of a full reload.
pub struct ParquetSink {
    path: PathBuf,
}

impl ParquetSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ParquetSink { path: path.into() }
    }
}

pub fn records_to_dataframe(records: &[ProductRecord]) -> PolarsResult<DataFrame> {
    let mut names = Vec::with_capacity(records.len());
    let mut prices: Vec<Option<f64>> = Vec::with_capacity(records.len());
    let mut ratings = Vec::with_capacity(records.len());
    let mut reviews = Vec::with_capacity(records.len());
    let mut categories = Vec::with_capacity(records.len());
    let mut urls: Vec<Option<String>> = Vec::with_capacity(records.len());
    let mut tiers: Vec<&str> = Vec::with_capacity(records.len());
    let mut popular = Vec::with_capacity(records.len());

    for record in records {
        names.push(record.name.clone());
        prices.push(record.price);
        ratings.push(record.rating);
        reviews.push(record.reviews);
        categories.push(record.category.clone());
        urls.push(record.url.clone());
        tiers.push(record.price_tier.as_str());
        popular.push(record.is_popular);
    }

    DataFrame::new(vec![
        Series::new("name".into(), names).into(),
        Series::new("price".into(), prices).into(),
        Series::new("rating".into(), ratings).into(),
        Series::new("reviews".into(), reviews).into(),
        Series::new("category".into(), categories).into(),
        Series::new("url".into(), urls).into(),
        Series::new("price_category".into(), tiers).into(),
        Series::new("is_popular".into(), popular).into(),
    ])
}

#[async_trait]
impl RecordSink for ParquetSink {
    fn name(&self) -> &str {
        "parquet"
    }

    async fn write(&self, records: &[ProductRecord]) -> Result<(), SinkError> {
        ensure_parent_dir(&self.path)?;
        let path = self.path.display().to_string();

        let mut df = records_to_dataframe(records).map_err(|source| SinkError::DataFrame {
            path: path.clone(),
            source,
        })?;

        let file = File::create(&self.path).map_err(|source| SinkError::Io {
            path: path.clone(),
            source,
        })?;
        ParquetWriter::new(file)
            .finish(&mut df)
            .map_err(|source| SinkError::DataFrame {
                path: path.clone(),
                source,
            })?;

        // Read the row count back as a load check
        let file = File::open(&self.path).map_err(|source| SinkError::Io {
            path: path.clone(),
            source,
        })?;
        let written = ParquetReader::new(file)
            .finish()
            .map_err(|source| SinkError::DataFrame {
                path: path.clone(),
                source,
            })?;

        info!("💾 Loaded {} rows into {}", written.height(), path);
        Ok(())
    }
}
