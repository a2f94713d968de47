use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use crate::error::SinkError;
use crate::models::ProductRecord;
use crate::sink::record_sink::{RecordSink, ensure_parent_dir};

pub const CSV_COLUMNS: [&str; 6] = ["name", "price", "rating", "reviews", "category", "url"];

/// Raw archive sink. Keeps the scraped fields in a flat CSV so a run can
/// always be inspected or replayed without touching the site again.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvSink { path: path.into() }
    }
}

#[async_trait]
impl RecordSink for CsvSink {
    fn name(&self) -> &str {
        "csv"
    }

    async fn write(&self, records: &[ProductRecord]) -> Result<(), SinkError> {
        ensure_parent_dir(&self.path)?;
        let path = self.path.display().to_string();

        let mut writer = csv::Writer::from_path(&self.path).map_err(|source| SinkError::Csv {
            path: path.clone(),
            source,
        })?;

        writer
            .write_record(CSV_COLUMNS)
            .map_err(|source| SinkError::Csv {
                path: path.clone(),
                source,
            })?;

        for record in records {
            let row = [
                record.name.clone(),
                record.price.map(|p| p.to_string()).unwrap_or_default(),
                record.rating.to_string(),
                record.reviews.to_string(),
                record.category.clone(),
                record.url.clone().unwrap_or_default(),
            ];
            writer.write_record(&row).map_err(|source| SinkError::Csv {
                path: path.clone(),
                source,
            })?;
        }

        writer.flush().map_err(|source| SinkError::Io {
            path: path.clone(),
            source,
        })?;

        info!("💾 Wrote {} rows to {}", records.len(), path);
        Ok(())
    }
}
