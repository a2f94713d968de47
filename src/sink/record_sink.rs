use std::path::Path;

use async_trait::async_trait;

use crate::error::SinkError;
use crate::models::ProductRecord;

/// Destination for the finished record collection.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Short name used in logs and error reports.
    fn name(&self) -> &str;

    /// Write the full collection, replacing any previous contents.
    async fn write(&self, records: &[ProductRecord]) -> Result<(), SinkError>;
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), SinkError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| SinkError::Io {
                path: path.display().to_string(),
                source,
            })?;
        }
    }
    Ok(())
}
