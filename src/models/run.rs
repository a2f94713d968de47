use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::records::ProductRecord;

/// Mutable state accumulated over one ingestion run. Owned by the
/// orchestrator, no state survives across runs.
#[derive(Debug)]
pub struct IngestionRun {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub records: Vec<ProductRecord>,
    pub pages_attempted: usize,
    pub pages_empty: usize,
    pub pages_failed: usize,
    pub cards_seen: usize,
    pub cards_skipped: usize,
    pub records_dropped: usize,
    /// Kept-record count per category, in first-seen order.
    pub category_counts: Vec<(String, usize)>,
}

impl IngestionRun {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            records: Vec::new(),
            pages_attempted: 0,
            pages_empty: 0,
            pages_failed: 0,
            cards_seen: 0,
            cards_skipped: 0,
            records_dropped: 0,
            category_counts: Vec::new(),
        }
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            run_id: self.run_id,
            started_at: self.started_at,
            finished_at: Utc::now(),
            categories_scraped: self.category_counts.len(),
            pages_attempted: self.pages_attempted,
            pages_empty: self.pages_empty,
            pages_failed: self.pages_failed,
            cards_seen: self.cards_seen,
            cards_skipped: self.cards_skipped,
            records_dropped: self.records_dropped,
            records_kept: self.records.len(),
            category_counts: self.category_counts.clone(),
        }
    }
}

impl Default for IngestionRun {
    fn default() -> Self {
        Self::new()
    }
}

/// End-of-run report handed back to the caller and logged.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub categories_scraped: usize,
    pub pages_attempted: usize,
    pub pages_empty: usize,
    pub pages_failed: usize,
    pub cards_seen: usize,
    pub cards_skipped: usize,
    pub records_dropped: usize,
    pub records_kept: usize,
    pub category_counts: Vec<(String, usize)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_reflects_counters() {
        let mut run = IngestionRun::new();
        run.pages_attempted = 4;
        run.pages_empty = 1;
        run.pages_failed = 1;
        run.cards_seen = 12;
        run.cards_skipped = 2;
        run.records_dropped = 3;
        run.category_counts.push(("Tops".to_string(), 7));

        let summary = run.summary();
        assert_eq!(summary.run_id, run.run_id);
        assert_eq!(summary.categories_scraped, 1);
        assert_eq!(summary.pages_attempted, 4);
        assert_eq!(summary.pages_empty, 1);
        assert_eq!(summary.pages_failed, 1);
        assert_eq!(summary.cards_seen, 12);
        assert_eq!(summary.cards_skipped, 2);
        assert_eq!(summary.records_dropped, 3);
        assert_eq!(summary.records_kept, 0);
        assert!(summary.finished_at >= summary.started_at);
    }
}
