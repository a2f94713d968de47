use anyhow::{Context, Result};
use config::ScrapeConfig;
use dotenv;
use fetcher::HttpPageFetcher;
use pipeline::IngestionPipeline;
use sink::{CsvSink, ParquetSink, RecordSink};
use tracing::{error, info};
use tracing_subscriber;
use std::env;
use std::path::Path;
use std::sync::Arc;

mod config;
mod discovery;
mod error;
mod fetcher;
mod models;
mod parser;
mod pipeline;
mod processor;
mod sink;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "src/configs/banggood.toml".to_string());

    info!("🚀 Starting catalog ingestion pipeline");

    if !Path::new(&config_path).exists() {
        anyhow::bail!("Config file not found: {}", config_path);
    }

    let config = ScrapeConfig::from_file(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path))?;
    info!(
        "Loaded config for {}: {} pages per category",
        config.site.name, config.scraping.num_pages_per_category
    );

    let fetcher = Arc::new(HttpPageFetcher::new().context("Failed to build HTTP client")?);
    let sinks: Vec<Box<dyn RecordSink>> = vec![
        Box::new(CsvSink::new(&config.output.raw_csv_path)),
        Box::new(ParquetSink::new(&config.output.dataset_path)),
    ];

    let summary_path = config.output.summary_path.clone();
    let pipeline =
        IngestionPipeline::new(config, fetcher, sinks).context("Failed to initialize pipeline")?;

    match pipeline.run().await {
        Ok(summary) => {
            if let Some(parent) = Path::new(&summary_path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let report = serde_json::to_string_pretty(&summary)?;
            std::fs::write(&summary_path, report)
                .with_context(|| format!("Failed to write run summary to {}", summary_path))?;

            info!(
                "🎉 Ingestion completed: {} records across {} categories, summary at {}",
                summary.records_kept, summary.categories_scraped, summary_path
            );
            Ok(())
        }
        Err(e) => {
            error!("❌ Ingestion run failed: {}", e);
            Err(e.into())
        }
    }
}
