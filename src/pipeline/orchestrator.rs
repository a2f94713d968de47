use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info, warn};

use crate::config::ScrapeConfig;
use crate::discovery::CategoryDiscoverer;
use crate::error::PipelineError;
use crate::fetcher::{ListingFetcher, PageFetcher};
use crate::models::{CategoryTarget, IngestionRun, RunSummary};
use crate::parser::CardParser;
use crate::processor::{FieldNormalizer, RecordValidator};
use crate::sink::RecordSink;

/// Drives one complete ingestion run: discover categories, walk their
/// listing pages, normalize and validate the cards, then hand the
/// record collection to every configured sink.
pub struct IngestionPipeline {
    config: ScrapeConfig,
    listing: ListingFetcher,
    discoverer: CategoryDiscoverer,
    parser: CardParser,
    normalizer: FieldNormalizer,
    validator: RecordValidator,
    sinks: Vec<Box<dyn RecordSink>>,
}

impl IngestionPipeline {
    pub fn new(
        config: ScrapeConfig,
        fetcher: Arc<dyn PageFetcher>,
        sinks: Vec<Box<dyn RecordSink>>,
    ) -> Result<Self> {
        let listing = ListingFetcher::new(fetcher, &config.scraping, &config.selectors.product)?;
        let discoverer = CategoryDiscoverer::new(&config.site.base_url);
        let parser = CardParser::new(&config.selectors)?;

        Ok(IngestionPipeline {
            config,
            listing,
            discoverer,
            parser,
            normalizer: FieldNormalizer,
            validator: RecordValidator,
            sinks,
        })
    }

    pub async fn run(&self) -> Result<RunSummary, PipelineError> {
        let mut run = IngestionRun::new();
        info!(
            "🚀 Starting ingestion run {} for {}",
            run.run_id, self.config.site.name
        );

        let targets = self.discover_categories().await?;
        info!(
            "Scraping {} categories, {} pages each",
            targets.len(),
            self.config.scraping.num_pages_per_category
        );

        for target in &targets {
            info!("📂 Scraping category: {}", target.name);
            let mut category_kept = 0;

            for page in 1..=self.config.scraping.num_pages_per_category {
                run.pages_attempted += 1;

                let fragments = match self.listing.fetch_cards(&target.url, page).await {
                    Ok(fragments) => fragments,
                    Err(e) => {
                        error!("Failed page {} of {}: {}", page, target.name, e);
                        run.pages_failed += 1;
                        continue;
                    }
                };

                if fragments.is_empty() {
                    warn!("⚠️ No items found on page {} of {}", page, target.name);
                    run.pages_empty += 1;
                    continue;
                }
                run.cards_seen += fragments.len();

                let mut candidates = Vec::new();
                for fragment in &fragments {
                    match self.parser.parse(fragment, &target.name) {
                        Some(card) => candidates.push(self.normalizer.normalize_card(&card)),
                        None => run.cards_skipped += 1,
                    }
                }

                let parsed = candidates.len();
                let kept = self.validator.apply(candidates);
                run.records_dropped += parsed - kept.len();
                category_kept += kept.len();

                info!(
                    "📄 Page {} of {}: {} cards, {} records kept",
                    page,
                    target.name,
                    fragments.len(),
                    kept.len()
                );
                run.records.extend(kept);
            }

            run.category_counts.push((target.name.clone(), category_kept));
        }

        self.log_summary(&run);

        for sink in &self.sinks {
            info!(
                "💾 Writing {} records to {} sink",
                run.records.len(),
                sink.name()
            );
            if let Err(source) = sink.write(&run.records).await {
                error!("❌ {} sink failed: {}", sink.name(), source);
                return Err(PipelineError::Sink {
                    name: sink.name().to_string(),
                    source,
                });
            }
        }

        Ok(run.summary())
    }

    async fn discover_categories(&self) -> Result<Vec<CategoryTarget>, PipelineError> {
        let url = &self.config.site.catalog_url;
        info!("🔍 Discovering categories from {}", url);

        let html =
            self.listing
                .fetch_page(url)
                .await
                .map_err(|source| PipelineError::IndexUnreachable {
                    url: url.clone(),
                    source,
                })?;

        let targets = self.discoverer.discover(&html);
        if targets.is_empty() {
            return Err(PipelineError::DiscoveryFailed { url: url.clone() });
        }

        let limit = self.config.scraping.category_sample_limit;
        if targets.len() > limit {
            info!("Sampling {} of {} discovered categories", limit, targets.len());
        }
        Ok(self.discoverer.sample(targets, limit))
    }

    fn log_summary(&self, run: &IngestionRun) {
        info!("=== Ingestion Summary ({}) ===", self.config.site.name);
        info!("📊 Categories scraped: {}", run.category_counts.len());
        info!(
            "📊 Pages: {} attempted, {} empty, {} failed",
            run.pages_attempted, run.pages_empty, run.pages_failed
        );
        info!(
            "📊 Cards: {} seen, {} skipped",
            run.cards_seen, run.cards_skipped
        );
        info!(
            "📊 Records: {} kept, {} dropped",
            run.records.len(),
            run.records_dropped
        );
        for (category, count) in &run.category_counts {
            info!("   {} -> {} records", category, count);
        }
    }
}
