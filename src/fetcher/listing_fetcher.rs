use std::sync::Arc;

use anyhow::{Result, anyhow};
use rand::Rng;
use scraper::{Html, Selector};
use tokio::time::{Duration, sleep, timeout};
use tracing::warn;

use crate::config::ScrapingConfig;
use crate::error::FetchError;
use crate::fetcher::PageFetcher;

/// Paginated listing retrieval: paces requests, retries failures with
/// backoff and slices each page into product card fragments.
pub struct ListingFetcher {
    fetcher: Arc<dyn PageFetcher>,
    product_selector: Selector,
    delay_range_secs: [f64; 2],
    timeout_seconds: u64,
    max_retries: usize,
}

impl ListingFetcher {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        config: &ScrapingConfig,
        product_selector: &str,
    ) -> Result<Self> {
        let product_selector = Selector::parse(product_selector)
            .map_err(|e| anyhow!("invalid CSS selector '{}': {}", product_selector, e))?;

        Ok(ListingFetcher {
            fetcher,
            product_selector,
            delay_range_secs: config.request_delay_secs,
            timeout_seconds: config.fetch_timeout_seconds,
            max_retries: config.max_fetch_retries,
        })
    }

    /// Fetch one page of a category listing and return the outer HTML of
    /// every product card on it. An empty list is a valid outcome, it
    /// means the page rendered but holds no cards.
    pub async fn fetch_cards(&self, category_url: &str, page: usize) -> Result<Vec<String>, FetchError> {
        let url = page_url(category_url, page);
        let html = self.fetch_with_retry(&url).await?;
        Ok(self.extract_fragments(&html))
    }

    /// Fetch a single URL with the same pacing, timeout and retry policy
    /// as listing pages.
    pub async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        self.fetch_with_retry(url).await
    }

    async fn fetch_with_retry(&self, url: &str) -> Result<String, FetchError> {
        let mut attempts = 0;
        loop {
            match self.fetch_once(url).await {
                Ok(html) => return Ok(html),
                Err(e) => {
                    attempts += 1;
                    if attempts >= self.max_retries {
                        return Err(e);
                    }
                    // Exponential backoff with jitter
                    let delay = Duration::from_millis(
                        1000 * 2_u64.pow(attempts as u32) + rand::random::<u64>() % 1000,
                    );
                    warn!(
                        "Attempt {} failed for {}, retrying in {:?}: {}",
                        attempts, url, delay, e
                    );
                    sleep(delay).await;
                }
            }
        }
    }

    async fn fetch_once(&self, url: &str) -> Result<String, FetchError> {
        self.pacing_delay().await;
        match timeout(
            Duration::from_secs(self.timeout_seconds),
            self.fetcher.fetch(url),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                url: url.to_string(),
                seconds: self.timeout_seconds,
            }),
        }
    }

    // Random wait before each request to mimic human pacing
    async fn pacing_delay(&self) {
        let [min, max] = self.delay_range_secs;
        let secs = if max > min {
            rand::thread_rng().gen_range(min..=max)
        } else {
            min
        };
        if secs > 0.0 {
            sleep(Duration::from_secs_f64(secs)).await;
        }
    }

    fn extract_fragments(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        document
            .select(&self.product_selector)
            .map(|element| element.html())
            .collect()
    }
}

/// Build the URL for a given page of a category listing, reusing an
/// existing query string when the category URL already carries one.
pub fn page_url(category_url: &str, page: usize) -> String {
    let separator = if category_url.contains('?') { '&' } else { '?' };
    format!("{}{}page={}", category_url, separator, page)
}
