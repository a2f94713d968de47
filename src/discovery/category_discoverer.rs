use std::collections::HashSet;

use rand::seq::SliceRandom;
use scraper::{Html, Selector};
use tracing::info;

use crate::models::CategoryTarget;

/// Finds category listing URLs on the catalog index page.
pub struct CategoryDiscoverer {
    base_url: String,
}

impl CategoryDiscoverer {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Extract category targets from the index HTML. A link qualifies when
    /// its href carries the wholesale prefix, ends in ".html" and its URL
    /// contains a category marker segment. Deduplicated by exact URL,
    /// first seen wins.
    pub fn discover(&self, html: &str) -> Vec<CategoryTarget> {
        let document = Html::parse_document(html);
        let mut seen = HashSet::new();
        let mut targets = Vec::new();

        let Ok(anchor) = Selector::parse("a") else {
            return targets;
        };

        for element in document.select(&anchor) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            if !href.contains("Wholesale-") || !href.ends_with(".html") {
                continue;
            }

            let url = self.absolutize(href);
            if !url.contains("-c-") && !url.contains("-ca-") {
                continue;
            }

            if seen.insert(url.clone()) {
                targets.push(CategoryTarget {
                    name: category_name_from_url(&url),
                    url,
                });
            }
        }

        info!("Discovered {} category links", targets.len());
        targets
    }

    /// Uniform sample without replacement when more targets were found
    /// than the configured limit.
    pub fn sample(&self, targets: Vec<CategoryTarget>, limit: usize) -> Vec<CategoryTarget> {
        if targets.len() <= limit {
            return targets;
        }
        let mut rng = rand::thread_rng();
        targets.choose_multiple(&mut rng, limit).cloned().collect()
    }

    fn absolutize(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            href.to_string()
        } else if href.starts_with('/') {
            format!("{}{}", self.base_url, href)
        } else {
            format!("{}/{}", self.base_url, href)
        }
    }
}

/// Readable category name from a listing URL, e.g.
/// ".../Wholesale-Two-Piece-Set-ca-16057.html" -> "Two Piece Set".
pub fn category_name_from_url(url: &str) -> String {
    match url.split_once("Wholesale-") {
        Some((_, rest)) => {
            let stem = rest.split("-ca-").next().unwrap_or(rest);
            stem.replace('-', " ")
        }
        None => "Unknown Category".to_string(),
    }
}
