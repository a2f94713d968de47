use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Configuration for one catalog scraping target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    pub site: SiteConfig,
    #[serde(default)]
    pub scraping: ScrapingConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Basic site information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub base_url: String,
    /// Index page that links to the category listings.
    pub catalog_url: String,
}

/// Scraping behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapingConfig {
    pub num_pages_per_category: usize,
    /// Cap on how many discovered categories one run walks.
    pub category_sample_limit: usize,
    /// Min and max seconds to wait before each request.
    pub request_delay_secs: [f64; 2],
    pub fetch_timeout_seconds: u64,
    /// Total attempts per page, the first try included.
    pub max_fetch_retries: usize,
}

/// CSS selectors for extracting card data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    pub product: String,
    pub title: String,
    pub price: String,
    pub rating: String,
    pub reviews: String,
}

/// Destination paths for the run outputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub raw_csv_path: String,
    pub dataset_path: String,
    pub summary_path: String,
}

impl ScrapeConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self, anyhow::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: ScrapeConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.scraping.num_pages_per_category < 1 {
            bail!("num_pages_per_category must be at least 1");
        }
        if self.scraping.category_sample_limit < 1 {
            bail!("category_sample_limit must be at least 1");
        }
        let [min, max] = self.scraping.request_delay_secs;
        if min < 0.0 || max < min {
            bail!("request_delay_secs must be [min, max] with 0 <= min <= max");
        }
        if self.scraping.fetch_timeout_seconds == 0 {
            bail!("fetch_timeout_seconds must be at least 1");
        }
        if self.scraping.max_fetch_retries < 1 {
            bail!("max_fetch_retries must be at least 1");
        }
        Ok(())
    }
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            num_pages_per_category: 2,
            category_sample_limit: 10,
            request_delay_secs: [5.0, 8.0],
            fetch_timeout_seconds: 30,
            max_fetch_retries: 3,
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            product: "div.p-wrap".to_string(),
            title: "a.title".to_string(),
            price: "span.price".to_string(),
            rating: "span.review-text".to_string(),
            reviews: "a.review".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            raw_csv_path: "data/banggood_raw_data.csv".to_string(),
            dataset_path: "data/banggood_products.parquet".to_string(),
            summary_path: "data/run_summary.json".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let scraping = ScrapingConfig::default();
        assert_eq!(scraping.num_pages_per_category, 2);
        assert_eq!(scraping.category_sample_limit, 10);
        assert_eq!(scraping.request_delay_secs, [5.0, 8.0]);
        assert_eq!(scraping.max_fetch_retries, 3);

        let selectors = SelectorConfig::default();
        assert_eq!(selectors.product, "div.p-wrap");
        assert_eq!(selectors.title, "a.title");
    }

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let toml_str = r#"
            [site]
            name = "Banggood"
            base_url = "https://www.banggood.com"
            catalog_url = "https://www.banggood.com/sitemap.html"
        "#;

        let config: ScrapeConfig = toml::from_str(toml_str).unwrap();
        config.validate().unwrap();

        assert_eq!(config.site.name, "Banggood");
        assert_eq!(config.scraping.num_pages_per_category, 2);
        assert_eq!(config.selectors.price, "span.price");
        assert_eq!(config.output.raw_csv_path, "data/banggood_raw_data.csv");
    }

    #[test]
    fn test_full_toml_overrides_defaults() {
        let toml_str = r#"
            [site]
            name = "Test Shop"
            base_url = "https://shop.test"
            catalog_url = "https://shop.test/catalog.html"

            [scraping]
            num_pages_per_category = 5
            category_sample_limit = 3
            request_delay_secs = [0.5, 1.5]
            fetch_timeout_seconds = 10
            max_fetch_retries = 2

            [selectors]
            product = "li.item"
            title = "a.name"
            price = "span.cost"
            rating = "span.stars"
            reviews = "span.count"

            [output]
            raw_csv_path = "out/raw.csv"
            dataset_path = "out/products.parquet"
            summary_path = "out/summary.json"
        "#;

        let config: ScrapeConfig = toml::from_str(toml_str).unwrap();
        config.validate().unwrap();

        assert_eq!(config.scraping.num_pages_per_category, 5);
        assert_eq!(config.scraping.request_delay_secs, [0.5, 1.5]);
        assert_eq!(config.selectors.product, "li.item");
        assert_eq!(config.output.summary_path, "out/summary.json");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config: ScrapeConfig = toml::from_str(
            r#"
            [site]
            name = "Banggood"
            base_url = "https://www.banggood.com"
            catalog_url = "https://www.banggood.com/sitemap.html"
        "#,
        )
        .unwrap();

        config.scraping.num_pages_per_category = 0;
        assert!(config.validate().is_err());

        config.scraping.num_pages_per_category = 2;
        config.scraping.request_delay_secs = [5.0, 2.0];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(
            &path,
            r#"
            [site]
            name = "Banggood"
            base_url = "https://www.banggood.com"
            catalog_url = "https://www.banggood.com/sitemap.html"

            [scraping]
            num_pages_per_category = 4
            category_sample_limit = 10
            request_delay_secs = [5.0, 8.0]
            fetch_timeout_seconds = 30
            max_fetch_retries = 3
        "#,
        )
        .unwrap();

        let config = ScrapeConfig::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.scraping.num_pages_per_category, 4);
        assert_eq!(config.site.base_url, "https://www.banggood.com");
    }
}
