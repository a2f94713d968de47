use serde::{Deserialize, Serialize};

/// One product tile exactly as scraped, before any normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCard {
    pub name: Option<String>,
    pub price_text: Option<String>,
    pub rating_text: String,
    pub reviews_text: String,
    pub url: Option<String>,
    pub category: String,
}

/// Price band derived from the normalized price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceTier {
    Budget,
    Standard,
    Premium,
    Unknown,
}

impl PriceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Budget => "Budget",
            PriceTier::Standard => "Standard",
            PriceTier::Premium => "Premium",
            PriceTier::Unknown => "Unknown",
        }
    }
}

/// A normalized product, the durable unit of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub price: Option<f64>,
    pub rating: f64,
    pub reviews: u32,
    pub category: String,
    pub url: Option<String>,
    pub price_tier: PriceTier,
    pub is_popular: bool,
}

/// A category listing discovered on the catalog index page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTarget {
    pub name: String,
    pub url: String,
}
