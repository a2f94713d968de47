use anyhow::{Result, anyhow};
use scraper::{ElementRef, Html, Selector};

use crate::config::SelectorConfig;
use crate::models::RawCard;

/// Extracts the raw fields from one product-card fragment.
pub struct CardParser {
    title: Selector,
    price: Selector,
    rating: Selector,
    reviews: Selector,
}

impl CardParser {
    pub fn new(selectors: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            title: parse_selector(&selectors.title)?,
            price: parse_selector(&selectors.price)?,
            rating: parse_selector(&selectors.rating)?,
            reviews: parse_selector(&selectors.reviews)?,
        })
    }

    /// Parse one card fragment. None unless both a name and a price text
    /// were found; missing rating and review elements get the stand-in
    /// defaults the normalizer expects.
    pub fn parse(&self, fragment: &str, category: &str) -> Option<RawCard> {
        let doc = Html::parse_fragment(fragment);
        let root = doc.root_element();

        let title_el = root.select(&self.title).next();
        let name = title_el.map(element_text).filter(|t| !t.is_empty());
        let url = title_el
            .and_then(|el| el.value().attr("href"))
            .map(|href| href.to_string());

        let price_text = root
            .select(&self.price)
            .next()
            .map(element_text)
            .filter(|t| !t.is_empty());

        if name.is_none() || price_text.is_none() {
            return None;
        }

        let rating_text = root
            .select(&self.rating)
            .next()
            .map(element_text)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "0".to_string());

        let reviews_text = root
            .select(&self.reviews)
            .next()
            .map(element_text)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "0 reviews".to_string());

        Some(RawCard {
            name,
            price_text,
            rating_text,
            reviews_text,
            url,
            category: category.to_string(),
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| anyhow!("invalid CSS selector '{}': {}", selector, e))
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ").trim().to_string()
}
