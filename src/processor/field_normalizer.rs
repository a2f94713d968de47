use crate::models::{PriceTier, ProductRecord, RawCard};

/// Total conversions from scraped text to typed field values. Every
/// function returns a defined value for every input.
pub struct FieldNormalizer;

impl FieldNormalizer {
    /// Cleans "US$20.99" -> Some(20.99). None for absent or unparsable text.
    pub fn normalize_price(&self, text: Option<&str>) -> Option<f64> {
        let raw = text?;
        let cleaned = raw.replace("US$", "").replace('$', "").replace(',', "");
        let trimmed = cleaned.trim();
        if trimmed.is_empty() {
            return None;
        }

        // "NaN" and "inf" parse as floats; a price must be a finite number
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => None,
        }
    }

    /// Cleans "5 reviews" -> 5. Zero for anything without usable digits.
    pub fn normalize_reviews(&self, text: &str) -> u32 {
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse().unwrap_or(0)
    }

    /// Cleans "4.8" -> 4.8. Zero for anything not a finite number.
    pub fn normalize_rating(&self, text: &str) -> f64 {
        match text.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => 0.0,
        }
    }

    pub fn classify_price_tier(&self, price: Option<f64>) -> PriceTier {
        match price {
            None => PriceTier::Unknown,
            Some(p) if p < 20.0 => PriceTier::Budget,
            Some(p) if p < 50.0 => PriceTier::Standard,
            Some(_) => PriceTier::Premium,
        }
    }

    pub fn compute_popularity(&self, reviews: u32, rating: f64) -> bool {
        reviews > 0 && rating >= 4.5
    }

    /// Normalize one raw card into a record candidate. Deterministic; the
    /// candidate still has to pass the validator before it counts.
    pub fn normalize_card(&self, card: &RawCard) -> ProductRecord {
        let price = self.normalize_price(card.price_text.as_deref());
        let rating = self.normalize_rating(&card.rating_text);
        let reviews = self.normalize_reviews(&card.reviews_text);

        ProductRecord {
            name: card.name.clone().unwrap_or_default(),
            price,
            rating,
            reviews,
            category: card.category.clone(),
            url: card.url.clone(),
            price_tier: self.classify_price_tier(price),
            is_popular: self.compute_popularity(reviews, rating),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(price_text: Option<&str>) -> RawCard {
        RawCard {
            name: Some("Mini Drone".to_string()),
            price_text: price_text.map(|t| t.to_string()),
            rating_text: "4.8".to_string(),
            reviews_text: "12 reviews".to_string(),
            url: Some("/products/mini-drone.html".to_string()),
            category: "Drones".to_string(),
        }
    }

    #[test]
    fn test_price_normalization() {
        let n = FieldNormalizer;

        assert_eq!(n.normalize_price(Some("US$20.99")), Some(20.99));
        assert_eq!(n.normalize_price(Some("US$0.99")), Some(0.99));
        assert_eq!(n.normalize_price(Some("$1,299.00")), Some(1299.0));
        assert_eq!(n.normalize_price(Some("  US$ 5.49 ")), Some(5.49));
        assert_eq!(n.normalize_price(Some("42")), Some(42.0));

        assert_eq!(n.normalize_price(Some("Contact us")), None);
        assert_eq!(n.normalize_price(Some("")), None);
        assert_eq!(n.normalize_price(Some("   ")), None);
        assert_eq!(n.normalize_price(None), None);
    }

    #[test]
    fn test_price_rejects_non_finite_parses() {
        let n = FieldNormalizer;

        assert_eq!(n.normalize_price(Some("NaN")), None);
        assert_eq!(n.normalize_price(Some("inf")), None);
        assert_eq!(n.normalize_price(Some("-inf")), None);
    }

    #[test]
    fn test_reviews_normalization() {
        let n = FieldNormalizer;

        assert_eq!(n.normalize_reviews("5 reviews"), 5);
        assert_eq!(n.normalize_reviews("1,234 reviews"), 1234);
        assert_eq!(n.normalize_reviews("0 reviews"), 0);
        assert_eq!(n.normalize_reviews("reviews"), 0);
        assert_eq!(n.normalize_reviews(""), 0);
        // overflow falls back to zero rather than wrapping
        assert_eq!(n.normalize_reviews("99999999999999999999"), 0);
    }

    #[test]
    fn test_rating_normalization() {
        let n = FieldNormalizer;

        assert_eq!(n.normalize_rating("4.8"), 4.8);
        assert_eq!(n.normalize_rating(" 4.5 "), 4.5);
        assert_eq!(n.normalize_rating("0"), 0.0);
        assert_eq!(n.normalize_rating("N/A"), 0.0);
        assert_eq!(n.normalize_rating("NaN"), 0.0);
        assert_eq!(n.normalize_rating(""), 0.0);
    }

    #[test]
    fn test_price_tier_boundaries() {
        let n = FieldNormalizer;

        assert_eq!(n.classify_price_tier(Some(0.0)), PriceTier::Budget);
        assert_eq!(n.classify_price_tier(Some(19.99)), PriceTier::Budget);
        assert_eq!(n.classify_price_tier(Some(20.0)), PriceTier::Standard);
        assert_eq!(n.classify_price_tier(Some(49.99)), PriceTier::Standard);
        assert_eq!(n.classify_price_tier(Some(50.0)), PriceTier::Premium);
        assert_eq!(n.classify_price_tier(Some(999.0)), PriceTier::Premium);
        assert_eq!(n.classify_price_tier(None), PriceTier::Unknown);
    }

    #[test]
    fn test_popularity_requires_reviews_and_rating() {
        let n = FieldNormalizer;

        assert!(n.compute_popularity(10, 4.5));
        assert!(n.compute_popularity(1, 5.0));
        assert!(!n.compute_popularity(0, 5.0));
        assert!(!n.compute_popularity(10, 4.49));
        assert!(!n.compute_popularity(0, 0.0));
    }

    #[test]
    fn test_normalize_card_fields() {
        let n = FieldNormalizer;

        let record = n.normalize_card(&card(Some("US$20.99")));
        assert_eq!(record.name, "Mini Drone");
        assert_eq!(record.price, Some(20.99));
        assert_eq!(record.rating, 4.8);
        assert_eq!(record.reviews, 12);
        assert_eq!(record.category, "Drones");
        assert_eq!(record.url.as_deref(), Some("/products/mini-drone.html"));
        assert_eq!(record.price_tier, PriceTier::Standard);
        assert!(record.is_popular);
    }

    #[test]
    fn test_normalize_card_missing_price_keeps_candidate() {
        let n = FieldNormalizer;

        let record = n.normalize_card(&card(None));
        assert_eq!(record.price, None);
        assert_eq!(record.price_tier, PriceTier::Unknown);
    }

    #[test]
    fn test_normalize_card_is_idempotent() {
        let n = FieldNormalizer;
        let raw = card(Some("US$20.99"));

        assert_eq!(n.normalize_card(&raw), n.normalize_card(&raw));
    }

    #[test]
    fn test_normalize_card_missing_name_becomes_empty() {
        let n = FieldNormalizer;
        let mut raw = card(Some("US$20.99"));
        raw.name = None;

        assert_eq!(n.normalize_card(&raw).name, "");
    }
}
