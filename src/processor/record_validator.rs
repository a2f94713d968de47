use crate::models::ProductRecord;

pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Drops records without a usable price and repairs missing names.
pub struct RecordValidator;

impl RecordValidator {
    /// Filter a batch of candidates. Order is preserved, surviving
    /// records always carry a price and a non-blank name.
    pub fn apply(&self, records: Vec<ProductRecord>) -> Vec<ProductRecord> {
        records
            .into_iter()
            .filter(|record| record.price.is_some())
            .map(|mut record| {
                if record.name.trim().is_empty() {
                    record.name = UNKNOWN_PRODUCT.to_string();
                }
                record
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceTier;

    fn record(name: &str, price: Option<f64>) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            price,
            rating: 4.0,
            reviews: 3,
            category: "Tops".to_string(),
            url: None,
            price_tier: PriceTier::Budget,
            is_popular: false,
        }
    }

    #[test]
    fn test_drops_records_without_price() {
        let validator = RecordValidator;
        let kept = validator.apply(vec![
            record("A", Some(5.0)),
            record("B", None),
            record("C", Some(7.0)),
        ]);

        let names: Vec<&str> = kept.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_blank_names_are_repaired_not_dropped() {
        let validator = RecordValidator;
        let kept = validator.apply(vec![record("", Some(5.0)), record("   ", Some(6.0))]);

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].name, UNKNOWN_PRODUCT);
        assert_eq!(kept[1].name, UNKNOWN_PRODUCT);
    }

    #[test]
    fn test_valid_records_pass_through_unchanged() {
        let validator = RecordValidator;
        let original = record("Pocket Drone", Some(39.99));
        let kept = validator.apply(vec![original.clone()]);

        assert_eq!(kept, vec![original]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let validator = RecordValidator;
        assert!(validator.apply(Vec::new()).is_empty());
    }
}
