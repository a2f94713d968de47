use catalog_pipeline::processor::FieldNormalizer;

fn main() {
    println!("=== FIELD NORMALIZER TEST ===\n");

    let normalizer = FieldNormalizer;

    let prices = ["US$20.99", "US$1,299.00", "  US$ 5.49 ", "Contact us", ""];
    println!("Prices:");
    for raw in prices {
        println!("   {:?} -> {:?}", raw, normalizer.normalize_price(Some(raw)));
    }

    let reviews = ["5 reviews", "1,234 reviews", "0 reviews", "no reviews yet"];
    println!("\nReview counts:");
    for raw in reviews {
        println!("   {:?} -> {}", raw, normalizer.normalize_reviews(raw));
    }

    let ratings = ["4.8", "0", "not rated"];
    println!("\nRatings:");
    for raw in ratings {
        println!("   {:?} -> {}", raw, normalizer.normalize_rating(raw));
    }

    println!("\nPrice tiers:");
    for price in [Some(9.99), Some(20.0), Some(49.99), Some(50.0), None] {
        println!("   {:?} -> {:?}", price, normalizer.classify_price_tier(price));
    }
}
