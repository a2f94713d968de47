use anyhow::Result;
use catalog_pipeline::config::SelectorConfig;
use catalog_pipeline::parser::CardParser;
use catalog_pipeline::processor::{FieldNormalizer, RecordValidator};

const SAMPLE_CARDS: [&str; 4] = [
    r#"<div class="p-wrap">
        <a class="title" href="/Pocket-Drone-p-12345.html">Pocket Drone 4K</a>
        <span class="price">US$39.99</span>
        <span class="review-text">4.8</span>
        <a class="review">12 reviews</a>
    </div>"#,
    r#"<div class="p-wrap">
        <a class="title" href="/USB-Hub-p-67890.html">7 Port USB Hub</a>
        <span class="price">US$8.50</span>
    </div>"#,
    r#"<div class="p-wrap">
        <a class="title" href="/Solar-Lamp-p-11111.html">Solar Garden Lamp</a>
        <span class="price">Contact us</span>
    </div>"#,
    r#"<div class="p-wrap">
        <span class="price">US$4.99</span>
    </div>"#,
];

fn main() -> Result<()> {
    println!("=== CARD PARSING DEBUG ===\n");

    let parser = CardParser::new(&SelectorConfig::default())?;
    let normalizer = FieldNormalizer;
    let validator = RecordValidator;

    let mut candidates = Vec::new();
    for (i, fragment) in SAMPLE_CARDS.iter().enumerate() {
        println!("🔍 Card {}:", i + 1);
        match parser.parse(fragment, "Gadgets") {
            Some(card) => {
                println!("   name:    {:?}", card.name);
                println!("   price:   {:?}", card.price_text);
                println!("   rating:  {:?}", card.rating_text);
                println!("   reviews: {:?}", card.reviews_text);

                let record = normalizer.normalize_card(&card);
                println!(
                    "   ✅ normalized: price={:?} rating={} reviews={} tier={:?} popular={}",
                    record.price, record.rating, record.reviews, record.price_tier, record.is_popular
                );
                candidates.push(record);
            }
            None => println!("   ❌ skipped, no usable title or price"),
        }
        println!();
    }

    let kept = validator.apply(candidates);
    println!("=== VALIDATED RECORDS ({}) ===", kept.len());
    for record in &kept {
        println!(
            "✅ {} | {:?} | {} | {:?}",
            record.name, record.price, record.category, record.price_tier
        );
    }

    Ok(())
}
