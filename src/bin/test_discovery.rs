use catalog_pipeline::discovery::CategoryDiscoverer;

const SAMPLE_SITEMAP: &str = r#"<html><body>
    <a href="/Wholesale-Tops-ca-15002.html">Tops</a>
    <a href="/Wholesale-Dresses-ca-16042.html">Dresses</a>
    <a href="/Wholesale-Dresses-ca-16042.html">Dresses duplicate</a>
    <a href="/Wholesale-RC-Drones-c-7423.html">RC Drones</a>
    <a href="/Wholesale-Two-Piece-Set-ca-16057.html">Two Piece Set</a>
    <a href="/flash-deals.html">Flash Deals</a>
    <a href="/about.html">About</a>
</body></html>"#;

fn main() {
    println!("=== CATEGORY DISCOVERY TEST ===\n");

    let discoverer = CategoryDiscoverer::new("https://www.banggood.com");

    let targets = discoverer.discover(SAMPLE_SITEMAP);
    println!("Discovered {} categories:", targets.len());
    for target in &targets {
        println!("   📂 {} -> {}", target.name, target.url);
    }

    let sampled = discoverer.sample(targets, 2);
    println!("\nSampled {} for this run:", sampled.len());
    for target in &sampled {
        println!("   ✅ {}", target.name);
    }
}
