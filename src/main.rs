use anyhow::{Context, Result};
use apartment_scout::{ImmoscoutScraper, ScrapeListing};
use std::io::Read;
use tracing::{info, Level};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Apartment Scout - listing extractor");

    // Read an already-fetched listing page from a file argument or stdin
    let html = match std::env::args().nth(1) {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read document from stdin")?;
            buffer
        }
    };

    let scraper = ImmoscoutScraper::new()?;
    let listing = scraper.scrape(&html)?;

    info!(
        "✅ Extracted listing from {} bytes of HTML ({} images)",
        html.len(),
        listing.images.len()
    );

    println!("{}", serde_json::to_string_pretty(&listing)?);

    Ok(())
}
