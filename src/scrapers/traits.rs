use crate::models::ApartmentListing;
use crate::scrapers::document::ScrapeError;

/// Common trait for all listing scrapers
/// This allows easy addition of new sources (Immowelt, Kleinanzeigen, etc) in the future
pub trait ScrapeListing {
    /// Extract one listing record from an already-fetched document
    fn scrape(&self, html: &str) -> Result<ApartmentListing, ScrapeError>;

    /// Get the name of the scraper source
    fn source_name(&self) -> &'static str;
}
