pub mod models;
pub mod scrapers;

pub use models::{ApartmentListing, RoomCount};
pub use scrapers::{ImmoscoutScraper, ListingSelectors, ScrapeError, ScrapeListing};
