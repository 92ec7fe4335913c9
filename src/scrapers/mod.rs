pub mod document;
pub mod fields;
pub mod immoscout;
pub mod traits;
pub mod types;

pub use document::{Document, ScrapeError};
pub use immoscout::ImmoscoutScraper;
pub use traits::ScrapeListing;
pub use types::ListingSelectors;
