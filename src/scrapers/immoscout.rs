use crate::models::ApartmentListing;
use crate::scrapers::document::{self, Document, ScrapeError};
use crate::scrapers::fields;
use crate::scrapers::traits::ScrapeListing;
use crate::scrapers::types::ListingSelectors;
use chrono::Utc;
use scraper::Selector;
use tracing::{debug, warn};

/// ImmobilienScout24 listing scraper
///
/// Compiles the selector table once at construction; `scrape` is then a
/// pure function of the input document. Every field is independently
/// optional, so a site revision that breaks one selector leaves the rest
/// of the record intact.
pub struct ImmoscoutScraper {
    selectors: CompiledSelectors,
}

/// Selector table compiled for repeated use
struct CompiledSelectors {
    rent_base: Selector,
    rent_total: Selector,
    area: Selector,
    rooms: Selector,
    availability: Selector,
    slider: Selector,
    slider_image: Selector,
    address_block: Selector,
    zip_city: Selector,
}

impl ImmoscoutScraper {
    /// Create a scraper with the default selector table
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_selectors(ListingSelectors::default())
    }

    /// Create a scraper with a custom selector table
    pub fn with_selectors(selectors: ListingSelectors) -> Result<Self, ScrapeError> {
        Ok(Self {
            selectors: CompiledSelectors {
                rent_base: document::compile(&selectors.rent_base)?,
                rent_total: document::compile(&selectors.rent_total)?,
                area: document::compile(&selectors.area)?,
                rooms: document::compile(&selectors.rooms)?,
                availability: document::compile(&selectors.availability)?,
                slider: document::compile(&selectors.slider)?,
                slider_image: document::compile(&selectors.slider_image)?,
                address_block: document::compile(&selectors.address_block)?,
                zip_city: document::compile(&selectors.zip_city)?,
            },
        })
    }

    /// Gallery image sources, in document order
    ///
    /// No deduplication and no URL validation; an image missing the
    /// attribute stays in the sequence as `None`.
    fn scrape_images(&self, doc: &Document) -> Vec<Option<String>> {
        let Some(slider) = doc.select_first(&self.selectors.slider) else {
            return Vec::new();
        };
        slider
            .select(&self.selectors.slider_image)
            .map(|img| img.value().attr("data-src").map(str::to_string))
            .collect()
    }

    /// Street address, postal code and city from the address block
    ///
    /// Only the first block on the page counts; duplicate address widgets
    /// exist on some revisions.
    fn scrape_address(&self, doc: &Document, listing: &mut ApartmentListing) {
        let Some(block) = doc.select_first(&self.selectors.address_block) else {
            return;
        };
        if document::normalized_text(&block).is_empty() {
            return;
        }

        // Structure of the block varies across site revisions; only the
        // two-child layout carries a street address worth trusting.
        let children: Vec<_> = document::child_elements(&block).collect();
        if children.len() == 2 {
            let street = document::normalized_text(&children[0]);
            let street = street.split(',').next().unwrap_or("").trim();
            listing.address = Some(street.to_string());
        } else {
            warn!(
                "Address block has {} children, skipping street address",
                children.len()
            );
        }

        if let Some(zip_el) = block.select(&self.selectors.zip_city).next() {
            let text = document::normalized_text(&zip_el);
            if let Some((zip, city)) = fields::parse_zip_and_city(&text) {
                listing.postal_code = Some(zip);
                listing.city = Some(city);
            }
        }
    }
}

impl ScrapeListing for ImmoscoutScraper {
    fn scrape(&self, html: &str) -> Result<ApartmentListing, ScrapeError> {
        let doc = Document::parse(html)?;

        // One clock read per document so every availability check within
        // this call compares against the same instant.
        let now = Utc::now();

        let mut listing = ApartmentListing::default();

        listing.rent_base = doc
            .text_of(&self.selectors.rent_base)
            .and_then(|t| fields::parse_price(&t));
        listing.rent_total = doc
            .text_of(&self.selectors.rent_total)
            .and_then(|t| fields::parse_price(&t));
        listing.area = doc
            .text_of(&self.selectors.area)
            .and_then(|t| fields::parse_area(&t.replace(',', ".")));
        listing.rooms = doc
            .text_of(&self.selectors.rooms)
            .filter(|t| !t.is_empty())
            .map(|t| fields::parse_rooms(&t));

        listing.images = self.scrape_images(&doc);

        let availability = fields::parse_available_from(
            doc.text_of(&self.selectors.availability)
                .unwrap_or_default()
                .as_str(),
            now,
        );
        listing.available_from = availability.available_from;
        listing.is_available = availability.is_available;

        self.scrape_address(&doc, &mut listing);

        debug!(
            "Extracted listing: rent {:?}/{:?}, {:?} m², {} images",
            listing.rent_base,
            listing.rent_total,
            listing.area,
            listing.images.len()
        );

        Ok(listing)
    }

    fn source_name(&self) -> &'static str {
        "ImmobilienScout24"
    }
}
