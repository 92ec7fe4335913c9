use serde::{Deserialize, Serialize};

/// CSS selectors locating each listing field
///
/// This table is the adaptation point when the source site's markup
/// changes; extraction logic never hard-codes a selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingSelectors {
    /// Base rent (Kaltmiete) element
    pub rent_base: String,
    /// Total rent (Gesamtmiete) element
    pub rent_total: String,
    /// Floor area element
    pub area: String,
    /// Room count element
    pub rooms: String,
    /// Move-in date element
    pub availability: String,
    /// Gallery slider container
    pub slider: String,
    /// Image elements inside the slider
    pub slider_image: String,
    /// Address container, excluded from the site's data binding
    pub address_block: String,
    /// Postal code and city element inside the address block
    pub zip_city: String,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            rent_base: ".is24qa-kaltmiete".to_string(),
            rent_total: ".is24qa-gesamtmiete".to_string(),
            area: ".is24qa-wohnflaeche-ca".to_string(),
            rooms: ".is24qa-zi".to_string(),
            availability: ".is24qa-bezugsfrei-ab".to_string(),
            slider: "#fullscreenSlider".to_string(),
            slider_image: "img.sp-image".to_string(),
            address_block: ".address-block [data-ng-non-bindable]".to_string(),
            zip_city: ".zip-region-and-country".to_string(),
        }
    }
}
