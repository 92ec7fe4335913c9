use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Room count parsed from the listing text
///
/// Kept as a tagged value so callers can tell "field missing" (the listing
/// carries `None`) apart from "text present but not a number".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoomCount {
    /// Leading integer of the room field
    Rooms(u32),
    /// Text did not start with an integer (e.g. "Studio")
    Unparseable,
}

/// Core apartment listing data model
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApartmentListing {
    /// Base rent without charges (Kaltmiete)
    pub rent_base: Option<f64>,
    /// Total rent including charges (Gesamtmiete)
    pub rent_total: Option<f64>,
    /// Floor area in square meters
    pub area: Option<f64>,
    pub rooms: Option<RoomCount>,
    /// Gallery image sources in document order; an image without the
    /// data attribute contributes a `None` entry
    pub images: Vec<Option<String>>,
    /// Move-in date, if the listing names one
    pub available_from: Option<NaiveDate>,
    /// True if available now or from a past date
    pub is_available: bool,
    /// Street-level address fragment
    pub address: Option<String>,
    /// 5-digit postal code
    pub postal_code: Option<String>,
    /// City name following the postal code
    pub city: Option<String>,
}
