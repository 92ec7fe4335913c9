use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::RoomCount;

// The token may carry one non-digit separator, so prices grouped with a
// second style (e.g. thin spaces) still match after the dots are stripped.
static PRICE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+\D?\d*)\s*€").unwrap());
static AREA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*m²").unwrap());
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\D+(\d{1,2})\.(\d{1,2})\.(\d{2})\s*$").unwrap());
static ZIP_CITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{5}) (\S+)").unwrap());

/// Parse a localized rent value like "1.234,56 €" or "850 €"
///
/// Dots are thousands separators, the comma is the decimal mark. Returns
/// `None` when no currency-suffixed numeric token is present.
pub fn parse_price(text: &str) -> Option<f64> {
    let sanitized = text.replace('.', "").replace(',', ".");
    let token = PRICE_RE.captures(&sanitized)?.get(1)?.as_str();
    match token.parse::<f64>() {
        Ok(value) => Some(value),
        // token still carries a grouping character; read the leading number
        Err(_) => token
            .split(|c: char| !c.is_ascii_digit() && c != '.')
            .next()?
            .parse()
            .ok(),
    }
}

/// Parse a floor area like "65.5 m²"
///
/// Expects the decimal comma already normalized to a point by the caller.
pub fn parse_area(text: &str) -> Option<f64> {
    AREA_RE.captures(text)?.get(1)?.as_str().parse().ok()
}

/// Parse the leading integer of the room field
pub fn parse_rooms(text: &str) -> RoomCount {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    match digits.parse::<u32>() {
        Ok(rooms) => RoomCount::Rooms(rooms),
        Err(_) => RoomCount::Unparseable,
    }
}

/// Availability state derived from the move-in field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    pub available_from: Option<NaiveDate>,
    pub is_available: bool,
}

impl Availability {
    fn unknown() -> Self {
        Self {
            available_from: None,
            is_available: false,
        }
    }
}

/// Interpret the availability text of a listing
///
/// A trailing `d.m.yy` date wins over everything else; the year is expanded
/// with a "20" prefix. Listings may instead embed "sofort" somewhere in the
/// text, so that check is containment, not equality. `now` is supplied by
/// the caller so one document sees a single evaluation instant.
pub fn parse_available_from(text: &str, now: DateTime<Utc>) -> Availability {
    if text.is_empty() {
        return Availability::unknown();
    }
    if let Some(caps) = DATE_RE.captures(text) {
        let day: u32 = caps[1].parse().unwrap_or(0);
        let month: u32 = caps[2].parse().unwrap_or(0);
        let year: i32 = 2000 + caps[3].parse::<i32>().unwrap_or(0);
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Availability {
                available_from: Some(date),
                is_available: date.and_time(NaiveTime::MIN).and_utc() < now,
            };
        }
    } else if text.contains("sofort") {
        return Availability {
            available_from: None,
            is_available: true,
        };
    }
    Availability::unknown()
}

/// Split "12345 Musterstadt, Deutschland" into postal code and city
///
/// All-or-nothing: a text that does not match yields neither value.
pub fn parse_zip_and_city(text: &str) -> Option<(String, String)> {
    let before_comma = text.split(',').next().unwrap_or("");
    let caps = ZIP_CITY_RE.captures(before_comma)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn price_with_thousands_and_decimal() {
        assert_eq!(parse_price("1.234,56 €"), Some(1234.56));
    }

    #[test]
    fn price_plain() {
        assert_eq!(parse_price("850 €"), Some(850.0));
        assert_eq!(parse_price("850€"), Some(850.0));
    }

    #[test]
    fn price_without_currency_is_absent() {
        assert_eq!(parse_price("Preis auf Anfrage"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("850"), None);
    }

    #[test]
    fn price_with_second_grouping_style() {
        // a stray grouping character inside the token reads as its prefix
        assert_eq!(parse_price("1 234 €"), Some(1.0));
    }

    #[test]
    fn area_decimal() {
        assert_eq!(parse_area("65.5 m²"), Some(65.5));
    }

    #[test]
    fn area_integer() {
        assert_eq!(parse_area("80 m²"), Some(80.0));
    }

    #[test]
    fn area_without_unit_is_absent() {
        assert_eq!(parse_area("65.5"), None);
        assert_eq!(parse_area("ca. groß"), None);
    }

    #[test]
    fn rooms_numeric() {
        assert_eq!(parse_rooms("3"), RoomCount::Rooms(3));
        assert_eq!(parse_rooms(" 2 Zimmer"), RoomCount::Rooms(2));
    }

    #[test]
    fn rooms_non_numeric_is_unparseable() {
        assert_eq!(parse_rooms("Studio"), RoomCount::Unparseable);
        assert_eq!(parse_rooms(""), RoomCount::Unparseable);
    }

    #[test]
    fn availability_with_future_date() {
        let result = parse_available_from("Bezugsfrei ab 01.03.24", at(2024, 1, 15));
        assert_eq!(
            result.available_from,
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert!(!result.is_available);
    }

    #[test]
    fn availability_with_past_date() {
        let result = parse_available_from("Bezugsfrei ab 01.03.24", at(2024, 6, 1));
        assert_eq!(
            result.available_from,
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert!(result.is_available);
    }

    #[test]
    fn availability_same_day_counts_as_available() {
        // midnight of the listed day is already behind any later instant
        let result = parse_available_from("ab 1.3.24", at(2024, 3, 1));
        assert!(result.is_available);
    }

    #[test]
    fn availability_sofort() {
        let result = parse_available_from("Ab sofort", at(2024, 1, 1));
        assert_eq!(result.available_from, None);
        assert!(result.is_available);
    }

    #[test]
    fn availability_sofort_embedded_in_longer_text() {
        let result = parse_available_from("frei ab sofort verfügbar", at(2024, 1, 1));
        assert!(result.is_available);
    }

    #[test]
    fn availability_empty_text() {
        let result = parse_available_from("", at(2024, 1, 1));
        assert_eq!(result.available_from, None);
        assert!(!result.is_available);
    }

    #[test]
    fn availability_unrecognized_text() {
        let result = parse_available_from("nach Vereinbarung", at(2024, 1, 1));
        assert_eq!(result.available_from, None);
        assert!(!result.is_available);
    }

    #[test]
    fn availability_invalid_calendar_date() {
        let result = parse_available_from("ab 31.02.24", at(2024, 6, 1));
        assert_eq!(result.available_from, None);
        assert!(!result.is_available);
    }

    #[test]
    fn zip_and_city() {
        assert_eq!(
            parse_zip_and_city("12345 Musterstadt, Deutschland"),
            Some(("12345".to_string(), "Musterstadt".to_string()))
        );
    }

    #[test]
    fn zip_and_city_never_partial() {
        assert_eq!(parse_zip_and_city("Musterstadt"), None);
        assert_eq!(parse_zip_and_city("1234 Kurz"), None);
        assert_eq!(parse_zip_and_city(""), None);
    }
}
