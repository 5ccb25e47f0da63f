//! Extraction of address and coordinates from CRM export text.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{Coordinate, ParseError};

/// The shape users are told to paste when their input does not parse.
pub const EXPECTED_FORMAT: &str =
    "Selected address: [address], latitude: [lat], longitude: [lng]";

// The address capture is lazy and only ends at the literal ", latitude:" so
// commas inside the address survive.
static SELECTED_ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Selected address: (.*?), latitude: ([-+\d.]+), longitude: ([-+\d.]+)")
        .expect("valid selected-address regex")
});

/// An address together with the coordinates the CRM stored for it.
///
/// Coordinates are decimal degrees and always lie within
/// latitude `[-90, 90]` and longitude `[-180, 180]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressRecord {
    address: String,
    latitude: f64,
    longitude: f64,
}

impl AddressRecord {
    /// Builds a record, trimming the address and validating both coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::OutOfRange`] if either coordinate is outside its
    /// valid range (NaN is always out of range), or
    /// [`ParseError::EmptyInput`] if the address is blank.
    pub fn new(address: &str, latitude: f64, longitude: f64) -> Result<Self, ParseError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ParseError::OutOfRange {
                field: Coordinate::Latitude,
                value: latitude,
            });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ParseError::OutOfRange {
                field: Coordinate::Longitude,
                value: longitude,
            });
        }
        Ok(Self {
            address: address.to_owned(),
            latitude,
            longitude,
        })
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Coordinates rendered as `"lat, lng"` with six decimal places.
    #[must_use]
    pub fn coords_display(&self) -> String {
        format!("{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Parses a raw CRM export line into an [`AddressRecord`].
///
/// The first occurrence of
/// `Selected address: <address>, latitude: <lat>, longitude: <lng>` anywhere
/// in `raw` is used; surrounding text is ignored. Keywords are matched
/// case-sensitively.
///
/// # Errors
///
/// - [`ParseError::EmptyInput`] if `raw` is blank.
/// - [`ParseError::MalformedInput`] if the pattern is absent, the captured
///   address is empty, or a coordinate is not a valid number.
/// - [`ParseError::OutOfRange`] if a coordinate is outside its valid range.
pub fn parse_address_record(raw: &str) -> Result<AddressRecord, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let malformed = || ParseError::MalformedInput {
        raw: raw.to_owned(),
    };

    let caps = SELECTED_ADDRESS_RE.captures(raw).ok_or_else(malformed)?;
    let address = caps[1].trim();
    if address.is_empty() {
        return Err(malformed());
    }
    let latitude = caps[2].parse::<f64>().map_err(|_| malformed())?;
    let longitude = caps[3].parse::<f64>().map_err(|_| malformed())?;

    AddressRecord::new(address, latitude, longitude)
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
