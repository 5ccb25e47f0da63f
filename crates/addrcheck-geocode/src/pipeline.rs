//! Comparison pipeline: parse, geocode, measure, grade.

use addrcheck_core::{
    classify, haversine_distance_km, parse_address_record, AccuracyTier, AddressRecord, MapTarget,
    ParseError,
};
use chrono::{DateTime, Utc};

use crate::client::Geocoder;
use crate::error::GeocodeError;
use crate::types::GeocodeResult;

/// Where the comparison's second location came from.
#[derive(Debug)]
pub enum Reference {
    /// The geocoding service resolved the parsed address.
    Geocoded(GeocodeResult),
    /// The user typed an address for visual comparison only. There are no
    /// service coordinates, so no distance or accuracy is derived.
    UserSupplied { address: String },
    /// Geocoding was attempted and failed; the parsed input is still valid.
    Unavailable(GeocodeError),
}

/// Result of one pipeline run.
///
/// Distance and accuracy are computed on demand from `input` and
/// `reference` and are never stored.
#[derive(Debug)]
pub struct ComparisonOutcome {
    pub input: AddressRecord,
    pub reference: Reference,
    pub checked_at: DateTime<Utc>,
}

impl ComparisonOutcome {
    #[must_use]
    pub fn geocode_result(&self) -> Option<&GeocodeResult> {
        match &self.reference {
            Reference::Geocoded(result) => Some(result),
            Reference::UserSupplied { .. } | Reference::Unavailable(_) => None,
        }
    }

    #[must_use]
    pub fn geocode_error(&self) -> Option<&GeocodeError> {
        match &self.reference {
            Reference::Unavailable(err) => Some(err),
            Reference::Geocoded(_) | Reference::UserSupplied { .. } => None,
        }
    }

    /// Great-circle distance between the input and geocoded coordinates.
    #[must_use]
    pub fn distance_km(&self) -> Option<f64> {
        self.geocode_result().map(|geo| {
            haversine_distance_km(
                self.input.latitude(),
                self.input.longitude(),
                geo.latitude,
                geo.longitude,
            )
        })
    }

    #[must_use]
    pub fn accuracy(&self) -> Option<AccuracyTier> {
        self.distance_km().and_then(|km| classify(km).ok())
    }

    /// Map panel for the CRM's stored coordinates.
    #[must_use]
    pub fn input_map(&self) -> MapTarget {
        MapTarget::for_coords(self.input.latitude(), self.input.longitude())
    }

    /// Map panel for the reference side: the user's address when one was
    /// supplied, otherwise the parsed address.
    #[must_use]
    pub fn reference_map(&self) -> MapTarget {
        match &self.reference {
            Reference::UserSupplied { address } => {
                map_target(&self.input, Some(address.as_str()))
            }
            Reference::Geocoded(_) | Reference::Unavailable(_) => map_target(&self.input, None),
        }
    }
}

/// Parses `raw`, geocodes the extracted address, and grades the distance
/// between the two coordinate pairs.
///
/// A geocoding failure does not fail the comparison: the outcome carries
/// [`Reference::Unavailable`] and no distance.
///
/// # Errors
///
/// Returns the [`ParseError`] if `raw` cannot be parsed; no lookup is made
/// in that case.
pub async fn compare<G: Geocoder>(
    geocoder: &G,
    raw: &str,
) -> Result<ComparisonOutcome, ParseError> {
    let input = parse_address_record(raw)?;

    let reference = match geocoder.geocode(input.address()).await {
        Ok(result) => Reference::Geocoded(result),
        Err(err) => Reference::Unavailable(err),
    };

    let outcome = ComparisonOutcome {
        input,
        reference,
        checked_at: Utc::now(),
    };

    match (outcome.distance_km(), outcome.accuracy()) {
        (Some(distance_km), Some(tier)) => tracing::info!(
            address = outcome.input.address(),
            distance_km,
            tier = %tier,
            "comparison complete"
        ),
        _ => tracing::info!(
            address = outcome.input.address(),
            "comparison complete without geocoded reference"
        ),
    }

    Ok(outcome)
}

/// Parses `raw` and pairs it with a hand-edited address instead of a
/// geocoding lookup.
///
/// A blank `edited_address` falls back to the parsed address.
///
/// # Errors
///
/// Returns the [`ParseError`] if `raw` cannot be parsed.
pub fn compare_user_supplied(
    raw: &str,
    edited_address: &str,
) -> Result<ComparisonOutcome, ParseError> {
    let input = parse_address_record(raw)?;
    let address = resolve_display_address(&input, Some(edited_address)).to_owned();

    Ok(ComparisonOutcome {
        input,
        reference: Reference::UserSupplied { address },
        checked_at: Utc::now(),
    })
}

/// Map panel for an address the user may have edited, without touching
/// distance or accuracy.
///
/// Uses `edited` when it has non-whitespace content, otherwise the record's
/// own address.
#[must_use]
pub fn map_target(record: &AddressRecord, edited: Option<&str>) -> MapTarget {
    MapTarget::for_address(resolve_display_address(record, edited))
}

fn resolve_display_address<'a>(record: &'a AddressRecord, edited: Option<&'a str>) -> &'a str {
    match edited {
        Some(address) if !address.trim().is_empty() => address,
        _ => record.address(),
    }
}
