//! URL builders for the external map service.
//!
//! Query shapes here must match what the map provider accepts for iframe
//! embeds and shareable search links.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

const MAP_EMBED_BASE: &str = "https://maps.google.com/maps";
const PUBLIC_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1";
const PUBLIC_COORDS_BASE: &str = "https://www.google.com/maps";
const EMBED_ZOOM: u8 = 15;

/// Characters left unescaped in a query value; everything else is
/// percent-encoded and spaces become `+`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Trims an address and collapses embedded line breaks to spaces.
#[must_use]
pub fn clean_address(address: &str) -> String {
    address.trim().replace(['\n', '\r'], " ")
}

fn encode_query_value(value: &str) -> String {
    // A literal '%' is escaped to "%25", so "%20" can only come from a space.
    utf8_percent_encode(value, QUERY_VALUE)
        .to_string()
        .replace("%20", "+")
}

/// Embeddable map centred on a coordinate pair.
#[must_use]
pub fn embed_url_from_coords(lat: f64, lng: f64) -> String {
    format!("{MAP_EMBED_BASE}?q={lat},{lng}&z={EMBED_ZOOM}&output=embed")
}

/// Embeddable map centred on whatever the provider resolves `address` to.
#[must_use]
pub fn embed_url_from_address(address: &str) -> String {
    let encoded = encode_query_value(&clean_address(address));
    format!("{MAP_EMBED_BASE}?q={encoded}&z={EMBED_ZOOM}&output=embed")
}

/// Shareable search link for an address.
#[must_use]
pub fn public_map_link(address: &str) -> String {
    let encoded = encode_query_value(&clean_address(address));
    format!("{PUBLIC_SEARCH_BASE}&query={encoded}")
}

/// Shareable link pinned to a coordinate pair.
#[must_use]
pub fn public_map_link_from_coords(lat: f64, lng: f64) -> String {
    format!("{PUBLIC_COORDS_BASE}?q={lat},{lng}")
}

/// What one map panel should display: a label plus its embed and share URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapTarget {
    pub label: String,
    pub embed_url: String,
    pub public_link: String,
}

impl MapTarget {
    #[must_use]
    pub fn for_address(address: &str) -> Self {
        Self {
            label: clean_address(address),
            embed_url: embed_url_from_address(address),
            public_link: public_map_link(address),
        }
    }

    #[must_use]
    pub fn for_coords(lat: f64, lng: f64) -> Self {
        Self {
            label: format!("{lat:.6}, {lng:.6}"),
            embed_url: embed_url_from_coords(lat, lng),
            public_link: public_map_link_from_coords(lat, lng),
        }
    }
}
