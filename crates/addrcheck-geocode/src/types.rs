use serde::{Deserialize, Serialize};

/// A successful geocoding lookup: the provider's canonical address and the
/// coordinates it assigns to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub latitude: f64,
    pub longitude: f64,
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

/// Top-level response envelope from the geocoding endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<WireResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireResult {
    pub formatted_address: String,
    pub geometry: WireGeometry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireGeometry {
    pub location: WireLatLng,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireLatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<WireResult> for GeocodeResult {
    fn from(wire: WireResult) -> Self {
        Self {
            formatted_address: wire.formatted_address,
            latitude: wire.geometry.location.lat,
            longitude: wire.geometry.location.lng,
        }
    }
}
