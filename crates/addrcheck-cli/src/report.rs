//! Text and JSON renderings of pipeline results.

use addrcheck_core::{format_distance, AccuracyTier, AddressRecord, MapTarget, Severity};
use addrcheck_geocode::{ComparisonOutcome, GeocodeResult, Reference};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct ParseReport<'a> {
    pub record: &'a AddressRecord,
    pub input_map: MapTarget,
}

impl<'a> ParseReport<'a> {
    pub(crate) fn new(record: &'a AddressRecord) -> Self {
        Self {
            record,
            input_map: MapTarget::for_coords(record.latitude(), record.longitude()),
        }
    }

    pub(crate) fn render_text(&self) -> String {
        format!(
            "Address:     {}\nCoordinates: {}\nMap:         {}",
            self.record.address(),
            self.record.coords_display(),
            self.input_map.public_link,
        )
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GeocodeFailure {
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ReferenceSource {
    Geocoded,
    UserSupplied,
    Unavailable,
}

#[derive(Debug, Serialize)]
pub(crate) struct ComparisonReport<'a> {
    pub input: &'a AddressRecord,
    pub checked_at: DateTime<Utc>,
    pub reference_source: ReferenceSource,
    pub geocode: Option<&'a GeocodeResult>,
    pub geocode_error: Option<GeocodeFailure>,
    pub distance_km: Option<f64>,
    pub distance: Option<String>,
    pub accuracy: Option<AccuracyTier>,
    pub severity: Option<Severity>,
    pub input_map: MapTarget,
    pub reference_map: MapTarget,
}

impl<'a> ComparisonReport<'a> {
    pub(crate) fn new(outcome: &'a ComparisonOutcome, reference_map: MapTarget) -> Self {
        let reference_source = match outcome.reference {
            Reference::Geocoded(_) => ReferenceSource::Geocoded,
            Reference::UserSupplied { .. } => ReferenceSource::UserSupplied,
            Reference::Unavailable(_) => ReferenceSource::Unavailable,
        };
        let distance_km = outcome.distance_km();
        let accuracy = outcome.accuracy();

        Self {
            input: &outcome.input,
            checked_at: outcome.checked_at,
            reference_source,
            geocode: outcome.geocode_result(),
            geocode_error: outcome.geocode_error().map(|e| GeocodeFailure {
                kind: e.kind(),
                message: e.to_string(),
            }),
            distance_km,
            distance: distance_km.map(format_distance),
            accuracy,
            severity: accuracy.map(AccuracyTier::severity),
            input_map: outcome.input_map(),
            reference_map,
        }
    }

    pub(crate) fn render_text(&self) -> String {
        let mut lines = vec![
            format!("Input address:        {}", self.input.address()),
            format!("Input coordinates:    {}", self.input.coords_display()),
        ];

        if let Some(geo) = self.geocode {
            lines.push(format!("Geocoded address:     {}", geo.formatted_address));
            lines.push(format!(
                "Geocoded coordinates: {:.6}, {:.6}",
                geo.latitude, geo.longitude
            ));
        }
        if let Some(failure) = &self.geocode_error {
            lines.push(format!("Geocoding unavailable: {}", failure.message));
        }
        if let (Some(distance), Some(tier)) = (&self.distance, self.accuracy) {
            lines.push(format!(
                "Distance difference:  {distance} | Accuracy: {tier} ({})",
                tier.threshold_description()
            ));
        }

        lines.push(String::new());
        push_map(&mut lines, "Map 1 (input coordinates", &self.input_map);
        // Without a reference there is nothing to put beside the input map.
        if !matches!(self.reference_source, ReferenceSource::Unavailable) {
            push_map(&mut lines, "Map 2 (address", &self.reference_map);
        }
        lines.push(format!(
            "Checked at {}",
            self.checked_at.format("%Y-%m-%d %H:%M:%S")
        ));
        lines.join("\n")
    }
}

fn push_map(lines: &mut Vec<String>, heading: &str, target: &MapTarget) {
    lines.push(format!("{heading} {})", target.label));
    lines.push(format!("  embed: {}", target.embed_url));
    lines.push(format!("  link:  {}", target.public_link));
}

#[derive(Debug, Serialize)]
pub(crate) struct DistanceReport {
    pub distance_km: f64,
    pub distance: String,
    pub accuracy: AccuracyTier,
    pub threshold: &'static str,
}

impl DistanceReport {
    pub(crate) fn render_text(&self) -> String {
        format!(
            "Distance: {} | Accuracy: {} ({})",
            self.distance, self.accuracy, self.threshold
        )
    }
}
