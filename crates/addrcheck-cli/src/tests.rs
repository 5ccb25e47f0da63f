use addrcheck_core::{parse_address_record, AccuracyTier, MapTarget};
use addrcheck_geocode::{ComparisonOutcome, GeocodeError, GeocodeResult, Reference};
use chrono::{TimeZone, Utc};

use super::*;
use crate::report::{ComparisonReport, ParseReport};

const RAW: &str =
    "Selected address: 123 Main St, New York, NY, latitude: 40.7128, longitude: -74.0060";

fn outcome(reference: Reference) -> ComparisonOutcome {
    ComparisonOutcome {
        input: parse_address_record(RAW).expect("fixture should parse"),
        reference,
        checked_at: Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap(),
    }
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["addrcheck"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_parse_command() {
    let cli = Cli::try_parse_from(["addrcheck", "parse", RAW]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Parse { ref raw, json: false }) if raw == RAW
    ));
}

#[test]
fn parses_compare_with_edit_and_offline() {
    let cli = Cli::try_parse_from([
        "addrcheck",
        "compare",
        "-",
        "--edited",
        "1 Broadway",
        "--offline",
        "--json",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Compare {
            ref raw,
            edited: Some(ref edited),
            offline: true,
            json: true,
        }) if raw == "-" && edited == "1 Broadway"
    ));
}

#[test]
fn compare_defaults_to_online_text_output() {
    let cli = Cli::try_parse_from(["addrcheck", "compare", RAW]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Compare {
            edited: None,
            offline: false,
            json: false,
            ..
        })
    ));
}

#[test]
fn distance_accepts_negative_coordinates() {
    let cli = Cli::try_parse_from([
        "addrcheck", "distance", "40.7128", "-74.006", "-33.8688", "151.2093",
    ])
    .expect("expected valid cli args");
    match cli.command {
        Some(Commands::Distance {
            lat1, lon1, lat2, ..
        }) => {
            assert!((lat1 - 40.7128).abs() < f64::EPSILON);
            assert!((lon1 - -74.006).abs() < f64::EPSILON);
            assert!((lat2 - -33.8688).abs() < f64::EPSILON);
        }
        other => panic!("expected distance command, got {other:?}"),
    }
}

#[test]
fn distance_rejects_non_numeric_argument() {
    let result = Cli::try_parse_from(["addrcheck", "distance", "north", "0", "0", "0"]);
    assert!(result.is_err());
}

#[test]
fn read_raw_passes_literal_through() {
    assert_eq!(read_raw(RAW).unwrap(), RAW);
}

#[test]
fn parse_report_text_lists_address_and_coordinates() {
    let record = parse_address_record(RAW).unwrap();
    let text = ParseReport::new(&record).render_text();
    assert!(text.contains("Address:     123 Main St, New York, NY"));
    assert!(text.contains("Coordinates: 40.712800, -74.006000"));
    assert!(text.contains("https://www.google.com/maps?q=40.7128,-74.006"));
}

#[test]
fn geocoded_report_shows_distance_and_both_maps() {
    let outcome = outcome(Reference::Geocoded(GeocodeResult {
        formatted_address: "123 Main St, New York, NY 10001, USA".to_owned(),
        latitude: 40.7138,
        longitude: -74.006,
    }));
    let report = ComparisonReport::new(&outcome, map_target(&outcome.input, None));

    assert_eq!(report.accuracy, Some(AccuracyTier::Fair));
    let text = report.render_text();
    assert!(text.contains("Geocoded coordinates: 40.713800, -74.006000"), "{text}");
    assert!(text.contains("Distance difference:  111.2 m | Accuracy: Fair (< 1 km)"), "{text}");
    assert!(text.contains("Map 2 (address 123 Main St, New York, NY)"), "{text}");
    assert!(text.ends_with("Checked at 2026-10-18 09:30:00"), "{text}");
}

#[test]
fn unavailable_report_shows_specific_error_and_single_map() {
    let outcome = outcome(Reference::Unavailable(GeocodeError::QuotaExceeded));
    let report = ComparisonReport::new(&outcome, map_target(&outcome.input, None));

    assert!(report.distance.is_none());
    let text = report.render_text();
    assert!(text.contains("Geocoding unavailable: geocoding quota exceeded; try again later"));
    assert!(text.contains("Map 1 (input coordinates"));
    assert!(!text.contains("Map 2"));
}

#[test]
fn user_supplied_report_serializes_without_distance() {
    let outcome = outcome(Reference::UserSupplied {
        address: "1 Broadway, New York".to_owned(),
    });
    let report = ComparisonReport::new(&outcome, outcome.reference_map());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["reference_source"], "user_supplied");
    assert!(json["distance_km"].is_null());
    assert!(json["accuracy"].is_null());
    assert_eq!(json["reference_map"]["label"], "1 Broadway, New York");
    assert_eq!(json["input"]["address"], "123 Main St, New York, NY");
}

#[test]
fn failure_kind_is_serialized_for_machine_consumers() {
    let outcome = outcome(Reference::Unavailable(GeocodeError::MissingCredential));
    let report = ComparisonReport::new(&outcome, MapTarget::for_address("x"));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["geocode_error"]["kind"], "missing_credential");
}
