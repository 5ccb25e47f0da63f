//! Great-circle distance between coordinate pairs.

/// Mean Earth radius used for every distance in this crate.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two points given in decimal
/// degrees.
///
/// The result is never negative and is exactly `0.0` for identical points.
/// Callers are responsible for passing finite coordinates.
#[must_use]
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);

    // Rounding can push `a` a hair past 1 for antipodal points.
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

/// Renders a distance for humans: millimetres below 1 m, metres below 1 km,
/// otherwise kilometres with two decimals.
#[must_use]
pub fn format_distance(km: f64) -> String {
    if km < 0.001 {
        format!("{:.1} mm", km * 1_000_000.0)
    } else if km < 1.0 {
        format!("{:.1} m", km * 1_000.0)
    } else {
        format!("{km:.2} km")
    }
}
