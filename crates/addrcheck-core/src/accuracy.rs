//! Grading how closely two coordinate sources agree.

use serde::Serialize;

use crate::error::DistanceError;

/// Discrete agreement grade between stored and geocoded coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccuracyTier {
    /// Under 10 m apart.
    Excellent,
    /// 10 m up to (not including) 100 m.
    Good,
    /// 100 m up to (not including) 1 km.
    Fair,
    /// 1 km or more.
    Poor,
}

/// How a presentation layer should colour a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl AccuracyTier {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AccuracyTier::Excellent => "Excellent",
            AccuracyTier::Good => "Good",
            AccuracyTier::Fair => "Fair",
            AccuracyTier::Poor => "Poor",
        }
    }

    #[must_use]
    pub fn threshold_description(self) -> &'static str {
        match self {
            AccuracyTier::Excellent => "< 10 m",
            AccuracyTier::Good => "< 100 m",
            AccuracyTier::Fair => "< 1 km",
            AccuracyTier::Poor => "≥ 1 km",
        }
    }

    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            AccuracyTier::Excellent | AccuracyTier::Good => Severity::Success,
            AccuracyTier::Fair => Severity::Warning,
            AccuracyTier::Poor => Severity::Error,
        }
    }
}

impl std::fmt::Display for AccuracyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a distance in kilometres to its [`AccuracyTier`].
///
/// Each upper bound is exclusive: `0.01` is already [`AccuracyTier::Good`].
///
/// # Errors
///
/// Returns [`DistanceError::NotFinite`] for NaN or infinite input and
/// [`DistanceError::Negative`] for distances below zero.
pub fn classify(distance_km: f64) -> Result<AccuracyTier, DistanceError> {
    if !distance_km.is_finite() {
        return Err(DistanceError::NotFinite(distance_km));
    }
    if distance_km < 0.0 {
        return Err(DistanceError::Negative(distance_km));
    }

    let tier = if distance_km < 0.01 {
        AccuracyTier::Excellent
    } else if distance_km < 0.1 {
        AccuracyTier::Good
    } else if distance_km < 1.0 {
        AccuracyTier::Fair
    } else {
        AccuracyTier::Poor
    };
    Ok(tier)
}
