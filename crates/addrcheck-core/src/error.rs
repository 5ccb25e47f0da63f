use thiserror::Error;

/// Which half of a coordinate pair failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    Latitude,
    Longitude,
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Coordinate::Latitude => write!(f, "latitude"),
            Coordinate::Longitude => write!(f, "longitude"),
        }
    }
}

/// Errors produced while turning raw CRM text into an [`AddressRecord`].
///
/// All variants are recoverable: they describe bad user input, not a fault
/// in the program.
///
/// [`AddressRecord`]: crate::AddressRecord
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The input was empty or only whitespace.
    #[error("no address data provided")]
    EmptyInput,

    /// The input did not contain the expected `Selected address: ...` pattern,
    /// or one of its numbers could not be read.
    #[error("invalid input format; expected '{}'", crate::record::EXPECTED_FORMAT)]
    MalformedInput { raw: String },

    /// A coordinate parsed cleanly but lies outside its valid range.
    #[error("{field} {value} is out of range (allowed {})", field_range(.field))]
    OutOfRange { field: Coordinate, value: f64 },
}

fn field_range(field: &Coordinate) -> &'static str {
    match field {
        Coordinate::Latitude => "-90 to 90",
        Coordinate::Longitude => "-180 to 180",
    }
}

/// Errors returned when a distance cannot be graded.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DistanceError {
    #[error("distance cannot be negative: {0} km")]
    Negative(f64),

    #[error("distance is not a finite number: {0}")]
    NotFinite(f64),
}

/// Errors raised while loading [`AppConfig`](crate::AppConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
