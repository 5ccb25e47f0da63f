//! Geocoding client and the address comparison pipeline.
//!
//! [`GeocodeClient`] resolves free-text addresses through the external
//! geocoding API. [`compare`] parses a CRM export, geocodes its address
//! through any [`Geocoder`], and reports how far the CRM's coordinates are
//! from the service's.

pub mod client;
pub mod error;
pub mod pipeline;
pub mod types;

pub use client::{GeocodeClient, Geocoder};
pub use error::GeocodeError;
pub use pipeline::{compare, compare_user_supplied, map_target, ComparisonOutcome, Reference};
pub use types::GeocodeResult;
