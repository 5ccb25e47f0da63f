//! Domain core for `addrcheck`.
//!
//! Parses CRM address exports into [`AddressRecord`]s, measures how far two
//! coordinate pairs are apart, grades that distance into an [`AccuracyTier`],
//! and builds the map URLs the presentation layer embeds. Nothing in this
//! crate performs I/O beyond reading configuration from the environment.

pub mod accuracy;
pub mod app_config;
pub mod config;
pub mod distance;
pub mod error;
pub mod maps;
pub mod record;

pub use accuracy::{classify, AccuracyTier, Severity};
pub use app_config::{
    usable_api_key, AppConfig, Environment, DEFAULT_GEOCODE_URL, PLACEHOLDER_API_KEY,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use distance::{format_distance, haversine_distance_km, EARTH_RADIUS_KM};
pub use error::{ConfigError, Coordinate, DistanceError, ParseError};
pub use maps::{
    clean_address, embed_url_from_address, embed_url_from_coords, public_map_link,
    public_map_link_from_coords, MapTarget,
};
pub use record::{parse_address_record, AddressRecord, EXPECTED_FORMAT};
