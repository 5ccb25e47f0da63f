/// Production geocoding endpoint.
pub const DEFAULT_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Value shipped in sample configs; treated the same as no key at all.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_GOOGLE_MAPS_API_KEY";

/// Returns the key with surrounding whitespace removed, or `None` if it is
/// absent, blank, or the placeholder value.
#[must_use]
pub fn usable_api_key(key: Option<&str>) -> Option<&str> {
    key.map(str::trim)
        .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub google_api_key: Option<String>,
    pub geocode_url: String,
    pub geocode_timeout_secs: u64,
    pub user_agent: String,
}

impl AppConfig {
    /// The configured API key, unless it is blank or the placeholder value.
    #[must_use]
    pub fn usable_api_key(&self) -> Option<&str> {
        usable_api_key(self.google_api_key.as_deref())
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field(
                "google_api_key",
                &self.google_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("geocode_url", &self.geocode_url)
            .field("geocode_timeout_secs", &self.geocode_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
