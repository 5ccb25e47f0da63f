use thiserror::Error;

/// Failures from a single geocoding lookup.
///
/// Every variant maps to its own user-facing message so the cause can be
/// told apart at a glance. None of them are retried automatically.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// No API key is configured, or the key is the sample placeholder.
    /// Raised before any request is sent.
    #[error("geocoding API key not configured; set GOOGLE_API_KEY")]
    MissingCredential,

    /// The service returned `REQUEST_DENIED`.
    #[error("geocoding request denied; check the API key and billing settings{}", denied_detail(.message.as_deref()))]
    Denied { message: Option<String> },

    /// The service returned `OVER_QUERY_LIMIT`.
    #[error("geocoding quota exceeded; try again later")]
    QuotaExceeded,

    /// The service returned `ZERO_RESULTS`.
    #[error("no geocoding results found for this address")]
    NoMatch,

    /// The service returned a status this client does not recognise.
    #[error("geocoding failed with status {0}")]
    Unknown(String),

    /// Transport failure: timeout, DNS, connection refused or a non-2xx
    /// HTTP status.
    #[error("network error while geocoding: {0}")]
    Network(#[from] reqwest::Error),

    /// The request could not be built or the response could not be
    /// understood.
    #[error("unexpected geocoding error in {context}: {reason}")]
    Internal { context: String, reason: String },
}

fn denied_detail(message: Option<&str>) -> String {
    message.map(|m| format!(" ({m})")).unwrap_or_default()
}

impl GeocodeError {
    /// Short stable identifier for logs and machine-readable output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GeocodeError::MissingCredential => "missing_credential",
            GeocodeError::Denied { .. } => "denied",
            GeocodeError::QuotaExceeded => "quota_exceeded",
            GeocodeError::NoMatch => "no_match",
            GeocodeError::Unknown(_) => "unknown",
            GeocodeError::Network(_) => "network",
            GeocodeError::Internal { .. } => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denied_message_includes_provider_detail_when_present() {
        let err = GeocodeError::Denied {
            message: Some("The provided API key is invalid.".to_owned()),
        };
        assert_eq!(
            err.to_string(),
            "geocoding request denied; check the API key and billing settings (The provided API key is invalid.)"
        );
        let bare = GeocodeError::Denied { message: None };
        assert!(bare.to_string().ends_with("billing settings"));
    }

    #[test]
    fn every_status_error_has_a_distinct_message() {
        let messages = [
            GeocodeError::MissingCredential.to_string(),
            GeocodeError::Denied { message: None }.to_string(),
            GeocodeError::QuotaExceeded.to_string(),
            GeocodeError::NoMatch.to_string(),
            GeocodeError::Unknown("INVALID_REQUEST".to_owned()).to_string(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_status_is_echoed() {
        let err = GeocodeError::Unknown("UNKNOWN_ERROR".to_owned());
        assert_eq!(err.to_string(), "geocoding failed with status UNKNOWN_ERROR");
        assert_eq!(err.kind(), "unknown");
    }
}
