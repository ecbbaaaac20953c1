//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use dns_janitor_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Enumeration failed; the sweep of this account/region was aborted
    #[error("couldn't list {provider} resources for {account:?} in {region:?}{}: {source}", zone_suffix(.zone.as_deref()))]
    Listing {
        provider: String,
        account: String,
        region: String,
        /// Zone being listed, `None` when the zone listing itself failed
        zone: Option<String>,
        source: ProviderError,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A record rule pattern did not compile
    #[error("Invalid pattern for rule {rule:?}: {detail}")]
    InvalidPattern { rule: String, detail: String },

    /// Tracker state could not be read or written
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

fn zone_suffix(zone: Option<&str>) -> String {
    zone.map(|z| format!(" zone {z:?}")).unwrap_or_default()
}

impl CoreError {
    /// Whether it is expected behavior (bad configuration, missing zone, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ConfigError(_) | Self::InvalidPattern { .. } => true,
            Self::Listing { source, .. } | Self::Provider(source) => source.is_expected(),
            _ => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
