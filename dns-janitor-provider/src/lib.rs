//! # dns-janitor-provider
//!
//! The DNS hosting API surface the janitor sweeps: list hosted zones, list the
//! record sets of a zone, delete record sets in batches.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [AWS Route 53](https://aws.amazon.com/route53/) | `route53` | AWS SDK credential chain |
//!
//! ## Feature Flags
//!
//! - **`route53`** *(default)*: Enable the Route 53 provider (pulls in the AWS SDK).
//!
//! Without any provider feature the crate still exports [`ZoneProvider`] and
//! the shared types, which is enough to plug in a custom or mock provider.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use futures::TryStreamExt;
//! use dns_janitor_provider::{create_provider, zone_pages, ProviderSession};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = aws_config::load_from_env().await;
//!     let provider = create_provider(ProviderSession::Route53(config));
//!
//!     let mut pages = std::pin::pin!(zone_pages(provider.as_ref()));
//!     while let Some(zones) = pages.try_next().await? {
//!         for zone in &zones {
//!             println!("{} {}", zone.id, zone.name);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! The error enum provides structured variants for common failure modes:
//!
//! - [`ProviderError::InvalidCredentials`]: authentication failed
//! - [`ProviderError::ZoneNotFound`]: the hosted zone disappeared
//! - [`ProviderError::InvalidChangeBatch`]: a delete batch was rejected
//! - [`ProviderError::RateLimited`]: API rate limit exceeded (transient)
//!
//! Nothing is retried inside this crate. See [`ProviderError`] for the full list.

mod error;
mod factory;
mod pagination;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory
pub use factory::{ProviderSession, create_provider};

// Re-export page streams
pub use pagination::{record_set_pages, zone_pages};

// Re-export core trait only (internal traits are not exported)
pub use traits::ZoneProvider;

// Re-export types
pub use types::{
    ChangeInfo, DnsRecordType, Page, PageCursor, ProviderLimits, ProviderPayload, ProviderType,
    RecordSet, Zone,
};

// Re-export utils module
pub use utils::log_sanitizer;

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "route53")]
pub use providers::Route53Provider;
