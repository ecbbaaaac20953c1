//! Provider factory functions.

use std::sync::Arc;

use crate::traits::ZoneProvider;
use crate::types::ProviderType;

#[cfg(feature = "route53")]
use crate::providers::Route53Provider;

/// An authenticated session for one provider.
///
/// The janitor never handles credentials itself; a session carries whatever
/// the caller already resolved (for AWS, a loaded [`aws_config::SdkConfig`]).
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ProviderSession {
    /// AWS session; credentials and region come from the SDK config.
    #[cfg(feature = "route53")]
    Route53(aws_config::SdkConfig),
}

impl ProviderSession {
    /// Provider type this session authenticates against.
    pub fn provider_type(&self) -> ProviderType {
        match self {
            #[cfg(feature = "route53")]
            Self::Route53(_) => ProviderType::Route53,
        }
    }
}

/// Creates a [`ZoneProvider`] instance from the given session.
///
/// The concrete provider type is determined by the [`ProviderSession`] variant.
/// The returned provider is wrapped in `Arc<dyn ZoneProvider>` for easy sharing
/// across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use dns_janitor_provider::{create_provider, ProviderSession};
///
/// # async fn example() {
/// let config = aws_config::load_from_env().await;
/// let provider = create_provider(ProviderSession::Route53(config));
/// assert_eq!(provider.id(), "route53");
/// # }
/// ```
pub fn create_provider(session: ProviderSession) -> Arc<dyn ZoneProvider> {
    match session {
        #[cfg(feature = "route53")]
        ProviderSession::Route53(config) => Arc::new(Route53Provider::from_sdk_config(&config)),
    }
}
