//! AWS Route 53 DNS Provider

mod error;
mod provider;
mod types;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_route53::Client;

/// Provider identifier, also the resource key prefix
pub(crate) const PROVIDER_ID: &str = "route53";
/// `ChangeResourceRecordSets` hard limit on changes per request
pub(crate) const MAX_CHANGES_PER_BATCH: usize = 1000;
/// `ListHostedZones` default and maximum page size
pub(crate) const MAX_PAGE_SIZE_ZONES: usize = 100;
/// `ListResourceRecordSets` default and maximum page size
pub(crate) const MAX_PAGE_SIZE_RECORDS: usize = 300;

/// AWS Route 53 DNS Provider
///
/// Wraps an `aws_sdk_route53::Client`. Session and credential handling stay
/// with the caller: build the client from whatever [`SdkConfig`] the janitor
/// run was configured with.
pub struct Route53Provider {
    pub(crate) client: Client,
}

impl Route53Provider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a provider from an already loaded SDK configuration.
    pub fn from_sdk_config(config: &SdkConfig) -> Self {
        Self::new(Client::new(config))
    }

    /// Load the default credential chain for `region` and create a provider.
    pub async fn from_region(region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self::from_sdk_config(&config)
    }
}
