//! Resource handler trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::resource_set::ResourceSet;
use crate::traits::Tracker;
use crate::types::{SweepOptions, SweepReport};

/// One family of cloud resources the janitor knows how to clean up
///
/// Implementations:
/// - [`DnsRecordSetHandler`](crate::services::DnsRecordSetHandler): DNS record sets in managed zones
#[async_trait]
pub trait ResourceHandler: Send + Sync {
    /// Short name used in logs (e.g. `"route53-record-sets"`)
    fn name(&self) -> &'static str;

    /// Mark every owned resource and delete those past retention
    ///
    /// Enumeration failures abort and are returned; deletion failures are
    /// logged and counted in the report.
    async fn mark_and_sweep(
        &self,
        options: &SweepOptions,
        tracker: &mut dyn Tracker,
    ) -> CoreResult<SweepReport>;

    /// Inventory of every resource in scope, first-seen set to now
    async fn list_all(&self, options: &SweepOptions) -> CoreResult<ResourceSet>;
}
