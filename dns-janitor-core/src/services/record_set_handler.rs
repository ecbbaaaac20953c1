//! DNS 记录集资源处理器

use std::sync::Arc;

use async_trait::async_trait;

use dns_janitor_provider::ZoneProvider;

use crate::error::CoreResult;
use crate::filters::{RecordFilter, ZoneFilter};
use crate::resource_set::ResourceSet;
use crate::services::{InventoryLister, Sweeper};
use crate::traits::{ResourceHandler, Tracker};
use crate::types::{SweepOptions, SweepReport};

/// 单个 zone provider 的 DNS 记录集 [`ResourceHandler`]
pub struct DnsRecordSetHandler {
    sweeper: Sweeper,
    inventory: InventoryLister,
}

impl DnsRecordSetHandler {
    #[must_use]
    pub fn new(
        provider: Arc<dyn ZoneProvider>,
        zone_filter: ZoneFilter,
        record_filter: RecordFilter,
    ) -> Self {
        Self {
            sweeper: Sweeper::new(provider.clone(), zone_filter.clone(), record_filter),
            inventory: InventoryLister::new(provider, zone_filter),
        }
    }

    pub fn sweeper(&self) -> &Sweeper {
        &self.sweeper
    }

    pub fn inventory(&self) -> &InventoryLister {
        &self.inventory
    }
}

#[async_trait]
impl ResourceHandler for DnsRecordSetHandler {
    fn name(&self) -> &'static str {
        "dns-record-sets"
    }

    async fn mark_and_sweep(
        &self,
        options: &SweepOptions,
        tracker: &mut dyn Tracker,
    ) -> CoreResult<SweepReport> {
        self.sweeper.mark_and_sweep(options, tracker).await
    }

    async fn list_all(&self, options: &SweepOptions) -> CoreResult<ResourceSet> {
        self.inventory.list_all(options).await
    }
}
