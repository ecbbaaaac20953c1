//! 资源清单服务
//!
//! 列出受管 zone 中的全部记录（不经过记录过滤），为每条记录写入 first-seen 时间。
//! 之后才被规则命中的记录因此已有准确的年龄。

use std::pin::pin;
use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use futures::TryStreamExt;

use dns_janitor_provider::{ZoneProvider, record_set_pages, zone_pages};

use crate::error::CoreResult;
use crate::filters::ZoneFilter;
use crate::resource_set::ResourceSet;
use crate::services::listing_error;
use crate::traits::Tracker;
use crate::types::{ResourceKey, SweepOptions};

/// 受管 zone 内全部记录集的清单服务
pub struct InventoryLister {
    provider: Arc<dyn ZoneProvider>,
    zone_filter: ZoneFilter,
}

impl InventoryLister {
    #[must_use]
    pub fn new(provider: Arc<dyn ZoneProvider>, zone_filter: ZoneFilter) -> Self {
        Self {
            provider,
            zone_filter,
        }
    }

    /// 为每个受管 zone 中的每条记录集写入 first-seen = 当前时间
    ///
    /// 直接写入 `tracker`，失败前已列出的记录会保留。返回写入的记录集数量。
    pub async fn seed(&self, options: &SweepOptions, tracker: &mut dyn Tracker) -> CoreResult<usize> {
        let provider = self.provider.as_ref();
        let mut recorded = 0;

        let mut zones = pin!(zone_pages(provider));
        while let Some(page) = zones
            .try_next()
            .await
            .map_err(|e| listing_error(provider.id(), options, None, e))?
        {
            for zone in page.iter().filter(|z| self.zone_filter.is_managed(z)) {
                let mut records = pin!(record_set_pages(provider, &zone.id));
                while let Some(records_page) = records
                    .try_next()
                    .await
                    .map_err(|e| listing_error(provider.id(), options, Some(zone), e))?
                {
                    let now = Utc::now();
                    for record_set in &records_page {
                        tracker.record_first_seen(
                            ResourceKey::for_record_set(provider.id(), record_set),
                            now,
                        );
                    }
                    recorded += records_page.len();
                }
            }
        }

        log::info!(
            "[{}] inventory of {}/{}: {recorded} record sets",
            provider.id(),
            options.account,
            options.region
        );
        Ok(recorded)
    }

    /// 生成新的清单（保留期为零的 [`ResourceSet`]）
    pub async fn list_all(&self, options: &SweepOptions) -> CoreResult<ResourceSet> {
        let mut set = ResourceSet::new(TimeDelta::zero());
        self.seed(options, &mut set).await?;
        Ok(set)
    }
}
