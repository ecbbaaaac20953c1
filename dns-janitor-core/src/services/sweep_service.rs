//! Mark-and-sweep 服务
//!
//! 按 region 顺序处理：zone 分页 → 每个受管 zone 的记录分页 → 过滤 → mark →
//! 分批删除。所有 provider 调用串行执行（Route 53 的请求配额很低）。

use std::pin::pin;
use std::sync::Arc;

use futures::TryStreamExt;

use dns_janitor_provider::{RecordSet, Zone, ZoneProvider, record_set_pages, zone_pages};

use crate::error::CoreResult;
use crate::filters::{RecordFilter, ZoneFilter};
use crate::services::listing_error;
use crate::traits::Tracker;
use crate::types::{ResourceKey, SweepOptions, SweepReport};

/// 单页记录集的筛选结果
#[derive(Debug, Default)]
pub struct PageSelection {
    /// 通过记录过滤（并已 mark）的记录集数量
    pub marked: usize,
    /// 已超过保留期的记录集
    pub candidates: Vec<RecordSet>,
}

/// 受管 zone 内 DNS 记录集的 mark-and-sweep 服务
pub struct Sweeper {
    provider: Arc<dyn ZoneProvider>,
    zone_filter: ZoneFilter,
    record_filter: RecordFilter,
}

impl Sweeper {
    #[must_use]
    pub fn new(
        provider: Arc<dyn ZoneProvider>,
        zone_filter: ZoneFilter,
        record_filter: RecordFilter,
    ) -> Self {
        Self {
            provider,
            zone_filter,
            record_filter,
        }
    }

    /// 处理 provider 列出的每个受管 zone
    ///
    /// 列表失败会中止并返回错误。删除批次被拒绝时只记录日志并计数，
    /// 其余批次和 zone 继续处理。`dry_run` 时不删除，但仍然 mark。
    pub async fn mark_and_sweep(
        &self,
        options: &SweepOptions,
        tracker: &mut dyn Tracker,
    ) -> CoreResult<SweepReport> {
        let provider = self.provider.as_ref();
        let mut report = SweepReport::default();

        let mut zones = pin!(zone_pages(provider));
        while let Some(page) = zones
            .try_next()
            .await
            .map_err(|e| listing_error(provider.id(), options, None, e))?
        {
            for zone in page {
                report.zones_seen += 1;
                if !self.zone_filter.is_managed(&zone) {
                    continue;
                }
                report.zones_managed += 1;
                log::debug!(
                    "sweeping zone {} {} ({} record sets{})",
                    zone.id,
                    zone.name,
                    zone.record_count.map_or_else(|| "?".to_string(), |n| n.to_string()),
                    if zone.private { ", private" } else { "" }
                );

                let candidates = self
                    .zone_candidates(options, &zone, tracker, &mut report)
                    .await?;
                if candidates.is_empty() {
                    continue;
                }
                if options.dry_run {
                    log::info!(
                        "dry run: not deleting {} record sets in zone {}",
                        candidates.len(),
                        zone.id
                    );
                    continue;
                }
                self.delete_candidates(&zone, &candidates, &mut report).await;
            }
        }

        log::info!(
            "[{}] sweep of {}/{} done: {report:?}",
            provider.id(),
            options.account,
            options.region
        );
        Ok(report)
    }

    /// mark `zone` 中每条受管记录集，返回待删除的记录集
    async fn zone_candidates(
        &self,
        options: &SweepOptions,
        zone: &Zone,
        tracker: &mut dyn Tracker,
        report: &mut SweepReport,
    ) -> CoreResult<Vec<RecordSet>> {
        let provider = self.provider.as_ref();
        let mut candidates = Vec::new();

        let mut pages = pin!(record_set_pages(provider, &zone.id));
        while let Some(page) = pages
            .try_next()
            .await
            .map_err(|e| listing_error(provider.id(), options, Some(zone), e))?
        {
            report.records_seen += page.len();
            let selection = self.select_page(page, tracker);
            report.records_marked += selection.marked;
            candidates.extend(selection.candidates);
        }

        report.candidates += candidates.len();
        Ok(candidates)
    }

    /// 过滤并 mark 一页记录集
    ///
    /// 返回筛选结果而不是就地累积，唯一的副作用是 mark `tracker`。
    pub fn select_page(&self, page: Vec<RecordSet>, tracker: &mut dyn Tracker) -> PageSelection {
        let provider_id = self.provider.id();
        let mut selection = PageSelection::default();

        for record_set in page {
            if !self.record_filter.is_managed(&record_set) {
                continue;
            }
            selection.marked += 1;

            let key = ResourceKey::for_record_set(provider_id, &record_set);
            if tracker.mark(&key, None) {
                log::warn!(
                    "{key}: deleting {} record set {}",
                    record_set.record_type,
                    record_set.name
                );
                selection.candidates.push(record_set);
            }
        }
        selection
    }

    /// 按 provider 的批次上限依次提交删除
    async fn delete_candidates(
        &self,
        zone: &Zone,
        candidates: &[RecordSet],
        report: &mut SweepReport,
    ) {
        let provider = self.provider.as_ref();
        let batch_size = provider.limits().max_changes_per_batch.max(1);

        for chunk in candidates.chunks(batch_size) {
            log::info!(
                "Deleting {} {} resource records in zone {}",
                chunk.len(),
                provider.id(),
                zone.id
            );
            report.delete_requests += 1;
            match provider.delete_record_sets(&zone.id, chunk).await {
                Ok(info) => {
                    log::debug!(
                        "change {} is {} ({} changes)",
                        info.id,
                        info.status,
                        info.change_count
                    );
                    report.records_deleted += chunk.len();
                }
                Err(e) => {
                    log::warn!("unable to delete DNS records in zone {}: {e}", zone.id);
                    report.failed_requests += 1;
                }
            }
        }
    }
}
