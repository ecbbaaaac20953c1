//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use dns_janitor_provider::{
    ChangeInfo, DnsRecordType, Page, PageCursor, ProviderError, ProviderLimits, RecordSet,
    Result, Zone, ZoneProvider,
};

use crate::filters::DEFAULT_MANAGED_ZONE;
use crate::types::{ResourceKey, SweepOptions};

pub const MOCK_PROVIDER_ID: &str = "mock";

// ===== MockZoneProvider =====

/// 脚本化的 zone provider
///
/// 按页返回固定的 zone 和记录集，可按需注入失败，并记录每次调用，
/// 便于测试断言请求次数和批次大小。
pub struct MockZoneProvider {
    zones: Vec<Zone>,
    records: HashMap<String, Vec<RecordSet>>,
    zone_page_size: usize,
    record_page_size: usize,
    batch_limit: usize,
    /// zone 列表在第几页失败
    fail_zone_page: Option<usize>,
    /// 列出这些 zone 的记录时失败
    fail_records_for: HashSet<String>,
    /// 第几次 delete 调用失败（从 0 开始）
    fail_delete_calls: HashSet<usize>,
    record_list_calls: RwLock<Vec<String>>,
    delete_batches: RwLock<Vec<(String, Vec<String>)>>,
}

impl MockZoneProvider {
    pub fn new() -> Self {
        Self {
            zones: Vec::new(),
            records: HashMap::new(),
            zone_page_size: 100,
            record_page_size: 300,
            batch_limit: 1000,
            fail_zone_page: None,
            fail_records_for: HashSet::new(),
            fail_delete_calls: HashSet::new(),
            record_list_calls: RwLock::new(Vec::new()),
            delete_batches: RwLock::new(Vec::new()),
        }
    }

    pub fn with_zone(mut self, zone: Zone, records: Vec<RecordSet>) -> Self {
        self.records.insert(zone.id.clone(), records);
        self.zones.push(zone);
        self
    }

    pub fn with_page_sizes(mut self, zones: usize, records: usize) -> Self {
        self.zone_page_size = zones;
        self.record_page_size = records;
        self
    }

    pub fn with_batch_limit(mut self, limit: usize) -> Self {
        self.batch_limit = limit;
        self
    }

    pub fn fail_zone_page(mut self, page: usize) -> Self {
        self.fail_zone_page = Some(page);
        self
    }

    pub fn fail_records_for(mut self, zone_id: &str) -> Self {
        self.fail_records_for.insert(zone_id.to_string());
        self
    }

    pub fn fail_delete_call(mut self, call: usize) -> Self {
        self.fail_delete_calls.insert(call);
        self
    }

    /// 被列出记录的 zone id（每次分页请求一条）
    pub async fn record_list_calls(&self) -> Vec<String> {
        self.record_list_calls.read().await.clone()
    }

    /// 每次 delete 调用的 `(zone_id, 记录名)`，包括失败的调用
    pub async fn delete_batches(&self) -> Vec<(String, Vec<String>)> {
        self.delete_batches.read().await.clone()
    }

    fn offset(cursor: Option<&PageCursor>) -> usize {
        match cursor {
            Some(PageCursor::Marker(m)) => m.parse().unwrap_or(0),
            _ => 0,
        }
    }

    fn page_of<T: Clone>(items: &[T], offset: usize, size: usize) -> Page<T> {
        let end = (offset + size).min(items.len());
        let next = (end < items.len()).then(|| PageCursor::Marker(end.to_string()));
        Page::new(items[offset.min(end)..end].to_vec(), next)
    }

    fn throttled() -> ProviderError {
        ProviderError::RateLimited {
            provider: MOCK_PROVIDER_ID.to_string(),
            raw_message: Some("Rate exceeded".to_string()),
        }
    }
}

#[async_trait]
impl ZoneProvider for MockZoneProvider {
    fn id(&self) -> &'static str {
        MOCK_PROVIDER_ID
    }

    fn limits(&self) -> ProviderLimits {
        ProviderLimits {
            max_changes_per_batch: self.batch_limit,
            max_page_size_zones: self.zone_page_size,
            max_page_size_records: self.record_page_size,
        }
    }

    async fn list_zones(&self, cursor: Option<&PageCursor>) -> Result<Page<Zone>> {
        let page_size = self.limits().max_page_size_zones;
        let offset = Self::offset(cursor);
        if self.fail_zone_page == Some(offset / page_size) {
            return Err(Self::throttled());
        }
        Ok(Self::page_of(&self.zones, offset, page_size))
    }

    async fn list_record_sets(
        &self,
        zone_id: &str,
        cursor: Option<&PageCursor>,
    ) -> Result<Page<RecordSet>> {
        self.record_list_calls
            .write()
            .await
            .push(zone_id.to_string());
        if self.fail_records_for.contains(zone_id) {
            return Err(Self::throttled());
        }
        let records = self.records.get(zone_id).map_or(&[][..], Vec::as_slice);
        Ok(Self::page_of(
            records,
            Self::offset(cursor),
            self.limits().max_page_size_records,
        ))
    }

    async fn delete_record_sets(
        &self,
        zone_id: &str,
        record_sets: &[RecordSet],
    ) -> Result<ChangeInfo> {
        let mut batches = self.delete_batches.write().await;
        let call = batches.len();
        batches.push((
            zone_id.to_string(),
            record_sets.iter().map(|r| r.name.clone()).collect(),
        ));
        if self.fail_delete_calls.contains(&call) {
            return Err(ProviderError::InvalidChangeBatch {
                provider: MOCK_PROVIDER_ID.to_string(),
                zone: zone_id.to_string(),
                detail: format!("scripted failure of call {call}"),
            });
        }
        Ok(ChangeInfo {
            id: format!("C{call}"),
            status: "PENDING".to_string(),
            change_count: record_sets.len(),
        })
    }
}

// ===== 工厂方法 =====

pub fn managed_zone(id: &str) -> Zone {
    Zone::new(id, DEFAULT_MANAGED_ZONE)
}

/// 按 kops e2e api 端点命名的 `A` 记录集（集群 `c<n>`）
pub fn kops_record(zone_id: &str, n: usize) -> RecordSet {
    RecordSet::new(
        zone_id,
        format!("api.e2e-c{n}-dba53.{DEFAULT_MANAGED_ZONE}"),
        DnsRecordType::A,
    )
}

pub fn kops_records(zone_id: &str, count: usize) -> Vec<RecordSet> {
    (0..count).map(|n| kops_record(zone_id, n)).collect()
}

pub fn unmanaged_record(zone_id: &str, name: &str, record_type: DnsRecordType) -> RecordSet {
    RecordSet::new(zone_id, name, record_type)
}

pub fn key_of(record_set: &RecordSet) -> ResourceKey {
    ResourceKey::for_record_set(MOCK_PROVIDER_ID, record_set)
}

pub fn options() -> SweepOptions {
    SweepOptions::new("123456789012", "us-east-1")
}
