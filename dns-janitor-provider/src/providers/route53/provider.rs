//! Route 53 `ZoneProvider` trait implementation

use async_trait::async_trait;
use aws_sdk_route53::types::{ChangeBatch, RrType};

use crate::error::Result;
use crate::traits::{ErrorContext, ProviderErrorMapper, ZoneProvider};
use crate::types::{ChangeInfo, Page, PageCursor, ProviderLimits, RecordSet, Zone};

use super::{
    MAX_CHANGES_PER_BATCH, MAX_PAGE_SIZE_RECORDS, MAX_PAGE_SIZE_ZONES, PROVIDER_ID,
    Route53Provider,
};

#[async_trait]
impl ZoneProvider for Route53Provider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn limits(&self) -> ProviderLimits {
        ProviderLimits {
            max_changes_per_batch: MAX_CHANGES_PER_BATCH,
            max_page_size_zones: MAX_PAGE_SIZE_ZONES,
            max_page_size_records: MAX_PAGE_SIZE_RECORDS,
        }
    }

    async fn list_zones(&self, cursor: Option<&PageCursor>) -> Result<Page<Zone>> {
        let marker = match cursor {
            None => None,
            Some(PageCursor::Marker(marker)) => Some(marker.clone()),
            Some(other) => {
                return Err(self.parse_error(format!("unexpected zone cursor {other:?}")));
            }
        };

        let output = self
            .client
            .list_hosted_zones()
            .set_marker(marker)
            .max_items(i32::try_from(self.limits().max_page_size_zones).unwrap_or(i32::MAX))
            .send()
            .await
            .map_err(|e| self.map_sdk_error(e, ErrorContext::default()))?;

        let zones = output
            .hosted_zones()
            .iter()
            .map(Self::hosted_zone_to_zone)
            .collect();
        let next = self.zones_cursor(output.is_truncated(), output.next_marker())?;

        log::debug!(
            "[route53] listed zone page (truncated={})",
            output.is_truncated()
        );
        Ok(Page::new(zones, next))
    }

    async fn list_record_sets(
        &self,
        zone_id: &str,
        cursor: Option<&PageCursor>,
    ) -> Result<Page<RecordSet>> {
        let (start_name, start_type, start_identifier) = match cursor {
            None => (None, None, None),
            Some(PageCursor::RecordSet {
                name,
                record_type,
                identifier,
            }) => (
                Some(name.clone()),
                Some(RrType::from(record_type.as_str())),
                identifier.clone(),
            ),
            Some(other) => {
                return Err(self.parse_error(format!("unexpected record cursor {other:?}")));
            }
        };

        let output = self
            .client
            .list_resource_record_sets()
            .hosted_zone_id(zone_id)
            .max_items(i32::try_from(self.limits().max_page_size_records).unwrap_or(i32::MAX))
            .set_start_record_name(start_name)
            .set_start_record_type(start_type)
            .set_start_record_identifier(start_identifier)
            .send()
            .await
            .map_err(|e| self.map_sdk_error(e, ErrorContext::zone(zone_id)))?;

        let next = self.records_cursor(
            zone_id,
            output.is_truncated(),
            output.next_record_name(),
            output.next_record_type(),
            output.next_record_identifier(),
        )?;
        let record_sets = output
            .resource_record_sets
            .into_iter()
            .map(|rrs| Self::record_set_from_sdk(zone_id, rrs))
            .collect();

        Ok(Page::new(record_sets, next))
    }

    async fn delete_record_sets(
        &self,
        zone_id: &str,
        record_sets: &[RecordSet],
    ) -> Result<ChangeInfo> {
        let changes = record_sets
            .iter()
            .map(|rs| self.delete_change(rs))
            .collect::<Result<Vec<_>>>()?;

        let batch = ChangeBatch::builder()
            .set_changes(Some(changes))
            .comment("dns-janitor sweep")
            .build()
            .map_err(|e| self.parse_error(e))?;

        let output = self
            .client
            .change_resource_record_sets()
            .hosted_zone_id(zone_id)
            .change_batch(batch)
            .send()
            .await
            .map_err(|e| self.map_sdk_error(e, ErrorContext::zone(zone_id)))?;

        let info: Option<&aws_sdk_route53::types::ChangeInfo> = output.change_info().into();
        let (id, status) = info.map_or_else(
            || (String::new(), "UNKNOWN".to_string()),
            |i| (i.id().to_string(), i.status().as_str().to_string()),
        );

        Ok(ChangeInfo {
            id,
            status,
            change_count: record_sets.len(),
        })
    }
}
