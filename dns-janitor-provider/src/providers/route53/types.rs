//! Conversions between Route 53 SDK shapes and provider types

use aws_sdk_route53::types::{
    Change, ChangeAction, HostedZone, ResourceRecordSet, RrType,
};

use crate::error::Result;
use crate::traits::ProviderErrorMapper;
use crate::types::{DnsRecordType, PageCursor, ProviderPayload, RecordSet, Zone};

use super::Route53Provider;

impl Route53Provider {
    /// Convert a Route 53 hosted zone into a `Zone`
    ///
    /// The id is kept in Route 53's `/hostedzone/<id>` form; resource keys
    /// embed it verbatim.
    pub(crate) fn hosted_zone_to_zone(zone: &HostedZone) -> Zone {
        Zone {
            id: zone.id().to_string(),
            name: zone.name().to_string(),
            record_count: zone
                .resource_record_set_count()
                .and_then(|count| u64::try_from(count).ok()),
            private: zone.config().is_some_and(|c| c.private_zone()),
        }
    }

    /// Convert a Route 53 record set, keeping the SDK value as payload
    pub(crate) fn record_set_from_sdk(zone_id: &str, rrs: ResourceRecordSet) -> RecordSet {
        RecordSet {
            zone_id: zone_id.to_string(),
            name: rrs.name().to_string(),
            record_type: DnsRecordType::from(rrs.r#type().as_str()),
            set_identifier: rrs.set_identifier().map(str::to_string),
            ttl: rrs.ttl(),
            payload: ProviderPayload::new(rrs),
        }
    }

    /// Cursor for the next `ListHostedZones` page
    ///
    /// A truncated response must carry a marker.
    pub(crate) fn zones_cursor(
        &self,
        is_truncated: bool,
        next_marker: Option<&str>,
    ) -> Result<Option<PageCursor>> {
        if !is_truncated {
            return Ok(None);
        }
        next_marker
            .map(|m| Some(PageCursor::Marker(m.to_string())))
            .ok_or_else(|| self.parse_error("truncated zone listing without a next marker"))
    }

    /// Cursor for the next `ListResourceRecordSets` page
    pub(crate) fn records_cursor(
        &self,
        zone_id: &str,
        is_truncated: bool,
        next_name: Option<&str>,
        next_type: Option<&RrType>,
        next_identifier: Option<&str>,
    ) -> Result<Option<PageCursor>> {
        if !is_truncated {
            return Ok(None);
        }
        let (Some(name), Some(record_type)) = (next_name, next_type) else {
            return Err(self.parse_error(format!(
                "truncated record listing of zone {zone_id} without a next record"
            )));
        };
        Ok(Some(PageCursor::RecordSet {
            name: name.to_string(),
            record_type: DnsRecordType::from(record_type.as_str()),
            identifier: next_identifier.map(str::to_string),
        }))
    }

    /// Build a DELETE change echoing the record set exactly as listed
    pub(crate) fn delete_change(&self, record_set: &RecordSet) -> Result<Change> {
        let native = record_set
            .payload
            .downcast_ref::<ResourceRecordSet>()
            .ok_or_else(|| {
                self.parse_error(format!(
                    "record set {} {} carries no Route 53 payload",
                    record_set.record_type, record_set.name
                ))
            })?;

        Change::builder()
            .action(ChangeAction::Delete)
            .resource_record_set(native.clone())
            .build()
            .map_err(|e| self.parse_error(e))
    }
}
