use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{ChangeInfo, Page, PageCursor, ProviderLimits, RecordSet, Zone};

/// Raw API error (internal use)
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Error code (format differs per provider)
    pub code: Option<String>,
    /// Original error message
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Extra information available when mapping an error (internal use)
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Zone the failing call addressed (for `ZoneNotFound` / `InvalidChangeBatch`)
    pub zone: Option<String>,
}

impl ErrorContext {
    pub fn zone(zone: impl Into<String>) -> Self {
        Self {
            zone: Some(zone.into()),
        }
    }
}

/// Provider error mapping trait (internal use)
///
/// Each provider implements this to translate raw API errors into [`ProviderError`].
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error onto the unified error type
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shortcut: parse error
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Shortcut: unknown error (fallback)
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// DNS zone provider
///
/// The three calls the janitor needs from a DNS hosting API: list zones, list
/// the record sets of one zone, and delete a batch of record sets. Listing is
/// page-at-a-time; see [`zone_pages`](crate::zone_pages) and
/// [`record_set_pages`](crate::record_set_pages) for lazy page streams over
/// these calls.
#[async_trait]
pub trait ZoneProvider: Send + Sync {
    /// Provider identifier, used as the resource key prefix (e.g. `"route53"`).
    fn id(&self) -> &'static str;

    /// Request limits of the backing API.
    fn limits(&self) -> ProviderLimits;

    /// Fetch one page of hosted zones.
    ///
    /// `cursor` is `None` for the first page, otherwise the `next` cursor of
    /// the previous page.
    async fn list_zones(&self, cursor: Option<&PageCursor>) -> Result<Page<Zone>>;

    /// Fetch one page of record sets from `zone_id`.
    async fn list_record_sets(
        &self,
        zone_id: &str,
        cursor: Option<&PageCursor>,
    ) -> Result<Page<RecordSet>>;

    /// Submit a single change batch deleting `record_sets` from `zone_id`.
    ///
    /// Callers must keep `record_sets.len()` within
    /// [`ProviderLimits::max_changes_per_batch`]. The batch is applied
    /// atomically by the provider: either every deletion succeeds or none does.
    async fn delete_record_sets(&self, zone_id: &str, record_sets: &[RecordSet])
    -> Result<ChangeInfo>;
}
