use std::any::Any;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// ============ Pagination ============

/// Continuation position returned by a list call.
///
/// Cursors are only meaningful to the provider that produced them and only
/// for the listing they came from. They are never persisted or reused across
/// runs, so an enumeration is not restartable mid-stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCursor {
    /// Single opaque marker (used for zone listings).
    Marker(String),
    /// Start position inside a zone's record sets.
    ///
    /// Record listings are ordered by name then type, and weighted/latency
    /// sets sharing a name and type are further ordered by set identifier.
    RecordSet {
        /// Name of the first record set of the next page.
        name: String,
        /// Type of the first record set of the next page.
        record_type: DnsRecordType,
        /// Set identifier of the first record set of the next page, if any.
        identifier: Option<String>,
    },
}

/// A single page of a paginated listing.
///
/// `next` is `None` on the last page.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Items in this page.
    pub items: Vec<T>,
    /// Cursor for the following page.
    pub next: Option<PageCursor>,
}

impl<T> Page<T> {
    /// Create a page that is followed by `next`.
    pub fn new(items: Vec<T>, next: Option<PageCursor>) -> Self {
        Self { items, next }
    }

    /// Create the final page of a listing.
    pub fn last(items: Vec<T>) -> Self {
        Self { items, next: None }
    }

    /// Whether there are more pages after this one.
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }
}

// ============ Provider Types ============

/// Identifies which DNS provider implementation to use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// AWS Route 53. Requires feature `route53`.
    #[cfg(feature = "route53")]
    Route53,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "route53")]
            Self::Route53 => write!(f, "route53"),
        }
    }
}

/// Provider-specific request limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderLimits {
    /// Maximum number of changes accepted by a single change batch request.
    pub max_changes_per_batch: usize,
    /// Maximum page size for zone list requests.
    pub max_page_size_zones: usize,
    /// Maximum page size for record set list requests.
    pub max_page_size_records: usize,
}

// ============ Zone Types ============

/// A hosted zone managed by a DNS provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Provider-specific zone identifier.
    pub id: String,
    /// Fully-qualified zone name, as returned by the provider (e.g. `"example.com."`).
    pub name: String,
    /// Number of record sets in the zone, if the provider reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_count: Option<u64>,
    /// Whether the zone is a private (VPC-scoped) zone.
    #[serde(default)]
    pub private: bool,
}

impl Zone {
    /// Create a public zone with no record count.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            record_count: None,
            private: false,
        }
    }
}

// ============ DNS Record Types ============

/// DNS record type identifier.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"CNAME"`, etc.). Types
/// without a dedicated variant are kept verbatim in [`Other`](Self::Other).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum DnsRecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Text record.
    Txt,
    /// Name server record.
    Ns,
    /// Start of authority record.
    Soa,
    /// Pointer record.
    Ptr,
    /// Service locator record.
    Srv,
    /// Certificate Authority Authorization record.
    Caa,
    /// Any other record type, uppercased.
    Other(String),
}

impl DnsRecordType {
    /// Wire representation of the type (e.g. `"A"`).
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Soa => "SOA",
            Self::Ptr => "PTR",
            Self::Srv => "SRV",
            Self::Caa => "CAA",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for DnsRecordType {
    fn from(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "A" => Self::A,
            "AAAA" => Self::Aaaa,
            "CNAME" => Self::Cname,
            "MX" => Self::Mx,
            "TXT" => Self::Txt,
            "NS" => Self::Ns,
            "SOA" => Self::Soa,
            "PTR" => Self::Ptr,
            "SRV" => Self::Srv,
            "CAA" => Self::Caa,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for DnsRecordType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<DnsRecordType> for String {
    fn from(value: DnsRecordType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for DnsRecordType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider-native representation of a record set.
///
/// The janitor never looks inside; the provider that produced a
/// [`RecordSet`] downcasts it again when building delete requests, so the
/// exact record (TTL, values, alias target, routing policy) is echoed back.
#[derive(Clone)]
pub struct ProviderPayload(Option<Arc<dyn Any + Send + Sync>>);

impl ProviderPayload {
    /// Wrap a provider-native value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Some(Arc::new(value)))
    }

    /// A payload carrying nothing (test fixtures, synthetic records).
    pub fn empty() -> Self {
        Self(None)
    }

    /// Borrow the wrapped value if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_deref().and_then(|v| v.downcast_ref::<T>())
    }

    /// Whether a provider-native value is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl Default for ProviderPayload {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for ProviderPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_some() {
            f.write_str("ProviderPayload(..)")
        } else {
            f.write_str("ProviderPayload(empty)")
        }
    }
}

/// A named, typed record set inside a [`Zone`].
#[derive(Debug, Clone)]
pub struct RecordSet {
    /// Identifier of the zone the record set belongs to.
    pub zone_id: String,
    /// Fully-qualified record name (e.g. `"api.example.com."`).
    pub name: String,
    /// Record type.
    pub record_type: DnsRecordType,
    /// Routing-policy set identifier, for weighted/latency/failover sets.
    pub set_identifier: Option<String>,
    /// TTL in seconds; `None` for alias records.
    pub ttl: Option<i64>,
    /// Provider-native record, opaque to the janitor.
    pub payload: ProviderPayload,
}

impl RecordSet {
    /// Create a record set without provider payload.
    pub fn new(
        zone_id: impl Into<String>,
        name: impl Into<String>,
        record_type: DnsRecordType,
    ) -> Self {
        Self {
            zone_id: zone_id.into(),
            name: name.into(),
            record_type,
            set_identifier: None,
            ttl: None,
            payload: ProviderPayload::empty(),
        }
    }
}

/// Outcome of a submitted change batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeInfo {
    /// Provider change identifier.
    pub id: String,
    /// Provider change status (e.g. `"PENDING"`, `"INSYNC"`).
    pub status: String,
    /// Number of changes carried by the batch.
    pub change_count: usize,
}
