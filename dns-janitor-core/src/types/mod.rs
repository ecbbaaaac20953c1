//! Type definitions

mod resource_key;
mod sweep;

pub use resource_key::ResourceKey;
pub use sweep::{SweepOptions, SweepReport};

// Re-export provider library types
pub use dns_janitor_provider::{DnsRecordType, ProviderType, RecordSet, Zone};
