//! DNS Janitor Core Library
//!
//! Mark-and-sweep cleanup of DNS record sets left behind by ephemeral test
//! clusters:
//! - Ownership policy ([`ZoneFilter`], [`RecordFilter`])
//! - First-seen tracking across runs ([`Tracker`], [`ResourceSet`])
//! - Inventory listing ([`InventoryLister`])
//! - Batched, best-effort deletion ([`Sweeper`])
//!
//! Providers are abstracted behind [`ZoneProvider`](dns_janitor_provider::ZoneProvider);
//! credentials and sessions stay with the caller.
//!
//! ```rust,no_run
//! use dns_janitor_core::{JanitorConfig, DnsRecordSetHandler, ResourceHandler, ResourceSet};
//! use dns_janitor_provider::{create_provider, ProviderSession};
//!
//! # async fn run() -> dns_janitor_core::CoreResult<()> {
//! let config = JanitorConfig::load("janitor.toml").await?;
//! let session = ProviderSession::Route53(aws_config::load_from_env().await);
//! let handler = DnsRecordSetHandler::new(
//!     create_provider(session),
//!     config.zone_filter(),
//!     config.record_filter()?,
//! );
//!
//! let mut tracker = ResourceSet::load("janitor-state.json", config.ttl()).await?;
//! let report = handler.mark_and_sweep(&config.sweep_options(), &mut tracker).await?;
//! tracker.mark_complete();
//! tracker.save("janitor-state.json").await?;
//! println!("deleted {} record sets", report.records_deleted);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod filters;
pub mod resource_set;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{JanitorConfig, RecordRuleConfig};
pub use error::{CoreError, CoreResult};
pub use filters::{RecordFilter, RecordRule, ZoneFilter};
pub use resource_set::ResourceSet;
pub use services::{DnsRecordSetHandler, InventoryLister, PageSelection, Sweeper};
pub use traits::{ResourceHandler, Tracker};
pub use types::{ResourceKey, SweepOptions, SweepReport};
