//! First-seen tracking trait

use chrono::{DateTime, Utc};

use crate::types::ResourceKey;

/// First-seen tracker shared by all resource handlers of one janitor run
///
/// Implementations:
/// - [`ResourceSet`](crate::ResourceSet): in-memory map, persisted as JSON between runs
///
/// Handlers only ever touch keys with their own provider prefix, so one
/// tracker can be passed to every handler in turn.
pub trait Tracker: Send {
    /// Note that `key` was seen in this run
    ///
    /// # Arguments
    /// * `key` - resource identity
    /// * `created` - creation time reported by the provider, if it has one
    ///
    /// # Returns
    /// * `true` - the resource has been known for longer than the retention
    ///   window and should be deleted
    /// * `false` - too young, or seen for the first time (first-seen is recorded)
    fn mark(&mut self, key: &ResourceKey, created: Option<DateTime<Utc>>) -> bool;

    /// When `key` was first seen, if ever
    fn first_seen(&self, key: &ResourceKey) -> Option<DateTime<Utc>>;

    /// Overwrite the first-seen time of `key` (inventory seeding)
    fn record_first_seen(&mut self, key: ResourceKey, at: DateTime<Utc>);
}
