use serde::{Deserialize, Serialize};

/// Inputs of one janitor run against one account/region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepOptions {
    /// Account identifier (only used for error context and logs)
    pub account: String,
    /// Region the session is bound to
    pub region: String,
    /// Compute and mark, but issue no deletions
    #[serde(default)]
    pub dry_run: bool,
}

impl SweepOptions {
    #[must_use]
    pub fn new(account: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            region: region.into(),
            dry_run: false,
        }
    }

    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Counters of one sweep
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepReport {
    /// Zones returned by the provider
    pub zones_seen: usize,
    /// Zones that passed the zone filter
    pub zones_managed: usize,
    /// Record sets listed in managed zones
    pub records_seen: usize,
    /// Record sets that passed the record filter and were marked
    pub records_marked: usize,
    /// Marked record sets old enough to delete
    pub candidates: usize,
    /// Delete batches submitted
    pub delete_requests: usize,
    /// Record sets removed by successful batches
    pub records_deleted: usize,
    /// Delete batches the provider rejected
    pub failed_requests: usize,
}

impl SweepReport {
    /// Whether every submitted delete batch succeeded.
    pub fn is_clean(&self) -> bool {
        self.failed_requests == 0
    }
}
