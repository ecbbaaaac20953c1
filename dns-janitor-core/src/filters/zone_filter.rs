use std::collections::BTreeSet;

use dns_janitor_provider::Zone;

/// Zone the kops e2e jobs create their clusters under.
pub const DEFAULT_MANAGED_ZONE: &str = "test-cncf-aws.k8s.io.";

/// Allow-list of zones whose record sets may be swept
///
/// Names are compared exactly, trailing dot included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneFilter {
    managed: BTreeSet<String>,
}

impl ZoneFilter {
    pub fn new<I, S>(zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            managed: zones.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `zone` is managed. Unmanaged zones are logged and skipped.
    pub fn is_managed(&self, zone: &Zone) -> bool {
        if self.managed.contains(&zone.name) {
            return true;
        }
        log::info!("unknown zone {:?}; ignoring", zone.name);
        false
    }

    pub fn zones(&self) -> impl Iterator<Item = &str> {
        self.managed.iter().map(String::as_str)
    }
}

impl Default for ZoneFilter {
    fn default() -> Self {
        Self::new([DEFAULT_MANAGED_ZONE])
    }
}
