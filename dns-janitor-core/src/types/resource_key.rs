use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use dns_janitor_provider::RecordSet;

const SEPARATOR: &str = "::";

/// Stable identity of one record set (format: `provider::zone_id::type::name`)
///
/// Used as the tracker lookup key and as the identity printed in logs. Keys of
/// different providers or resource families never collide because of the
/// provider prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceKey(String);

impl ResourceKey {
    /// Join the parts into a key
    #[must_use]
    pub fn new(provider: &str, zone_id: &str, record_type: &str, record_name: &str) -> Self {
        Self(format!(
            "{provider}{SEPARATOR}{zone_id}{SEPARATOR}{record_type}{SEPARATOR}{record_name}"
        ))
    }

    /// Key of a record set listed from `provider`
    #[must_use]
    pub fn for_record_set(provider: &str, record_set: &RecordSet) -> Self {
        Self::new(
            provider,
            &record_set.zone_id,
            record_set.record_type.as_str(),
            &record_set.name,
        )
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split back into `(provider, zone_id, record_type, record_name)`
    ///
    /// The record name is the remainder after the third separator, so names
    /// are returned whole.
    #[must_use]
    pub fn parts(&self) -> Option<(&str, &str, &str, &str)> {
        let mut it = self.0.splitn(4, SEPARATOR);
        match (it.next(), it.next(), it.next(), it.next()) {
            (Some(p), Some(z), Some(t), Some(n)) if !p.is_empty() && !z.is_empty() => {
                Some((p, z, t, n))
            }
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ResourceKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for ResourceKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}
