//! In-memory first-seen tracker with JSON persistence

use std::collections::{BTreeMap, HashSet};
use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::traits::Tracker;
use crate::types::ResourceKey;

#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct Stamp(#[serde(with = "crate::utils::datetime")] DateTime<Utc>);

/// First-seen times of every resource the janitor has observed
///
/// A run marks what it sees, then calls [`mark_complete`](Self::mark_complete)
/// to forget resources that no longer exist. The map is carried between runs
/// with [`load`](Self::load) / [`save`](Self::save).
#[derive(Debug, Clone)]
pub struct ResourceSet {
    first_seen: BTreeMap<ResourceKey, DateTime<Utc>>,
    marked: HashSet<ResourceKey>,
    swept: Vec<ResourceKey>,
    ttl: TimeDelta,
}

impl ResourceSet {
    /// Empty set; resources older than `ttl` are reported for deletion.
    pub fn new(ttl: TimeDelta) -> Self {
        Self {
            first_seen: BTreeMap::new(),
            marked: HashSet::new(),
            swept: Vec::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.first_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &ResourceKey> {
        self.first_seen.keys()
    }

    /// Keys reported for deletion in this run.
    pub fn swept(&self) -> &[ResourceKey] {
        &self.swept
    }

    pub(crate) fn mark_at(
        &mut self,
        key: &ResourceKey,
        created: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> bool {
        self.marked.insert(key.clone());

        let since = match (self.first_seen.get(key), created) {
            (Some(first), _) => *first,
            (None, Some(created)) => {
                self.first_seen.insert(key.clone(), created);
                created
            }
            (None, None) => {
                self.first_seen.insert(key.clone(), now);
                return false;
            }
        };

        if now - since > self.ttl {
            // record sets sharing a key (routing policies) are reported once
            if !self.swept.contains(key) {
                self.swept.push(key.clone());
            }
            return true;
        }
        false
    }

    /// Finish a run: drop every key not marked since the last call.
    ///
    /// Returns the number of keys reported for deletion in this run; both the
    /// marks and the swept list start empty for the next one.
    pub fn mark_complete(&mut self) -> usize {
        let marked = std::mem::take(&mut self.marked);
        let swept = std::mem::take(&mut self.swept);
        self.first_seen.retain(|key, _| {
            let keep = marked.contains(key);
            if !keep {
                log::info!("{key}: deleted since last run");
            }
            keep
        });

        if !swept.is_empty() {
            log::warn!("{} resources swept", swept.len());
        }
        swept.len()
    }

    /// Read a set saved by [`save`](Self::save); a missing file is an empty set.
    pub async fn load(path: impl AsRef<Path>, ttl: TimeDelta) -> CoreResult<Self> {
        let path = path.as_ref();
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("no tracker state at {}; starting empty", path.display());
                return Ok(Self::new(ttl));
            }
            Err(e) => {
                return Err(CoreError::StorageError(format!(
                    "read {}: {e}",
                    path.display()
                )));
            }
        };

        let stored: BTreeMap<ResourceKey, Stamp> = serde_json::from_slice(&bytes)
            .map_err(|e| CoreError::SerializationError(format!("{}: {e}", path.display())))?;

        let mut set = Self::new(ttl);
        set.first_seen = stored
            .into_iter()
            .filter(|(key, _)| {
                let well_formed = key.parts().is_some();
                if !well_formed {
                    log::warn!("dropping malformed tracker key {key:?} from {}", path.display());
                }
                well_formed
            })
            .map(|(key, Stamp(at))| (key, at))
            .collect();
        log::debug!("loaded {} tracked resources from {}", set.len(), path.display());
        Ok(set)
    }

    /// Write the first-seen map as JSON (`{ key: rfc3339 }`).
    ///
    /// The file is replaced atomically.
    pub async fn save(&self, path: impl AsRef<Path>) -> CoreResult<()> {
        let path = path.as_ref();
        let stored: BTreeMap<&ResourceKey, Stamp> = self
            .first_seen
            .iter()
            .map(|(k, at)| (k, Stamp(*at)))
            .collect();
        let json = serde_json::to_vec_pretty(&stored)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        let tmp = path.with_extension("tmp");
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| CoreError::StorageError(format!("write {}: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, path)
            .await
            .map_err(|e| CoreError::StorageError(format!("rename to {}: {e}", path.display())))?;
        Ok(())
    }
}

impl Tracker for ResourceSet {
    fn mark(&mut self, key: &ResourceKey, created: Option<DateTime<Utc>>) -> bool {
        self.mark_at(key, created, Utc::now())
    }

    fn first_seen(&self, key: &ResourceKey) -> Option<DateTime<Utc>> {
        self.first_seen.get(key).copied()
    }

    fn record_first_seen(&mut self, key: ResourceKey, at: DateTime<Utc>) {
        self.first_seen.insert(key, at);
    }
}
