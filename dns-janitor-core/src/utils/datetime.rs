//! First-seen timestamp serde helpers for tracker state files.
//!
//! Written as RFC3339 with second precision. Read back from RFC3339, or from
//! a Unix timestamp in seconds (state files written by shell tooling).

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Secs, true))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stored {
        Rfc3339(String),
        UnixSeconds(i64),
    }

    match Stored::deserialize(deserializer)? {
        Stored::Rfc3339(s) => DateTime::parse_from_rfc3339(&s)
            .map(|at| at.with_timezone(&Utc))
            .map_err(|e| D::Error::custom(format!("invalid first-seen time {s:?}: {e}"))),
        Stored::UnixSeconds(secs) => DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| D::Error::custom(format!("first-seen time {secs} out of range"))),
    }
}
