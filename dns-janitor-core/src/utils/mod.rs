//! Utility modules.

/// First-seen timestamp serde helpers.
pub mod datetime;
