//! Utility modules.

/// Log sanitization utilities to prevent oversized or sensitive error bodies in logs.
pub mod log_sanitizer;
