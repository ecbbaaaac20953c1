//! Log sanitization utilities
//!
//! AWS error bodies can be long (`SignatureDoesNotMatch` echoes the whole
//! canonical request) and embed the caller's access key id in the credential
//! scope. Everything that reaches a log line or an error detail goes through
//! [`sanitize_for_log`].

/// Maximum number of bytes kept from a message.
const TRUNCATE_LIMIT: usize = 256;

/// Prefixes of AWS access key ids (long-term and STS).
const ACCESS_KEY_PREFIXES: &[&str] = &["AKIA", "ASIA"];

/// Length of an AWS access key id.
const ACCESS_KEY_LEN: usize = 20;

/// Largest char boundary at or below `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Cut `s` to at most [`TRUNCATE_LIMIT`] bytes, noting the original size.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    format!(
        "{}... [truncated, total {} bytes]",
        &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
        s.len()
    )
}

/// Replace anything shaped like an access key id with its prefix and `****`.
pub fn redact_access_keys(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = ACCESS_KEY_PREFIXES
        .iter()
        .filter_map(|p| rest.find(p))
        .min()
    {
        let candidate = &rest[pos..];
        let key_len = candidate
            .bytes()
            .take(ACCESS_KEY_LEN)
            .take_while(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
            .count();
        out.push_str(&rest[..pos]);
        if key_len == ACCESS_KEY_LEN {
            out.push_str(&candidate[..4]);
            out.push_str("****");
        } else {
            out.push_str(&candidate[..key_len.max(4)]);
        }
        rest = &candidate[key_len.max(4)..];
    }
    out.push_str(rest);
    out
}

/// Redact then truncate.
pub fn sanitize_for_log(s: &str) -> String {
    truncate_for_log(&redact_access_keys(s))
}
