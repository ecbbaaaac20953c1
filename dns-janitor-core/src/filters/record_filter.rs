use regex::Regex;

use dns_janitor_provider::{DnsRecordType, RecordSet};

use crate::error::{CoreError, CoreResult};

/// kops e2e cluster records: `(pattern, description)`, all of type `A`.
///
/// Each pattern requires the `e2e-<id>-<hash>` cluster token, e.g.
/// `api.e2e-71149fffac-dba53.test-cncf-aws.k8s.io.`.
pub(crate) const KOPS_E2E_RULES: &[(&str, &str)] = &[
    (r"^api\.e2e-[0-9a-z]{1,10}-[0-9a-f]{5}\.", "api"),
    (r"^api\.internal\.e2e-[0-9a-z]{1,10}-[0-9a-f]{5}\.", "api internal"),
    (r"^etcd-[a-z]\.internal\.e2e-[0-9a-z]{1,10}-[0-9a-f]{5}\.", "etcd"),
    (
        r"^etcd-events-[a-z]\.internal\.e2e-[0-9a-z]{1,10}-[0-9a-f]{5}\.",
        "etcd-events",
    ),
];

/// One ownership rule: a record type plus a name pattern
#[derive(Debug, Clone)]
pub struct RecordRule {
    pub record_type: DnsRecordType,
    pub pattern: Regex,
    pub description: String,
}

impl RecordRule {
    pub fn new(
        record_type: DnsRecordType,
        pattern: &str,
        description: impl Into<String>,
    ) -> CoreResult<Self> {
        let description = description.into();
        let pattern = Regex::new(pattern).map_err(|e| CoreError::InvalidPattern {
            rule: description.clone(),
            detail: e.to_string(),
        })?;
        Ok(Self {
            record_type,
            pattern,
            description,
        })
    }

    pub fn matches(&self, record_set: &RecordSet) -> bool {
        record_set.record_type == self.record_type && self.pattern.is_match(&record_set.name)
    }
}

/// Ordered rule table deciding which record sets are deletion candidates
///
/// Rules are evaluated in order and the first match wins. A record set no rule
/// matches is never deleted.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    rules: Vec<RecordRule>,
}

impl RecordFilter {
    pub fn new(rules: Vec<RecordRule>) -> Self {
        Self { rules }
    }

    /// The built-in kops e2e policy.
    pub fn kops_e2e() -> CoreResult<Self> {
        KOPS_E2E_RULES
            .iter()
            .map(|(pattern, description)| RecordRule::new(DnsRecordType::A, pattern, *description))
            .collect::<CoreResult<Vec<_>>>()
            .map(Self::new)
    }

    /// First rule matching `record_set`.
    pub fn matching_rule(&self, record_set: &RecordSet) -> Option<&RecordRule> {
        self.rules.iter().find(|rule| rule.matches(record_set))
    }

    /// Whether `record_set` is managed.
    ///
    /// Record types no rule covers are skipped silently; a covered type with
    /// an unrecognised name is logged.
    pub fn is_managed(&self, record_set: &RecordSet) -> bool {
        if self.matching_rule(record_set).is_some() {
            return true;
        }
        if self
            .rules
            .iter()
            .any(|rule| rule.record_type == record_set.record_type)
        {
            log::info!("ignoring unmanaged name {:?}", record_set.name);
        }
        false
    }

    pub fn rules(&self) -> &[RecordRule] {
        &self.rules
    }
}
