//! Janitor configuration (TOML)
//!
//! ```toml
//! account = "123456789012"
//! region = "us-east-1"
//! dry_run = true
//! ttl_hours = 24
//! managed_zones = ["test-cncf-aws.k8s.io."]
//!
//! [[record_rules]]
//! record_type = "A"
//! pattern = '^api\.e2e-[0-9a-z]{1,10}-[0-9a-f]{5}\.'
//! description = "api"
//! ```
//!
//! Every key is optional; omitted keys keep the built-in kops e2e policy.

use std::path::Path;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use dns_janitor_provider::DnsRecordType;

use crate::error::{CoreError, CoreResult};
use crate::filters::{
    DEFAULT_MANAGED_ZONE, KOPS_E2E_RULES, RecordFilter, RecordRule, ZoneFilter,
};
use crate::resource_set::ResourceSet;
use crate::types::SweepOptions;

const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_TTL_HOURS: u32 = 24;

/// One `[[record_rules]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordRuleConfig {
    pub record_type: DnsRecordType,
    pub pattern: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JanitorConfig {
    /// Account identifier, used in logs and error context
    pub account: String,
    pub region: String,
    pub dry_run: bool,
    /// Retention window: resources first seen longer ago are deleted
    pub ttl_hours: u32,
    /// Zones whose record sets may be deleted (fully qualified, trailing dot)
    pub managed_zones: Vec<String>,
    /// Ordered ownership rules, first match wins
    pub record_rules: Vec<RecordRuleConfig>,
}

impl Default for JanitorConfig {
    fn default() -> Self {
        Self {
            account: String::new(),
            region: DEFAULT_REGION.to_string(),
            dry_run: false,
            ttl_hours: DEFAULT_TTL_HOURS,
            managed_zones: vec![DEFAULT_MANAGED_ZONE.to_string()],
            record_rules: KOPS_E2E_RULES
                .iter()
                .map(|(pattern, description)| RecordRuleConfig {
                    record_type: DnsRecordType::A,
                    pattern: (*pattern).to_string(),
                    description: (*description).to_string(),
                })
                .collect(),
        }
    }
}

impl JanitorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> CoreResult<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| CoreError::ConfigError(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub async fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CoreError::ConfigError(format!("read {}: {e}", path.display())))?;
        Self::from_toml_str(&s)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.region.trim().is_empty() {
            return Err(CoreError::ConfigError("region must not be empty".to_string()));
        }
        if self.managed_zones.is_empty() {
            return Err(CoreError::ConfigError(
                "managed_zones must name at least one zone".to_string(),
            ));
        }
        if let Some(zone) = self.managed_zones.iter().find(|z| !z.ends_with('.')) {
            return Err(CoreError::ConfigError(format!(
                "managed zone {zone:?} must be fully qualified (trailing dot)"
            )));
        }
        if self.record_rules.is_empty() {
            log::warn!("no record_rules configured; nothing will be swept");
        }
        self.record_filter().map(|_| ())
    }

    pub fn ttl(&self) -> TimeDelta {
        TimeDelta::hours(i64::from(self.ttl_hours))
    }

    pub fn zone_filter(&self) -> ZoneFilter {
        ZoneFilter::new(self.managed_zones.iter().cloned())
    }

    /// Compile the rule table.
    pub fn record_filter(&self) -> CoreResult<RecordFilter> {
        self.record_rules
            .iter()
            .map(|r| RecordRule::new(r.record_type.clone(), &r.pattern, r.description.clone()))
            .collect::<CoreResult<Vec<_>>>()
            .map(RecordFilter::new)
    }

    pub fn sweep_options(&self) -> SweepOptions {
        SweepOptions::new(self.account.clone(), self.region.clone()).dry_run(self.dry_run)
    }

    /// Empty tracker with this configuration's retention window.
    pub fn new_tracker(&self) -> ResourceSet {
        ResourceSet::new(self.ttl())
    }
}
