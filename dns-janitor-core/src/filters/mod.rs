//! Ownership policy: which zones and record sets the janitor may delete.
//!
//! Both filters are deny-by-default. A zone is only entered when its name is
//! on the allow-list; inside it, a record set is only a candidate when a rule
//! of the record filter matches it.

mod record_filter;
mod zone_filter;

pub(crate) use record_filter::KOPS_E2E_RULES;
pub use record_filter::{RecordFilter, RecordRule};
pub use zone_filter::{DEFAULT_MANAGED_ZONE, ZoneFilter};
