//! 业务逻辑服务层

mod inventory_service;
mod record_set_handler;
mod sweep_service;

pub use inventory_service::InventoryLister;
pub use record_set_handler::DnsRecordSetHandler;
pub use sweep_service::{PageSelection, Sweeper};

use dns_janitor_provider::{ProviderError, Zone};

use crate::error::CoreError;
use crate::types::SweepOptions;

/// 包装枚举失败，附带账户/区域/zone 上下文
///
/// 枚举失败会中止整个 region 的处理，在这里按 `is_expected` 选择日志级别。
pub(crate) fn listing_error(
    provider: &str,
    options: &SweepOptions,
    zone: Option<&Zone>,
    source: ProviderError,
) -> CoreError {
    let err = CoreError::Listing {
        provider: provider.to_string(),
        account: options.account.clone(),
        region: options.region.clone(),
        zone: zone.map(|z| z.id.clone()),
        source,
    };
    if err.is_expected() {
        log::warn!("{err}");
    } else {
        log::error!("{err}");
    }
    err
}
