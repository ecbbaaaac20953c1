//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::pin::pin;
use std::sync::Arc;

use aws_config::{BehaviorVersion, Region};
use futures::TryStreamExt;

use dns_janitor_provider::{
    ProviderSession, RecordSet, ZoneProvider, create_provider, record_set_pages, zone_pages,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试记录前缀（秒级时间戳，足够区分并发运行）
pub fn generate_test_record_label() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("_janitor-test-{secs}")
}

/// 集成测试上下文
pub struct TestContext {
    pub provider: Arc<dyn ZoneProvider>,
    /// 原生 SDK client，用于创建测试记录（provider 只会删除）
    pub client: aws_sdk_route53::Client,
    /// 测试 hosted zone 名称（带结尾的点）
    pub zone_name: String,
}

impl TestContext {
    /// 创建 Route 53 测试上下文
    ///
    /// 凭证来自 AWS SDK 默认链；`TEST_ZONE` 为测试用 hosted zone。
    pub async fn route53() -> Option<Self> {
        let region = env::var("AWS_REGION").ok()?;
        let mut zone_name = env::var("TEST_ZONE").ok()?;
        if !zone_name.ends_with('.') {
            zone_name.push('.');
        }

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region))
            .load()
            .await;
        let client = aws_sdk_route53::Client::new(&config);
        let provider = create_provider(ProviderSession::Route53(config));

        Some(Self {
            provider,
            client,
            zone_name,
        })
    }

    /// 查找测试 zone 的 id
    pub async fn find_zone_id(&self) -> Option<String> {
        let mut pages = pin!(zone_pages(self.provider.as_ref()));
        while let Some(zones) = pages.try_next().await.ok()? {
            if let Some(zone) = zones.into_iter().find(|z| z.name == self.zone_name) {
                return Some(zone.id);
            }
        }
        None
    }

    /// 列出 zone 中所有记录
    pub async fn list_all_record_sets(&self, zone_id: &str) -> Option<Vec<RecordSet>> {
        let pages: Vec<Vec<RecordSet>> = record_set_pages(self.provider.as_ref(), zone_id)
            .try_collect()
            .await
            .ok()?;
        Some(pages.into_iter().flatten().collect())
    }

    /// 通过 SDK 直接创建一条 TXT 测试记录，返回完整记录名
    pub async fn create_test_record(&self, zone_id: &str) -> Option<String> {
        use aws_sdk_route53::types::{
            Change, ChangeAction, ChangeBatch, ResourceRecord, ResourceRecordSet, RrType,
        };

        let name = format!("{}.{}", generate_test_record_label(), self.zone_name);
        let rrs = ResourceRecordSet::builder()
            .name(&name)
            .r#type(RrType::Txt)
            .ttl(60)
            .resource_records(
                ResourceRecord::builder()
                    .value("\"integration-test\"")
                    .build()
                    .ok()?,
            )
            .build()
            .ok()?;
        let change = Change::builder()
            .action(ChangeAction::Create)
            .resource_record_set(rrs)
            .build()
            .ok()?;

        self.client
            .change_resource_record_sets()
            .hosted_zone_id(zone_id)
            .change_batch(ChangeBatch::builder().changes(change).build().ok()?)
            .send()
            .await
            .ok()?;

        Some(name)
    }

    /// 查找并清理所有测试记录（以 _janitor-test- 开头的记录）
    pub async fn cleanup_all_test_records(&self, zone_id: &str) {
        let Some(records) = self.list_all_record_sets(zone_id).await else {
            return;
        };
        let leftovers: Vec<RecordSet> = records
            .into_iter()
            .filter(|r| r.name.starts_with("_janitor-test-"))
            .collect();
        if !leftovers.is_empty() {
            let _ = self.provider.delete_record_sets(zone_id, &leftovers).await;
        }
    }
}
