//! Route 53 Provider 集成测试
//!
//! 运行方式:
//! ```bash
//! AWS_PROFILE=xxx AWS_REGION=us-east-1 TEST_ZONE=sandbox.example.com \
//!     cargo test -p dns-janitor-provider --test route53_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use std::pin::pin;

use common::TestContext;
use dns_janitor_provider::{DnsRecordType, ProviderError, zone_pages};
use futures::TryStreamExt;

// ============ 基础测试 ============

#[tokio::test]
#[ignore = "integration test: requires AWS credentials, AWS_REGION and TEST_ZONE"]
async fn test_route53_list_zones() {
    skip_if_no_credentials!("AWS_REGION", "TEST_ZONE");

    let ctx = require_some!(TestContext::route53().await, "创建测试上下文失败");
    let mut pages = pin!(zone_pages(ctx.provider.as_ref()));
    let first = require_ok!(pages.try_next().await, "list_zones 调用失败");
    let zones = require_some!(first, "至少应有一页 zone");
    assert!(!zones.is_empty(), "zone 列表不应为空");

    println!("✓ list_zones 测试通过，第一页 {} 个 zone", zones.len());
}

#[tokio::test]
#[ignore = "integration test: requires AWS credentials, AWS_REGION and TEST_ZONE"]
async fn test_route53_find_test_zone() {
    skip_if_no_credentials!("AWS_REGION", "TEST_ZONE");

    let ctx = require_some!(TestContext::route53().await, "创建测试上下文失败");
    let zone_id = require_some!(ctx.find_zone_id().await, "找不到测试 zone");
    assert!(zone_id.starts_with("/hostedzone/"), "zone id 格式不对: {zone_id}");

    println!("✓ find_zone 测试通过: {zone_id}");
}

#[tokio::test]
#[ignore = "integration test: requires AWS credentials, AWS_REGION and TEST_ZONE"]
async fn test_route53_list_record_sets() {
    skip_if_no_credentials!("AWS_REGION", "TEST_ZONE");

    let ctx = require_some!(TestContext::route53().await, "创建测试上下文失败");
    let zone_id = require_some!(ctx.find_zone_id().await, "找不到测试 zone");
    let records = require_some!(ctx.list_all_record_sets(&zone_id).await, "列出记录失败");

    // 每个 hosted zone 都有 apex 的 SOA 和 NS
    assert!(records.iter().any(|r| r.record_type == DnsRecordType::Soa));
    assert!(records.iter().any(|r| r.record_type == DnsRecordType::Ns));
    assert!(records.iter().all(|r| r.zone_id == zone_id));

    println!("✓ list_record_sets 测试通过，共 {} 条记录", records.len());
}

// ============ 删除测试 ============

#[tokio::test]
#[ignore = "integration test: requires AWS credentials, AWS_REGION and TEST_ZONE"]
async fn test_route53_delete_record_sets() {
    skip_if_no_credentials!("AWS_REGION", "TEST_ZONE");

    let ctx = require_some!(TestContext::route53().await, "创建测试上下文失败");
    let zone_id = require_some!(ctx.find_zone_id().await, "找不到测试 zone");
    ctx.cleanup_all_test_records(&zone_id).await;

    let name = require_some!(ctx.create_test_record(&zone_id).await, "创建测试记录失败");
    let records = require_some!(ctx.list_all_record_sets(&zone_id).await, "列出记录失败");
    let created: Vec<_> = records.into_iter().filter(|r| r.name == name).collect();
    assert_eq!(created.len(), 1, "应能列出刚创建的记录");

    let info = require_ok!(
        ctx.provider.delete_record_sets(&zone_id, &created).await,
        "delete_record_sets 调用失败"
    );
    assert_eq!(info.change_count, 1);

    let after = require_some!(ctx.list_all_record_sets(&zone_id).await, "列出记录失败");
    assert!(after.iter().all(|r| r.name != name), "记录应已删除");

    println!("✓ delete_record_sets 测试通过: {name} ({})", info.status);
}

#[tokio::test]
#[ignore = "integration test: requires AWS credentials, AWS_REGION and TEST_ZONE"]
async fn test_route53_delete_twice_is_rejected() {
    skip_if_no_credentials!("AWS_REGION", "TEST_ZONE");

    let ctx = require_some!(TestContext::route53().await, "创建测试上下文失败");
    let zone_id = require_some!(ctx.find_zone_id().await, "找不到测试 zone");

    let name = require_some!(ctx.create_test_record(&zone_id).await, "创建测试记录失败");
    let records = require_some!(ctx.list_all_record_sets(&zone_id).await, "列出记录失败");
    let created: Vec<_> = records.into_iter().filter(|r| r.name == name).collect();

    require_ok!(
        ctx.provider.delete_record_sets(&zone_id, &created).await,
        "第一次删除失败"
    );
    let second = ctx.provider.delete_record_sets(&zone_id, &created).await;
    assert!(
        matches!(second, Err(ProviderError::InvalidChangeBatch { .. })),
        "重复删除应被拒绝: {second:?}"
    );

    println!("✓ 重复删除测试通过");
}
