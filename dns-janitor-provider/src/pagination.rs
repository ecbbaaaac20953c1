//! Lazy page streams over [`ZoneProvider`] list calls.
//!
//! Each stream issues the next list request only when polled, ends after the
//! page whose `next` cursor is `None`, and yields at most one error (the
//! stream is finished afterwards). Dropping the stream halts enumeration.

use futures::Stream;
use futures::stream;

use crate::error::{ProviderError, Result};
use crate::traits::ZoneProvider;
use crate::types::{PageCursor, RecordSet, Zone};

/// Pagination state: `None` once the last page was returned.
type Pending = Option<Option<PageCursor>>;

/// Stream every page of hosted zones.
pub fn zone_pages<'a>(
    provider: &'a dyn ZoneProvider,
) -> impl Stream<Item = Result<Vec<Zone>>> + 'a {
    let start: Pending = Some(None);
    stream::try_unfold(start, move |state| async move {
        let Some(cursor) = state else {
            return Ok(None);
        };
        let page = provider.list_zones(cursor.as_ref()).await?;
        Ok::<_, ProviderError>(Some((page.items, page.next.map(Some))))
    })
}

/// Stream every page of record sets in `zone_id`.
pub fn record_set_pages<'a>(
    provider: &'a dyn ZoneProvider,
    zone_id: &'a str,
) -> impl Stream<Item = Result<Vec<RecordSet>>> + 'a {
    let start: Pending = Some(None);
    stream::try_unfold(start, move |state| async move {
        let Some(cursor) = state else {
            return Ok(None);
        };
        let page = provider.list_record_sets(zone_id, cursor.as_ref()).await?;
        Ok::<_, ProviderError>(Some((page.items, page.next.map(Some))))
    })
}

#[cfg(test)]
mod tests {
    use std::pin::pin;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use futures::TryStreamExt;

    use super::*;
    use crate::types::{ChangeInfo, DnsRecordType, Page, ProviderLimits};

    /// Serves `pages` zone pages of two zones each; optionally fails on one page.
    struct PagedProvider {
        pages: usize,
        fail_on: Option<usize>,
        calls: AtomicUsize,
    }

    impl PagedProvider {
        fn new(pages: usize, fail_on: Option<usize>) -> Self {
            Self {
                pages,
                fail_on,
                calls: AtomicUsize::new(0),
            }
        }

        fn page_index(cursor: Option<&PageCursor>) -> usize {
            match cursor {
                Some(PageCursor::Marker(m)) => m.parse().unwrap_or(0),
                _ => 0,
            }
        }

        fn next_cursor(&self, index: usize) -> Option<PageCursor> {
            (index + 1 < self.pages).then(|| PageCursor::Marker((index + 1).to_string()))
        }
    }

    #[async_trait]
    impl ZoneProvider for PagedProvider {
        fn id(&self) -> &'static str {
            "paged"
        }

        fn limits(&self) -> ProviderLimits {
            ProviderLimits {
                max_changes_per_batch: 1000,
                max_page_size_zones: 2,
                max_page_size_records: 2,
            }
        }

        async fn list_zones(&self, cursor: Option<&PageCursor>) -> Result<Page<Zone>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let index = Self::page_index(cursor);
            if self.fail_on == Some(index) {
                return Err(ProviderError::NetworkError {
                    provider: "paged".to_string(),
                    detail: format!("page {index}"),
                });
            }
            let items = (0..2)
                .map(|i| Zone::new(format!("Z{index}-{i}"), format!("z{index}-{i}.example.")))
                .collect();
            Ok(Page::new(items, self.next_cursor(index)))
        }

        async fn list_record_sets(
            &self,
            zone_id: &str,
            cursor: Option<&PageCursor>,
        ) -> Result<Page<RecordSet>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let index = Self::page_index(cursor);
            let items = vec![RecordSet::new(
                zone_id,
                format!("r{index}.example."),
                DnsRecordType::A,
            )];
            Ok(Page::new(items, self.next_cursor(index)))
        }

        async fn delete_record_sets(
            &self,
            _zone_id: &str,
            record_sets: &[RecordSet],
        ) -> Result<ChangeInfo> {
            Ok(ChangeInfo {
                id: "C1".to_string(),
                status: "PENDING".to_string(),
                change_count: record_sets.len(),
            })
        }
    }

    #[tokio::test]
    async fn zone_pages_walks_every_page_once() {
        let provider = PagedProvider::new(3, None);
        let pages: Vec<Vec<Zone>> = zone_pages(&provider).try_collect().await.unwrap();

        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2][1].id, "Z2-1");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn zone_pages_is_lazy_and_can_stop_early() {
        let provider = PagedProvider::new(5, None);
        {
            let mut pages = pin!(zone_pages(&provider));
            let first = pages.try_next().await.unwrap();
            assert!(first.is_some());
        }
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn zone_pages_stops_after_error() {
        let provider = PagedProvider::new(4, Some(1));
        let mut pages = pin!(zone_pages(&provider));

        assert!(pages.try_next().await.unwrap().is_some());
        assert!(pages.try_next().await.is_err());
        assert!(pages.try_next().await.unwrap().is_none());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn record_set_pages_passes_zone_id() {
        let provider = PagedProvider::new(2, None);
        let pages: Vec<Vec<RecordSet>> = record_set_pages(&provider, "Z9")
            .try_collect()
            .await
            .unwrap();

        assert_eq!(pages.len(), 2);
        assert!(pages.iter().flatten().all(|r| r.zone_id == "Z9"));
    }
}
