//! Collection crawling.
//!
//! # Responsibilities
//! - Walk a paginated listing from page 1 while `next` is present
//! - Pace consecutive requests so the shared upstream is not hammered
//! - Stop at a hard page ceiling and say so
//!
//! # Design Decisions
//! - The caller supplies the page fetch, already bound to its filters
//! - Any page failure aborts the crawl; partial results are dropped
//! - A truncated crawl still reports the server's true `count`

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::client::ApiResult;
use crate::config::CrawlConfig;
use crate::model::Paginated;
use crate::observability::metrics;
use crate::resilience::{Sleeper, TokioSleeper};

/// Result of a crawl: best-effort complete.
#[derive(Debug, Clone, PartialEq)]
pub struct Crawl<T> {
    /// Every result received, in server order.
    pub items: Vec<T>,
    /// Collection size reported by the server.
    pub count: u64,
    pub pages_fetched: u32,
    /// The page ceiling stopped the crawl while more pages remained.
    pub truncated: bool,
}

impl<T> Crawl<T> {
    /// Whether `items` is known to hold the whole collection.
    pub fn is_complete(&self) -> bool {
        !self.truncated && self.items.len() as u64 >= self.count
    }
}

/// Materializes paginated listings.
#[derive(Clone)]
pub struct CollectionCrawler {
    config: CrawlConfig,
    sleeper: Arc<dyn Sleeper>,
}

impl CollectionCrawler {
    pub fn new(config: CrawlConfig, sleeper: Arc<dyn Sleeper>) -> Self {
        Self { config, sleeper }
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Fetch pages `1, 2, ...` through `fetch_page` and concatenate their results.
    pub async fn crawl<T, F, Fut>(&self, mut fetch_page: F) -> ApiResult<Crawl<T>>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = ApiResult<Paginated<T>>>,
    {
        let max_pages = self.config.max_pages.max(1);
        let delay = Duration::from_millis(self.config.page_delay_ms);
        let mut items = Vec::new();
        let mut page = 1;

        loop {
            let response = match fetch_page(page).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!(page, collected = items.len(), error = %e, "Crawl aborted");
                    return Err(e);
                }
            };
            metrics::record_crawl_page();

            let count = response.count;
            let has_next = response.next.is_some();
            let received = response.results.len();
            items.extend(response.results);

            tracing::debug!(page, received, collected = items.len(), count, "Fetched page");

            if !has_next {
                return Ok(Crawl {
                    items,
                    count,
                    pages_fetched: page,
                    truncated: false,
                });
            }

            if page >= max_pages {
                tracing::warn!(
                    pages = page,
                    collected = items.len(),
                    count,
                    "Page ceiling reached, returning partial collection"
                );
                return Ok(Crawl {
                    items,
                    count,
                    pages_fetched: page,
                    truncated: true,
                });
            }

            self.sleeper.sleep(delay).await;
            page += 1;
        }
    }
}

impl Default for CollectionCrawler {
    fn default() -> Self {
        Self::new(CrawlConfig::default(), Arc::new(TokioSleeper))
    }
}

impl std::fmt::Debug for CollectionCrawler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionCrawler")
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ApiError;
    use crate::resilience::RecordingSleeper;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn page(start: u32, len: u32, count: u64, more: bool) -> Paginated<u32> {
        Paginated {
            count,
            next: more.then(|| format!("?page={}", start / 20 + 2)),
            previous: None,
            results: (start..start + len).collect(),
        }
    }

    fn crawler(sleeper: &RecordingSleeper) -> CollectionCrawler {
        CollectionCrawler::new(CrawlConfig::default(), Arc::new(sleeper.clone()))
    }

    #[tokio::test]
    async fn test_three_pages_in_order() {
        let sleeper = RecordingSleeper::new();
        let calls = AtomicU32::new(0);

        let crawl = crawler(&sleeper)
            .crawl(|n| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    Ok(match n {
                        1 => page(0, 20, 47, true),
                        2 => page(20, 20, 47, true),
                        _ => page(40, 7, 47, false),
                    })
                }
            })
            .await
            .unwrap();

        assert_eq!(crawl.items, (0..47).collect::<Vec<u32>>());
        assert_eq!(crawl.count, 47);
        assert_eq!(crawl.pages_fetched, 3);
        assert!(!crawl.truncated);
        assert!(crawl.is_complete());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(sleeper.recorded(), vec![Duration::from_millis(200); 2]);
    }

    #[tokio::test]
    async fn test_stops_at_page_ceiling() {
        let sleeper = RecordingSleeper::new();
        let calls = AtomicU32::new(0);

        let crawl = crawler(&sleeper)
            .crawl(|n| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Ok(page((n - 1) * 20, 20, 5000, true)) }
            })
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 10);
        assert_eq!(crawl.pages_fetched, 10);
        assert_eq!(crawl.items.len(), 200);
        assert_eq!(crawl.count, 5000);
        assert!(crawl.truncated);
        assert!(!crawl.is_complete());
        assert_eq!(sleeper.recorded().len(), 9);
    }

    #[tokio::test]
    async fn test_single_page_does_not_sleep() {
        let sleeper = RecordingSleeper::new();
        let crawl = crawler(&sleeper)
            .crawl(|_| async { Ok(page(0, 3, 3, false)) })
            .await
            .unwrap();

        assert_eq!(crawl.items, vec![0, 1, 2]);
        assert!(sleeper.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_failure_aborts_crawl() {
        let sleeper = RecordingSleeper::new();
        let calls = AtomicU32::new(0);

        let result = crawler(&sleeper)
            .crawl(|n| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n == 2 {
                        Err(ApiError::RetriesExhausted { attempts: 5 })
                    } else {
                        Ok(page(0, 20, 60, true))
                    }
                }
            })
            .await;

        assert_eq!(result, Err(ApiError::RetriesExhausted { attempts: 5 }));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_configured_limits() {
        let sleeper = RecordingSleeper::new();
        let crawler = CollectionCrawler::new(
            CrawlConfig {
                page_delay_ms: 5,
                max_pages: 2,
            },
            Arc::new(sleeper.clone()),
        );

        let crawl = crawler
            .crawl(|n| async move { Ok(page((n - 1) * 20, 20, 100, true)) })
            .await
            .unwrap();

        assert_eq!(crawl.pages_fetched, 2);
        assert!(crawl.truncated);
        assert_eq!(sleeper.recorded(), vec![Duration::from_millis(5)]);
    }

    #[tokio::test]
    async fn test_short_collection_is_incomplete_without_truncation() {
        let sleeper = RecordingSleeper::new();
        let crawl = crawler(&sleeper)
            .crawl(|_| async { Ok(page(0, 5, 8, false)) })
            .await
            .unwrap();

        assert!(!crawl.truncated);
        assert!(!crawl.is_complete());
    }
}
