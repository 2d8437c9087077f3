//! Placeholder crawler.
//!
//! Stands in for a real spider engine: waits out a startup delay and then a
//! crawl delay, and always succeeds. A real integration implements
//! [`BaseCrawler`] and replaces this type in [`ServerDeps`](super::ServerDeps).

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use super::{BaseCrawler, CrawlTask};

pub struct SimulatedCrawler {
    startup_delay: Duration,
    crawl_duration: Duration,
}

impl SimulatedCrawler {
    pub fn new(startup_delay: Duration, crawl_duration: Duration) -> Self {
        Self {
            startup_delay,
            crawl_duration,
        }
    }
}

impl Default for SimulatedCrawler {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), Duration::from_secs(3))
    }
}

#[async_trait]
impl BaseCrawler for SimulatedCrawler {
    async fn crawl(&self, task: &CrawlTask) -> Result<()> {
        tokio::time::sleep(self.startup_delay).await;

        let start_urls = task.start_urls();
        info!(
            spider = %task.spider,
            start_urls = ?start_urls,
            "starting spider"
        );

        tokio::time::sleep(self.crawl_duration).await;

        info!(spider = %task.spider, "spider finished");
        Ok(())
    }
}
