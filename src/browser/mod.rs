use async_trait::async_trait;
use std::time::Duration;

use crate::error::ScrapeResult;

mod chrome;
#[cfg(test)]
pub mod fixture;

pub use chrome::ChromeSession;

/// What the scraping core needs from a browser. Element lookups, text and
/// attributes are read from the `page_source` snapshot, so this stays small.
#[async_trait]
pub trait BrowserSession: Send + Sync {
    async fn navigate(&mut self, url: &str) -> ScrapeResult<()>;

    /// Block until `selector` matches on the current page or `timeout` elapses.
    async fn wait_for(&self, selector: &str, timeout: Duration) -> ScrapeResult<()>;

    async fn page_source(&self) -> ScrapeResult<String>;

    async fn current_url(&self) -> ScrapeResult<String>;

    async fn close(&mut self) -> ScrapeResult<()>;
}
