use async_trait::async_trait;
use scraper::{Html, Selector};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::browser::BrowserSession;
use crate::error::{ScrapeError, ScrapeResult};

/// In-memory pages keyed by URL. Navigating to an unknown URL fails.
#[derive(Default)]
pub struct FixtureSession {
    pages: HashMap<String, String>,
    current: Option<String>,
    pub visited: Vec<String>,
    closed: Arc<AtomicBool>,
}

impl FixtureSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    /// Handle that stays readable after the session has been moved and closed.
    pub fn closed_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.closed)
    }

    fn current_html(&self) -> ScrapeResult<&str> {
        self.current
            .as_ref()
            .and_then(|url| self.pages.get(url))
            .map(String::as_str)
            .ok_or_else(|| ScrapeError::Snapshot("no page loaded".to_string()))
    }
}

#[async_trait]
impl BrowserSession for FixtureSession {
    async fn navigate(&mut self, url: &str) -> ScrapeResult<()> {
        self.visited.push(url.to_string());
        if !self.pages.contains_key(url) {
            return Err(ScrapeError::Navigation {
                url: url.to_string(),
                reason: "net::ERR_NAME_NOT_RESOLVED".to_string(),
            });
        }
        self.current = Some(url.to_string());
        Ok(())
    }

    async fn wait_for(&self, selector: &str, timeout: Duration) -> ScrapeResult<()> {
        let html = self.current_html()?;
        let parsed =
            Selector::parse(selector).map_err(|_| ScrapeError::Selector(selector.to_string()))?;
        let found = Html::parse_document(html).select(&parsed).next().is_some();
        if found {
            Ok(())
        } else {
            Err(ScrapeError::Timeout {
                selector: selector.to_string(),
                seconds: timeout.as_secs(),
            })
        }
    }

    async fn page_source(&self) -> ScrapeResult<String> {
        self.current_html().map(str::to_string)
    }

    async fn current_url(&self) -> ScrapeResult<String> {
        self.current
            .clone()
            .ok_or_else(|| ScrapeError::Snapshot("no page loaded".to_string()))
    }

    async fn close(&mut self) -> ScrapeResult<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
