use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout};
use tracing::{info, warn};

use crate::browser::BrowserSession;
use crate::config::Config;
use crate::error::{ScrapeError, ScrapeResult};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct ChromeSession {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
}

impl ChromeSession {
    pub async fn launch(config: &Config) -> ScrapeResult<Self> {
        let mut builder = BrowserConfig::builder()
            .window_size(config.window_width, config.window_height)
            .no_sandbox()
            .arg("--disable-gpu")
            .arg("--disable-notifications")
            .arg("--disable-dev-shm-usage")
            .arg(format!("--user-agent={}", config.user_agent));

        if !config.headless {
            builder = builder.with_head();
        }

        let browser_config = builder.build().map_err(ScrapeError::Launch)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| ScrapeError::Launch(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    warn!("Browser handler event error: {}", e);
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ScrapeError::Launch(format!("could not open tab: {}", e)))?;

        info!(
            "Launched Chromium (headless: {}, window: {}x{})",
            config.headless, config.window_width, config.window_height
        );

        Ok(Self {
            browser,
            page,
            handler_task,
        })
    }
}

#[async_trait]
impl BrowserSession for ChromeSession {
    async fn navigate(&mut self, url: &str) -> ScrapeResult<()> {
        self.page
            .goto(url)
            .await
            .map_err(|e| ScrapeError::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }

    async fn wait_for(&self, selector: &str, wait: Duration) -> ScrapeResult<()> {
        let poll = async {
            loop {
                if self.page.find_element(selector).await.is_ok() {
                    return;
                }
                sleep(POLL_INTERVAL).await;
            }
        };

        timeout(wait, poll).await.map_err(|_| ScrapeError::Timeout {
            selector: selector.to_string(),
            seconds: wait.as_secs(),
        })
    }

    async fn page_source(&self) -> ScrapeResult<String> {
        self.page
            .content()
            .await
            .map_err(|e| ScrapeError::Snapshot(e.to_string()))
    }

    async fn current_url(&self) -> ScrapeResult<String> {
        self.page
            .url()
            .await
            .map_err(|e| ScrapeError::Snapshot(e.to_string()))?
            .ok_or_else(|| ScrapeError::Snapshot("page has no URL".to_string()))
    }

    async fn close(&mut self) -> ScrapeResult<()> {
        let result = self.browser.close().await;
        if let Err(e) = self.browser.wait().await {
            warn!("Browser process did not exit cleanly: {}", e);
        }
        self.handler_task.abort();
        result
            .map(|_| ())
            .map_err(|e| ScrapeError::Browser(format!("close failed: {}", e)))
    }
}
