use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_SEARCH_URL: &str =
    "https://www.amazon.in/s?rh=n%3A6612025031&fs=true&ref=lp_6612025031_sar";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.212 Safari/537.36";

/// Optional overrides are read from `amazon_scraper.{toml,json,yaml}` in the working directory.
const CONFIG_FILE: &str = "amazon_scraper";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub search_url: String,
    pub output_path: String,
    pub user_agent: String,
    pub headless: bool,
    pub window_width: u32,
    pub window_height: u32,
    pub grid_wait_seconds: u64,
    pub initial_settle_seconds: u64,
    pub detail_wait_seconds: u64,
    pub detail_settle_seconds: u64,
    pub marketplace_operator: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("search_url", DEFAULT_SEARCH_URL)?
            .set_default("output_path", "amazon_products.csv")?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .set_default("headless", true)?
            .set_default("window_width", 1920_i64)?
            .set_default("window_height", 1080_i64)?
            .set_default("grid_wait_seconds", 15_i64)?
            .set_default("initial_settle_seconds", 5_i64)?
            .set_default("detail_wait_seconds", 15_i64)?
            .set_default("detail_settle_seconds", 3_i64)?
            .set_default("marketplace_operator", "Amazon")?
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .build()
            .context("Failed to build configuration")?;

        settings
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    pub fn grid_wait(&self) -> Duration {
        Duration::from_secs(self.grid_wait_seconds)
    }

    pub fn initial_settle(&self) -> Duration {
        Duration::from_secs(self.initial_settle_seconds)
    }

    pub fn detail_wait(&self) -> Duration {
        Duration::from_secs(self.detail_wait_seconds)
    }

    pub fn detail_settle(&self) -> Duration {
        Duration::from_secs(self.detail_settle_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_single_run_setup() {
        let config = Config::load().unwrap();
        assert_eq!(config.output_path, "amazon_products.csv");
        assert_eq!(config.grid_wait(), Duration::from_secs(15));
        assert_eq!(config.initial_settle(), Duration::from_secs(5));
        assert_eq!(config.detail_settle(), Duration::from_secs(3));
        assert_eq!(config.marketplace_operator, "Amazon");
        assert!(config.headless);
        assert!(config.search_url.starts_with("https://www.amazon.in/s?"));
    }
}
