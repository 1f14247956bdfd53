use anyhow::Result;
use chrono::Local;
use tracing::{error, info};

mod browser;
mod config;
mod error;
mod extract;
mod models;
mod parsers;
mod pipeline;
mod storage;

use crate::browser::ChromeSession;
use crate::config::Config;
use crate::storage::{CsvSink, RecordSink};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("amazon_seller_scraper=info".parse()?),
        )
        .init();

    info!(
        "Starting Amazon product scraper with product page navigation at {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let config = Config::load()?;

    let products = match ChromeSession::launch(&config).await {
        Ok(session) => pipeline::run(session, &config).await,
        Err(e) => {
            error!("Could not start browser session: {}", e);
            Vec::new()
        }
    };

    if products.is_empty() {
        info!("No products found to save.");
        return Ok(());
    }

    let sink = CsvSink::new(&config.output_path);
    match sink.save(&products) {
        Ok(()) => {
            info!("Successfully saved data to {}", sink.location());
            info!("Saved {} products to CSV file", products.len());
        }
        Err(e) => error!("Error saving to CSV: {}", e),
    }

    Ok(())
}
