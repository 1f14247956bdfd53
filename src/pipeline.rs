use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::browser::BrowserSession;
use crate::config::Config;
use crate::error::ScrapeResult;
use crate::extract::listing::RESULT_GRID;
use crate::extract::seller::DETAIL_READY;
use crate::extract::{extract_listings, resolve_seller};
use crate::models::{ProductRecord, SELLER_ERROR};

/// Run both passes on `session` and close it afterwards, whatever happened.
pub async fn run<S: BrowserSession>(mut session: S, config: &Config) -> Vec<ProductRecord> {
    let products = scrape(&mut session, config).await;

    match session.close().await {
        Ok(()) => info!("Browser closed"),
        Err(e) => warn!("Failed to close browser cleanly: {}", e),
    }

    products
}

async fn scrape<S: BrowserSession>(session: &mut S, config: &Config) -> Vec<ProductRecord> {
    let listings = match collect_listings(session, config).await {
        Ok(listings) => listings,
        Err(e) => {
            error!("An error occurred: {}", e);
            return Vec::new();
        }
    };

    info!("Collected {} product links to visit", listings.len());

    let products = enrich_with_sellers(session, listings, config).await;
    info!(
        "Successfully scraped {} products with detailed seller information",
        products.len()
    );
    products
}

/// Load the search page and read name, link, price and rating from every result card.
/// A results grid that never appears is fatal for this pass.
pub async fn collect_listings<S: BrowserSession>(
    session: &mut S,
    config: &Config,
) -> ScrapeResult<Vec<ProductRecord>> {
    session.navigate(&config.search_url).await?;
    info!("Navigated to URL successfully");

    sleep(config.initial_settle()).await;
    session.wait_for(RESULT_GRID, config.grid_wait()).await?;

    let html = session.page_source().await?;
    let base_url = session
        .current_url()
        .await
        .unwrap_or_else(|_| config.search_url.clone());

    extract_listings(&html, &base_url)
}

/// Visit each listing's detail page and fill in its seller. Records are never
/// dropped here and keep their order.
pub async fn enrich_with_sellers<S: BrowserSession>(
    session: &mut S,
    listings: Vec<ProductRecord>,
    config: &Config,
) -> Vec<ProductRecord> {
    let total = listings.len();
    let mut products = Vec::with_capacity(total);

    for (i, mut product) in listings.into_iter().enumerate() {
        info!(
            "Visiting product page {}/{}: {}...",
            i + 1,
            total,
            product.short_name()
        );

        if let Some(link) = product.link.clone() {
            match seller_from_detail_page(session, &link, config).await {
                Ok(seller) => {
                    info!("Found seller: {}", seller);
                    product.seller = seller;
                }
                Err(e) => {
                    error!("Error processing product page: {}", e);
                    product.seller = SELLER_ERROR.to_string();
                }
            }
        }

        products.push(product);
    }

    products
}

async fn seller_from_detail_page<S: BrowserSession>(
    session: &mut S,
    link: &str,
    config: &Config,
) -> ScrapeResult<String> {
    session.navigate(link).await?;
    session.wait_for(DETAIL_READY, config.detail_wait()).await?;
    sleep(config.detail_settle()).await;

    let html = session.page_source().await?;
    Ok(resolve_seller(&html, &config.marketplace_operator))
}
