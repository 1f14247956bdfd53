use scraper::{ElementRef, Html};
use tracing::{info, warn};

use crate::error::{ScrapeError, ScrapeResult};
use crate::extract::resolver::{first_found, OnFailure, Resolution, Strategy};
use crate::extract::{select_all, select_first, select_in_document};
use crate::models::{ProductRecord, NAME_MISSING, PRICE_MISSING, RATING_MISSING};
use crate::parsers::{inner_text, parse_small_star_class, parse_star_class, resolve_href};

/// Present once the search results have rendered.
pub const RESULT_GRID: &str = "div.s-result-item";
pub const RESULT_CARD: &str = "div.s-result-item[data-component-type='s-search-result']";

const HEADING_PRIMARY_LINK: &str = "h2 .a-link-normal";
const HEADING_ANY_LINK: &str = "h2 a";
const CARD_LINKS: &str = "a.a-link-normal";
const PRICE_WHOLE: &str = ".a-price-whole";
const SMALL_STAR_ICON: &str = "i.a-icon-star-small";
const STAR_ICON: &str = ".a-icon-star";

/// One result card plus the page URL its relative links resolve against.
pub struct Card<'a> {
    pub element: ElementRef<'a>,
    pub base_url: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameLink {
    pub name: String,
    pub link: Option<String>,
}

/// Parse a results page into records that have both a name and a link, in page order.
pub fn extract_listings(html: &str, base_url: &str) -> ScrapeResult<Vec<ProductRecord>> {
    let document = Html::parse_document(html);
    let cards = select_in_document(&document, RESULT_CARD)
        .map_err(|_| ScrapeError::Selector(RESULT_CARD.to_string()))?;

    info!("Found {} product items", cards.len());

    let mut listings = Vec::new();
    for element in cards {
        let card = Card { element, base_url };
        match card_record(&card) {
            Ok(record) if record.is_enrichable() => listings.push(record),
            Ok(_) => {}
            Err(e) => warn!("Error scraping product listing: {}", e),
        }
    }

    Ok(listings)
}

/// Resolve every listing field of a card. A field that is simply missing gets its
/// placeholder; a strategy failure abandons the whole card.
pub fn card_record(card: &Card<'_>) -> Result<ProductRecord, String> {
    let name_strategies: [Strategy<Card<'_>, NameLink>; 3] = [
        ("heading primary link", name_from_heading_primary_link),
        ("heading link", name_from_heading_link),
        ("titled card link", name_from_card_links),
    ];
    let rating_strategies: [Strategy<Card<'_>, String>; 2] = [
        ("small star icon", rating_from_small_star),
        ("star icon", rating_from_star),
    ];

    let mut record = ProductRecord::default();

    match first_found(card, &name_strategies, OnFailure::Stop) {
        Resolution::Found(NameLink { name, link }) => {
            record.name = name;
            record.link = link;
        }
        Resolution::Miss => {
            record.name = NAME_MISSING.to_string();
            record.link = None;
        }
        Resolution::Failed(e) => return Err(e),
    }

    record.price = match price(card) {
        Resolution::Found(price) => price,
        Resolution::Miss => PRICE_MISSING.to_string(),
        Resolution::Failed(e) => return Err(e),
    };

    record.rating = match first_found(card, &rating_strategies, OnFailure::Stop) {
        Resolution::Found(rating) => rating,
        Resolution::Miss => RATING_MISSING.to_string(),
        Resolution::Failed(e) => return Err(e),
    };

    Ok(record)
}

fn anchor_name_link(anchor: ElementRef<'_>, base_url: &str) -> NameLink {
    NameLink {
        name: inner_text(anchor).trim().to_string(),
        link: anchor
            .value()
            .attr("href")
            .and_then(|href| resolve_href(base_url, href)),
    }
}

fn name_from_heading_primary_link(card: &Card<'_>) -> Resolution<NameLink> {
    select_first(card.element, HEADING_PRIMARY_LINK)
        .map(|anchor| anchor.map(|a| anchor_name_link(a, card.base_url)))
        .into()
}

fn name_from_heading_link(card: &Card<'_>) -> Resolution<NameLink> {
    select_first(card.element, HEADING_ANY_LINK)
        .map(|anchor| anchor.map(|a| anchor_name_link(a, card.base_url)))
        .into()
}

fn name_from_card_links(card: &Card<'_>) -> Resolution<NameLink> {
    let anchors = match select_all(card.element, CARD_LINKS) {
        Ok(anchors) => anchors,
        Err(e) => return Resolution::Failed(e),
    };

    anchors
        .into_iter()
        .find_map(|anchor| {
            let title = anchor.value().attr("title").filter(|t| !t.is_empty());
            let text = inner_text(anchor);
            let name = match title {
                Some(title) => title.to_string(),
                None if !text.is_empty() => text.trim().to_string(),
                None => return None,
            };
            Some(NameLink {
                name,
                link: anchor
                    .value()
                    .attr("href")
                    .and_then(|href| resolve_href(card.base_url, href)),
            })
        })
        .into()
}

/// Display text of the whole-number price, passed through untouched.
fn price(card: &Card<'_>) -> Resolution<String> {
    select_first(card.element, PRICE_WHOLE)
        .map(|el| el.map(|el| inner_text(el).trim().to_string()))
        .into()
}

fn star_rating(card: &Card<'_>, css: &str, parse: fn(&str) -> Option<String>) -> Resolution<String> {
    match select_first(card.element, css) {
        Ok(Some(icon)) => icon.value().attr("class").and_then(parse).into(),
        Ok(None) => Resolution::Miss,
        Err(e) => Resolution::Failed(e),
    }
}

fn rating_from_small_star(card: &Card<'_>) -> Resolution<String> {
    star_rating(card, SMALL_STAR_ICON, parse_small_star_class)
}

fn rating_from_star(card: &Card<'_>) -> Resolution<String> {
    star_rating(card, STAR_ICON, parse_star_class)
}
