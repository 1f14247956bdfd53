pub mod listing;
pub mod resolver;
pub mod seller;

pub use listing::extract_listings;
pub use seller::resolve_seller;

use scraper::{ElementRef, Html, Selector};

fn compile(css: &str) -> Result<Selector, String> {
    Selector::parse(css).map_err(|e| format!("invalid selector '{}': {:?}", css, e))
}

/// First match of `css` under `scope`, in document order.
pub(crate) fn select_first<'a>(scope: ElementRef<'a>, css: &str) -> Result<Option<ElementRef<'a>>, String> {
    let selector = compile(css)?;
    Ok(scope.select(&selector).next())
}

pub(crate) fn select_all<'a>(scope: ElementRef<'a>, css: &str) -> Result<Vec<ElementRef<'a>>, String> {
    let selector = compile(css)?;
    Ok(scope.select(&selector).collect())
}

pub(crate) fn select_in_document<'a>(document: &'a Html, css: &str) -> Result<Vec<ElementRef<'a>>, String> {
    let selector = compile(css)?;
    Ok(document.select(&selector).collect())
}
