use scraper::{ElementRef, Html};

use crate::extract::resolver::{first_found, OnFailure, Resolution, Strategy};
use crate::extract::{select_first, select_in_document};
use crate::models::SELLER_UNKNOWN;
use crate::parsers::{
    inner_text, own_text_contains, seller_after_sold_by, value_after_colon, SOLD_BY, SOLD_BY_COLON,
};

/// Present on any loaded detail page.
pub const DETAIL_READY: &str = "body";

const MERCHANT_TEXT: &str = "Merchant";
const MERCHANT_ID: &str = "merchant";
const SHIPS_FROM: &str = "Ships from";
const KNOWN_SELLER_ELEMENTS: &str = "#sellerProfileTriggerId, .mbcMerchantName, #merchant-info";

pub struct DetailPage<'a> {
    pub document: &'a Html,
    /// Brand term that identifies the marketplace itself as seller.
    pub operator: &'a str,
}

/// Seller name for a detail page, or the unknown-seller placeholder.
pub fn resolve_seller(html: &str, operator: &str) -> String {
    let document = Html::parse_document(html);
    let page = DetailPage {
        document: &document,
        operator,
    };
    seller_for_page(&page)
}

pub fn seller_for_page(page: &DetailPage<'_>) -> String {
    let strategies: [Strategy<DetailPage<'_>, String>; 4] = [
        ("sold-by text", sold_by_text),
        ("merchant text", merchant_text),
        ("operator mention", operator_mention),
        ("seller element", known_seller_element),
    ];
    first_found(page, &strategies, OnFailure::Continue)
        .found()
        .unwrap_or_else(|| SELLER_UNKNOWN.to_string())
}

/// Every element in document order whose own text satisfies `matches`.
fn elements_where<'a>(
    document: &'a Html,
    matches: impl Fn(ElementRef<'a>) -> bool,
) -> Result<Vec<ElementRef<'a>>, String> {
    Ok(select_in_document(document, "*")?
        .into_iter()
        .filter(|el| matches(*el))
        .collect())
}

/// "Sold by: X" in the element's text, or "Sold by" followed by a seller link
/// somewhere under the element's parent.
fn sold_by_text(page: &DetailPage<'_>) -> Resolution<String> {
    let candidates = match elements_where(page.document, |el| {
        own_text_contains(el, SOLD_BY_COLON) || own_text_contains(el, SOLD_BY)
    }) {
        Ok(candidates) => candidates,
        Err(e) => return Resolution::Failed(e),
    };

    for element in candidates {
        let text = inner_text(element);
        if text.contains(SOLD_BY_COLON) {
            if let Some(seller) = seller_after_sold_by(&text) {
                return Resolution::Found(seller);
            }
        } else if text.contains(SOLD_BY) {
            let Some(parent) = element.parent().and_then(ElementRef::wrap) else {
                continue;
            };
            match select_first(parent, "a") {
                Ok(Some(link)) => {
                    let seller = inner_text(link).trim().to_string();
                    if !seller.is_empty() {
                        return Resolution::Found(seller);
                    }
                }
                Ok(None) => {}
                Err(e) => return Resolution::Failed(e),
            }
        }
    }
    Resolution::Miss
}

fn merchant_text(page: &DetailPage<'_>) -> Resolution<String> {
    elements_where(page.document, |el| {
        own_text_contains(el, MERCHANT_TEXT)
            || el.value().id().is_some_and(|id| id.contains(MERCHANT_ID))
    })
    .map(|candidates| {
        candidates.into_iter().find_map(|el| {
            let text = inner_text(el);
            if text.contains(':') {
                value_after_colon(&text)
            } else {
                None
            }
        })
    })
    .into()
}

fn operator_mention(page: &DetailPage<'_>) -> Resolution<String> {
    elements_where(page.document, |el| {
        own_text_contains(el, SHIPS_FROM) || own_text_contains(el, SOLD_BY)
    })
    .map(|candidates| {
        candidates
            .into_iter()
            .any(|el| inner_text(el).contains(page.operator))
            .then(|| page.operator.to_string())
    })
    .into()
}

fn known_seller_element(page: &DetailPage<'_>) -> Resolution<String> {
    select_in_document(page.document, KNOWN_SELLER_ELEMENTS)
        .map(|elements| {
            elements
                .first()
                .map(|el| inner_text(*el).trim().to_string())
                .filter(|seller| !seller.is_empty())
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller(body: &str) -> String {
        resolve_seller(&format!("<html><body>{}</body></html>", body), "Amazon")
    }

    #[test]
    fn sold_by_colon_text() {
        assert_eq!(
            seller(r#"<div id="tabular">Sold by: Acme Traders and Fulfilled by Amazon.</div>"#),
            "Acme Traders"
        );
    }

    #[test]
    fn sold_by_wins_over_merchant() {
        assert_eq!(
            seller(r#"<span>Merchant: Other</span><span>Sold by: Acme Traders</span>"#),
            "Acme Traders"
        );
    }

    #[test]
    fn sold_by_without_colon_reads_parent_link() {
        assert_eq!(
            seller(
                r#"<div class="offer"><span>Sold by</span> <a href="/seller/s1">RetailNet Store</a></div>"#
            ),
            "RetailNet Store"
        );
    }

    #[test]
    fn merchant_colon_text() {
        assert_eq!(seller(r#"<p>Merchant: Kitchen Hub</p>"#), "Kitchen Hub");
    }

    #[test]
    fn merchant_id_with_colon() {
        assert_eq!(
            seller(r#"<div id="merchantInfoFeature"><b>Seller</b>: Brightline</div>"#),
            "Brightline"
        );
    }

    #[test]
    fn operator_named_in_ships_from() {
        assert_eq!(seller(r#"<div>Ships from <b>Amazon</b></div>"#), "Amazon");
    }

    #[test]
    fn known_seller_element_is_last_resort() {
        assert_eq!(
            seller(r#"<a id="sellerProfileTriggerId" href="/sp"> Cloudtail India </a>"#),
            "Cloudtail India"
        );
    }

    #[test]
    fn nothing_matches_gives_unknown() {
        assert_eq!(seller("<div>Add to Cart</div>"), "Unknown Seller");
        assert_eq!(seller(r#"<span id="sellerProfileTriggerId">  </span>"#), "Unknown Seller");
    }

    #[test]
    fn script_text_is_not_a_seller_source() {
        assert_eq!(seller(r#"<script>var x = "Sold by: Ghost";</script>"#), "Unknown Seller");
    }

    #[test]
    fn resolution_is_repeatable() {
        let html = r#"<html><body><div>Sold by: Acme Traders</div><p>Merchant: Other</p></body></html>"#;
        let first = resolve_seller(html, "Amazon");
        let second = resolve_seller(html, "Amazon");
        assert_eq!(first, "Acme Traders");
        assert_eq!(first, second);
    }
}
