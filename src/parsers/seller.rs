pub const SOLD_BY_COLON: &str = "Sold by:";
pub const SOLD_BY: &str = "Sold by";

/// Seller named after `Sold by:` in an element's text.
///
/// Takes the text between the first `Sold by:` and the next one (if any),
/// cuts it at the first ` and ` and at the first line break, and trims.
/// A seller whose own name contains ` and ` is therefore truncated too.
pub fn seller_after_sold_by(text: &str) -> Option<String> {
    let tail = text.split(SOLD_BY_COLON).nth(1)?;
    let seller = tail.trim();
    let seller = seller.split(" and ").next().unwrap_or(seller).trim();
    let seller = seller.split('\n').next().unwrap_or(seller).trim();
    non_empty(seller)
}

/// Text between the first and second colon, trimmed.
pub fn value_after_colon(text: &str) -> Option<String> {
    non_empty(text.split(':').nth(1)?.trim())
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
