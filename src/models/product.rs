use serde::Serialize;

use super::{NAME_MISSING, PRICE_MISSING, RATING_MISSING, SELLER_UNKNOWN};

/// One search result, filled in field by field as resolution proceeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub name: String,
    pub link: Option<String>,
    pub price: String,
    pub rating: String,
    pub seller: String,
}

impl Default for ProductRecord {
    fn default() -> Self {
        Self {
            name: NAME_MISSING.to_string(),
            link: None,
            price: PRICE_MISSING.to_string(),
            rating: RATING_MISSING.to_string(),
            seller: SELLER_UNKNOWN.to_string(),
        }
    }
}

impl ProductRecord {
    /// A record may only go on to the detail pass once it has both a name and a link.
    pub fn is_enrichable(&self) -> bool {
        self.name != NAME_MISSING && self.link.as_deref().is_some_and(|l| !l.is_empty())
    }

    /// Name shortened for progress logging.
    pub fn short_name(&self) -> String {
        self.name.chars().take(30).collect()
    }

    pub fn to_row(&self) -> CsvRow<'_> {
        CsvRow {
            name: &self.name,
            price: &self.price,
            rating: &self.rating,
            seller: &self.seller,
        }
    }
}

/// Output row; the link is used for navigation only and is not written.
#[derive(Debug, Serialize)]
pub struct CsvRow<'a> {
    #[serde(rename = "Product Name")]
    pub name: &'a str,
    #[serde(rename = "Price")]
    pub price: &'a str,
    #[serde(rename = "Rating")]
    pub rating: &'a str,
    #[serde(rename = "Seller Name")]
    pub seller: &'a str,
}
