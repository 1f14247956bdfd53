pub mod product;

pub use product::*;

// Placeholders written when a field cannot be resolved
pub const NAME_MISSING: &str = "N/A";
pub const PRICE_MISSING: &str = "Out of Stock";
pub const RATING_MISSING: &str = "No Rating";
pub const SELLER_UNKNOWN: &str = "Unknown Seller";
pub const SELLER_ERROR: &str = "Error retrieving seller";
