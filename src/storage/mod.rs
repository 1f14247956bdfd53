use crate::error::ScrapeResult;
use crate::models::ProductRecord;

mod csv_sink;
pub use csv_sink::CsvSink;

pub trait RecordSink {
    /// Persist all records in order, replacing whatever was there before.
    fn save(&self, products: &[ProductRecord]) -> ScrapeResult<()>;

    /// Where the records went, for log messages.
    fn location(&self) -> String;
}
