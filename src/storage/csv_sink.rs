use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::error::ScrapeResult;
use crate::models::ProductRecord;
use crate::storage::RecordSink;

pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Header row plus one row per product, fields quoted only where CSV requires it.
    pub fn write_to<W: Write>(writer: W, products: &[ProductRecord]) -> ScrapeResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for product in products {
            wtr.serialize(product.to_row())?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl RecordSink for CsvSink {
    fn save(&self, products: &[ProductRecord]) -> ScrapeResult<()> {
        let file = File::create(&self.path)?;
        Self::write_to(file, products)?;
        debug!("Wrote {} rows to {}", products.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
