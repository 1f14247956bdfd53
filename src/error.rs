use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to launch browser: {0}")]
    Launch(String),

    #[error("browser error: {0}")]
    Browser(String),

    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("timed out after {seconds}s waiting for '{selector}'")]
    Timeout { selector: String, seconds: u64 },

    #[error("could not read page source: {0}")]
    Snapshot(String),

    #[error("invalid selector '{0}'")]
    Selector(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScrapeResult<T> = std::result::Result<T, ScrapeError>;
