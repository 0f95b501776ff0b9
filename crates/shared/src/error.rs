use thiserror::Error;

/// Failures that stop a whole page from being scraped.
///
/// A selector that finds nothing is not an error; the extractor degrades that
/// field to its default instead.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {code}")]
    HttpStatus { code: u16 },

    #[error("could not parse page: {0}")]
    Parse(String),
}

impl ScrapeError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScrapeError::HttpStatus { code: 404 })
    }

    /// Transport and status failures, as opposed to a page we could not read.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, ScrapeError::Network(_) | ScrapeError::HttpStatus { .. })
    }
}
