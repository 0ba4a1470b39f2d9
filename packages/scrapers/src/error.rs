use thiserror::Error;

/// Errors raised while scraping official council sources.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Failed to parse page: {0}")]
    Parse(String),

    #[error("Unknown scraper: {0}")]
    UnknownScraper(String),

    #[error("Scraper not implemented yet: {0}")]
    NotImplemented(&'static str),
}
