//! Shared HTTP client for scrapers.
//!
//! Official city pages sit behind bot detection that rejects the default
//! reqwest User-Agent, so the client presents browser-like headers.

use std::time::Duration;

use crate::error::ScrapeError;

/// Build the HTTP client used by all scrapers.
pub fn build_client() -> Result<reqwest::Client, ScrapeError> {
    let user_agent = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::ACCEPT,
        "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"
            .parse()
            .map_err(|_| ScrapeError::Parse("invalid Accept header".into()))?,
    );
    headers.insert(
        reqwest::header::ACCEPT_LANGUAGE,
        "en-US,en;q=0.5"
            .parse()
            .map_err(|_| ScrapeError::Parse("invalid Accept-Language header".into()))?,
    );

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(user_agent)
        .default_headers(headers)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()?;

    Ok(client)
}

/// Fetch a page and return its raw HTML, failing on non-2xx status.
pub async fn fetch_html(client: &reqwest::Client, url: &str) -> Result<String, ScrapeError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            status,
            url: url.to_string(),
        });
    }

    Ok(response.text().await?)
}
