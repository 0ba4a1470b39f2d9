//! Council member scraper.
//!
//! The official members page lists each seat as a plain list item of the
//! form "District 3: Joy Hollingsworth" or "Position 8: Alexis Mercedes
//! Rinck", with the name wrapped in a profile anchor.

use async_trait::async_trait;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::{info, warn};

use crate::client::{build_client, fetch_html};
use crate::error::ScrapeError;
use crate::jurisdiction::COUNCIL_NAME;
use crate::records::{ScrapedPerson, Scraper};

/// Official council member listing.
pub const MEMBERS_URL: &str = "https://www.seattle.gov/council/members";

pub struct PersonScraper {
    client: reqwest::Client,
    url: String,
}

impl PersonScraper {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            client: build_client()?,
            url: MEMBERS_URL.to_string(),
        })
    }

    /// Parse the members listing out of a fetched page.
    ///
    /// Unparseable list items are logged and skipped; a page with no
    /// recognizable members at all is a parse error.
    pub fn parse_members(html: &str, source_url: &str) -> Result<Vec<ScrapedPerson>, ScrapeError> {
        let document = Html::parse_document(html);
        let item_selector = Selector::parse("ul li")
            .map_err(|e| ScrapeError::Parse(format!("invalid selector: {}", e)))?;
        let seat_re = Regex::new(r"^(District|Position) (\d+):\s*(.+)$")
            .map_err(|e| ScrapeError::Parse(e.to_string()))?;

        let mut members = Vec::new();

        for item in document.select(&item_selector) {
            let text = item.text().collect::<String>();
            // Collapse the whitespace the nested anchor markup leaves behind
            let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

            if !text.starts_with("District") && !text.starts_with("Position") {
                continue;
            }

            let Some(captures) = seat_re.captures(&text) else {
                warn!("Could not parse council member info from text: {}", text);
                continue;
            };

            let district = format!("{} {}", &captures[1], &captures[2]);
            let name = captures[3].trim().to_string();

            let mut person = ScrapedPerson::new(&name, &district, "Councilmember");
            person.add_membership(COUNCIL_NAME, "Councilmember", &district);
            person.add_source(source_url);
            person.add_contact_detail(
                "email",
                format!("{}@seattle.gov", name.replace(' ', ".").to_lowercase()),
                "Official email",
            );

            let name_anchor = name.replace(' ', "");
            person.add_link(
                format!("{}#{}", source_url, name_anchor),
                "City Council profile",
            );

            info!("Scraped person: {} ({})", name, district);
            members.push(person);
        }

        if members.is_empty() {
            return Err(ScrapeError::Parse(format!(
                "no council members found at {}",
                source_url
            )));
        }

        Ok(members)
    }
}

#[async_trait]
impl Scraper for PersonScraper {
    type Output = ScrapedPerson;

    async fn scrape(&self) -> Result<Vec<ScrapedPerson>, ScrapeError> {
        let html = fetch_html(&self.client, &self.url).await?;
        Self::parse_members(&html, &self.url)
    }
}
