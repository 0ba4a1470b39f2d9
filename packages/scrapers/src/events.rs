//! Council meeting scraper.
//!
//! Meetings come from the city's Legistar instance, which exposes an
//! OData REST API. One request lists events; a follow-up request per
//! event fetches its agenda items.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use tracing::{info, warn};

use crate::client::build_client;
use crate::error::ScrapeError;
use crate::records::{AgendaItem, EventIdentifier, ScrapedEvent, Scraper};

/// Base URL for Seattle's Legistar API.
pub const BASE_URL: &str = "https://webapi.legistar.com/v1/seattle";

/// IANA timezone Legistar timestamps are local to.
pub const TIMEZONE: &str = "America/Los_Angeles";

/// Only scrape events from this year forward.
const START_YEAR: i32 = 2019;

/// Timestamp format used by the Legistar API.
const LEGISTAR_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Procedural agenda items with no substantive content.
const IGNORE_PATTERNS: [&str; 5] = [
    "CALL TO ORDER",
    "ROLL CALL",
    "APPROVAL OF",
    "ADJOURNMENT",
    "RECESS",
];

pub struct EventScraper {
    client: reqwest::Client,
    base_url: String,
}

impl EventScraper {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            client: build_client()?,
            base_url: BASE_URL.to_string(),
        })
    }

    /// List events from the API, filtered to START_YEAR onward, newest
    /// first.
    async fn fetch_events(&self) -> Result<Vec<Value>, ScrapeError> {
        let url = format!("{}/events", self.base_url);
        let start_date = NaiveDate::from_ymd_opt(START_YEAR, 1, 1)
            .ok_or_else(|| ScrapeError::Parse("invalid start year".into()))?;

        let response = self
            .client
            .get(&url)
            .query(&[
                (
                    "$filter",
                    format!("EventDate ge datetime'{}'", start_date.format("%Y-%m-%d")),
                ),
                ("$orderby", "EventDate desc".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { status, url });
        }

        let events: Vec<Value> = response.json().await?;
        info!("Fetched {} events from Legistar API", events.len());
        Ok(events)
    }

    /// Fetch an event's agenda items, dropping procedural entries.
    async fn fetch_agenda(&self, event_id: i64) -> Result<Vec<AgendaItem>, ScrapeError> {
        let url = format!("{}/events/{}/eventitems", self.base_url, event_id);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { status, url });
        }

        let items: Vec<Value> = response.json().await?;
        Ok(Self::parse_agenda_items(&items))
    }

    /// Convert raw event items into agenda entries, filtering out
    /// procedural ones.
    pub fn parse_agenda_items(items: &[Value]) -> Vec<AgendaItem> {
        items
            .iter()
            .filter_map(|item| {
                let title = item.get("EventItemTitle")?.as_str()?.trim();
                if title.is_empty() || Self::is_procedural(title) {
                    return None;
                }
                let order = item
                    .get("EventItemAgendaSequence")
                    .and_then(Value::as_i64)
                    .unwrap_or(0) as i32;
                Some(AgendaItem {
                    description: title.to_string(),
                    order,
                })
            })
            .collect()
    }

    /// Whether an agenda item title is procedural (roll call, recess...)
    /// rather than substantive.
    pub fn is_procedural(title: &str) -> bool {
        let upper = title.to_uppercase();
        IGNORE_PATTERNS.iter().any(|p| upper.contains(p))
    }

    /// Convert a raw API event into a canonical record plus its Legistar
    /// id. Events missing required fields or with malformed dates are
    /// logged and skipped.
    pub fn parse_event(api_event: &Value) -> Option<(ScrapedEvent, i64)> {
        let event_id = match api_event.get("EventId").and_then(Value::as_i64) {
            Some(id) => id,
            None => {
                warn!("Skipping Legistar event with no EventId: {}", api_event);
                return None;
            }
        };

        let date_str = match api_event.get("EventDate").and_then(Value::as_str) {
            Some(s) => s,
            None => {
                warn!("Failed to parse event {}: missing EventDate", event_id);
                return None;
            }
        };

        let start_time = match NaiveDateTime::parse_from_str(date_str, LEGISTAR_DATE_FORMAT) {
            Ok(dt) => dt,
            Err(e) => {
                warn!("Failed to parse event {}: {}", event_id, e);
                return None;
            }
        };

        let name = api_event
            .get("EventBodyName")
            .and_then(Value::as_str)
            .unwrap_or("Meeting")
            .to_string();
        let location = api_event
            .get("EventLocation")
            .and_then(Value::as_str)
            .unwrap_or("Location TBD")
            .to_string();

        let mut sources = Vec::new();
        if let Some(site_url) = api_event.get("EventInSiteURL").and_then(Value::as_str) {
            sources.push(site_url.to_string());
        }

        let event = ScrapedEvent {
            name,
            start_time,
            timezone: TIMEZONE.to_string(),
            location,
            status: "confirmed".to_string(),
            agenda: Vec::new(),
            sources,
            identifiers: vec![EventIdentifier {
                scheme: "legistar_event_id".to_string(),
                identifier: event_id.to_string(),
            }],
        };

        info!("Parsed event: {} on {}", event.name, event.start_time.date());
        Some((event, event_id))
    }
}

#[async_trait]
impl Scraper for EventScraper {
    type Output = ScrapedEvent;

    async fn scrape(&self) -> Result<Vec<ScrapedEvent>, ScrapeError> {
        let raw_events = self.fetch_events().await?;

        let mut events = Vec::new();
        for api_event in &raw_events {
            let Some((mut event, event_id)) = Self::parse_event(api_event) else {
                continue;
            };
            event.agenda = self.fetch_agenda(event_id).await?;
            events.push(event);
        }

        Ok(events)
    }
}
