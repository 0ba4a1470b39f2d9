//! Canonical record types emitted by scrapers.
//!
//! These are the in-flight representations of civic-data entities: a
//! scraper produces them, the import step validates and persists them.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;

/// A scraper fetches one or more official pages and emits canonical
/// records. No retries, no persistence - fetch, parse, emit.
#[async_trait]
pub trait Scraper: Send + Sync {
    type Output;

    async fn scrape(&self) -> Result<Vec<Self::Output>, ScrapeError>;
}

/// A council member scraped from an official listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedPerson {
    pub name: String,
    /// Seat label, e.g. "District 3" or "Position 8".
    pub district: String,
    pub role: String,
    pub contact_details: Vec<ContactDetail>,
    pub links: Vec<Link>,
    pub sources: Vec<String>,
    pub memberships: Vec<ScrapedMembership>,
}

impl ScrapedPerson {
    pub fn new(name: impl Into<String>, district: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            district: district.into(),
            role: role.into(),
            contact_details: Vec::new(),
            links: Vec::new(),
            sources: Vec::new(),
            memberships: Vec::new(),
        }
    }

    /// Record a membership in an organization, referenced by name.
    pub fn add_membership(
        &mut self,
        organization: impl Into<String>,
        role: impl Into<String>,
        label: impl Into<String>,
    ) {
        self.memberships.push(ScrapedMembership {
            organization: organization.into(),
            role: role.into(),
            label: label.into(),
        });
    }

    pub fn add_source(&mut self, url: impl Into<String>) {
        self.sources.push(url.into());
    }

    pub fn add_contact_detail(
        &mut self,
        kind: impl Into<String>,
        value: impl Into<String>,
        note: impl Into<String>,
    ) {
        self.contact_details.push(ContactDetail {
            kind: kind.into(),
            value: value.into(),
            note: note.into(),
        });
    }

    pub fn add_link(&mut self, url: impl Into<String>, note: impl Into<String>) {
        self.links.push(Link {
            url: url.into(),
            note: note.into(),
        });
    }
}

/// Links a scraped person to an organization and seat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedMembership {
    /// Organization name; resolved to a canonical row at import time.
    pub organization: String,
    pub role: String,
    /// Post label, e.g. "District 5".
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDetail {
    /// Contact type, e.g. "email" or "voice".
    pub kind: String,
    pub value: String,
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub note: String,
}

/// A council meeting scraped from the Legistar API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedEvent {
    pub name: String,
    /// Wall-clock start in the jurisdiction's timezone.
    pub start_time: NaiveDateTime,
    /// IANA timezone name the start time is local to.
    pub timezone: String,
    pub location: String,
    pub status: String,
    pub agenda: Vec<AgendaItem>,
    pub sources: Vec<String>,
    pub identifiers: Vec<EventIdentifier>,
}

impl ScrapedEvent {
    /// Look up an identifier by scheme, e.g. "legistar_event_id".
    pub fn identifier(&self, scheme: &str) -> Option<&str> {
        self.identifiers
            .iter()
            .find(|id| id.scheme == scheme)
            .map(|id| id.identifier.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaItem {
    pub description: String,
    pub order: i32,
}

/// External identifier attached to an event, keyed by scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventIdentifier {
    pub scheme: String,
    pub identifier: String,
}
