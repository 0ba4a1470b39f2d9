use chrono::NaiveDateTime;
use serde::Serialize;

use super::models::{CouncilmaticEvent, Event};

/// Meeting as listed on the meetings page.
#[derive(Debug, Clone, Serialize)]
pub struct EventSummary {
    pub name: String,
    pub slug: String,
    pub start_time: NaiveDateTime,
    pub timezone: String,
    pub location: String,
}

impl EventSummary {
    pub fn from_parts(event: &Event, extension: &CouncilmaticEvent) -> Self {
        Self {
            name: event.name.clone(),
            slug: extension.slug.clone(),
            start_time: event.start_time,
            timezone: event.timezone.clone(),
            location: event.location.clone(),
        }
    }
}

/// Meeting detail page with the full agenda.
#[derive(Debug, Clone, Serialize)]
pub struct EventPage {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub start_time: NaiveDateTime,
    pub timezone: String,
    pub location: String,
    pub status: String,
    pub agenda: serde_json::Value,
    pub sources: serde_json::Value,
}

impl EventPage {
    pub fn from_parts(event: Event, extension: CouncilmaticEvent) -> Self {
        Self {
            id: event.id,
            name: event.name,
            slug: extension.slug,
            start_time: event.start_time,
            timezone: event.timezone,
            location: event.location,
            status: event.status,
            agenda: event.agenda,
            sources: event.sources,
        }
    }
}
