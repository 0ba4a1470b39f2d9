//! Jurisdiction definition for the Seattle City Council.
//!
//! Declares the council's identity (name, geography, official source
//! URLs) and which scrapers are available for it.

use std::str::FromStr;

use crate::error::ScrapeError;

/// Official name of the council organization. The web layer's settings
/// constant must match this string exactly.
pub const COUNCIL_NAME: &str = "Seattle City Council";

/// The governing body being tracked.
#[derive(Debug, Clone)]
pub struct Jurisdiction {
    pub division_id: &'static str,
    pub classification: &'static str,
    pub name: &'static str,
    pub url: &'static str,
}

impl Jurisdiction {
    pub fn seattle() -> Self {
        Self {
            division_id: "ocd-division/country:us/state:wa/place:seattle",
            classification: "legislature",
            name: COUNCIL_NAME,
            url: "https://www.seattle.gov/council",
        }
    }

    /// The organizations this jurisdiction defines: the council body
    /// with seven district seats and two at-large positions.
    pub fn organizations(&self) -> Vec<OrganizationDef> {
        let mut org = OrganizationDef {
            name: self.name.to_string(),
            classification: self.classification.to_string(),
            posts: Vec::new(),
        };

        for i in 1..=7 {
            org.add_post(format!("District {}", i), "Councilmember");
        }
        for i in 8..=9 {
            org.add_post(format!("Position {}", i), "Councilmember");
        }

        vec![org]
    }

    /// Scrapers implemented for this jurisdiction.
    pub fn scrapers(&self) -> Vec<ScraperKind> {
        vec![ScraperKind::People, ScraperKind::Events]
    }
}

/// An organization declared by the jurisdiction, created at import time
/// before any scraped records reference it.
#[derive(Debug, Clone)]
pub struct OrganizationDef {
    pub name: String,
    pub classification: String,
    pub posts: Vec<PostDef>,
}

impl OrganizationDef {
    pub fn add_post(&mut self, label: impl Into<String>, role: impl Into<String>) {
        self.posts.push(PostDef {
            label: label.into(),
            role: role.into(),
        });
    }
}

/// A seat on an organization.
#[derive(Debug, Clone)]
pub struct PostDef {
    pub label: String,
    pub role: String,
}

/// Names the entity scrapers the pipeline can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScraperKind {
    People,
    Events,
}

impl ScraperKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScraperKind::People => "people",
            ScraperKind::Events => "events",
        }
    }
}

impl FromStr for ScraperKind {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "people" => Ok(ScraperKind::People),
            "events" => Ok(ScraperKind::Events),
            // Known gaps: legislation and vote scrapers are planned but
            // not written yet.
            "bills" => Err(ScrapeError::NotImplemented("bills")),
            "vote_events" => Err(ScrapeError::NotImplemented("vote_events")),
            other => Err(ScrapeError::UnknownScraper(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seattle_defines_nine_council_seats() {
        let orgs = Jurisdiction::seattle().organizations();
        assert_eq!(orgs.len(), 1);

        let council = &orgs[0];
        assert_eq!(council.name, COUNCIL_NAME);
        assert_eq!(council.classification, "legislature");
        assert_eq!(council.posts.len(), 9);
        assert!(council.posts.iter().all(|p| p.role == "Councilmember"));
        assert_eq!(council.posts[0].label, "District 1");
        assert_eq!(council.posts[8].label, "Position 9");
    }

    #[test]
    fn scraper_kind_parses_known_names() {
        assert_eq!("people".parse::<ScraperKind>().unwrap(), ScraperKind::People);
        assert_eq!("events".parse::<ScraperKind>().unwrap(), ScraperKind::Events);
    }

    #[test]
    fn scraper_kind_rejects_unimplemented_and_unknown() {
        assert!(matches!(
            "bills".parse::<ScraperKind>(),
            Err(ScrapeError::NotImplemented("bills"))
        ));
        assert!(matches!(
            "potholes".parse::<ScraperKind>(),
            Err(ScrapeError::UnknownScraper(_))
        ));
    }
}
