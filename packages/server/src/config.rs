use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Name of the council organization as the presentation layer displays
/// it. Must match the scraped jurisdiction's name exactly - memberships
/// reference the organization by this string.
pub const CITY_COUNCIL_NAME: &str = "Seattle City Council";

pub const CITY_NAME: &str = "Seattle";

/// IANA timezone meeting times are displayed in.
pub const CITY_TIMEZONE: &str = "America/Los_Angeles";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub secret_key: String,
    pub debug: bool,
    pub port: u16,
    pub enable_scheduler: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            secret_key: env::var("SECRET_KEY").context("SECRET_KEY must be set")?,
            debug: env::var("DEBUG")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            enable_scheduler: env::var("ENABLE_SCHEDULER")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seattle_scrapers::jurisdiction::Jurisdiction;

    #[test]
    fn settings_match_the_jurisdiction_definition() {
        let seattle = Jurisdiction::seattle();
        assert_eq!(CITY_COUNCIL_NAME, seattle.name);
        assert_eq!(CITY_TIMEZONE, seattle_scrapers::events::TIMEZONE);
    }
}
