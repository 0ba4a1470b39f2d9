// Seattle City Council scrapers
//
// This crate fetches pages from the council's official sources and turns
// them into canonical civic-data records. Persistence is the server
// crate's responsibility (see councilmatic_core::import) - scrapers only
// fetch, parse, and emit.

pub mod client;
pub mod error;
pub mod events;
pub mod jurisdiction;
pub mod people;
pub mod records;

pub use error::ScrapeError;
pub use jurisdiction::{Jurisdiction, ScraperKind};
pub use records::{ScrapedEvent, ScrapedPerson, Scraper};
