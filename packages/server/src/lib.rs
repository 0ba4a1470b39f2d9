// Seattle Councilmatic - server core
//
// Backend for the council engagement site: canonical civic-data store,
// the scrape-and-import step, the canonical-to-presentation sync, the
// bill search index, and the web presentation layer.

pub mod config;
pub mod domains;
pub mod import;
pub mod pipeline;
pub mod search;
pub mod server;
pub mod sync;

pub use config::*;
