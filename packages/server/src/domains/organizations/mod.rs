pub mod models;

pub use models::{Organization, Post};
