pub mod data;
pub mod models;

pub use models::{CouncilmaticPerson, Membership, Person};
