use serde::Serialize;

use super::models::{Bill, CouncilmaticBill};

/// Bill detail page.
#[derive(Debug, Clone, Serialize)]
pub struct BillPage {
    pub id: String,
    pub identifier: String,
    /// Display name, identifier first: "CB 120863: ...".
    pub friendly_name: String,
    pub title: String,
    pub classification: String,
    pub abstract_text: Option<String>,
    pub slug: String,
    pub sources: serde_json::Value,
}

impl BillPage {
    pub fn from_parts(bill: Bill, extension: CouncilmaticBill) -> Self {
        Self {
            id: bill.id,
            friendly_name: format!("{}: {}", bill.identifier, bill.title),
            identifier: bill.identifier,
            title: bill.title,
            classification: bill.classification,
            abstract_text: bill.abstract_text,
            slug: extension.slug,
            sources: bill.sources,
        }
    }
}
