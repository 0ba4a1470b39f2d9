use serde::Serialize;

use super::models::{CouncilmaticPerson, Membership, Person};

/// Council member as listed on the home page.
#[derive(Debug, Clone, Serialize)]
pub struct MemberSummary {
    pub name: String,
    pub slug: String,
    /// Seat label from the council membership, e.g. "District 3".
    pub district: Option<String>,
}

impl MemberSummary {
    pub fn from_parts(
        person: &Person,
        extension: &CouncilmaticPerson,
        memberships: &[Membership],
    ) -> Self {
        Self {
            name: person.name.clone(),
            slug: extension.slug.clone(),
            district: memberships.first().map(|m| m.label.clone()),
        }
    }
}

/// Member detail page: canonical fields plus curated presentation
/// fields.
#[derive(Debug, Clone, Serialize)]
pub struct MemberPage {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub headshot: String,
    pub biography: Option<String>,
    pub contact_details: serde_json::Value,
    pub links: serde_json::Value,
    pub sources: serde_json::Value,
    pub memberships: Vec<MembershipData>,
}

impl MemberPage {
    pub fn from_parts(
        person: Person,
        extension: CouncilmaticPerson,
        memberships: Vec<Membership>,
    ) -> Self {
        Self {
            id: person.id,
            name: person.name,
            slug: extension.slug,
            headshot: extension.headshot,
            biography: extension.biography,
            contact_details: person.contact_details,
            links: person.links,
            sources: person.sources,
            memberships: memberships.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MembershipData {
    pub organization_id: String,
    pub role: String,
    pub label: String,
}

impl From<Membership> for MembershipData {
    fn from(membership: Membership) -> Self {
        Self {
            organization_id: membership.organization_id,
            role: membership.role,
            label: membership.label,
        }
    }
}
