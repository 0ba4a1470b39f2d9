//! Page-model handlers for the public site: home, member detail,
//! meeting listing/detail, legislation detail.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::config::CITY_COUNCIL_NAME;
use crate::domains::events::data::{EventPage, EventSummary};
use crate::domains::events::{CouncilmaticEvent, Event};
use crate::domains::legislation::data::BillPage;
use crate::domains::legislation::{Bill, CouncilmaticBill};
use crate::domains::people::data::{MemberPage, MemberSummary};
use crate::domains::people::{CouncilmaticPerson, Membership, Person};
use crate::server::app::AppState;

fn internal_error(e: anyhow::Error) -> StatusCode {
    tracing::error!("Page query failed: {:#}", e);
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Home page model: the council and its synced members.
#[derive(Serialize)]
pub struct CouncilPage {
    pub name: &'static str,
    pub members: Vec<MemberSummary>,
}

pub async fn council_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<CouncilPage>, StatusCode> {
    let people = Person::find_all(&state.db_pool).await.map_err(internal_error)?;

    let mut members = Vec::new();
    for person in &people {
        // Members without a presentation row have no page yet; skip them
        let Some(extension) = CouncilmaticPerson::find_for_person(&person.id, &state.db_pool)
            .await
            .map_err(internal_error)?
        else {
            continue;
        };

        let memberships = Membership::find_for_person(&person.id, &state.db_pool)
            .await
            .map_err(internal_error)?;

        members.push(MemberSummary::from_parts(person, &extension, &memberships));
    }

    Ok(Json(CouncilPage {
        name: CITY_COUNCIL_NAME,
        members,
    }))
}

pub async fn member_handler(
    Extension(state): Extension<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<MemberPage>, StatusCode> {
    let extension = CouncilmaticPerson::find_by_slug(&slug, &state.db_pool)
        .await
        .map_err(internal_error)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let person = Person::find_by_id(&extension.person_id, &state.db_pool)
        .await
        .map_err(internal_error)?;

    let memberships = Membership::find_for_person(&person.id, &state.db_pool)
        .await
        .map_err(internal_error)?;

    Ok(Json(MemberPage::from_parts(person, extension, memberships)))
}

/// Meeting listing, most recent first.
#[derive(Serialize)]
pub struct EventsPage {
    pub events: Vec<EventSummary>,
}

pub async fn events_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<EventsPage>, StatusCode> {
    let recent = Event::find_recent(25, &state.db_pool)
        .await
        .map_err(internal_error)?;

    let mut events = Vec::new();
    for event in &recent {
        let Some(extension) = CouncilmaticEvent::find_for_event(&event.id, &state.db_pool)
            .await
            .map_err(internal_error)?
        else {
            continue;
        };
        events.push(EventSummary::from_parts(event, &extension));
    }

    Ok(Json(EventsPage { events }))
}

pub async fn event_handler(
    Extension(state): Extension<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<EventPage>, StatusCode> {
    let extension = CouncilmaticEvent::find_by_slug(&slug, &state.db_pool)
        .await
        .map_err(internal_error)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let event = Event::find_by_id(&extension.event_id, &state.db_pool)
        .await
        .map_err(internal_error)?;

    Ok(Json(EventPage::from_parts(event, extension)))
}

pub async fn bill_handler(
    Extension(state): Extension<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BillPage>, StatusCode> {
    let extension = CouncilmaticBill::find_by_slug(&slug, &state.db_pool)
        .await
        .map_err(internal_error)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let bill = Bill::find_by_id(&extension.bill_id, &state.db_pool)
        .await
        .map_err(internal_error)?;

    Ok(Json(BillPage::from_parts(bill, extension)))
}
