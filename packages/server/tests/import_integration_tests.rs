mod common;

use common::TestHarness;
use councilmatic_core::domains::events::Event;
use councilmatic_core::domains::organizations::Organization;
use councilmatic_core::domains::people::{Membership, Person};
use councilmatic_core::import::{events, organizations, people, ImportRun};
use seattle_scrapers::records::{ScrapedEvent, ScrapedPerson};
use seattle_scrapers::Jurisdiction;
use test_context::test_context;

fn scraped_member(name: &str, district: &str) -> ScrapedPerson {
    let mut person = ScrapedPerson::new(name, district, "Councilmember");
    person.add_membership("Seattle City Council", "Councilmember", district);
    person.add_source("https://www.seattle.gov/council/members");
    person
}

async fn seed(ctx: &TestHarness) {
    organizations::seed_organizations(&Jurisdiction::seattle(), &ctx.db_pool)
        .await
        .expect("Failed to seed organizations");
}

// =============================================================================
// Tests: organization seeding
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn seeding_creates_the_council_and_its_posts(ctx: &TestHarness) {
    seed(ctx).await;

    let council = Organization::find_by_name("Seattle City Council", &ctx.db_pool)
        .await
        .unwrap()
        .expect("council should exist");
    assert!(council.id.starts_with("ocd-organization/"));

    let post_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(&ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(post_count, 9);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn seeding_twice_mints_no_duplicates(ctx: &TestHarness) {
    seed(ctx).await;
    let council = Organization::find_by_name("Seattle City Council", &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();

    seed(ctx).await;
    let council_again = Organization::find_by_name("Seattle City Council", &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();

    // Same canonical id survives the re-seed
    assert_eq!(council.id, council_again.id);

    let post_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(&ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(post_count, 9);
}

// =============================================================================
// Tests: people import
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn importing_people_creates_canonical_rows_and_memberships(ctx: &TestHarness) {
    seed(ctx).await;

    let records = vec![
        scraped_member("Rob Saka", "District 1"),
        scraped_member("Sara Nelson", "Position 9"),
    ];

    let imported = people::import_people(&records, &ctx.db_pool)
        .await
        .expect("Import failed");
    assert_eq!(imported, 2);

    let saka = Person::find_by_name("Rob Saka", &ctx.db_pool)
        .await
        .unwrap()
        .expect("person should exist");
    assert!(saka.id.starts_with("ocd-person/"));

    let memberships = Membership::find_for_person(&saka.id, &ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(memberships.len(), 1);
    assert_eq!(memberships[0].label, "District 1");
    assert!(memberships[0].post_id.is_some(), "seat post should resolve");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn reimporting_the_same_scrape_is_idempotent(ctx: &TestHarness) {
    seed(ctx).await;
    let records = vec![scraped_member("Joy Hollingsworth", "District 3")];

    people::import_people(&records, &ctx.db_pool).await.unwrap();
    let first = Person::find_by_name("Joy Hollingsworth", &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();

    people::import_people(&records, &ctx.db_pool).await.unwrap();

    assert_eq!(Person::count(&ctx.db_pool).await.unwrap(), 1);
    let second = Person::find_by_name("Joy Hollingsworth", &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    // Canonical id is minted once
    assert_eq!(first.id, second.id);

    let membership_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM memberships")
        .fetch_one(&ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(membership_count, 1);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn membership_against_unknown_organization_fails(ctx: &TestHarness) {
    seed(ctx).await;

    let mut record = ScrapedPerson::new("Rob Saka", "District 1", "Councilmember");
    record.add_membership("Tacoma City Council", "Councilmember", "District 1");

    let result = people::import_people(&[record], &ctx.db_pool).await;
    assert!(result.is_err());
}

// =============================================================================
// Tests: event import
// =============================================================================

fn scraped_meeting(legistar_id: &str, name: &str) -> ScrapedEvent {
    use seattle_scrapers::records::EventIdentifier;

    ScrapedEvent {
        name: name.to_string(),
        start_time: chrono::NaiveDate::from_ymd_opt(2024, 6, 18)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap(),
        timezone: "America/Los_Angeles".to_string(),
        location: "Council Chambers".to_string(),
        status: "confirmed".to_string(),
        agenda: Vec::new(),
        sources: Vec::new(),
        identifiers: vec![EventIdentifier {
            scheme: "legistar_event_id".to_string(),
            identifier: legistar_id.to_string(),
        }],
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn events_upsert_by_legistar_identifier(ctx: &TestHarness) {
    events::import_events(&[scraped_meeting("4521", "City Council")], &ctx.db_pool)
        .await
        .unwrap();

    // Re-scrape with a corrected body name
    events::import_events(
        &[scraped_meeting("4521", "Select Budget Committee")],
        &ctx.db_pool,
    )
    .await
    .unwrap();

    assert_eq!(Event::count(&ctx.db_pool).await.unwrap(), 1);

    let name: String = sqlx::query_scalar("SELECT name FROM events WHERE legistar_id = '4521'")
        .fetch_one(&ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(name, "Select Budget Committee");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn event_without_legistar_identifier_fails(ctx: &TestHarness) {
    let mut record = scraped_meeting("4522", "City Council");
    record.identifiers.clear();

    let result = events::import_events(&[record], &ctx.db_pool).await;
    assert!(result.is_err());
}

// =============================================================================
// Tests: import run tracking
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn import_runs_record_success_and_failure(ctx: &TestHarness) {
    let run = ImportRun::start("Seattle City Council", "people", &ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(run.status, "running");
    assert!(run.completed_at.is_none());

    let done = run.succeed(9, 9, &ctx.db_pool).await.unwrap();
    assert_eq!(done.status, "succeeded");
    assert_eq!(done.records_scraped, 9);
    assert!(done.completed_at.is_some());

    let failed = ImportRun::start("Seattle City Council", "events", &ctx.db_pool)
        .await
        .unwrap()
        .fail("HTTP 503 for https://webapi.legistar.com/v1/seattle/events", &ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(failed.status, "failed");
    assert!(failed.error.as_deref().unwrap_or("").contains("503"));

    let recent = ImportRun::find_recent(10, &ctx.db_pool).await.unwrap();
    assert_eq!(recent.len(), 2);
}
