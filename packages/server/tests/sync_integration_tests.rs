mod common;

use common::TestHarness;
use councilmatic_core::domains::events::Event;
use councilmatic_core::domains::legislation::Bill;
use councilmatic_core::domains::people::{CouncilmaticPerson, Person};
use councilmatic_core::sync;
use serde_json::json;
use test_context::test_context;

async fn insert_person(name: &str, pool: &sqlx::PgPool) -> Person {
    Person::upsert_scraped(name, json!([]), json!([]), json!([]), pool)
        .await
        .expect("Failed to insert person")
}

// =============================================================================
// Tests: people sync
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn sync_creates_one_presentation_row_per_new_person(ctx: &TestHarness) {
    insert_person("Rob Saka", &ctx.db_pool).await;
    insert_person("Joy Hollingsworth", &ctx.db_pool).await;
    insert_person("Sara Nelson", &ctx.db_pool).await;

    let report = sync::sync_people(&ctx.db_pool)
        .await
        .expect("Sync failed");

    // N new canonical records, zero existing presentation records -> N rows
    assert_eq!(report.created, 3);
    assert_eq!(report.total, 3);

    let count = CouncilmaticPerson::count(&ctx.db_pool).await.unwrap();
    assert_eq!(count, 3);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn sync_slugifies_names(ctx: &TestHarness) {
    insert_person("Alexis Mercedes Rinck", &ctx.db_pool).await;

    sync::sync_people(&ctx.db_pool).await.unwrap();

    let row = CouncilmaticPerson::find_by_slug("alexis-mercedes-rinck", &ctx.db_pool)
        .await
        .unwrap();
    let row = row.expect("slug should resolve");
    assert_eq!(row.headshot, "");
    assert_eq!(row.biography, None);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn sync_twice_with_no_new_data_is_a_noop(ctx: &TestHarness) {
    insert_person("Dan Strauss", &ctx.db_pool).await;
    insert_person("Cathy Moore", &ctx.db_pool).await;

    let first = sync::sync_people(&ctx.db_pool).await.unwrap();
    assert_eq!(first.created, 2);

    let second = sync::sync_people(&ctx.db_pool).await.unwrap();
    assert_eq!(second.created, 0);
    assert_eq!(second.total, first.total);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn sync_preserves_curated_fields_across_rescrapes(ctx: &TestHarness) {
    insert_person("Bob Kettle", &ctx.db_pool).await;
    sync::sync_people(&ctx.db_pool).await.unwrap();

    CouncilmaticPerson::update_profile(
        "bob-kettle",
        "/media/headshots/kettle.jpg",
        Some("Represents District 7."),
        &ctx.db_pool,
    )
    .await
    .expect("Curation update failed");

    // Re-scrape refreshes the canonical row, then sync runs again
    insert_person("Bob Kettle", &ctx.db_pool).await;
    let report = sync::sync_people(&ctx.db_pool).await.unwrap();
    assert_eq!(report.created, 0);

    let row = CouncilmaticPerson::find_by_slug("bob-kettle", &ctx.db_pool)
        .await
        .unwrap()
        .expect("presentation row should survive");
    assert_eq!(row.headshot, "/media/headshots/kettle.jpg");
    assert_eq!(row.biography.as_deref(), Some("Represents District 7."));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn sync_only_fills_gaps(ctx: &TestHarness) {
    insert_person("Maritza Rivera", &ctx.db_pool).await;
    sync::sync_people(&ctx.db_pool).await.unwrap();

    insert_person("Mark Solomon", &ctx.db_pool).await;
    let report = sync::sync_people(&ctx.db_pool).await.unwrap();

    assert_eq!(report.created, 1);
    assert_eq!(report.total, 2);
}

// =============================================================================
// Tests: event and bill sync
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn event_slugs_embed_the_start_time(ctx: &TestHarness) {
    let start = chrono::NaiveDate::from_ymd_opt(2024, 6, 18)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();

    Event::upsert_scraped(
        "City Council",
        start,
        "America/Los_Angeles",
        "Council Chambers",
        "confirmed",
        "4521",
        json!([]),
        json!([]),
        &ctx.db_pool,
    )
    .await
    .expect("Failed to insert event");

    let report = sync::sync_events(&ctx.db_pool).await.unwrap();
    assert_eq!(report.created, 1);

    let slug: String = sqlx::query_scalar("SELECT slug FROM councilmatic_events")
        .fetch_one(&ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(slug, "city-council-2024-06-18-14-30-00");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn sync_all_reports_every_model(ctx: &TestHarness) {
    insert_person("Rob Saka", &ctx.db_pool).await;
    Bill::upsert(
        "CB 120863",
        "An ordinance relating to land use and zoning",
        "ordinance",
        None,
        json!([]),
        &ctx.db_pool,
    )
    .await
    .unwrap();

    let reports = sync::sync_all(&ctx.db_pool).await.unwrap();

    assert_eq!(reports.len(), 3);
    let models: Vec<&str> = reports.iter().map(|r| r.model).collect();
    assert_eq!(models, vec!["people", "events", "bills"]);
    assert_eq!(reports[0].created, 1);
    assert_eq!(reports[1].created, 0);
    assert_eq!(reports[2].created, 1);
}
