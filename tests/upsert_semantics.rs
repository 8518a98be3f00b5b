// Integration tests for the location store's upsert semantics: merge rather
// than replace, latest-wins per vehicle, and idempotent redelivery.

mod helpers;

use fleet_tracker::storage::{load_location, upsert_locations};
use fleet_tracker::transform::transform;

use fleet_tracker::feed::RawVehicle;
use helpers::{create_test_pool, test_location};

#[tokio::test]
async fn upsert_keeps_one_row_per_vehicle() {
    let pool = create_test_pool().await;

    upsert_locations(&pool, &[test_location("bus", 43.7, -79.4)]).await.expect("first");
    let mut moved = test_location("bus", 43.71, -79.41);
    moved.observed_at_millis = 2_000;
    upsert_locations(&pool, &[moved.clone()]).await.expect("second");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM locations")
        .fetch_one(&pool)
        .await
        .expect("count");
    assert_eq!(count, 1);

    let stored = load_location(&pool, "bus").await.expect("query").expect("stored");
    assert_eq!(stored, moved);
}

#[tokio::test]
async fn sparse_record_preserves_unrelated_fields() {
    let pool = create_test_pool().await;

    upsert_locations(&pool, &[test_location("bus", 43.7, -79.4)]).await.expect("full record");

    // A later reading without route/direction assignment.
    let mut sparse = test_location("bus", 43.72, -79.42);
    sparse.route_tag = None;
    sparse.dir_tag = None;
    sparse.observed_at_millis = 3_000;
    upsert_locations(&pool, &[sparse]).await.expect("sparse record");

    let stored = load_location(&pool, "bus").await.expect("query").expect("stored");
    assert_eq!(stored.lat, 43.72, "present fields overwrite");
    assert_eq!(stored.observed_at_millis, 3_000);
    assert_eq!(stored.route_tag.as_deref(), Some("65"), "absent fields are preserved");
    assert_eq!(stored.dir_tag.as_deref(), Some("65_0_65"));
}

#[tokio::test]
async fn redelivered_raw_record_upserts_identically() {
    let pool = create_test_pool().await;

    let raw = RawVehicle {
        id: Some("1266".into()),
        route_tag: Some("65".into()),
        dir_tag: Some("65_0_65".into()),
        lat: Some("43.7".into()),
        lon: Some("-79.4".into()),
        secs_since_report: Some("12".into()),
        predictable: Some("true".into()),
        heading: Some("270".into()),
        speed_km_hr: Some("35".into()),
    };

    // The same raw record delivered twice with the same observed-at time
    // must store the same row both times.
    let first = transform(&raw, 1_000).expect("valid");
    upsert_locations(&pool, &[first.clone()]).await.expect("first delivery");
    let after_first = load_location(&pool, "1266").await.expect("query").expect("stored");

    let second = transform(&raw, 1_000).expect("valid");
    assert_eq!(first, second);
    upsert_locations(&pool, &[second]).await.expect("redelivery");
    let after_second = load_location(&pool, "1266").await.expect("query").expect("stored");

    assert_eq!(after_first, after_second);
}

#[tokio::test]
async fn empty_batch_writes_nothing() {
    let pool = create_test_pool().await;
    let written = upsert_locations(&pool, &[]).await.expect("empty batch");
    assert_eq!(written, 0);
}
