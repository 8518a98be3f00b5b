// Shared test helpers for store setup and test data creation.

use sqlx::SqlitePool;

use fleet_tracker::models::{Fence, LatLon, Location};
use fleet_tracker::storage::ensure_schema;
use fleet_tracker::Config;

/// Creates an in-memory store with the schema applied.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    ensure_schema(&pool).await.expect("Failed to create schema");
    pool
}

/// Builds a configuration pointed at a test feed endpoint.
#[allow(dead_code)]
pub fn test_config(feed_url: &str) -> Config {
    Config {
        feed_url: feed_url.to_string(),
        agency: "ttc".to_string(),
        route: Some("65".to_string()),
        ..Config::default()
    }
}

/// Builds a complete location for seeding the store.
#[allow(dead_code)]
pub fn test_location(vehicle_id: &str, lat: f64, lon: f64) -> Location {
    Location {
        vehicle_id: vehicle_id.to_string(),
        lat,
        lon,
        secs_since_report: 5,
        observed_at_millis: 1_000,
        route_tag: Some("65".to_string()),
        dir_tag: Some("65_0_65".to_string()),
        predictable: true,
        heading: 90,
        speed_km_hr: 30,
    }
}

/// Builds an axis-aligned rectangular fence as a closed ring.
#[allow(dead_code)]
pub fn square_fence(id: &str, min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Fence {
    Fence {
        id: id.to_string(),
        name: id.to_string(),
        region: 1,
        ring: vec![
            LatLon { lat: min_lat, lon: min_lon },
            LatLon { lat: min_lat, lon: max_lon },
            LatLon { lat: max_lat, lon: max_lon },
            LatLon { lat: max_lat, lon: min_lon },
            LatLon { lat: min_lat, lon: min_lon },
        ],
    }
}
