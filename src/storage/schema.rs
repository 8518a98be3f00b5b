//! Schema bootstrap.
//!
//! Run once at startup, before either loop is scheduled.

use log::info;
use sqlx::{Pool, Sqlite};

use crate::error_handling::DatabaseError;

/// Checks whether a table exists by name.
pub async fn table_exists(pool: &Pool<Sqlite>, name: &str) -> Result<bool, DatabaseError> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(name)
            .fetch_one(pool)
            .await?;
    Ok(count > 0)
}

/// Creates the `locations` and `fence_hits` tables if absent.
pub async fn ensure_schema(pool: &Pool<Sqlite>) -> Result<(), DatabaseError> {
    if !table_exists(pool, "locations").await? {
        info!("Creating locations table.");
    }
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS locations (
            vehicle_id TEXT PRIMARY KEY,
            lat REAL NOT NULL,
            lon REAL NOT NULL,
            secs_since_report INTEGER NOT NULL,
            observed_at_millis INTEGER NOT NULL,
            route_tag TEXT,
            dir_tag TEXT,
            predictable INTEGER NOT NULL,
            heading INTEGER NOT NULL,
            speed_km_hr INTEGER NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_locations_lat_lon ON locations (lat, lon)")
        .execute(pool)
        .await?;

    if !table_exists(pool, "fence_hits").await? {
        info!("Creating fence_hits table.");
    }
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS fence_hits (
            vehicle_id TEXT PRIMARY KEY,
            hit_value INTEGER NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
