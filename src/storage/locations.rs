//! Location batch upserts.

use log::warn;
use sqlx::{Pool, Sqlite};

use crate::error_handling::WriteError;
use crate::models::Location;

const UPSERT_SQL: &str = "INSERT INTO locations (
        vehicle_id, lat, lon, secs_since_report, observed_at_millis,
        route_tag, dir_tag, predictable, heading, speed_km_hr
    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
    ON CONFLICT(vehicle_id) DO UPDATE SET
        lat = excluded.lat,
        lon = excluded.lon,
        secs_since_report = excluded.secs_since_report,
        observed_at_millis = excluded.observed_at_millis,
        route_tag = COALESCE(excluded.route_tag, locations.route_tag),
        dir_tag = COALESCE(excluded.dir_tag, locations.dir_tag),
        predictable = excluded.predictable,
        heading = excluded.heading,
        speed_km_hr = excluded.speed_km_hr";

/// Upserts a batch of locations, keyed by vehicle id.
///
/// The batch runs in one transaction (one commit, atomic from the caller's
/// view). Insert-if-absent, merge-if-present: present fields overwrite,
/// absent optional fields keep the previously stored value, so a sparse
/// record never clobbers unrelated columns. A row that fails inside the
/// batch is logged and skipped without aborting the remaining rows.
///
/// Returns the number of rows written.
///
/// # Errors
///
/// Returns [`WriteError`] when the transaction itself cannot begin or
/// commit. The caller logs and proceeds; the cursor has already advanced,
/// so the batch is not retried.
pub async fn upsert_locations(
    pool: &Pool<Sqlite>,
    locations: &[Location],
) -> Result<usize, WriteError> {
    if locations.is_empty() {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    let mut written = 0usize;

    for location in locations {
        let result = sqlx::query(UPSERT_SQL)
            .bind(&location.vehicle_id)
            .bind(location.lat)
            .bind(location.lon)
            .bind(location.secs_since_report)
            .bind(location.observed_at_millis)
            .bind(&location.route_tag)
            .bind(&location.dir_tag)
            .bind(location.predictable)
            .bind(location.heading)
            .bind(location.speed_km_hr)
            .execute(&mut *tx)
            .await;
        match result {
            Ok(_) => written += 1,
            Err(e) => {
                warn!("Failed to upsert location for vehicle {}: {e}", location.vehicle_id);
            }
        }
    }

    tx.commit().await?;
    Ok(written)
}

/// Loads the stored location for one vehicle, if any.
pub async fn load_location(
    pool: &Pool<Sqlite>,
    vehicle_id: &str,
) -> Result<Option<Location>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM locations WHERE vehicle_id = ?")
        .bind(vehicle_id)
        .fetch_optional(pool)
        .await
}
