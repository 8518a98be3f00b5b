//! Geofence matching: stored locations against the fence set.

use sqlx::{Pool, Sqlite};

use crate::config::GEO_RESULT_CAP;
use crate::models::{Fence, Hit};
use crate::storage;

/// Computes the hit set for the current alert cycle.
///
/// Queries the store once for every location inside any fence (capped at
/// [`GEO_RESULT_CAP`]) and produces one [`Hit`] per matched vehicle. A
/// vehicle inside several fences still yields a single hit. Read-only; does
/// not mutate the location store.
///
/// # Errors
///
/// Returns the underlying query error; the caller logs it and skips the
/// cycle without touching the existing hit set.
pub async fn match_fences(pool: &Pool<Sqlite>, fences: &[Fence]) -> Result<Vec<Hit>, sqlx::Error> {
    let locations = storage::locations_in_fences(pool, fences, GEO_RESULT_CAP).await?;
    Ok(locations.into_iter().map(|location| Hit::for_vehicle(location.vehicle_id)).collect())
}
