//! Hit-set storage: match-all delete and bulk upsert.

use sqlx::{Pool, Sqlite};

use crate::error_handling::RegisterError;
use crate::models::Hit;

/// Deletes every hit record. Returns the number of rows removed.
pub async fn delete_all_hits(pool: &Pool<Sqlite>) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM fence_hits").execute(pool).await?;
    Ok(result.rows_affected())
}

/// Bulk-upserts a hit set. Returns the number of rows written.
pub async fn insert_hits(pool: &Pool<Sqlite>, hits: &[Hit]) -> Result<usize, sqlx::Error> {
    if hits.is_empty() {
        return Ok(0);
    }
    let mut tx = pool.begin().await?;
    for hit in hits {
        sqlx::query(
            "INSERT INTO fence_hits (vehicle_id, hit_value) VALUES (?, ?)
             ON CONFLICT(vehicle_id) DO UPDATE SET hit_value = excluded.hit_value",
        )
        .bind(&hit.vehicle_id)
        .bind(hit.hit_value)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    Ok(hits.len())
}

/// Replaces the entire hit set: match-all delete, then bulk upsert.
///
/// The two phases are deliberately not transactional; a failure between them
/// leaves the hit set empty until the next successful cycle. The delete runs
/// unconditionally; an empty new set still clears the table.
///
/// # Errors
///
/// Returns [`RegisterError`] tagged with the phase that failed.
pub async fn replace_hits(pool: &Pool<Sqlite>, hits: &[Hit]) -> Result<(), RegisterError> {
    delete_all_hits(pool).await.map_err(RegisterError::Delete)?;
    insert_hits(pool, hits).await.map_err(RegisterError::Insert)?;
    Ok(())
}

/// Loads the current hit set.
pub async fn load_hits(pool: &Pool<Sqlite>) -> Result<Vec<Hit>, sqlx::Error> {
    sqlx::query_as("SELECT vehicle_id, hit_value FROM fence_hits ORDER BY vehicle_id")
        .fetch_all(pool)
        .await
}
