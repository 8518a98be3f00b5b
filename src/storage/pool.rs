//! Database connection pool management.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::config::{DB_ACQUIRE_TIMEOUT_SECS, DB_MAX_CONNECTIONS};
use crate::error_handling::DatabaseError;

/// Opens the store, creating the database file if absent.
///
/// WAL journaling lets the alert reader proceed while the ingest writer
/// holds its batch transaction. The acquire timeout bounds how long one
/// loop tick may wait on a connection.
///
/// # Errors
///
/// Returns [`DatabaseError::ConnectError`] when the database cannot be
/// opened or created at the given path.
pub async fn init_db_pool_with_path(db_path: &Path) -> Result<Arc<Pool<Sqlite>>, DatabaseError> {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(DB_MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(DB_ACQUIRE_TIMEOUT_SECS))
        .connect_with(options)
        .await
        .map_err(|source| DatabaseError::ConnectError {
            path: db_path.display().to_string(),
            source,
        })?;

    info!("Store ready at {}", db_path.display());
    Ok(Arc::new(pool))
}
