//! Error type definitions.
//!
//! One error enum per subsystem. Startup errors (initialization, database
//! bootstrap, fence loading) are fatal; runtime errors (fetch, validation,
//! write, register) only ever abort the current loop tick.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for database bootstrap and pool management.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The database could not be opened or created.
    #[error("Failed to open database at {path}: {source}")]
    ConnectError {
        /// Path of the database file.
        path: String,
        /// Underlying connection error.
        source: sqlx::Error,
    },

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Error types for fence definition loading.
#[derive(Error, Debug)]
pub enum FenceError {
    /// The fence definition file could not be read.
    #[error("Failed to read fence definitions from {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The fence definition document is not valid JSON.
    #[error("Failed to parse fence definitions: {0}")]
    Parse(#[from] serde_json::Error),

    /// A fence ring is not closed (first and last coordinate differ).
    #[error("Fence `{0}` has an open ring; first and last coordinate must be equal")]
    OpenRing(String),

    /// A fence ring has too few points to describe a polygon.
    #[error("Fence `{0}` has fewer than 4 ring points")]
    TooFewPoints(String),
}

/// A failed fetch of the vehicle-location feed.
///
/// Any variant aborts the current ingest tick without advancing the cursor,
/// so the next tick retries the same window.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("Feed request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The feed answered with a non-success status code.
    #[error("Feed returned status {0}")]
    Status(u16),

    /// The response body could not be decoded as a feed document.
    #[error("Failed to decode feed document: {0}")]
    Decode(#[from] quick_xml::DeError),

    /// The feed answered with an embedded error element instead of data.
    #[error("Feed reported an error (retryable: {should_retry}): {message}")]
    Feed {
        /// Error text reported by the feed.
        message: String,
        /// Whether the feed marked the condition as transient.
        should_retry: bool,
    },

    /// The document decoded but carried no last-update time to advance
    /// the cursor with.
    #[error("Feed document is missing the last-update time")]
    MissingLastTime,
}

/// A single raw vehicle record that failed to transform.
///
/// Per-record: the offending record is dropped and logged, the rest of the
/// batch proceeds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required attribute was absent from the raw record.
    #[error("Vehicle record is missing required field `{0}`")]
    MissingField(&'static str),

    /// An attribute was present but failed to parse as its target type.
    #[error("Field `{field}` has unparseable value `{value}`")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },

    /// An attribute parsed but lies outside its documented range.
    #[error("Field `{field}` value `{value}` is out of range")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The raw value that was rejected.
        value: String,
    },
}

/// A failed bulk write of locations to the store.
///
/// The ingest cursor has already advanced when this surfaces, so the batch
/// is not retried; the cycle's data is dropped.
#[derive(Error, Debug)]
pub enum WriteError {
    /// SQL execution error on the batch transaction.
    #[error("Location batch write failed: {0}")]
    Sql(#[from] sqlx::Error),
}

/// A failed clear-and-rebuild of the hit set.
///
/// The two phases are not transactional: a failure between them leaves the
/// hit set empty until the next successful cycle.
#[derive(Error, Debug)]
pub enum RegisterError {
    /// The match-all delete of existing hits failed.
    #[error("Failed to clear hit set: {0}")]
    Delete(#[source] sqlx::Error),

    /// The bulk insert of the new hit set failed.
    #[error("Failed to write hit set: {0}")]
    Insert(#[source] sqlx::Error),
}
