//! The two timer-driven control loops and the process entry point.
//!
//! The Ingest Job (fetch → transform → upsert) and the Alert Job (match →
//! register) never call each other; they rendezvous only through the shared
//! store. Ticks of one loop serialize (the tick is awaited in the loop body)
//! so the cursor keeps a single writer. Nothing synchronizes the two loops
//! against each other: an alert read may observe a location batch from
//! before or after a concurrent ingest write.

use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use log::{error, info, warn};
use sqlx::{Pool, Sqlite};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::config::{Config, FAILURE_ESCALATION_THRESHOLD};
use crate::error_handling::FetchError;
use crate::fences::load_fences;
use crate::initialization::init_client;
use crate::models::Fence;
use crate::storage::{ensure_schema, init_db_pool_with_path, replace_hits, upsert_locations};
use crate::{feed, matcher, transform};

/// Outcome of one successful ingest tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    /// Raw vehicle records in the fetched batch.
    pub fetched: usize,
    /// Records dropped by validation.
    pub dropped: usize,
    /// Locations written to the store.
    pub written: usize,
}

/// Runs one ingest cycle: fetch from the cursor, transform, upsert.
///
/// The cursor is owned by the calling loop and passed in per tick; it
/// advances only after a successful fetch+decode and never decreases. A
/// validation failure drops that record only. A store write failure is
/// logged and the cycle's data dropped; the cursor has already advanced,
/// so the batch is not retried.
///
/// # Errors
///
/// Returns a [`FetchError`] when the feed call fails; the cursor is left
/// unmodified so the next tick retries the same window.
pub async fn ingest_tick(
    client: &reqwest::Client,
    pool: &Pool<Sqlite>,
    config: &Config,
    cursor: &mut i64,
) -> Result<IngestReport, FetchError> {
    let (document, reported) = feed::fetch(client, config, *cursor).await?;

    // The feed never reports time going backward; clamp anyway so the
    // cursor stays monotone on success.
    *cursor = (*cursor).max(reported);
    let observed_at_millis = *cursor;

    let mut locations = Vec::with_capacity(document.vehicles.len());
    let mut dropped = 0usize;
    for raw in &document.vehicles {
        match transform::transform(raw, observed_at_millis) {
            Ok(location) => locations.push(location),
            Err(e) => {
                dropped += 1;
                warn!("Dropping vehicle record: {e}");
            }
        }
    }

    let written = match upsert_locations(pool, &locations).await {
        Ok(written) => written,
        Err(e) => {
            warn!("Location batch write failed; this cycle's data is lost: {e}");
            0
        }
    };

    Ok(IngestReport { fetched: document.vehicles.len(), dropped, written })
}

/// Runs one alert cycle: match fences, then clear and rebuild the hit set.
///
/// The register step runs even for an empty match result, so a cycle with
/// no matches still ends with an empty hit table rather than a stale one.
/// A failed match aborts before the delete phase, leaving the previous hit
/// set in place.
///
/// Returns the number of hits registered.
pub async fn alert_tick(pool: &Pool<Sqlite>, fences: &[Fence]) -> anyhow::Result<usize> {
    let hits = matcher::match_fences(pool, fences).await.context("Geofence query failed")?;
    let count = hits.len();
    replace_hits(pool, &hits).await?;
    Ok(count)
}

/// Consecutive-failure tracking for one loop.
///
/// Failure logging escalates from warn to error once the threshold is
/// reached; any successful tick resets the count.
struct FailureTracker {
    loop_name: &'static str,
    consecutive: u32,
}

impl FailureTracker {
    fn new(loop_name: &'static str) -> Self {
        Self { loop_name, consecutive: 0 }
    }

    fn success(&mut self) {
        if self.consecutive > 0 {
            info!("{} loop recovered after {} failed cycles.", self.loop_name, self.consecutive);
        }
        self.consecutive = 0;
    }

    fn failure(&mut self, error: &dyn Display) {
        self.consecutive += 1;
        if self.consecutive >= FAILURE_ESCALATION_THRESHOLD {
            error!(
                "{} cycle failed ({} consecutive): {error}",
                self.loop_name, self.consecutive
            );
        } else {
            warn!("{} cycle failed: {error}", self.loop_name);
        }
    }
}

async fn ingest_loop(
    client: reqwest::Client,
    pool: Arc<Pool<Sqlite>>,
    config: Config,
    cancel: CancellationToken,
) {
    // The cursor lives here and nowhere else; 0 means "beginning of the
    // available feed window". Not persisted: a restart re-fetches the
    // feed's full current snapshot.
    let mut cursor: i64 = 0;
    let mut interval = tokio::time::interval(Duration::from_secs(config.ingest_interval_secs));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut failures = FailureTracker::new("Ingest");

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                match ingest_tick(&client, &pool, &config, &mut cursor).await {
                    Ok(report) => {
                        failures.success();
                        info!(
                            "Ingest cycle: fetched {}, dropped {}, wrote {} (cursor {})",
                            report.fetched, report.dropped, report.written, cursor
                        );
                    }
                    Err(e) => failures.failure(&e),
                }
            }
        }
    }
    info!("Ingest loop stopped.");
}

async fn alert_loop(
    pool: Arc<Pool<Sqlite>>,
    fences: Arc<Vec<Fence>>,
    config: Config,
    cancel: CancellationToken,
) {
    let mut interval = tokio::time::interval(Duration::from_secs(config.alert_interval_secs));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut failures = FailureTracker::new("Alert");

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                match alert_tick(&pool, &fences).await {
                    Ok(count) => {
                        failures.success();
                        info!("Alert cycle: {count} vehicles inside fences.");
                    }
                    Err(e) => failures.failure(&format!("{e:#}")),
                }
            }
        }
    }
    info!("Alert loop stopped.");
}

/// Starts the service and runs until interrupted.
///
/// Bootstraps the store schema, loads the fence set, spawns the two loops,
/// and waits for ctrl-c; on shutdown both loops finish their current tick
/// and exit.
///
/// # Errors
///
/// Returns an error only for startup failures (database, fences, HTTP
/// client). Runtime errors are handled per tick and never propagate here.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let pool = init_db_pool_with_path(&config.db_path).await?;
    ensure_schema(&pool).await?;

    let fences = Arc::new(load_fences(config.fences_path.as_deref())?);
    let client = init_client(&config)?;

    info!(
        "Tracking agency `{}` (route {}), {} fences; ingest every {}s, alert every {}s.",
        config.agency,
        config.route.as_deref().unwrap_or("all"),
        fences.len(),
        config.ingest_interval_secs,
        config.alert_interval_secs
    );

    let cancel = CancellationToken::new();
    let ingest = tokio::spawn(ingest_loop(
        client,
        Arc::clone(&pool),
        config.clone(),
        cancel.clone(),
    ));
    let alert = tokio::spawn(alert_loop(
        Arc::clone(&pool),
        Arc::clone(&fences),
        config.clone(),
        cancel.clone(),
    ));

    tokio::signal::ctrl_c().await.context("Failed to listen for shutdown signal")?;
    info!("Shutdown signal received.");
    cancel.cancel();
    let _ = ingest.await;
    let _ = alert.await;

    Ok(())
}
