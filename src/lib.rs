//! fleet_tracker library: vehicle-location ingest and geofence alerting.
//!
//! Two independently scheduled loops share one SQLite store. The Ingest Job
//! polls a vehicle-location feed with a monotonically advancing time cursor,
//! normalizes each raw reading into a typed [`models::Location`], and upserts
//! the batch keyed by vehicle identity. The Alert Job recomputes, from
//! scratch on every cycle, the set of vehicles currently inside any
//! configured fence and replaces the stored hit set with it.
//!
//! # Example
//!
//! ```no_run
//! use fleet_tracker::{run, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env();
//! run(config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod feed;
pub mod fences;
pub mod geo;
pub mod initialization;
pub mod jobs;
pub mod matcher;
pub mod models;
pub mod storage;
pub mod transform;

pub use config::{Config, LogFormat, LogLevel};
pub use jobs::{alert_tick, ingest_tick, run, IngestReport};
