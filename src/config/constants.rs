//! Fixed configuration values and their environment overrides.

/// Default vehicle-location feed endpoint.
pub const DEFAULT_FEED_URL: &str = "http://webservices.nextbus.com/service/publicXMLFeed";

/// Default agency whose vehicles are ingested.
pub const DEFAULT_AGENCY: &str = "ttc";

/// Default route filter. An empty override disables route filtering.
pub const DEFAULT_ROUTE: &str = "65";

/// Default seconds between ingest cycles.
pub const DEFAULT_INGEST_INTERVAL_SECS: u64 = 15;

/// Default seconds between alert cycles.
pub const DEFAULT_ALERT_INTERVAL_SECS: u64 = 5;

/// Default SQLite database path.
pub const DEFAULT_DB_PATH: &str = "fleet_tracker.db";

/// Default per-request timeout for feed and store calls, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Maximum connections in the store pool. One writer plus the alert
/// reader never needs many.
pub const DB_MAX_CONNECTIONS: u32 = 5;

/// Seconds one loop tick may wait to acquire a store connection.
pub const DB_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Upper bound on locations returned by one geo-containment query.
/// Results beyond the cap are silently truncated.
pub const GEO_RESULT_CAP: u32 = 1000;

/// Sentinel stored in every hit record. Only presence of the record
/// carries meaning.
pub const HIT_VALUE: i32 = 10;

/// Consecutive failed ticks of one loop before failure logging escalates
/// from warn to error.
pub const FAILURE_ESCALATION_THRESHOLD: u32 = 5;

/// Environment override for the feed endpoint.
pub const ENV_FEED_URL: &str = "FLEET_FEED_URL";
/// Environment override for the agency.
pub const ENV_AGENCY: &str = "FLEET_AGENCY";
/// Environment override for the route filter; empty disables filtering.
pub const ENV_ROUTE: &str = "FLEET_ROUTE";
/// Environment override for the ingest interval.
pub const ENV_INGEST_INTERVAL_SECS: &str = "FLEET_INGEST_INTERVAL_SECS";
/// Environment override for the alert interval.
pub const ENV_ALERT_INTERVAL_SECS: &str = "FLEET_ALERT_INTERVAL_SECS";
/// Environment override for the database path.
pub const ENV_DB_PATH: &str = "FLEET_DB_PATH";
/// Environment override for the fence definition file.
pub const ENV_FENCES_PATH: &str = "FLEET_FENCES_PATH";
/// Environment override for the request timeout.
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "FLEET_REQUEST_TIMEOUT_SECS";
/// Environment override for the log level.
pub const ENV_LOG_LEVEL: &str = "FLEET_LOG_LEVEL";
/// Environment override for the log format.
pub const ENV_LOG_FORMAT: &str = "FLEET_LOG_FORMAT";
