//! Core domain types: vehicle locations, fences, and fence hits.

use serde::Deserialize;

/// A geographic point in WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLon {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lon: f64,
}

/// The latest known position report for one vehicle.
///
/// Exactly one row per `vehicle_id` lives in the store; each ingest cycle
/// overwrites the prior row for any vehicle present in that cycle's batch.
/// Vehicles absent from a batch keep their last known Location.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Location {
    /// Stable vehicle identifier, the upsert key.
    pub vehicle_id: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Feed-reported staleness of this fix at fetch time, in seconds.
    pub secs_since_report: u32,
    /// The feed's own last-update time when this batch was fetched
    /// (epoch millis). Not wall-clock receipt time.
    pub observed_at_millis: i64,
    /// Route the vehicle is assigned to, when the feed reports one.
    pub route_tag: Option<String>,
    /// Direction within the route, when the feed reports one.
    pub dir_tag: Option<String>,
    /// Whether the feed considers this fix predictable.
    pub predictable: bool,
    /// Heading in integer degrees, [0, 360).
    pub heading: u16,
    /// Ground speed in km/h.
    pub speed_km_hr: u32,
}

/// A named polygonal geographic region used for containment testing.
///
/// Loaded once at startup and immutable for the process lifetime.
#[derive(Debug, Clone, Deserialize)]
pub struct Fence {
    /// Stable fence identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Integer region category.
    pub region: i32,
    /// Closed polygon ring: first and last coordinate equal, at least
    /// four points.
    pub ring: Vec<LatLon>,
}

/// A derived record asserting a vehicle is currently inside some fence.
///
/// Valid only for the current alert cycle: the whole set is deleted and
/// rebuilt every cycle, so no Hit persists unless recomputed fresh.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Hit {
    /// Vehicle the hit refers to.
    pub vehicle_id: String,
    /// Fixed sentinel marker; only presence or absence of the row carries
    /// meaning.
    pub hit_value: i32,
}

impl Hit {
    /// Builds a hit for a vehicle with the standard sentinel value.
    pub fn for_vehicle(vehicle_id: impl Into<String>) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            hit_value: crate::config::HIT_VALUE,
        }
    }
}
