//! Raw feed record to canonical [`Location`] transformation.
//!
//! The transform is deterministic and side-effect-free: the same raw record
//! and observed-at time always produce the same Location. Redelivered raw
//! records therefore upsert to an identical row.

use std::fmt::Display;
use std::str::FromStr;

use crate::error_handling::ValidationError;
use crate::feed::RawVehicle;
use crate::models::Location;

/// Transforms one raw vehicle record into a typed [`Location`].
///
/// `observed_at_millis` is the feed's reported last-update time for the batch
/// the record arrived in, not wall-clock receipt time.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the first field that is absent,
/// unparseable, or out of range. The caller drops and logs the record; a
/// single bad record never aborts its batch.
pub fn transform(raw: &RawVehicle, observed_at_millis: i64) -> Result<Location, ValidationError> {
    let vehicle_id = require("id", &raw.id)?.to_string();

    let lat: f64 = parse_field("lat", require("lat", &raw.lat)?)?;
    let lon: f64 = parse_field("lon", require("lon", &raw.lon)?)?;
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(out_of_range("lat", lat));
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(out_of_range("lon", lon));
    }

    let secs_since_report: u32 =
        parse_field("secsSinceReport", require("secsSinceReport", &raw.secs_since_report)?)?;
    let predictable: bool = parse_field("predictable", require("predictable", &raw.predictable)?)?;

    let heading_raw = require("heading", &raw.heading)?;
    let heading: i32 = parse_field("heading", heading_raw)?;
    if !(0..360).contains(&heading) {
        return Err(out_of_range("heading", heading));
    }

    let speed_km_hr: u32 = parse_field("speedKmHr", require("speedKmHr", &raw.speed_km_hr)?)?;

    Ok(Location {
        vehicle_id,
        lat,
        lon,
        secs_since_report,
        observed_at_millis,
        route_tag: raw.route_tag.clone(),
        dir_tag: raw.dir_tag.clone(),
        predictable,
        heading: heading as u16,
        speed_km_hr,
    })
}

fn require<'a>(
    field: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str, ValidationError> {
    value.as_deref().ok_or(ValidationError::MissingField(field))
}

fn parse_field<T: FromStr>(field: &'static str, value: &str) -> Result<T, ValidationError> {
    value.parse().map_err(|_| ValidationError::InvalidField {
        field,
        value: value.to_string(),
    })
}

fn out_of_range(field: &'static str, value: impl Display) -> ValidationError {
    ValidationError::OutOfRange {
        field,
        value: value.to_string(),
    }
}
