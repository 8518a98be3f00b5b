//! Capped geo-containment query against the location store.

use log::debug;
use sqlx::{Pool, QueryBuilder, Sqlite};

use crate::geo::{point_in_ring, BoundingBox};
use crate::models::{Fence, LatLon, Location};

/// Returns the stored locations whose point lies inside or on the boundary
/// of at least one fence.
///
/// Executed as a single query: one bounding-box predicate per fence, ORed
/// together, capped at `cap` rows; candidates are then refined with the
/// exact containment test. Exceeding the cap silently truncates; callers
/// must not assume completeness beyond it. Read-only.
pub async fn locations_in_fences(
    pool: &Pool<Sqlite>,
    fences: &[Fence],
    cap: u32,
) -> Result<Vec<Location>, sqlx::Error> {
    let boxes: Vec<BoundingBox> =
        fences.iter().filter_map(|fence| BoundingBox::of_ring(&fence.ring)).collect();
    if boxes.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM locations WHERE ");
    for (i, bbox) in boxes.iter().enumerate() {
        if i > 0 {
            builder.push(" OR ");
        }
        builder.push("(lat BETWEEN ");
        builder.push_bind(bbox.min_lat);
        builder.push(" AND ");
        builder.push_bind(bbox.max_lat);
        builder.push(" AND lon BETWEEN ");
        builder.push_bind(bbox.min_lon);
        builder.push(" AND ");
        builder.push_bind(bbox.max_lon);
        builder.push(")");
    }
    builder.push(" LIMIT ");
    builder.push_bind(i64::from(cap));

    let candidates: Vec<Location> = builder.build_query_as().fetch_all(pool).await?;
    if candidates.len() as u32 == cap {
        debug!("Geo query hit the {cap}-row cap; results may be truncated.");
    }

    Ok(candidates
        .into_iter()
        .filter(|location| {
            let point = LatLon { lat: location.lat, lon: location.lon };
            fences.iter().any(|fence| point_in_ring(point, &fence.ring))
        })
        .collect())
}
