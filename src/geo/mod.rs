//! Planar geometry over WGS84 coordinates: bounding boxes and
//! point-in-polygon containment.

use crate::models::LatLon;

/// A geographic bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Southern latitude boundary.
    pub min_lat: f64,
    /// Northern latitude boundary.
    pub max_lat: f64,
    /// Western longitude boundary.
    pub min_lon: f64,
    /// Eastern longitude boundary.
    pub max_lon: f64,
}

impl BoundingBox {
    /// Computes the bounding box of a ring.
    ///
    /// Returns `None` for an empty ring.
    pub fn of_ring(ring: &[LatLon]) -> Option<Self> {
        let first = ring.first()?;
        let mut bbox = Self {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lon: first.lon,
            max_lon: first.lon,
        };
        for point in &ring[1..] {
            bbox.min_lat = bbox.min_lat.min(point.lat);
            bbox.max_lat = bbox.max_lat.max(point.lat);
            bbox.min_lon = bbox.min_lon.min(point.lon);
            bbox.max_lon = bbox.max_lon.max(point.lon);
        }
        Some(bbox)
    }
}

/// Tests whether a point lies inside or on the boundary of a closed ring.
///
/// Even-odd (ray casting) rule with an explicit boundary check first, so a
/// point exactly on a ring edge or vertex counts as contained. The ring is
/// expected closed (first and last coordinate equal); the closing segment is
/// handled either way.
pub fn point_in_ring(point: LatLon, ring: &[LatLon]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[j];

        if on_segment(point, a, b) {
            return true;
        }

        if (a.lat > point.lat) != (b.lat > point.lat) {
            let lon_at_lat = (b.lon - a.lon) * (point.lat - a.lat) / (b.lat - a.lat) + a.lon;
            if point.lon < lon_at_lat {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Whether `p` lies on the segment from `a` to `b`.
fn on_segment(p: LatLon, a: LatLon, b: LatLon) -> bool {
    const EPSILON: f64 = 1e-12;

    let cross = (b.lat - a.lat) * (p.lon - a.lon) - (b.lon - a.lon) * (p.lat - a.lat);
    if cross.abs() > EPSILON {
        return false;
    }

    p.lat >= a.lat.min(b.lat) - EPSILON
        && p.lat <= a.lat.max(b.lat) + EPSILON
        && p.lon >= a.lon.min(b.lon) - EPSILON
        && p.lon <= a.lon.max(b.lon) + EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lon: f64) -> LatLon {
        LatLon { lat, lon }
    }

    /// Unit square centered on the origin, closed ring.
    fn square() -> Vec<LatLon> {
        vec![p(-1.0, -1.0), p(-1.0, 1.0), p(1.0, 1.0), p(1.0, -1.0), p(-1.0, -1.0)]
    }

    /// Concave "L" shape, closed ring.
    fn l_shape() -> Vec<LatLon> {
        vec![
            p(0.0, 0.0),
            p(0.0, 4.0),
            p(1.0, 4.0),
            p(1.0, 1.0),
            p(4.0, 1.0),
            p(4.0, 0.0),
            p(0.0, 0.0),
        ]
    }

    #[test]
    fn interior_point_is_inside() {
        assert!(point_in_ring(p(0.0, 0.0), &square()));
        assert!(point_in_ring(p(0.5, 0.5), &square()));
    }

    #[test]
    fn exterior_point_is_outside() {
        assert!(!point_in_ring(p(2.0, 0.0), &square()));
        assert!(!point_in_ring(p(0.0, -1.5), &square()));
    }

    #[test]
    fn boundary_point_counts_as_inside() {
        assert!(point_in_ring(p(1.0, 0.0), &square()));
        assert!(point_in_ring(p(0.0, -1.0), &square()));
    }

    #[test]
    fn vertex_counts_as_inside() {
        assert!(point_in_ring(p(1.0, 1.0), &square()));
    }

    #[test]
    fn concave_notch_is_outside() {
        // The notch of the L: inside the bbox, outside the polygon.
        assert!(!point_in_ring(p(3.0, 3.0), &l_shape()));
        assert!(point_in_ring(p(0.5, 3.0), &l_shape()));
        assert!(point_in_ring(p(3.0, 0.5), &l_shape()));
    }

    #[test]
    fn matches_naive_oracle_on_grid() {
        // Reference oracle: plain even-odd rule without the boundary check.
        fn oracle(point: LatLon, ring: &[LatLon]) -> bool {
            let mut inside = false;
            let mut j = ring.len() - 1;
            for i in 0..ring.len() {
                let (a, b) = (ring[i], ring[j]);
                if (a.lat > point.lat) != (b.lat > point.lat) {
                    let x = (b.lon - a.lon) * (point.lat - a.lat) / (b.lat - a.lat) + a.lon;
                    if point.lon < x {
                        inside = !inside;
                    }
                }
                j = i;
            }
            inside
        }

        let ring = l_shape();
        // Off-lattice grid so no sample lands on an edge, where the oracle
        // and the boundary-inclusive rule legitimately differ.
        for i in 0..40 {
            for j in 0..40 {
                let point = p(-0.95 + f64::from(i) * 0.2, -0.95 + f64::from(j) * 0.2);
                assert_eq!(
                    point_in_ring(point, &ring),
                    oracle(point, &ring),
                    "disagreement at {point:?}"
                );
            }
        }
    }

    #[test]
    fn bbox_of_ring_spans_all_points() {
        let bbox = BoundingBox::of_ring(&l_shape()).expect("non-empty ring");
        assert_eq!(bbox.min_lat, 0.0);
        assert_eq!(bbox.max_lat, 4.0);
        assert_eq!(bbox.min_lon, 0.0);
        assert_eq!(bbox.max_lon, 4.0);
    }

    #[test]
    fn bbox_of_empty_ring_is_none() {
        assert!(BoundingBox::of_ring(&[]).is_none());
    }
}
