use crate::entities::{geo::MapPoint, geometry::*};

/// A single position that stands in for a more complex shape
/// when placing a marker.
pub trait RepresentativePoint {
    fn representative_point(&self) -> Option<MapPoint>;
}

impl RepresentativePoint for Geometry {
    fn representative_point(&self) -> Option<MapPoint> {
        match self {
            Self::Point(pos) => Some(*pos),
            Self::Polygon(_) => self.outer_ring().and_then(|ring| vertex_average(ring)),
            Self::MultiPolygon(_) | Self::Unsupported(_) => None,
        }
    }
}

/// Unweighted mean of all vertices of a ring.
///
/// This is not the area centroid: vertices are averaged as they are,
/// so the closing vertex of a closed ring is counted twice and dense
/// edges pull the point towards them. Holes are ignored.
pub fn vertex_average(ring: &[MapPoint]) -> Option<MapPoint> {
    if ring.is_empty() {
        return None;
    }
    let (lat_sum, lng_sum) = ring
        .iter()
        .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat(), lng + p.lng()));
    let n = ring.len() as f64;
    Some(MapPoint::from_lat_lng_deg(lat_sum / n, lng_sum / n))
}
