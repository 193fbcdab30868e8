use crate::geo::MapPoint;

/// A closed sequence of positions.
pub type Ring = Vec<MapPoint>;

/// Rings of a single polygon, the first one being the outer ring.
pub type PolygonRings = Vec<Ring>;

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(MapPoint),
    Polygon(PolygonRings),
    MultiPolygon(Vec<PolygonRings>),
    /// Any other geometry type, identified by its name.
    Unsupported(String),
}

impl Geometry {
    pub fn type_name(&self) -> &str {
        match self {
            Self::Point(_) => "Point",
            Self::Polygon(_) => "Polygon",
            Self::MultiPolygon(_) => "MultiPolygon",
            Self::Unsupported(name) => name,
        }
    }

    /// The outer ring of a polygon.
    pub fn outer_ring(&self) -> Option<&Ring> {
        match self {
            Self::Polygon(rings) => rings.first(),
            _ => None,
        }
    }
}
