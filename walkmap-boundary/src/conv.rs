use super::*;
use thiserror::Error;
use walkmap_entities as e;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("The center is not a valid position")]
    Center,
    #[error("Expected {breakdown} buffer radii but got {buffers}")]
    BufferCount { breakdown: usize, buffers: usize },
}

fn map_point(pos: &[f64]) -> Option<e::geo::MapPoint> {
    match pos {
        [lon, lat, ..] => Some(e::geo::MapPoint::from_lat_lng_deg(*lat, *lon)),
        _ => None,
    }
}

fn polygon_rings(rings: Vec<Vec<Position>>) -> Option<e::geometry::PolygonRings> {
    rings
        .iter()
        .map(|ring| ring.iter().map(|p| map_point(p)).collect::<Option<_>>())
        .collect()
}

impl From<Shape> for e::geometry::Geometry {
    fn from(from: Shape) -> Self {
        use e::geometry::Geometry as G;
        let type_name = from.type_name();
        let geometry = match from {
            Shape::Point { coordinates } => map_point(&coordinates).map(G::Point),
            Shape::Polygon { coordinates } => polygon_rings(coordinates).map(G::Polygon),
            Shape::MultiPolygon { coordinates } => coordinates
                .into_iter()
                .map(polygon_rings)
                .collect::<Option<_>>()
                .map(G::MultiPolygon),
        };
        // Positions with less than two coordinates cannot be placed anywhere.
        geometry.unwrap_or_else(|| G::Unsupported(type_name.into()))
    }
}

impl From<Geometry> for e::geometry::Geometry {
    fn from(from: Geometry) -> Self {
        match from {
            Geometry::Shape(shape) => shape.into(),
            Geometry::Other { kind } => {
                Self::Unsupported(kind.unwrap_or_else(|| "Unknown".into()))
            }
        }
    }
}

impl From<NearbyPoi> for e::walkability::Poi {
    fn from(from: NearbyPoi) -> Self {
        let NearbyPoi {
            name,
            category,
            geometry,
        } = from;
        Self {
            name,
            category,
            geometry: geometry.map(Into::into),
        }
    }
}

impl TryFrom<WalkabilityData> for e::walkability::WalkabilityDataset {
    type Error = Error;
    fn try_from(from: WalkabilityData) -> Result<Self, Self::Error> {
        let WalkabilityData {
            center,
            breakdown,
            buffers_m,
            nearby,
            gradient_layer,
            index,
        } = from;
        let center = e::geo::MapPoint::try_from_lat_lng_deg(center.lat, center.lon)
            .map_err(|_| Error::Center)?;
        let breakdown = match (breakdown, buffers_m) {
            (Some(breakdown), Some(buffers)) => {
                if breakdown.len() != buffers.len() {
                    return Err(Error::BufferCount {
                        breakdown: breakdown.len(),
                        buffers: buffers.len(),
                    });
                }
                let categories = breakdown
                    .into_iter()
                    .zip(buffers)
                    .map(|(b, buffer_m)| e::walkability::CategoryBreakdown {
                        name: b.name,
                        weight: b.weight,
                        nearby_count: b.nearby_count,
                        buffer_m,
                    })
                    .collect();
                Some(categories)
            }
            _ => None,
        };
        let nearby = nearby.into_iter().map(Into::into).collect();
        let gradient = gradient_layer
            .and_then(|layer| layer.features)
            .map(|features| {
                features
                    .into_iter()
                    // Features without a geometry have nothing to draw.
                    .filter_map(|Feature { properties, geometry }| {
                        geometry.map(|geometry| e::walkability::GradientCell {
                            score: properties.and_then(|p| p.score),
                            geometry: geometry.into(),
                        })
                    })
                    .collect()
            });
        Ok(Self {
            center,
            breakdown,
            nearby,
            gradient,
            index: index.unwrap_or_default(),
        })
    }
}

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        Self {
            lat: from.lat(),
            lon: from.lng(),
        }
    }
}

impl From<e::render::CircleStyle> for CircleStyle {
    fn from(from: e::render::CircleStyle) -> Self {
        let e::render::CircleStyle {
            color,
            fill_color,
            weight,
            opacity,
            fill_opacity,
        } = from;
        Self {
            color,
            fill_color,
            weight,
            opacity,
            fill_opacity,
        }
    }
}

impl From<e::render::PolygonStyle> for PolygonStyle {
    fn from(from: e::render::PolygonStyle) -> Self {
        let e::render::PolygonStyle {
            color,
            weight,
            opacity,
            fill_opacity,
        } = from;
        Self {
            color,
            weight,
            opacity,
            fill_opacity,
        }
    }
}

impl From<e::render::RenderDirective> for RenderDirective {
    fn from(from: e::render::RenderDirective) -> Self {
        use e::render::RenderDirective as D;
        match from {
            D::Circle {
                center,
                radius_m,
                style,
                popup,
            } => Self::Circle {
                center: center.into(),
                radius_m,
                style: style.into(),
                popup,
            },
            D::Marker { pos, icon, popup } => Self::Marker {
                lat: pos.lat(),
                lon: pos.lng(),
                icon,
                popup,
            },
            D::Polygon {
                rings,
                fill_color,
                style,
                tooltip,
            } => Self::Polygon {
                rings: rings
                    .into_iter()
                    .map(|ring| ring.into_iter().map(|p| [p.lat(), p.lng()]).collect())
                    .collect(),
                fill_color: fill_color.to_string(),
                style: style.into(),
                tooltip,
            },
        }
    }
}

impl From<e::render::TileLayer> for TileLayer {
    fn from(from: e::render::TileLayer) -> Self {
        let e::render::TileLayer {
            url,
            attribution,
            max_zoom,
        } = from;
        Self {
            url,
            attribution,
            max_zoom,
        }
    }
}

impl From<e::render::MapView> for MapView {
    fn from(from: e::render::MapView) -> Self {
        let e::render::MapView {
            center,
            zoom,
            tiles,
            directives,
        } = from;
        Self {
            center: center.into(),
            zoom,
            tiles: tiles.into(),
            directives: directives.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<e::render::Legend> for Legend {
    fn from(from: e::render::Legend) -> Self {
        let e::render::Legend {
            title,
            scale,
            marker_percent,
        } = from;
        Self {
            title,
            scale,
            marker_percent,
        }
    }
}

impl From<e::render::RenderPlan> for RenderPlan {
    fn from(from: e::render::RenderPlan) -> Self {
        let e::render::RenderPlan {
            walkability,
            gradient,
            legend,
            refresh_after,
        } = from;
        Self {
            walkability: walkability.into(),
            gradient: gradient.map(Into::into),
            legend: legend.map(Into::into),
            refresh_after_ms: u64::try_from(refresh_after.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

impl From<e::address::AddressSuggestion> for AddressSuggestion {
    fn from(from: e::address::AddressSuggestion) -> Self {
        let e::address::AddressSuggestion { display_name, pos } = from;
        Self {
            display_name,
            lat: pos.lat(),
            lon: pos.lng(),
        }
    }
}

impl From<e::address::ResolvedAddress> for ResolvedAddress {
    fn from(from: e::address::ResolvedAddress) -> Self {
        let e::address::ResolvedAddress { name, pos } = from;
        Self {
            name,
            lat: pos.lat(),
            lon: pos.lng(),
        }
    }
}
