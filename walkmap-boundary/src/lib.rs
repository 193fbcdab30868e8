use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::Error;

/// A GeoJSON position: `[lon, lat]` with optional further dimensions.
pub type Position = Vec<f64>;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

// ---- walkability page data ---- //

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WalkabilityData {
    pub center: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<CategoryBreakdown>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffers_m: Option<Vec<f64>>,
    #[serde(default)]
    pub nearby: Vec<NearbyPoi>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_layer: Option<FeatureCollection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub name: String,
    pub weight: f64,
    pub nearby_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NearbyPoi {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
}

/// A GeoJSON geometry.
///
/// Geometries that are not a well-formed [`Shape`], including those
/// with missing or `null` coordinates, are kept with their type name only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Geometry {
    Shape(Shape),
    Other {
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Shape {
    Point {
        #[serde(default)]
        coordinates: Position,
    },
    Polygon {
        #[serde(default)]
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        #[serde(default)]
        coordinates: Vec<Vec<Vec<Position>>>,
    },
}

impl Shape {
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Point { .. } => "Point",
            Self::Polygon { .. } => "Polygon",
            Self::MultiPolygon { .. } => "MultiPolygon",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<Feature>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Feature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<FeatureProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FeatureProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

// ---- render output ---- //

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CircleStyle {
    pub color: String,
    pub fill_color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PolygonStyle {
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderDirective {
    Circle {
        center: Coordinate,
        radius_m: f64,
        style: CircleStyle,
        popup: String,
    },
    Marker {
        lat: f64,
        lon: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
        popup: String,
    },
    Polygon {
        /// Rings of `[lat, lon]` pairs, outer ring first.
        rings: Vec<Vec<[f64; 2]>>,
        fill_color: String,
        style: PolygonStyle,
        tooltip: String,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub url: String,
    pub attribution: String,
    pub max_zoom: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
    pub tiles: TileLayer,
    pub directives: Vec<RenderDirective>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Legend {
    pub title: String,
    pub scale: Vec<u8>,
    pub marker_percent: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub walkability: MapView,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<MapView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    pub refresh_after_ms: u64,
}

// ---- geocoding ---- //

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AddressSuggestion {
    pub display_name: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResolvedAddress {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_walkability_data() {
        let json = r#"{
          "center": { "lat": 45.52, "lon": -73.58 },
          "breakdown": [
            { "name": "metro", "weight": 0.3, "nearby_count": 2 },
            { "name": "park", "weight": 0.0, "nearby_count": 4 }
          ],
          "buffers_m": [800, 400],
          "nearby": [
            { "name": "Mont-Royal", "category": "metro",
              "geometry": { "type": "Point", "coordinates": [-73.5817, 45.5246] } },
            { "category": "park",
              "geometry": { "type": "Polygon", "coordinates": [[[0,0],[2,0],[2,2],[0,2]]] } },
            { "category": "park",
              "geometry": { "type": "LineString", "coordinates": [[0,0],[1,1]] } }
          ],
          "gradient_layer": {
            "type": "FeatureCollection",
            "features": [
              { "type": "Feature", "properties": { "score": 0.42, "h3": "abc" },
                "geometry": { "type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1]]] } },
              { "type": "Feature", "properties": {},
                "geometry": { "type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1]]] } }
            ]
          },
          "index": 73.5
        }"#;
        let data: WalkabilityData = serde_json::from_str(json).unwrap();
        assert_eq!(data.breakdown.as_ref().unwrap().len(), 2);
        assert_eq!(data.buffers_m, Some(vec![800.0, 400.0]));
        assert_eq!(data.nearby[0].name.as_deref(), Some("Mont-Royal"));
        assert!(data.nearby[1].name.is_none());
        assert_eq!(
            data.nearby[2].geometry,
            Some(Geometry::Other {
                kind: Some("LineString".into())
            })
        );
        let features = data.gradient_layer.unwrap().features.unwrap();
        assert_eq!(features[0].properties.as_ref().unwrap().score, Some(0.42));
        assert_eq!(features[1].properties.as_ref().unwrap().score, None);
        assert_eq!(data.index, Some(73.5));
    }

    #[test]
    fn keep_type_of_malformed_geometries() {
        let json = r#"[
          { "type": "Point", "coordinates": [-73.5817, 45.5246] },
          { "type": "Point", "coordinates": null },
          { "type": "Polygon", "coordinates": [1.0, 2.0] },
          { "type": "GeometryCollection", "geometries": [] },
          {}
        ]"#;
        let geometries: Vec<Geometry> = serde_json::from_str(json).unwrap();
        assert_eq!(
            geometries[0],
            Geometry::Shape(Shape::Point {
                coordinates: vec![-73.5817, 45.5246]
            })
        );
        let kinds: Vec<_> = geometries[1..]
            .iter()
            .map(|g| match g {
                Geometry::Other { kind } => kind.as_deref(),
                Geometry::Shape(shape) => panic!("unexpected shape {shape:?}"),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![Some("Point"), Some("Polygon"), Some("GeometryCollection"), None]
        );
    }

    #[test]
    fn deserialize_minimal_walkability_data() {
        let data: WalkabilityData =
            serde_json::from_str(r#"{ "center": { "lat": 1.0, "lon": 2.0 } }"#).unwrap();
        assert!(data.breakdown.is_none());
        assert!(data.buffers_m.is_none());
        assert!(data.nearby.is_empty());
        assert!(data.gradient_layer.is_none());
    }

    #[test]
    fn serialize_directive_with_kind_tag() {
        let directive = RenderDirective::Marker {
            lat: 1.0,
            lon: 2.0,
            icon: None,
            popup: "Your Location".into(),
        };
        let json = serde_json::to_value(&directive).unwrap();
        assert_eq!(json["kind"], "marker");
        assert!(json.get("icon").is_none());
    }
}
