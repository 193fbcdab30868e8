use crate::{geo::MapPoint, geometry::Geometry};

/// Contribution of a single amenity category to the walkability index.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub name: String,
    pub weight: f64,
    pub nearby_count: u64,
    /// Radius of the relevance zone around the center.
    pub buffer_m: f64,
}

impl CategoryBreakdown {
    /// Categories without weight or without nearby instances are not drawn.
    pub fn contributes(&self) -> bool {
        self.weight > 0.0 && self.nearby_count > 0
    }
}

/// A point of interest near the center.
#[derive(Debug, Clone, PartialEq)]
pub struct Poi {
    pub name: Option<String>,
    pub category: String,
    pub geometry: Option<Geometry>,
}

/// One polygon of the neighborhood gradient surface.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientCell {
    /// Normalized score in `[0, 1]`.
    pub score: Option<f64>,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalkabilityDataset {
    pub center: MapPoint,
    /// `None` if either the breakdown or the buffer radii are missing.
    pub breakdown: Option<Vec<CategoryBreakdown>>,
    pub nearby: Vec<Poi>,
    pub gradient: Option<Vec<GradientCell>>,
    /// Overall walkability index on a `0..=100` scale.
    pub index: f64,
}

impl WalkabilityDataset {
    pub fn nearby_in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Poi> {
        self.nearby.iter().filter(move |poi| poi.category == category)
    }
}
