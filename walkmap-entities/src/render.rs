use std::time::Duration;

use crate::{color::Rgba, geo::MapPoint, geometry::PolygonRings};

#[derive(Debug, Clone, PartialEq)]
pub struct CircleStyle {
    pub color: String,
    pub fill_color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolygonStyle {
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

/// A single drawing instruction for the map widget.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderDirective {
    Circle {
        center: MapPoint,
        radius_m: f64,
        style: CircleStyle,
        popup: String,
    },
    Marker {
        pos: MapPoint,
        /// `None` selects the default marker of the widget.
        icon: Option<String>,
        popup: String,
    },
    Polygon {
        rings: PolygonRings,
        fill_color: Rgba,
        style: PolygonStyle,
        tooltip: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub url: String,
    pub attribution: String,
    pub max_zoom: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub center: MapPoint,
    pub zoom: u8,
    pub tiles: TileLayer,
    pub directives: Vec<RenderDirective>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub title: String,
    pub scale: Vec<u8>,
    /// Horizontal position of the value marker in percent of the bar.
    pub marker_percent: f64,
}

/// Everything the map widget needs to draw a walkability page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub walkability: MapView,
    pub gradient: Option<MapView>,
    pub legend: Option<Legend>,
    /// Delay after which the widget should recompute its layout once.
    pub refresh_after: Duration,
}
