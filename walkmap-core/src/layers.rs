use std::time::Duration;

use crate::{
    color::score_color,
    entities::{
        geometry::{Geometry, PolygonRings},
        render::*,
        walkability::*,
    },
    geometry::RepresentativePoint,
    icons::IconTable,
};

const CENTER_POPUP: &str = "Your Location";
const LEGEND_TITLE: &str = "Walkability Score";
const LEGEND_SCALE: [u8; 3] = [0, 50, 100];

/// Styling and icon rules for the drawn layers.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSettings {
    pub icons: IconTable,
    pub buffer_style: CircleStyle,
    pub gradient_style: PolygonStyle,
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self {
            icons: IconTable::default(),
            buffer_style: CircleStyle {
                color: "#ea580c".into(),
                fill_color: "#f97316".into(),
                weight: 1.0,
                opacity: 0.3,
                fill_opacity: 0.1,
            },
            gradient_style: PolygonStyle {
                color: "transparent".into(),
                weight: 0.0,
                opacity: 0.0,
                fill_opacity: 0.65,
            },
        }
    }
}

/// Everything needed to lay out the two maps of a walkability page.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    pub walkability_zoom: u8,
    pub walkability_tiles: TileLayer,
    pub gradient_zoom: u8,
    pub gradient_tiles: TileLayer,
    pub refresh_after: Duration,
    pub layers: LayerSettings,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            walkability_zoom: 16,
            walkability_tiles: TileLayer {
                url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
                attribution: "© OpenStreetMap contributors".into(),
                max_zoom: 19,
            },
            gradient_zoom: 14,
            gradient_tiles: TileLayer {
                url: "https://{s}.basemaps.cartocdn.com/rastertiles/voyager/{z}/{x}/{y}.png"
                    .into(),
                attribution: "&copy; CartoDB".into(),
                max_zoom: 19,
            },
            refresh_after: Duration::from_millis(500),
            layers: LayerSettings::default(),
        }
    }
}

/// Composes all directives of a dataset in a stable order:
/// the center marker, then for each contributing category its
/// buffer circle followed by its POI markers, then the gradient
/// polygons.
///
/// Without breakdown or buffer radii only the center marker is drawn.
pub fn build_layers(dataset: &WalkabilityDataset, settings: &LayerSettings) -> Vec<RenderDirective> {
    let mut directives = walkability_directives(dataset, settings);
    if dataset.breakdown.is_some() {
        directives.extend(gradient_directives(dataset, settings));
    }
    directives
}

/// Center marker, buffer circles and POI markers.
pub fn walkability_directives(
    dataset: &WalkabilityDataset,
    settings: &LayerSettings,
) -> Vec<RenderDirective> {
    let mut directives = vec![RenderDirective::Marker {
        pos: dataset.center,
        icon: None,
        popup: CENTER_POPUP.into(),
    }];
    let Some(breakdown) = &dataset.breakdown else {
        return directives;
    };
    for category in breakdown.iter().filter(|c| c.contributes()) {
        directives.push(RenderDirective::Circle {
            center: dataset.center,
            radius_m: category.buffer_m,
            style: settings.buffer_style.clone(),
            popup: format!(
                "{} buffer ({} m)",
                escape_html(&category.name),
                category.buffer_m
            ),
        });
        let icon = settings.icons.icon_for(&category.name);
        directives.extend(
            dataset
                .nearby_in_category(&category.name)
                .filter_map(|poi| poi_marker(poi, icon)),
        );
    }
    directives
}

fn poi_marker(poi: &Poi, icon: &str) -> Option<RenderDirective> {
    let Some(pos) = poi
        .geometry
        .as_ref()
        .and_then(|geometry| geometry.representative_point())
    else {
        log::debug!(
            "Skipping POI {:?} of category '{}' without a representable geometry",
            poi.name,
            poi.category
        );
        return None;
    };
    let title = poi.name.as_deref().unwrap_or(&poi.category);
    Some(RenderDirective::Marker {
        pos,
        icon: Some(icon.to_owned()),
        popup: format!(
            "<strong>{}</strong><br><small>{}</small>",
            escape_html(title),
            escape_html(&poi.category)
        ),
    })
}

/// One filled polygon per gradient cell, multi polygons
/// are split into their parts.
pub fn gradient_directives(
    dataset: &WalkabilityDataset,
    settings: &LayerSettings,
) -> Vec<RenderDirective> {
    let Some(cells) = &dataset.gradient else {
        return vec![];
    };
    let mut directives = Vec::with_capacity(cells.len());
    for cell in cells {
        let score = cell.score.unwrap_or_default();
        let parts: Vec<&PolygonRings> = match &cell.geometry {
            Geometry::Polygon(rings) => vec![rings],
            Geometry::MultiPolygon(polygons) => polygons.iter().collect(),
            other => {
                log::debug!("Skipping gradient cell of type {}", other.type_name());
                continue;
            }
        };
        for rings in parts.into_iter().filter(|rings| !rings.is_empty()) {
            directives.push(RenderDirective::Polygon {
                rings: rings.clone(),
                fill_color: score_color(score),
                style: settings.gradient_style.clone(),
                tooltip: format!("Score: {score:.3}"),
            });
        }
    }
    directives
}

/// Splits the directives onto the walkability map and the
/// gradient map and adds the score legend.
pub fn build_render_plan(dataset: &WalkabilityDataset, settings: &MapSettings) -> RenderPlan {
    let walkability = MapView {
        center: dataset.center,
        zoom: settings.walkability_zoom,
        tiles: settings.walkability_tiles.clone(),
        directives: walkability_directives(dataset, &settings.layers),
    };
    let gradient = dataset.gradient.as_ref().map(|_| MapView {
        center: dataset.center,
        zoom: settings.gradient_zoom,
        tiles: settings.gradient_tiles.clone(),
        directives: gradient_directives(dataset, &settings.layers),
    });
    let legend = gradient.as_ref().map(|_| Legend {
        title: LEGEND_TITLE.into(),
        scale: LEGEND_SCALE.to_vec(),
        marker_percent: legend_marker_percent(dataset.index),
    });
    RenderPlan {
        walkability,
        gradient,
        legend,
        refresh_after: settings.refresh_after,
    }
}

pub fn legend_marker_percent(index: f64) -> f64 {
    if index.is_nan() {
        0.0
    } else {
        index.clamp(0.0, 100.0)
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
