use std::collections::BTreeMap;

pub const DEFAULT_FALLBACK_ICON: &str = "fa-map-marker-alt";

/// Canonical icons per amenity category.
///
/// Both the singular and the plural spelling of a category
/// are known since datasets use either of them.
const DEFAULT_ICONS: &[(&str, &str)] = &[
    ("bixi", "fa-bicycle"),
    ("bus", "fa-bus"),
    ("grocery", "fa-shopping-cart"),
    ("healthcare", "fa-hospital"),
    ("metro", "fa-subway"),
    ("park", "fa-tree"),
    ("parks", "fa-tree"),
    ("restaurant", "fa-utensils"),
    ("restaurants", "fa-utensils"),
    ("school", "fa-school"),
    ("schools", "fa-school"),
];

/// Maps a category name to an icon identifier of the map widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTable {
    icons: BTreeMap<String, String>,
    fallback: String,
}

impl IconTable {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            icons: BTreeMap::new(),
            fallback: fallback.into(),
        }
    }

    pub fn with_icon(mut self, category: impl Into<String>, icon: impl Into<String>) -> Self {
        self.insert(category, icon);
        self
    }

    pub fn insert(&mut self, category: impl Into<String>, icon: impl Into<String>) {
        self.icons.insert(category.into(), icon.into());
    }

    pub fn set_fallback(&mut self, fallback: impl Into<String>) {
        self.fallback = fallback.into();
    }

    pub fn icon_for(&self, category: &str) -> &str {
        self.icons
            .get(category)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}

impl Default for IconTable {
    fn default() -> Self {
        DEFAULT_ICONS
            .iter()
            .fold(Self::new(DEFAULT_FALLBACK_ICON), |table, (category, icon)| {
                table.with_icon(*category, *icon)
            })
    }
}
