use duration_str::{deserialize_duration, deserialize_option_duration};
use serde::Deserialize;
use std::{collections::BTreeMap, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("walkmap.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
    pub suggestions: Option<Suggestions>,
    pub map: Option<Map>,
    pub icons: Option<Icons>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Nominatim,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub nominatim: Option<Nominatim>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nominatim {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Suggestions {
    #[serde(deserialize_with = "deserialize_duration")]
    pub debounce: Duration,
}

impl Default for Suggestions {
    fn default() -> Self {
        Config::default()
            .suggestions
            .expect("Suggestions configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub walkability_zoom: Option<u8>,
    pub gradient_zoom: Option<u8>,
    pub max_zoom: Option<u8>,
    pub tile_url: Option<String>,
    pub attribution: Option<String>,
    pub gradient_tile_url: Option<String>,
    pub gradient_attribution: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub refresh_delay: Option<Duration>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Icons {
    pub fallback: Option<String>,
    #[serde(default)]
    pub categories: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.geocoding.is_some());
        assert!(cfg.gateway.is_some());
        assert!(cfg.suggestions.is_some());
        assert!(cfg.map.is_some());
        assert!(cfg.icons.unwrap().categories.is_empty());
    }

    #[test]
    fn default_suggestions_config() {
        let cfg = Suggestions::default();
        assert_eq!(cfg.debounce, Duration::from_millis(300));
    }

    #[test]
    fn default_nominatim_config() {
        let cfg = Gateway::default().nominatim.unwrap();
        assert_eq!(
            cfg.base_url.as_deref(),
            Some("https://nominatim.openstreetmap.org/search")
        );
        assert_eq!(cfg.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn parse_partial_map_config() {
        let cfg: Config = toml::from_str(
            r#"
            [map]
            gradient-zoom = 13
            refresh-delay = "1s"
            "#,
        )
        .unwrap();
        let map = cfg.map.unwrap();
        assert_eq!(map.gradient_zoom, Some(13));
        assert_eq!(map.walkability_zoom, None);
        assert_eq!(map.refresh_delay, Some(Duration::from_secs(1)));
        assert!(cfg.geocoding.is_none());
    }
}
