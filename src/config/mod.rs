use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::Path,
    time::Duration,
};
use walkmap_core::{icons::IconTable, layers::MapSettings};
use walkmap_gateways::nominatim;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "walkmap.toml";

const ENV_NAME_NOMINATIM_URL: &str = "NOMINATIM_URL";

pub struct Config {
    pub geocoding: Geocoding,
    pub suggestions: Suggestions,
    pub map: MapSettings,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_nominatim_url(env::var(ENV_NAME_NOMINATIM_URL).ok());
        Ok(cfg)
    }

    fn apply_nominatim_url(&mut self, url: Option<String>) {
        let Some(url) = url.filter(|url| !url.trim().is_empty()) else {
            return;
        };
        if let Some(GeocodingGateway::Nominatim { base_url, .. }) = &mut self.geocoding.gateway {
            log::info!("Use Nominatim at {url}");
            *base_url = url;
        }
    }
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeocodingGateway {
    Nominatim {
        base_url: String,
        user_agent: String,
        timeout: Duration,
    },
}

pub struct Suggestions {
    pub debounce: Duration,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            geocoding,
            gateway,
            suggestions,
            map,
            icons,
        } = from;

        let geo_gateway = match geocoding.and_then(|g| g.gateway) {
            Some(gw_name) => {
                let gateway = gateway.unwrap_or_default();
                let gw = match gw_name {
                    raw::GeocodingGateway::Nominatim => {
                        let raw::Nominatim {
                            base_url,
                            user_agent,
                            timeout,
                        } = gateway
                            .nominatim
                            .ok_or_else(|| anyhow!("Missing 'nominatim' gateway configuration"))?;
                        GeocodingGateway::Nominatim {
                            base_url: base_url
                                .unwrap_or_else(|| nominatim::DEFAULT_BASE_URL.to_owned()),
                            user_agent: user_agent
                                .unwrap_or_else(|| nominatim::DEFAULT_USER_AGENT.to_owned()),
                            timeout: timeout.unwrap_or(nominatim::DEFAULT_TIMEOUT),
                        }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        let raw::Suggestions { debounce } = suggestions.unwrap_or_default();
        let suggestions = Suggestions { debounce };

        let mut settings = MapSettings::default();
        let raw::Map {
            walkability_zoom,
            gradient_zoom,
            max_zoom,
            tile_url,
            attribution,
            gradient_tile_url,
            gradient_attribution,
            refresh_delay,
        } = map.unwrap_or_default();
        if let Some(zoom) = walkability_zoom {
            settings.walkability_zoom = zoom;
        }
        if let Some(zoom) = gradient_zoom {
            settings.gradient_zoom = zoom;
        }
        if let Some(zoom) = max_zoom {
            settings.walkability_tiles.max_zoom = zoom;
            settings.gradient_tiles.max_zoom = zoom;
        }
        if let Some(url) = tile_url {
            settings.walkability_tiles.url = url;
        }
        if let Some(attribution) = attribution {
            settings.walkability_tiles.attribution = attribution;
        }
        if let Some(url) = gradient_tile_url {
            settings.gradient_tiles.url = url;
        }
        if let Some(attribution) = gradient_attribution {
            settings.gradient_tiles.attribution = attribution;
        }
        if let Some(delay) = refresh_delay {
            settings.refresh_after = delay;
        }
        for (name, zoom, max_zoom) in [
            (
                "walkability-zoom",
                settings.walkability_zoom,
                settings.walkability_tiles.max_zoom,
            ),
            (
                "gradient-zoom",
                settings.gradient_zoom,
                settings.gradient_tiles.max_zoom,
            ),
        ] {
            if zoom > max_zoom {
                return Err(anyhow!("The {name} {zoom} exceeds the maximum zoom {max_zoom}"));
            }
        }

        let raw::Icons {
            fallback,
            categories,
        } = icons.unwrap_or_default();
        let mut icons = IconTable::default();
        if let Some(fallback) = fallback {
            icons.set_fallback(fallback);
        }
        for (category, icon) in categories {
            icons.insert(category, icon);
        }
        settings.layers.icons = icons;

        Ok(Self {
            geocoding,
            suggestions,
            map: settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(cfg: &str) -> Result<Config> {
        let raw: raw::Config = toml::from_str(cfg)?;
        Config::try_from(raw)
    }

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let cfg = Config::try_load_from_file_or_default(file).unwrap();
        assert_eq!(cfg.suggestions.debounce, Duration::from_millis(300));
        assert_eq!(cfg.map.walkability_zoom, 16);
        assert_eq!(cfg.map.gradient_zoom, 14);
        assert_eq!(cfg.map.refresh_after, Duration::from_millis(500));
        assert!(matches!(
            cfg.geocoding.gateway,
            Some(GeocodingGateway::Nominatim { .. })
        ));
    }

    #[test]
    fn default_nominatim_user_agent() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(
            cfg.geocoding.gateway,
            Some(GeocodingGateway::Nominatim {
                base_url: "https://nominatim.openstreetmap.org/search".into(),
                user_agent: nominatim::DEFAULT_USER_AGENT.into(),
                timeout: Duration::from_secs(10),
            })
        );
    }

    #[test]
    fn empty_config_has_no_gateway() {
        let cfg = parse("").unwrap();
        assert!(cfg.geocoding.gateway.is_none());
        assert_eq!(cfg.suggestions.debounce, Duration::from_millis(300));
        assert_eq!(cfg.map, MapSettings::default());
    }

    #[test]
    fn missing_gateway_section() {
        let err = parse(
            r#"
            [geocoding]
            gateway = "nominatim"
            [gateway]
            "#,
        )
        .err()
        .unwrap();
        assert!(err.to_string().contains("nominatim"));
    }

    #[test]
    fn override_map_and_icons() {
        let cfg = parse(
            r#"
            [map]
            walkability-zoom = 17
            tile-url = "https://tiles.example.org/{z}/{x}/{y}.png"

            [icons]
            fallback = "fa-circle"

            [icons.categories]
            metro = "fa-train"
            library = "fa-book"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.map.walkability_zoom, 17);
        assert_eq!(cfg.map.gradient_zoom, 14);
        assert_eq!(
            cfg.map.walkability_tiles.url,
            "https://tiles.example.org/{z}/{x}/{y}.png"
        );
        let icons = &cfg.map.layers.icons;
        assert_eq!(icons.icon_for("metro"), "fa-train");
        assert_eq!(icons.icon_for("library"), "fa-book");
        assert_eq!(icons.icon_for("bus"), "fa-bus");
        assert_eq!(icons.icon_for("unknown"), "fa-circle");
    }

    #[test]
    fn reject_zoom_beyond_tiles() {
        let err = parse(
            r#"
            [map]
            max-zoom = 15
            "#,
        )
        .err()
        .unwrap();
        assert!(err.to_string().contains("walkability-zoom"));
    }

    #[test]
    fn override_nominatim_url() {
        let mut cfg = Config::try_from(raw::Config::default()).unwrap();
        cfg.apply_nominatim_url(Some(" ".into()));
        cfg.apply_nominatim_url(Some("http://localhost:8080/search".into()));
        match cfg.geocoding.gateway {
            Some(GeocodingGateway::Nominatim { base_url, .. }) => {
                assert_eq!(base_url, "http://localhost:8080/search");
            }
            None => panic!("Missing gateway"),
        }
    }
}
