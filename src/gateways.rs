use crate::config::{Geocoding, GeocodingGateway};
use anyhow::{anyhow, Result};
use std::sync::Arc;
use walkmap_core::gateways::geocode::GeoCodingGateway;
use walkmap_gateways::nominatim::Nominatim;

pub fn geocoding_gateway(cfg: &Geocoding) -> Result<Arc<dyn GeoCodingGateway>> {
    match &cfg.gateway {
        Some(GeocodingGateway::Nominatim {
            base_url,
            user_agent,
            timeout,
        }) => {
            log::debug!("Use Nominatim gateway at {base_url}");
            let gw = Nominatim::new(base_url.as_str(), user_agent.as_str(), *timeout)?;
            Ok(Arc::new(gw))
        }
        None => Err(anyhow!("No geocoding gateway was configured")),
    }
}
