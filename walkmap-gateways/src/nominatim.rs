//! Geocoding through a [Nominatim](https://nominatim.org) search endpoint.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;
use std::time::Duration;
use walkmap_core::gateways::geocode::{Candidate, Error, GeoCodingGateway, SearchQuery};

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/search";

/// The public instance rejects requests without an identifying agent.
pub const DEFAULT_USER_AGENT: &str = "walkmap (https://github.com/walkmap/walkmap)";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Nominatim {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl Nominatim {
    pub fn new(
        base_url: impl Into<String>,
        user_agent: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| Error::Fetch(err.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            user_agent: user_agent.into(),
        })
    }
}

fn query_params(query: &SearchQuery) -> [(&'static str, String); 4] {
    let address_details = if query.address_details { "1" } else { "0" };
    [
        ("q", query.text.clone()),
        ("format", "json".to_owned()),
        ("addressdetails", address_details.to_owned()),
        ("limit", query.limit.to_string()),
    ]
}

#[derive(Debug, Deserialize)]
struct Place {
    display_name: String,
    lat: String,
    lon: String,
}

impl From<Place> for Candidate {
    fn from(from: Place) -> Self {
        let Place {
            display_name,
            lat,
            lon,
        } = from;
        Self {
            display_name,
            lat,
            lon,
        }
    }
}

fn parse_places(body: &[u8]) -> Result<Vec<Candidate>, Error> {
    let places: Vec<Place> =
        serde_json::from_slice(body).map_err(|err| Error::Response(err.to_string()))?;
    Ok(places.into_iter().map(Candidate::from).collect())
}

#[async_trait]
impl GeoCodingGateway for Nominatim {
    async fn search(&self, query: SearchQuery) -> Result<Vec<Candidate>, Error> {
        log::debug!("Searching '{}' at {}", query.text, self.base_url);
        let response = self
            .client
            .get(&self.base_url)
            .header(header::USER_AGENT, &self.user_agent)
            .query(&query_params(&query))
            .send()
            .await
            .map_err(|err| Error::Fetch(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("Nominatim responded with {status}");
            return Err(Error::Status(status.as_u16()));
        }
        let body = response
            .bytes()
            .await
            .map_err(|err| Error::Fetch(err.to_string()))?;
        let mut candidates = parse_places(&body)?;
        candidates.truncate(query.limit);
        Ok(candidates)
    }
}
