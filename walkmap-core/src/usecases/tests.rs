use std::sync::Mutex;

use async_trait::async_trait;

use crate::gateways::geocode::{self, Candidate, GeoCodingGateway, SearchQuery};

pub fn candidate(display_name: &str, lat: &str, lon: &str) -> Candidate {
    Candidate {
        display_name: display_name.into(),
        lat: lat.into(),
        lon: lon.into(),
    }
}

#[derive(Default)]
pub struct MockGeocoder {
    pub candidates: Vec<Candidate>,
    pub fail: bool,
    queries: Mutex<Vec<SearchQuery>>,
}

impl MockGeocoder {
    pub fn with_candidates(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl GeoCodingGateway for MockGeocoder {
    async fn search(&self, query: SearchQuery) -> Result<Vec<Candidate>, geocode::Error> {
        let limit = query.limit;
        self.queries.lock().unwrap().push(query);
        if self.fail {
            return Err(geocode::Error::Fetch("connection refused".into()));
        }
        Ok(self.candidates.iter().take(limit).cloned().collect())
    }
}
