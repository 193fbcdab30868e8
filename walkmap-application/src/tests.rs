use async_trait::async_trait;
use parking_lot::Mutex;
use std::{collections::HashMap, time::Duration};
use walkmap_core::gateways::geocode::{self, Candidate, GeoCodingGateway, SearchQuery};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Answers every query with a single candidate after an optional delay.
#[derive(Default)]
pub struct FakeGeocoder {
    delays: HashMap<String, Duration>,
    fail: bool,
    queries: Mutex<Vec<String>>,
}

impl FakeGeocoder {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_owned(), delay);
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl GeoCodingGateway for FakeGeocoder {
    async fn search(&self, query: SearchQuery) -> Result<Vec<Candidate>, geocode::Error> {
        self.queries.lock().push(query.text.clone());
        if let Some(delay) = self.delays.get(&query.text) {
            tokio::time::sleep(*delay).await;
        }
        if self.fail {
            return Err(geocode::Error::Fetch("connection refused".into()));
        }
        Ok(vec![Candidate {
            display_name: format!("{}, Springfield", query.text),
            lat: "39.78".into(),
            lon: "-89.65".into(),
        }])
    }
}
