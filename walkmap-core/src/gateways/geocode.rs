use async_trait::async_trait;
use thiserror::Error;

/// A free-text lookup at a geocoding provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub limit: usize,
    /// Ask the provider to enrich each result with a structured address.
    pub address_details: bool,
}

/// A raw result record as delivered by the provider.
///
/// Coordinates are kept as the provider encoded them, they
/// are parsed and validated by the use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Geocoding request failed: {0}")]
    Fetch(String),
    #[error("Geocoding provider responded with status {0}")]
    Status(u16),
    #[error("Unexpected geocoding response: {0}")]
    Response(String),
}

#[async_trait]
pub trait GeoCodingGateway: Send + Sync {
    /// Candidates ordered by the provider's ranking, at most `query.limit`.
    async fn search(&self, query: SearchQuery) -> Result<Vec<Candidate>, Error>;
}
