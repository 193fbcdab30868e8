use super::{normalize_candidate, prelude::*};

/// Shorter queries are too unspecific to be worth a lookup.
pub const MIN_QUERY_LEN: usize = 3;

pub const MAX_SUGGESTIONS: usize = 5;

pub fn is_suggestible(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_LEN
}

pub async fn suggest_addresses<G>(gateway: &G, query: &str) -> Result<Vec<AddressSuggestion>>
where
    G: GeoCodingGateway + ?Sized,
{
    if !is_suggestible(query) {
        return Ok(vec![]);
    }
    let query = SearchQuery {
        text: query.to_owned(),
        limit: MAX_SUGGESTIONS,
        address_details: true,
    };
    gateway
        .search(query)
        .await?
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(normalize_candidate)
        .collect()
}
