use super::{normalize_candidate, prelude::*};

pub async fn resolve_address<G>(gateway: &G, address: &str) -> Result<ResolvedAddress>
where
    G: GeoCodingGateway + ?Sized,
{
    if address.trim().is_empty() {
        return Err(Error::EmptyAddress);
    }
    let query = SearchQuery {
        text: address.to_owned(),
        limit: 1,
        address_details: false,
    };
    let best = gateway
        .search(query)
        .await?
        .into_iter()
        .next()
        .ok_or(Error::AddressNotFound)?;
    let resolved = normalize_candidate(best)?.into();
    Ok(resolved)
}
