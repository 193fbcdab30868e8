mod error;
mod resolve_address;
mod suggest_addresses;

#[cfg(test)]
pub mod tests;

pub use self::{error::Error, resolve_address::*, suggest_addresses::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::{address::*, geo::*},
        gateways::geocode::{Candidate, GeoCodingGateway, SearchQuery},
    };
}

use self::prelude::*;

/// Turns a provider record into a suggestion.
///
/// Coordinates that are not valid numbers or out of range
/// reject the whole record, partial coordinates are never returned.
fn normalize_candidate(candidate: Candidate) -> Result<AddressSuggestion> {
    let Candidate {
        display_name,
        lat,
        lon,
    } = candidate;
    let lat_deg = parse_coord(&lat)?;
    let lng_deg = parse_coord(&lon)?;
    let pos = MapPoint::try_from_lat_lng_deg(lat_deg, lng_deg)
        .map_err(|_| Error::InvalidCoordinate(format!("{lat},{lon}")))?;
    Ok(AddressSuggestion { display_name, pos })
}

fn parse_coord(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|deg| deg.is_finite())
        .ok_or_else(|| Error::InvalidCoordinate(raw.to_owned()))
}
