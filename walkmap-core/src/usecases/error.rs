use crate::gateways::geocode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The address is empty")]
    EmptyAddress,
    #[error("Address not found. Try a more specific query.")]
    AddressNotFound,
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error(transparent)]
    Gateway(#[from] geocode::Error),
}
