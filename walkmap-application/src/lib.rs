#[macro_use]
extern crate log;

mod suggestions;

pub mod prelude {
    pub use super::suggestions::*;
}

pub(crate) use walkmap_core::{
    entities::address::*, gateways::geocode::GeoCodingGateway, suggestion::*,
};

#[cfg(test)]
pub(crate) mod tests;
